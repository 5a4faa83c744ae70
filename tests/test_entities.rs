use space_shooter::config::GameConfig;
use space_shooter::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GameStatus::Running, GameStatus::Running);
    assert_ne!(GameStatus::Running, GameStatus::Over);
    assert_ne!(Direction::Left, Direction::Right);

    let e = Enemy::at(10.0, -30.0);
    assert_eq!(e.clone(), e);
}

#[test]
fn constructors_use_fixed_sizes() {
    let b = Bullet::at(1.0, 2.0);
    assert_eq!((b.width, b.height), (5.0, 10.0));
    let e = Enemy::at(3.0, 4.0);
    assert_eq!((e.width, e.height), (30.0, 30.0));
    assert_eq!(e.rect(), Rect::new(3.0, 4.0, 30.0, 30.0));
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player {
            x: 20.0,
            y: 360.0,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: 5.0,
            dx: 0.0,
        },
        bullets: Vec::new(),
        enemies: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        spawn_timer: 0,
        config: GameConfig::default(),
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy::at(5.0, 5.0));
    cloned.status = GameStatus::Over;

    assert_eq!(original.player.x, 20.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
    assert!(!original.is_over());
    assert!(cloned.is_over());
}

use space_shooter::compute::*;
use space_shooter::config::GameConfig;
use space_shooter::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// 300×400 arena, player near the bottom, nothing else on screen.
fn make_state() -> GameState {
    GameState {
        player: Player {
            x: 100.0,
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
        config: GameConfig::with_size(300.0, 400.0),
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_player_position() {
    let s = init_state(GameConfig::with_size(400.0, 600.0), &mut seeded_rng());
    assert_eq!(s.player.x, 185.0); // width / 2 - 15
    assert_eq!(s.player.y, 560.0); // height - 40
    assert_eq!(s.player.dx, 0.0);
    assert_eq!(s.player.speed, 5.0);
}

#[test]
fn init_state_starts_with_one_enemy() {
    let s = init_state(GameConfig::default(), &mut seeded_rng());
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.enemies[0].y, -ENEMY_HEIGHT);
    assert!(s.bullets.is_empty());
    assert_eq!(s.score, 0);
    assert_eq!(s.spawn_timer, 0);
    assert_eq!(s.status, GameStatus::Running);
}

// ── advance_player ────────────────────────────────────────────────────────────

#[test]
fn player_clamps_at_right_edge() {
    let mut s = make_state();
    s.player.dx = 5.0;
    for _ in 0..50 {
        advance_player(&mut s.player, 300.0);
        assert!(s.player.x >= 0.0 && s.player.x <= 270.0);
    }
    assert_eq!(s.player.x, 270.0);
}

#[test]
fn player_clamps_at_left_edge_without_touching_velocity() {
    let mut s = make_state();
    s.player.x = 3.0;
    s.player.dx = -5.0;
    advance_player(&mut s.player, 300.0);
    assert_eq!(s.player.x, 0.0);
    assert_eq!(s.player.dx, -5.0);
}

#[test]
fn player_clamp_holds_for_any_magnitude() {
    let mut s = make_state();
    s.player.dx = 1000.0;
    advance_player(&mut s.player, 300.0);
    assert_eq!(s.player.x, 270.0);
    s.player.dx = -1000.0;
    advance_player(&mut s.player, 300.0);
    assert_eq!(s.player.x, 0.0);
}

#[test]
fn player_without_intent_stays_put() {
    let mut s = make_state();
    advance_player(&mut s.player, 300.0);
    assert_eq!(s.player.x, 100.0);
}

// ── advance_bullets ───────────────────────────────────────────────────────────

#[test]
fn bullets_move_up_and_leave_at_top() {
    let mut bullets = vec![Bullet::at(1.0, 100.0), Bullet::at(2.0, 5.0), Bullet::at(3.0, 10.0)];
    advance_bullets(&mut bullets, 7.0);

    // The middle bullet went to y = -2 and is gone; order is preserved.
    assert_eq!(bullets.len(), 2);
    assert_eq!((bullets[0].x, bullets[0].y), (1.0, 93.0));
    assert_eq!((bullets[1].x, bullets[1].y), (3.0, 3.0));
    assert!(bullets.iter().all(|b| b.y >= 0.0));
}

#[test]
fn bullet_exactly_at_top_survives() {
    let mut bullets = vec![Bullet::at(1.0, 7.0)];
    advance_bullets(&mut bullets, 7.0);
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].y, 0.0);
}

#[test]
fn adjacent_offscreen_bullets_are_all_removed() {
    let mut bullets = vec![Bullet::at(1.0, 1.0), Bullet::at(2.0, 2.0), Bullet::at(3.0, 3.0)];
    advance_bullets(&mut bullets, 7.0);
    assert!(bullets.is_empty());
}

// ── advance_enemies ───────────────────────────────────────────────────────────

#[test]
fn enemy_touching_bottom_does_not_end_game() {
    let mut enemies = vec![Enemy::at(50.0, 368.0)];
    // 370 + 30 == 400
    assert!(!advance_enemies(&mut enemies, 2.0, 400.0));
    assert_eq!(enemies[0].y, 370.0);
}

#[test]
fn enemy_past_bottom_ends_game_and_stays() {
    let mut enemies = vec![Enemy::at(10.0, 0.0), Enemy::at(50.0, 369.0)];
    // 371 + 30 == 401
    assert!(advance_enemies(&mut enemies, 2.0, 400.0));
    assert_eq!(enemies.len(), 2);
    assert_eq!(enemies[0].y, 2.0);
}

// ── spawning ──────────────────────────────────────────────────────────────────

#[test]
fn spawn_tick_spawns_once_after_threshold() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    assert_eq!(s.config.spawn_threshold, 80);

    for i in 1..=80 {
        assert!(!spawn_tick(&mut s, &mut rng));
        assert_eq!(s.spawn_timer, i);
    }
    assert!(s.enemies.is_empty());

    assert!(spawn_tick(&mut s, &mut rng));
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.spawn_timer, 0);
}

#[test]
fn spawned_enemies_start_above_the_screen_within_bounds() {
    let mut rng = seeded_rng();
    let mut enemies = Vec::new();
    for _ in 0..200 {
        spawn_enemy(&mut enemies, 300.0, &mut rng);
    }
    for e in &enemies {
        assert!(e.x >= 0.0 && e.x < 270.0);
        assert_eq!(e.y, -30.0);
    }
}

#[test]
fn spawn_in_arena_as_narrow_as_an_enemy() {
    let mut enemies = Vec::new();
    spawn_enemy(&mut enemies, ENEMY_WIDTH, &mut seeded_rng());
    assert_eq!(enemies[0].x, 0.0);
}

#[test]
fn spawning_is_deterministic_for_a_seed() {
    let mut a = Vec::new();
    let mut b = Vec::new();
    let (mut ra, mut rb) = (seeded_rng(), seeded_rng());
    for _ in 0..10 {
        spawn_enemy(&mut a, 300.0, &mut ra);
        spawn_enemy(&mut b, 300.0, &mut rb);
    }
    assert_eq!(a, b);
}

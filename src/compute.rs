/// Motion, spawning and session construction.
///
/// Every function mutates exactly the pieces of state it is handed.  All
/// randomness comes through an injected `Rng` so callers control
/// determinism (tests use a seeded `StdRng`).

use log::debug;
use rand::Rng;

use crate::config::{GameConfig, PLAYER_BOTTOM_OFFSET};
use crate::entities::{
    Bullet, Enemy, GameState, GameStatus, Player, ENEMY_HEIGHT, ENEMY_WIDTH, PLAYER_HEIGHT,
    PLAYER_WIDTH,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session.  The first enemy is already on its way down.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> GameState {
    let mut state = GameState {
        player: Player {
            x: config.width / 2.0 - PLAYER_WIDTH / 2.0,
            y: config.height - PLAYER_BOTTOM_OFFSET,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: config.player_speed,
            dx: 0.0,
        },
        bullets: Vec::new(),
        enemies: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        spawn_timer: 0,
        config,
    };
    spawn_enemy(&mut state.enemies, config.width, rng);
    state
}

// ── Motion ───────────────────────────────────────────────────────────────────

/// Apply the player's intent, then clamp into `[0, screen_width - width]`.
/// Only the position is clamped; `dx` is left alone.
pub fn advance_player(player: &mut Player, screen_width: f32) {
    player.x += player.dx;
    if player.x < 0.0 {
        player.x = 0.0;
    }
    if player.x + player.width > screen_width {
        player.x = screen_width - player.width;
    }
}

/// Move every bullet up by `speed` and drop the ones that left the top.
/// Surviving bullets keep their relative order.
pub fn advance_bullets(bullets: &mut Vec<Bullet>, speed: f32) {
    bullets.retain_mut(|b| {
        b.y -= speed;
        b.y >= 0.0
    });
}

/// Move every enemy down by `speed`.  Returns `true` if any enemy's bottom
/// edge is now strictly below `screen_height`.  Enemies are never removed
/// here.
pub fn advance_enemies(enemies: &mut [Enemy], speed: f32, screen_height: f32) -> bool {
    let mut reached_bottom = false;
    for e in enemies.iter_mut() {
        e.y += speed;
        if e.y + e.height > screen_height {
            reached_bottom = true;
        }
    }
    reached_bottom
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Append one enemy just above the top edge at a uniformly random
/// `x ∈ [0, screen_width - ENEMY_WIDTH)`.
pub fn spawn_enemy(enemies: &mut Vec<Enemy>, screen_width: f32, rng: &mut impl Rng) {
    let max_x = screen_width - ENEMY_WIDTH;
    // An arena no wider than an enemy has exactly one legal column.
    let x = if max_x > 0.0 { rng.gen_range(0.0..max_x) } else { 0.0 };
    debug!("enemy spawned at x={x:.1}");
    enemies.push(Enemy::at(x, -ENEMY_HEIGHT));
}

/// Advance the spawn timer by one frame.  When it exceeds the configured
/// threshold, spawn an enemy and reset the timer to 0.  Returns whether an
/// enemy was spawned.
pub fn spawn_tick(state: &mut GameState, rng: &mut impl Rng) -> bool {
    state.spawn_timer += 1;
    if state.spawn_timer > state.config.spawn_threshold {
        spawn_enemy(&mut state.enemies, state.config.width, rng);
        state.spawn_timer = 0;
        true
    } else {
        false
    }
}

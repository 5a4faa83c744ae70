//! The game state machine: `Running → Over`, nothing out of `Over`.
//!
//! [`update`] is one synchronous frame step.  The host owns the clock: it
//! calls [`Simulation::step`] once per display refresh while
//! [`Simulation::is_over`] is false, and reads the state in between to draw.
//! Input handlers only touch the player's intent and the fire request; they
//! never walk the bullet or enemy lists.

use log::info;
use rand::Rng;

use crate::collision::resolve_collisions;
use crate::compute::{advance_bullets, advance_enemies, advance_player, init_state, spawn_tick};
use crate::config::GameConfig;
use crate::entities::{Bullet, Direction, GameState, GameStatus, BULLET_WIDTH};

// ── Frame step ───────────────────────────────────────────────────────────────

/// Advance the session by one frame.  A no-op once the session is over.
///
/// Order: player, bullets, spawn timer, enemies, collisions.
pub fn update(state: &mut GameState, rng: &mut impl Rng) {
    if state.is_over() {
        return;
    }

    advance_player(&mut state.player, state.config.width);
    advance_bullets(&mut state.bullets, state.config.bullet_speed);

    spawn_tick(state, rng);
    if advance_enemies(&mut state.enemies, state.config.enemy_speed, state.config.height) {
        state.status = GameStatus::Over;
    }

    resolve_collisions(state);

    if state.is_over() {
        info!("game over, final score {}", state.score);
    }
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Launch a bullet from the top edge of the player, horizontally centred.
/// Ignored once the session is over.
pub fn fire(state: &mut GameState) {
    if state.is_over() {
        return;
    }
    let p = &state.player;
    let bullet = Bullet::at(p.x + p.width / 2.0 - BULLET_WIDTH / 2.0, p.y);
    state.bullets.push(bullet);
}

/// Ignored once the session is over, like [`fire`].
pub fn set_intent(state: &mut GameState, direction: Direction) {
    if state.is_over() {
        return;
    }
    let speed = state.player.speed;
    state.player.dx = match direction {
        Direction::Left => -speed,
        Direction::None => 0.0,
        Direction::Right => speed,
    };
}

// ── Scheduling seam ──────────────────────────────────────────────────────────

/// What an external frame driver needs from a simulation.
pub trait Simulation {
    /// Run exactly one frame.
    fn step(&mut self);
    fn is_over(&self) -> bool;
}

/// Step `sim` until it is over or `max_frames` steps have run.  Returns the
/// number of steps executed.
pub fn drive<S: Simulation + ?Sized>(sim: &mut S, max_frames: u64) -> u64 {
    let mut frames = 0;
    while frames < max_frames && !sim.is_over() {
        sim.step();
        frames += 1;
    }
    frames
}

/// A session together with the RNG that feeds its spawner.
#[derive(Debug)]
pub struct Session<R: Rng> {
    state: GameState,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let state = init_state(config, &mut rng);
        info!(
            "new session: arena {}x{}, spawn every {} frames",
            config.width, config.height, config.spawn_threshold
        );
        Self { state, rng }
    }

    /// Wrap an existing state, e.g. a hand-built test fixture.
    pub fn from_state(state: GameState, rng: R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for the input layer.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn fire(&mut self) {
        fire(&mut self.state);
    }

    pub fn set_intent(&mut self, direction: Direction) {
        set_intent(&mut self.state, direction);
    }

    /// Throw the current session away and start over with the same config.
    pub fn restart(&mut self) {
        let config = self.state.config;
        self.state = init_state(config, &mut self.rng);
        info!("session restarted");
    }
}

impl<R: Rng> Simulation for Session<R> {
    fn step(&mut self) {
        update(&mut self.state, &mut self.rng);
    }

    fn is_over(&self) -> bool {
        self.state.is_over()
    }
}

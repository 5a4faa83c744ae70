/// All game entity types: plain data plus bounding boxes.

use crate::config::GameConfig;

// ── Fixed sizes (world units) ─────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 20.0;
pub const BULLET_WIDTH: f32 = 5.0;
pub const BULLET_HEIGHT: f32 = 10.0;
pub const ENEMY_WIDTH: f32 = 30.0;
pub const ENEMY_HEIGHT: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    Running,
    /// Terminal: nothing mutates the session once it is reached.
    Over,
}

/// Requested horizontal movement, set by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    None,
    Right,
}

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

// ── Player, bullets, enemies ──────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Magnitude of `dx` when a direction is held.
    pub speed: f32,
    /// One of `-speed`, `0`, `+speed`.
    pub dx: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Bullet {
    pub fn at(x: f32, y: f32) -> Self {
        Self { x, y, width: BULLET_WIDTH, height: BULLET_HEIGHT }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Enemy {
    pub fn at(x: f32, y: f32) -> Self {
        Self { x, y, width: ENEMY_WIDTH, height: ENEMY_HEIGHT }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// One game session.  Owned by whoever drives the frame loop; the renderer
/// only ever borrows it immutably.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    /// Spawn order = list order.
    pub bullets: Vec<Bullet>,
    /// Spawn order = list order.  Collision tie-breaks depend on it.
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub status: GameStatus,
    /// Frames since the last enemy spawn.
    pub spawn_timer: u32,
    pub config: GameConfig,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }
}

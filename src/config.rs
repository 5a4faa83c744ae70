//! Tunable game parameters and the command-line surface that sets them.
//!
//! Entity sizes are fixed (see [`crate::entities`]); speeds, arena size and
//! the spawn cadence live here.  Speeds are in world units per frame, not per
//! second: the simulation has no notion of wall-clock time.

use std::path::PathBuf;

use clap::Parser;

use crate::entities::ENEMY_WIDTH;

pub const DEFAULT_WIDTH: u16 = 400;
pub const DEFAULT_HEIGHT: u16 = 600;
pub const DEFAULT_PLAYER_SPEED: f32 = 5.0;
pub const DEFAULT_BULLET_SPEED: f32 = 7.0;
pub const DEFAULT_ENEMY_SPEED: f32 = 2.0;
/// ≈1.3 s at 60 FPS.
pub const DEFAULT_SPAWN_THRESHOLD: u32 = 80;
pub const DEFAULT_FPS: u32 = 60;

/// Points awarded per enemy destroyed.
pub const SCORE_PER_ENEMY: u32 = 10;
/// Distance from the bottom edge to the player's top edge at start.
pub const PLAYER_BOTTOM_OFFSET: f32 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub player_speed: f32,
    pub bullet_speed: f32,
    pub enemy_speed: f32,
    /// The spawn timer must exceed this many frames before an enemy spawns.
    pub spawn_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH as f32,
            height: DEFAULT_HEIGHT as f32,
            player_speed: DEFAULT_PLAYER_SPEED,
            bullet_speed: DEFAULT_BULLET_SPEED,
            enemy_speed: DEFAULT_ENEMY_SPEED,
            spawn_threshold: DEFAULT_SPAWN_THRESHOLD,
        }
    }
}

impl GameConfig {
    pub fn with_size(width: f32, height: f32) -> Self {
        Self { width, height, ..Self::default() }
    }
}

/// Terminal space shooter
#[derive(Parser, Debug)]
#[command(version, about = "Dodge or destroy the descending enemies. ← → move, SPACE fires.")]
pub struct Cli {
    /// Arena width in world units.
    #[arg(long, default_value_t = DEFAULT_WIDTH,
          value_parser = clap::value_parser!(u16).range(ENEMY_WIDTH as i64 + 1..))]
    pub width: u16,

    /// Arena height in world units.
    #[arg(long, default_value_t = DEFAULT_HEIGHT,
          value_parser = clap::value_parser!(u16).range(PLAYER_BOTTOM_OFFSET as i64 + 1..))]
    pub height: u16,

    /// Frames simulated per second.
    #[arg(long, default_value_t = DEFAULT_FPS,
          value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Frames between enemy spawns.
    #[arg(long, default_value_t = DEFAULT_SPAWN_THRESHOLD)]
    pub spawn_interval: u32,

    /// Seed for enemy placement; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write log output here instead of stderr (the terminal is in raw mode).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width as f32,
            height: self.height as f32,
            spawn_threshold: self.spawn_interval,
            ..GameConfig::default()
        }
    }
}

//! Axis-aligned bounding-box collision.

use log::debug;

use crate::config::SCORE_PER_ENEMY;
use crate::entities::{GameState, GameStatus, Rect};

/// Strict overlap on all four half-planes.  Rectangles that only share an
/// edge do not intersect.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Resolve this frame's hits.
///
/// Bullets are scanned newest first; each one destroys at most the first
/// enemy (in enemy-list order) it overlaps, and both are removed.  Every
/// kill is worth [`SCORE_PER_ENEMY`].  Afterwards any remaining enemy that
/// touches the player ends the session.  Enemies that end the session stay
/// in the list.
///
/// Returns the number of enemies destroyed.
pub fn resolve_collisions(state: &mut GameState) -> u32 {
    let mut kills = 0;

    // Index walk from the back so removals never shift an unvisited bullet.
    for bi in (0..state.bullets.len()).rev() {
        let bullet = state.bullets[bi].rect();
        let hit = state
            .enemies
            .iter()
            .position(|enemy| intersects(&bullet, &enemy.rect()));
        if let Some(ei) = hit {
            state.bullets.remove(bi);
            let enemy = state.enemies.remove(ei);
            debug!("enemy destroyed at ({:.1}, {:.1})", enemy.x, enemy.y);
            kills += 1;
        }
    }
    state.score += kills * SCORE_PER_ENEMY;

    let player = state.player.rect();
    if state.enemies.iter().any(|e| intersects(&e.rect(), &player)) {
        state.status = GameStatus::Over;
    }

    kills
}

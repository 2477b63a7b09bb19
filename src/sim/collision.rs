//! Overlap testing between the player and spikes
//!
//! Uses independent per-axis absolute-distance thresholds (a symmetric-radius
//! approximation), not exact AABB corner math. The thresholds are the sum of
//! the spike extent and the player half-extent on each axis.

use super::state::Spike;
use crate::consts::*;

/// Horizontal overlap threshold (player is fixed at x = 0)
pub const HIT_RANGE_X: f32 = SPIKE_HALF_WIDTH + PLAYER_HALF;
/// Vertical overlap threshold
pub const HIT_RANGE_Y: f32 = SPIKE_HEIGHT + PLAYER_HALF;

/// Per-axis distance check between the player and a spike.
pub fn player_hit_spike(player_y: f32, spike: &Spike) -> bool {
    let hit_x = spike.pos.x.abs() < HIT_RANGE_X;
    let hit_y = (spike.pos.y - player_y).abs() < HIT_RANGE_Y;
    hit_x && hit_y
}

//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`, owned by the
//! entry point and passed into update/render explicitly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The controllable square. Horizontal position is fixed at screen center,
/// so only the vertical axis is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Vertical position in clip space
    pub y: f32,
    /// Vertical velocity (positive is up)
    pub velocity: f32,
    /// True while resting on the ground plane; gates jumping
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: GROUND_Y,
            velocity: 0.0,
            grounded: true,
        }
    }
}

impl Player {
    /// Apply the jump impulse. No double/air jump: ignored while airborne.
    /// Returns whether the jump was taken.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity = JUMP_SPEED;
        self.grounded = false;
        true
    }

    /// Snap back onto the ground plane at rest.
    pub fn reset_to_ground(&mut self) {
        self.y = GROUND_Y;
        self.velocity = 0.0;
        self.grounded = true;
    }
}

/// A ground spike scrolling right to left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    pub pos: Vec2,
}

impl Spike {
    /// New spike at the off-screen-right spawn point, base on the ground.
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(SPAWN_X, GROUND_Y),
        }
    }

    /// True once the spike has scrolled past the off-screen-left threshold.
    pub fn off_screen(&self) -> bool {
        self.pos.x < DESPAWN_X
    }
}

/// Complete game state, mutated only from the frame callback and the
/// key-input callback (both on the same thread).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    /// Live spikes in insertion order
    pub spikes: Vec<Spike>,
    /// Elapsed time since the last spawn
    pub spawn_timer: f32,
    /// Runs ended by collision (diagnostics only)
    pub collisions: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player: Player::default(),
            spikes: Vec::new(),
            spawn_timer: 0.0,
            collisions: 0,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_grounded() {
        let player = Player::default();
        assert_eq!(player.y, GROUND_Y);
        assert_eq!(player.velocity, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut player = Player::default();

        assert!(player.jump());
        assert_eq!(player.velocity, JUMP_SPEED);
        assert!(!player.grounded);

        // Airborne: second jump is ignored, velocity unchanged
        assert!(!player.jump());
        assert_eq!(player.velocity, JUMP_SPEED);
    }

    #[test]
    fn test_spike_spawn_point() {
        let spike = Spike::spawn();
        assert_eq!(spike.pos, Vec2::new(SPAWN_X, GROUND_Y));
        assert!(!spike.off_screen());
    }

    #[test]
    fn test_off_screen_threshold_is_strict() {
        let mut spike = Spike::spawn();
        spike.pos.x = DESPAWN_X;
        assert!(!spike.off_screen());
        spike.pos.x = DESPAWN_X - 0.001;
        assert!(spike.off_screen());
    }
}

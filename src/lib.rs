//! Spike Hop - a minimal jump-over-the-spikes arcade game
//!
//! Core modules:
//! - `sim`: Simulation (player physics, spike spawning, collision)
//! - `renderer`: WebGPU rendering pipeline (WebGPU with WebGL fallback)
//! - `settings`: Player preferences persisted to LocalStorage

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// Distances are in clip space ([-1, 1] on each axis); speeds and
/// accelerations are per second.
pub mod consts {
    /// Ground plane height (player rests here, spikes sit here)
    pub const GROUND_Y: f32 = -0.4;
    /// Gravitational acceleration applied to the player
    pub const GRAVITY: f32 = -3.6;
    /// Upward velocity applied on jump
    pub const JUMP_SPEED: f32 = 1.2;
    /// Leftward spike scroll speed
    pub const SCROLL_SPEED: f32 = 1.2;
    /// Simulated seconds between spike spawns
    pub const SPAWN_INTERVAL: f32 = 2.0;
    /// Spike spawn point, off-screen right
    pub const SPAWN_X: f32 = 1.2;
    /// Spikes past this x coordinate are removed
    pub const DESPAWN_X: f32 = -1.2;

    /// Player quad half-extent (spans ±this on both axes)
    pub const PLAYER_HALF: f32 = 0.05;
    /// Spike triangle half-width at the base
    pub const SPIKE_HALF_WIDTH: f32 = 0.05;
    /// Spike triangle height from base to tip
    pub const SPIKE_HEIGHT: f32 = 0.1;

    /// Largest frame delta fed to the simulation (tab-backgrounding guard)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

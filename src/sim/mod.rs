//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - All state mutation goes through `update` or explicit `GameState` methods
//! - Stable iteration order (spikes in insertion order)

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::player_hit_spike;
pub use state::{GameState, Player, Spike};
pub use tick::update;

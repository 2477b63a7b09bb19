//! Per-frame simulation update
//!
//! Called once per display refresh with the elapsed wall-clock delta.
//! All motion is delta-scaled, so behavior is frame-rate independent.

use super::collision::player_hit_spike;
use super::state::{GameState, Spike};
use crate::consts::*;

/// Advance the game state by `dt` seconds.
///
/// The delta is clamped to `[0, MAX_FRAME_DT]` so a backgrounded tab or a
/// stalled first frame cannot teleport entities across the playfield.
pub fn update(state: &mut GameState, dt: f32) {
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    // Player physics: gravity, then clamp to the ground plane.
    let player = &mut state.player;
    player.velocity += GRAVITY * dt;
    player.y += player.velocity * dt;
    if player.y < GROUND_Y {
        player.y = GROUND_Y;
        player.velocity = 0.0;
        player.grounded = true;
    }

    // Scroll live spikes and drop the ones past the left edge.
    for spike in &mut state.spikes {
        spike.pos.x -= SCROLL_SPEED * dt;
    }
    state.spikes.retain(|s| !s.off_screen());

    // Spawn cadence. A fresh spike starts moving on the next frame.
    state.spawn_timer += dt;
    if state.spawn_timer >= SPAWN_INTERVAL {
        state.spawn_timer = 0.0;
        state.spikes.push(Spike::spawn());
        log::debug!("spawned spike ({} live)", state.spikes.len());
    }

    // First detected overlap resets the run and clears the field.
    let player_y = state.player.y;
    if state.spikes.iter().any(|s| player_hit_spike(player_y, s)) {
        state.player.reset_to_ground();
        state.spikes.clear();
        state.collisions += 1;
        log::info!("collision, resetting run (total {})", state.collisions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    /// Exact in f32, and 32 steps sum to exactly 2.0
    const DT_STEP: f32 = 0.0625;

    #[test]
    fn test_zero_delta_is_a_noop() {
        let mut state = GameState::new();
        let before = state.clone();
        update(&mut state, 0.0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_negative_delta_is_a_noop() {
        let mut state = GameState::new();
        let before = state.clone();
        update(&mut state, -1.0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_grounded_player_stays_put() {
        let mut state = GameState::new();
        update(&mut state, DT_STEP);
        assert_eq!(state.player.y, GROUND_Y);
        assert_eq!(state.player.velocity, 0.0);
        assert!(state.player.grounded);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut state = GameState::new();
        assert!(state.player.jump());

        let mut peak: f32 = GROUND_Y;
        // Full jump arc is ~0.67s; simulate 2s
        for _ in 0..32 {
            update(&mut state, DT_STEP);
            peak = peak.max(state.player.y);
            assert!(state.player.y >= GROUND_Y);
        }

        // Cleared the spike tip height at the apex, then landed
        assert!(peak > GROUND_Y + SPIKE_HEIGHT);
        assert_eq!(state.player.y, GROUND_Y);
        assert_eq!(state.player.velocity, 0.0);
        assert!(state.player.grounded);
    }

    #[test]
    fn test_spawn_at_exact_interval() {
        let mut state = GameState::new();

        // 31 steps of 1/16 s: 1.9375s elapsed, nothing spawned yet
        for _ in 0..31 {
            update(&mut state, DT_STEP);
        }
        assert!(state.spikes.is_empty());

        // 32nd step lands exactly on the 2.0s interval
        update(&mut state, DT_STEP);
        assert_eq!(state.spikes.len(), 1);
        assert_eq!(state.spikes[0].pos, Vec2::new(SPAWN_X, GROUND_Y));
        assert!(state.spawn_timer < SPAWN_INTERVAL);
        assert_eq!(state.spawn_timer, 0.0);
    }

    #[test]
    fn test_spikes_scroll_left() {
        let mut state = GameState::new();
        state.spikes.push(Spike::spawn());

        update(&mut state, DT_STEP);
        let expected_x = SPAWN_X - SCROLL_SPEED * DT_STEP;
        assert!((state.spikes[0].pos.x - expected_x).abs() < 1e-6);
    }

    #[test]
    fn test_off_screen_spike_removed() {
        let mut state = GameState::new();
        state.spikes.push(Spike {
            pos: Vec2::new(DESPAWN_X + 0.01, GROUND_Y),
        });

        update(&mut state, DT_STEP);
        assert!(state.spikes.is_empty());
    }

    #[test]
    fn test_spike_exactly_at_threshold_survives() {
        let mut state = GameState::new();
        state.spikes.push(Spike {
            pos: Vec2::new(DESPAWN_X, GROUND_Y),
        });

        update(&mut state, 0.0);
        assert_eq!(state.spikes.len(), 1);
    }

    #[test]
    fn test_collision_resets_run() {
        let mut state = GameState::new();
        state.player.jump();
        state.spikes.push(Spike {
            pos: Vec2::new(0.0, GROUND_Y),
        });
        // Distant spike proves the whole collection is cleared
        state.spikes.push(Spike::spawn());

        update(&mut state, 0.01);
        assert!(state.spikes.is_empty());
        assert_eq!(state.player.y, GROUND_Y);
        assert_eq!(state.player.velocity, 0.0);
        assert!(state.player.grounded);
        assert_eq!(state.collisions, 1);
    }

    #[test]
    fn test_large_delta_is_clamped() {
        let mut state = GameState::new();
        state.spikes.push(Spike::spawn());

        // A 5-second stall moves spikes by at most SCROLL_SPEED * MAX_FRAME_DT
        update(&mut state, 5.0);
        let expected_x = SPAWN_X - SCROLL_SPEED * MAX_FRAME_DT;
        assert!((state.spikes[0].pos.x - expected_x).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_player_never_below_ground(dts in prop::collection::vec(0.0f32..0.25, 1..100)) {
            let mut state = GameState::new();
            state.player.jump();
            for dt in dts {
                update(&mut state, dt);
                prop_assert!(state.player.y >= GROUND_Y);
                if state.player.y == GROUND_Y && state.player.grounded {
                    prop_assert_eq!(state.player.velocity, 0.0);
                }
            }
        }

        #[test]
        fn prop_no_spike_survives_past_left_edge(dts in prop::collection::vec(0.0f32..0.25, 1..200)) {
            let mut state = GameState::new();
            for dt in dts {
                update(&mut state, dt);
                prop_assert!(state.spikes.iter().all(|s| s.pos.x >= DESPAWN_X));
            }
        }

        #[test]
        fn prop_spawn_timer_resets_below_interval(dts in prop::collection::vec(0.0f32..0.25, 1..200)) {
            let mut state = GameState::new();
            for dt in dts {
                update(&mut state, dt);
                prop_assert!(state.spawn_timer < SPAWN_INTERVAL);
            }
        }
    }
}

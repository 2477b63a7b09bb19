//! Static geometry for the player quad and spike triangle
//!
//! Both shapes are defined around a local origin and positioned at draw time
//! via the translation uniform. Uploaded once at startup, immutable after.

use super::vertex::Vertex;
use crate::consts::{PLAYER_HALF, SPIKE_HALF_WIDTH, SPIKE_HEIGHT};

/// Player quad: two triangles centered on the origin.
pub const fn player_quad() -> [Vertex; 6] {
    [
        Vertex::new(-PLAYER_HALF, -PLAYER_HALF),
        Vertex::new(PLAYER_HALF, -PLAYER_HALF),
        Vertex::new(-PLAYER_HALF, PLAYER_HALF),
        Vertex::new(PLAYER_HALF, -PLAYER_HALF),
        Vertex::new(PLAYER_HALF, PLAYER_HALF),
        Vertex::new(-PLAYER_HALF, PLAYER_HALF),
    ]
}

/// Spike: an isosceles triangle with its base on the origin, tip up.
pub const fn spike_triangle() -> [Vertex; 3] {
    [
        Vertex::new(-SPIKE_HALF_WIDTH, 0.0),
        Vertex::new(SPIKE_HALF_WIDTH, 0.0),
        Vertex::new(0.0, SPIKE_HEIGHT),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_quad_extents() {
        let quad = player_quad();
        assert_eq!(quad.len(), 6);
        for v in &quad {
            assert_eq!(v.position[0].abs(), PLAYER_HALF);
            assert_eq!(v.position[1].abs(), PLAYER_HALF);
        }
    }

    #[test]
    fn test_spike_triangle_extents() {
        let tri = spike_triangle();
        assert_eq!(tri.len(), 3);
        // Base spans ±half-width at y = 0
        assert_eq!(tri[0].position, [-SPIKE_HALF_WIDTH, 0.0]);
        assert_eq!(tri[1].position, [SPIKE_HALF_WIDTH, 0.0]);
        // Tip is centered at full height
        assert_eq!(tri[2].position, [0.0, SPIKE_HEIGHT]);
    }
}

//! Cube-face layout for omni-directional shadows.
//!
//! A point light renders six faces into one 2D target laid out as a 4 × 2
//! grid of face-sized cells:
//!
//! ```text
//!   y = h   | -X | -Z | +X | +Z |
//!   y = 0   |    | -Y |    | +Y |
//!             0    w    2w   3w
//! ```
//!
//! Face order is fixed (+X, −X, +Z, −Z, +Y, −Y); the distance shaders sample
//! the atlas with exactly this packing.

use glam::{UVec2, Vec3};

use crate::resources::render_target::Viewport;

pub const CUBE_FACE_COUNT: usize = 6;

/// View direction of each face, in face order.
pub const CUBE_DIRECTIONS: [Vec3; CUBE_FACE_COUNT] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
];

/// Up vector of each face, in face order.
pub const CUBE_UPS: [Vec3; CUBE_FACE_COUNT] = [
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
];

/// Cell of each face in the 4 × 2 grid, in face order.
const CUBE_CELLS: [(u32, u32); CUBE_FACE_COUNT] = [(2, 1), (0, 1), (3, 1), (1, 1), (3, 0), (1, 0)];

/// Size of the atlas target holding all six faces of `face_size`.
#[inline]
#[must_use]
pub fn cube_atlas_size(face_size: UVec2) -> UVec2 {
    UVec2::new(face_size.x * 4, face_size.y * 2)
}

/// Viewport of every face inside the atlas, in face order.
#[must_use]
pub fn cube_face_viewports(face_size: UVec2) -> [Viewport; CUBE_FACE_COUNT] {
    CUBE_CELLS.map(|(col, row)| {
        Viewport::new(col * face_size.x, row * face_size.y, face_size.x, face_size.y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewports_follow_face_order() {
        let viewports = cube_face_viewports(UVec2::new(512, 256));
        let origins: Vec<(u32, u32)> = viewports.iter().map(|v| (v.x, v.y)).collect();
        assert_eq!(
            origins,
            vec![(1024, 256), (0, 256), (1536, 256), (512, 256), (1536, 0), (512, 0)]
        );
        assert!(viewports.iter().all(|v| v.width == 512 && v.height == 256));
    }

    #[test]
    fn viewports_do_not_overlap_and_fit_the_atlas() {
        let face = UVec2::new(64, 64);
        let atlas = cube_atlas_size(face);
        let viewports = cube_face_viewports(face);

        for (i, a) in viewports.iter().enumerate() {
            assert!(a.x + a.width <= atlas.x && a.y + a.height <= atlas.y);
            for b in &viewports[i + 1..] {
                let disjoint = a.x + a.width <= b.x
                    || b.x + b.width <= a.x
                    || a.y + a.height <= b.y
                    || b.y + b.height <= a.y;
                assert!(disjoint, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn up_vectors_are_orthogonal_to_directions() {
        for (dir, up) in CUBE_DIRECTIONS.iter().zip(CUBE_UPS.iter()) {
            assert!(dir.dot(*up).abs() < 1e-6);
        }
    }
}

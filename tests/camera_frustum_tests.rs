//! Camera and Frustum Tests
//!
//! Tests for:
//! - Perspective/Orthographic projection matrix generation (GL depth range)
//! - look_at orientation, including a view direction parallel to `up`
//! - Frustum plane extraction (Gribb-Hartmann)
//! - Frustum-sphere intersection

mod common;

use glam::{Mat4, Vec3, Vec4};

use common::{approx, mat4_approx};
use umbra::resources::BoundingSphere;
use umbra::scene::{Camera, Frustum, Projection};

// ============================================================================
// Projection Matrix Tests
// ============================================================================

#[test]
fn perspective_matches_gl_projection() {
    let cam = Camera::new_perspective(60.0, 1.5, 0.1, 100.0);
    let expected = Mat4::perspective_rh_gl(60f32.to_radians(), 1.5, 0.1, 100.0);
    assert!(mat4_approx(cam.projection_matrix(), &expected));
}

#[test]
fn perspective_depth_range_is_minus_one_to_one() {
    let cam = Camera::new_perspective(60.0, 1.0, 0.5, 50.0);
    let near = cam.projection_matrix().project_point3(Vec3::new(0.0, 0.0, -0.5));
    let far = cam.projection_matrix().project_point3(Vec3::new(0.0, 0.0, -50.0));
    assert!(approx(near.z, -1.0), "near z = {}", near.z);
    assert!(approx(far.z, 1.0), "far z = {}", far.z);
}

#[test]
fn orthographic_maps_box_to_clip_cube() {
    let cam = Camera::new_orthographic(-5.0, 5.0, 5.0, -5.0, 0.5, 500.0);
    let m = cam.projection_matrix();

    let corner = m.project_point3(Vec3::new(5.0, 5.0, -0.5));
    assert!(approx(corner.x, 1.0) && approx(corner.y, 1.0) && approx(corner.z, -1.0));
    let corner = m.project_point3(Vec3::new(-5.0, -5.0, -500.0));
    assert!(approx(corner.x, -1.0) && approx(corner.y, -1.0) && approx(corner.z, 1.0));
}

#[test]
fn set_perspective_reports_changes() {
    let mut cam = Camera::new_perspective(50.0, 1.0, 0.5, 500.0);
    assert!(!cam.set_perspective(50.0, 1.0, 500.0));
    assert!(cam.set_perspective(70.0, 2.0, 30.0));

    assert_eq!(cam.projection, Projection::Perspective { fov: 70.0, aspect: 2.0 });
    let expected = Mat4::perspective_rh_gl(70f32.to_radians(), 2.0, 0.5, 30.0);
    assert!(mat4_approx(cam.projection_matrix(), &expected));

    let mut ortho = Camera::new_orthographic(-1.0, 1.0, 1.0, -1.0, 0.1, 10.0);
    assert!(!ortho.set_perspective(70.0, 2.0, 30.0));
    assert!(ortho.fov().is_none() && ortho.aspect().is_none());
}

// ============================================================================
// View Matrix Tests
// ============================================================================

#[test]
fn look_at_matches_look_at_rh() {
    let mut cam = Camera::new_perspective(60.0, 1.0, 0.1, 100.0);
    cam.position = Vec3::new(3.0, 4.0, 5.0);
    cam.look_at(Vec3::new(0.0, 1.0, 0.0));
    cam.update_matrix_world();

    let expected = Mat4::look_at_rh(Vec3::new(3.0, 4.0, 5.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
    assert!(mat4_approx(cam.matrix_world_inverse(), &expected));
    assert!(mat4_approx(&(*cam.matrix_world() * *cam.matrix_world_inverse()), &Mat4::IDENTITY));
}

#[test]
fn look_at_parallel_to_up_stays_finite() {
    let mut cam = Camera::new_perspective(90.0, 1.0, 0.5, 500.0);
    cam.position = Vec3::new(0.0, 10.0, 0.0);
    cam.look_at(Vec3::ZERO);
    cam.update_matrix_world();

    assert!(cam.matrix_world().is_finite());
    let forward = -cam.matrix_world().z_axis.truncate();
    assert!(forward.distance(Vec3::NEG_Y) < 1e-3);
}

#[test]
fn look_at_own_position_is_finite() {
    let mut cam = Camera::new_perspective(90.0, 1.0, 0.5, 500.0);
    cam.position = Vec3::ONE;
    cam.look_at(Vec3::ONE);
    cam.update_matrix_world();
    assert!(cam.matrix_world_inverse().is_finite());
}

#[test]
fn view_projection_is_projection_times_view() {
    let mut cam = Camera::new_perspective(45.0, 1.0, 1.0, 10.0);
    cam.position = Vec3::new(0.0, 0.0, 5.0);
    cam.update_matrix_world();

    let expected = *cam.projection_matrix() * Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
    assert!(mat4_approx(&cam.view_projection_matrix(), &expected));
}

// ============================================================================
// Frustum Tests
// ============================================================================

fn unit_box_frustum() -> Frustum {
    // Orthographic box x, y in [-1, 1], z in [-1, -10] seen from the origin.
    Frustum::from_matrix(Mat4::orthographic_rh_gl(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0))
}

#[test]
fn frustum_planes_are_normalized_and_inward() {
    let frustum = unit_box_frustum();
    for plane in frustum.planes() {
        assert!(approx(plane.truncate().length(), 1.0), "{plane}");
    }
    // Left plane: x >= -1
    assert!((frustum.planes()[0] - Vec4::new(1.0, 0.0, 0.0, 1.0)).length() < 1e-4);
    // Near plane: z <= -1
    assert!((frustum.planes()[4] - Vec4::new(0.0, 0.0, -1.0, -1.0)).length() < 1e-4);
}

#[test]
fn frustum_contains_point() {
    let frustum = unit_box_frustum();
    assert!(frustum.contains_point(Vec3::new(0.0, 0.0, -5.0)));
    assert!(frustum.contains_point(Vec3::new(1.0, -1.0, -1.0)));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 0.0)));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -11.0)));
    assert!(!frustum.contains_point(Vec3::new(1.5, 0.0, -5.0)));
}

#[test]
fn frustum_sphere_intersection() {
    let frustum = unit_box_frustum();
    assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, -5.0), 0.1));
    // Straddling the right plane.
    assert!(frustum.intersects_sphere(Vec3::new(1.4, 0.0, -5.0), 0.5));
    assert!(!frustum.intersects_sphere(Vec3::new(1.6, 0.0, -5.0), 0.5));
    // Behind the near plane.
    assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, 1.0), 1.5));
}

#[test]
fn camera_frustum_culls_bounding_spheres() {
    let mut cam = Camera::new_perspective(90.0, 1.0, 0.5, 100.0);
    cam.position = Vec3::new(0.0, 0.0, 10.0);
    cam.look_at(Vec3::ZERO);
    cam.update_matrix_world();
    let frustum = cam.frustum();

    let visible = BoundingSphere { center: Vec3::ZERO, radius: 1.0 };
    let behind = BoundingSphere { center: Vec3::new(0.0, 0.0, 20.0), radius: 1.0 };
    let beside = BoundingSphere { center: Vec3::new(30.0, 0.0, 0.0), radius: 1.0 };

    assert!(frustum.intersects_bounding_sphere(&visible));
    assert!(!frustum.intersects_bounding_sphere(&behind));
    assert!(!frustum.intersects_bounding_sphere(&beside));

    let moved = visible.transform(&Mat4::from_translation(Vec3::new(30.0, 0.0, 0.0)));
    assert!(!frustum.intersects_bounding_sphere(&moved));
}

use std::borrow::Cow;

use glam::{Mat3, Mat4, Quat, Vec3, Vec4};
use uuid::Uuid;

use crate::resources::geometry::BoundingSphere;
use crate::scene::layers::Layers;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Vertical field of view in degrees.
    Perspective { fov: f32, aspect: f32 },
    Orthographic {
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
    },
}

/// Free-standing camera with its own pose.
///
/// Shadow cameras are owned by their light's shadow and never inserted into
/// the scene graph, so the camera carries position / rotation itself instead
/// of borrowing a node transform.
#[derive(Debug, Clone)]
pub struct Camera {
    pub uuid: Uuid,
    pub name: Cow<'static, str>,

    // === Projection ===
    pub projection: Projection,
    pub near: f32,
    pub far: f32,

    // === Pose ===
    pub position: Vec3,
    pub rotation: Quat,
    pub up: Vec3,
    pub layers: Layers,

    // Cached matrices, refreshed by the update_* methods
    pub(crate) world_matrix: Mat4,
    pub(crate) world_matrix_inverse: Mat4,
    pub(crate) projection_matrix: Mat4,
}

impl Camera {
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::new(Projection::Perspective { fov, aspect }, near, far)
    }

    #[must_use]
    pub fn new_orthographic(
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self::new(Projection::Orthographic { left, right, top, bottom }, near, far)
    }

    fn new(projection: Projection, near: f32, far: f32) -> Self {
        let mut cam = Self {
            uuid: Uuid::new_v4(),
            name: Cow::Borrowed("Camera"),
            projection,
            near,
            far,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            up: Vec3::Y,
            layers: Layers::default(),
            world_matrix: Mat4::IDENTITY,
            world_matrix_inverse: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam
    }

    /// Rebuilds the projection from the current parameters (GL clip space,
    /// depth in [-1, 1]).
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = match self.projection {
            Projection::Perspective { fov, aspect } => {
                Mat4::perspective_rh_gl(fov.to_radians(), aspect, self.near, self.far)
            }
            Projection::Orthographic { left, right, top, bottom } => {
                Mat4::orthographic_rh_gl(left, right, bottom, top, self.near, self.far)
            }
        };
    }

    /// Rebuilds the world matrix from position / rotation.
    pub fn update_matrix_world(&mut self) {
        self.world_matrix = Mat4::from_rotation_translation(self.rotation, self.position);
        self.world_matrix_inverse = self.world_matrix.inverse();
    }

    /// Rotates the camera so that its -Z axis points at `target`, keeping
    /// `self.up` as the up hint.
    pub fn look_at(&mut self, target: Vec3) {
        let mut z = self.position - target;
        if z.length_squared() == 0.0 {
            z.z = 1.0;
        }
        z = z.normalize();

        let mut x = self.up.cross(z);
        if x.length_squared() == 0.0 {
            // up and view direction are parallel
            if self.up.z.abs() == 1.0 {
                z.x += 0.0001;
            } else {
                z.z += 0.0001;
            }
            z = z.normalize();
            x = self.up.cross(z);
        }
        let x = x.normalize();
        let y = z.cross(x);

        self.rotation = Quat::from_mat3(&Mat3::from_cols(x, y, z));
    }

    // === Perspective helpers ===

    /// Vertical field of view in degrees, `None` for orthographic cameras.
    #[must_use]
    pub fn fov(&self) -> Option<f32> {
        match self.projection {
            Projection::Perspective { fov, .. } => Some(fov),
            Projection::Orthographic { .. } => None,
        }
    }

    #[must_use]
    pub fn aspect(&self) -> Option<f32> {
        match self.projection {
            Projection::Perspective { aspect, .. } => Some(aspect),
            Projection::Orthographic { .. } => None,
        }
    }

    /// Updates a perspective camera; returns whether anything changed.
    /// Orthographic cameras are left untouched.
    pub fn set_perspective(&mut self, fov: f32, aspect: f32, far: f32) -> bool {
        let Projection::Perspective { fov: old_fov, aspect: old_aspect } = self.projection else {
            return false;
        };
        #[allow(clippy::float_cmp)]
        let changed = old_fov != fov || old_aspect != aspect || self.far != far;
        if changed {
            self.projection = Projection::Perspective { fov, aspect };
            self.far = far;
            self.update_projection_matrix();
        }
        changed
    }

    // === Accessors ===

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    #[inline]
    #[must_use]
    pub fn matrix_world(&self) -> &Mat4 {
        &self.world_matrix
    }

    #[inline]
    #[must_use]
    pub fn matrix_world_inverse(&self) -> &Mat4 {
        &self.world_matrix_inverse
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.world_matrix_inverse
    }

    #[must_use]
    pub fn frustum(&self) -> Frustum {
        Frustum::from_matrix(self.view_projection_matrix())
    }
}

// ============================================================================
// Frustum
// ============================================================================

/// Six clip planes `(normal, constant)`, normals pointing inwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frustum {
    planes: [Vec4; 6], // Left, Right, Bottom, Top, Near, Far
}

impl Frustum {
    /// Gribb-Hartmann extraction from a GL view-projection matrix
    /// (clip-space depth in [-w, w]).
    #[must_use]
    pub fn from_matrix(m: Mat4) -> Self {
        let rows = [m.row(0), m.row(1), m.row(2), m.row(3)];

        let mut planes = [
            rows[3] + rows[0],
            rows[3] - rows[0],
            rows[3] + rows[1],
            rows[3] - rows[1],
            rows[3] + rows[2],
            rows[3] - rows[2],
        ];

        for plane in &mut planes {
            let length = plane.truncate().length();
            if length > 0.0 {
                *plane /= length;
            }
        }

        Self { planes }
    }

    #[inline]
    #[must_use]
    pub fn planes(&self) -> &[Vec4; 6] {
        &self.planes
    }

    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(center) + plane.w >= -radius)
    }

    #[inline]
    #[must_use]
    pub fn intersects_bounding_sphere(&self, sphere: &BoundingSphere) -> bool {
        self.intersects_sphere(sphere.center, sphere.radius)
    }

    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.intersects_sphere(point, 0.0)
    }
}

use glam::{Mat4, UVec2, Vec3};
use uuid::Uuid;

use crate::resources::render_target::RenderTargetId;
use crate::scene::camera::Camera;

#[derive(Debug, Clone)]
pub struct DirectionalLight {
    /// World-space point the light shines at.
    pub target: Vec3,
}

#[derive(Debug, Clone)]
pub struct PointLight {
    /// Cut-off distance; 0 means unlimited.
    pub distance: f32,
    pub decay: f32,
}

#[derive(Debug, Clone)]
pub struct SpotLight {
    pub target: Vec3,
    /// Cut-off distance; 0 means unlimited.
    pub distance: f32,
    /// Half-angle of the cone, radians.
    pub angle: f32,
    pub penumbra: f32,
    pub decay: f32,
}

#[derive(Debug, Clone)]
pub enum LightKind {
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
    Ambient,
}

// ============================================================================
// Shadow
// ============================================================================

/// Per-light shadow configuration and the state the shadow pass keeps for it.
#[derive(Debug, Clone)]
pub struct LightShadow {
    pub camera: Camera,
    pub map_size: UVec2,
    pub bias: f32,
    pub radius: f32,

    /// Render target, allocated lazily by the first shadow pass.
    pub(crate) map: Option<RenderTargetId>,
    /// World → shadow-map transform written by the last shadow pass.
    pub(crate) matrix: Mat4,
}

impl LightShadow {
    fn with_camera(camera: Camera) -> Self {
        Self {
            camera,
            map_size: UVec2::new(512, 512),
            bias: 0.0,
            radius: 1.0,
            map: None,
            matrix: Mat4::IDENTITY,
        }
    }

    #[must_use]
    pub fn directional() -> Self {
        Self::with_camera(Camera::new_orthographic(-5.0, 5.0, 5.0, -5.0, 0.5, 500.0))
    }

    #[must_use]
    pub fn spot() -> Self {
        Self::with_camera(Camera::new_perspective(50.0, 1.0, 0.5, 500.0))
    }

    #[must_use]
    pub fn point() -> Self {
        Self::with_camera(Camera::new_perspective(90.0, 1.0, 0.5, 500.0))
    }

    #[inline]
    #[must_use]
    pub fn map(&self) -> Option<RenderTargetId> {
        self.map
    }

    /// Drops the render target so the next pass allocates a new one
    /// (e.g. after `map_size` changed).
    pub fn invalidate_map(&mut self) {
        self.map = None;
    }

    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Keeps a spot shadow camera's frustum in sync with the cone.
    pub(crate) fn update_for_spot(&mut self, spot: &SpotLight) {
        let fov = (spot.angle * 2.0).to_degrees();
        let aspect = self.map_size.x as f32 / self.map_size.y.max(1) as f32;
        let far = if spot.distance > 0.0 { spot.distance } else { self.camera.far };

        if self.camera.set_perspective(fov, aspect, far) {
            log::trace!("Spot shadow camera refreshed: fov {fov:.2}, far {far}");
        }
    }
}

// ============================================================================
// Light
// ============================================================================

#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,

    /// Whether the light currently renders a shadow map.
    pub cast_shadow: bool,
    /// Shadow configuration; `None` for kinds that cannot cast shadows.
    pub shadow: Option<LightShadow>,
}

impl Light {
    fn new(color: Vec3, intensity: f32, kind: LightKind, shadow: Option<LightShadow>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind,
            cast_shadow: false,
            shadow,
        }
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self::new(
            color,
            intensity,
            LightKind::Directional(DirectionalLight { target: Vec3::ZERO }),
            Some(LightShadow::directional()),
        )
    }

    #[must_use]
    pub fn new_point(color: Vec3, intensity: f32, distance: f32) -> Self {
        Self::new(
            color,
            intensity,
            LightKind::Point(PointLight { distance, decay: 1.0 }),
            Some(LightShadow::point()),
        )
    }

    #[must_use]
    pub fn new_spot(color: Vec3, intensity: f32, distance: f32, angle: f32) -> Self {
        Self::new(
            color,
            intensity,
            LightKind::Spot(SpotLight {
                target: Vec3::ZERO,
                distance,
                angle,
                penumbra: 0.0,
                decay: 1.0,
            }),
            Some(LightShadow::spot()),
        )
    }

    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self::new(color, intensity, LightKind::Ambient, None)
    }

    #[must_use]
    pub fn with_cast_shadow(mut self, cast_shadow: bool) -> Self {
        self.cast_shadow = cast_shadow;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: Vec3) -> Self {
        match &mut self.kind {
            LightKind::Directional(d) => d.target = target,
            LightKind::Spot(s) => s.target = target,
            LightKind::Point(_) | LightKind::Ambient => {}
        }
        self
    }

    #[inline]
    #[must_use]
    pub fn is_point(&self) -> bool {
        matches!(self.kind, LightKind::Point(_))
    }

    /// Point the light shines at, for directional and spot lights.
    #[must_use]
    pub fn target(&self) -> Option<Vec3> {
        match &self.kind {
            LightKind::Directional(d) => Some(d.target),
            LightKind::Spot(s) => Some(s.target),
            LightKind::Point(_) | LightKind::Ambient => None,
        }
    }
}

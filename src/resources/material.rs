use std::borrow::Cow;

use glam::{Vec3, Vec4};
use uuid::Uuid;

use crate::renderer::uniforms::{UniformName, UniformValue};

/// Which faces are rasterised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

/// How the depth variant encodes depth into its color target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepthPacking {
    Basic,
    #[default]
    Rgba,
}

/// Parameters of the point-light distance material: the fragment stage
/// writes the normalised distance to `reference_position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceParams {
    pub reference_position: Vec3,
    pub near_distance: f32,
    pub far_distance: f32,
}

impl Default for DistanceParams {
    fn default() -> Self {
        Self {
            reference_position: Vec3::ZERO,
            near_distance: 1.0,
            far_distance: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MaterialKind {
    Basic,
    Lambert,
    Phong,
    Standard,
    Depth(DepthPacking),
    Distance(DistanceParams),
}

impl MaterialKind {
    #[must_use]
    pub fn shader_name(&self) -> &'static str {
        match self {
            Self::Basic => "mesh_basic",
            Self::Lambert => "mesh_lambert",
            Self::Phong => "mesh_phong",
            Self::Standard => "mesh_standard",
            Self::Depth(_) => "depth",
            Self::Distance(_) => "distance_rgba",
        }
    }
}

/// User clipping state carried by a material.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clipping {
    /// Planes as `(normal.xyz, constant)`.
    pub planes: Vec<Vec4>,
    /// Whether the planes also clip the shadow this material casts.
    pub clip_shadows: bool,
    pub clip_intersection: bool,
}

#[derive(Debug, Clone)]
pub struct Material {
    pub uuid: Uuid,
    pub name: Cow<'static, str>,
    pub kind: MaterialKind,

    pub color: Vec3,
    pub opacity: f32,

    pub side: Side,
    pub visible: bool,
    pub wireframe: bool,
    pub wireframe_line_width: f32,
    pub clipping: Clipping,

    /// The material's program handles morph targets.
    pub morph_targets: bool,
    /// The material's program handles skinning.
    pub skinning: bool,
}

impl Material {
    #[must_use]
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: Cow::Borrowed(kind.shader_name()),
            kind,
            color: Vec3::ONE,
            opacity: 1.0,
            side: Side::Front,
            visible: true,
            wireframe: false,
            wireframe_line_width: 1.0,
            clipping: Clipping::default(),
            morph_targets: false,
            skinning: false,
        }
    }

    #[must_use]
    pub fn new_basic(color: Vec3) -> Self {
        Self { color, ..Self::new(MaterialKind::Basic) }
    }

    #[must_use]
    pub fn new_standard(color: Vec3) -> Self {
        Self { color, ..Self::new(MaterialKind::Standard) }
    }

    #[must_use]
    pub fn new_depth(packing: DepthPacking) -> Self {
        Self::new(MaterialKind::Depth(packing))
    }

    #[must_use]
    pub fn new_distance() -> Self {
        Self::new(MaterialKind::Distance(DistanceParams::default()))
    }

    #[must_use]
    pub fn with_morph_targets(mut self, enabled: bool) -> Self {
        self.morph_targets = enabled;
        self
    }

    #[must_use]
    pub fn with_skinning(mut self, enabled: bool) -> Self {
        self.skinning = enabled;
        self
    }

    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Copy of this material with a fresh identity.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            ..self.clone()
        }
    }

    #[inline]
    #[must_use]
    pub fn is_distance(&self) -> bool {
        matches!(self.kind, MaterialKind::Distance(_))
    }

    /// Configures a distance material for a point light. Returns `false` when
    /// the material is not a distance material and cannot take the parameters.
    pub fn setup_point_light(&mut self, light_position: Vec3, near: f32, far: f32) -> bool {
        match &mut self.kind {
            MaterialKind::Distance(params) => {
                params.reference_position = light_position;
                params.near_distance = near;
                params.far_distance = far;
                true
            }
            _ => false,
        }
    }

    /// Values of the material-owned uniforms, keyed by uniform name.
    #[must_use]
    pub fn uniform_values(&self) -> Vec<(UniformName, UniformValue)> {
        let mut values = match &self.kind {
            MaterialKind::Depth(_) => Vec::new(),
            MaterialKind::Distance(params) => vec![
                (UniformName::ReferencePosition, UniformValue::Vec3(params.reference_position)),
                (UniformName::NearDistance, UniformValue::Float(params.near_distance)),
                (UniformName::FarDistance, UniformValue::Float(params.far_distance)),
            ],
            _ => vec![(UniformName::Diffuse, UniformValue::Vec3(self.color))],
        };
        values.push((UniformName::Opacity, UniformValue::Float(self.opacity)));
        values
    }
}

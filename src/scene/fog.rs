use glam::Vec3;

use crate::renderer::uniforms::{UniformName, UniformValue};

#[derive(Debug, Clone, PartialEq)]
pub enum Fog {
    /// Grows linearly between `near` and `far`.
    Linear { color: Vec3, near: f32, far: f32 },
    /// Exponential squared falloff.
    Exp2 { color: Vec3, density: f32 },
}

impl Fog {
    #[must_use]
    pub fn linear(color: Vec3, near: f32, far: f32) -> Self {
        Self::Linear { color, near, far }
    }

    #[must_use]
    pub fn exp2(color: Vec3, density: f32) -> Self {
        Self::Exp2 { color, density }
    }

    #[must_use]
    pub fn color(&self) -> Vec3 {
        match self {
            Self::Linear { color, .. } | Self::Exp2 { color, .. } => *color,
        }
    }

    #[must_use]
    pub fn uniform_values(&self) -> Vec<(UniformName, UniformValue)> {
        match self {
            Self::Linear { color, near, far } => vec![
                (UniformName::FogColor, UniformValue::Vec3(*color)),
                (UniformName::FogNear, UniformValue::Float(*near)),
                (UniformName::FogFar, UniformValue::Float(*far)),
            ],
            Self::Exp2 { color, density } => vec![
                (UniformName::FogColor, UniformValue::Vec3(*color)),
                (UniformName::FogDensity, UniformValue::Float(*density)),
            ],
        }
    }
}

use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::errors::{Result, UmbraError};
use crate::resources::texture::TextureBinding;

use super::name::UniformName;

/// Location of an active uniform inside a linked program, as reported by the
/// driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub i32);

// ============================================================================
// Declared Types
// ============================================================================

/// Value type of an active uniform (the subset of GLSL types the engine's
/// programs declare).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformType {
    Float,
    FloatVec2,
    FloatVec3,
    FloatVec4,
    Int,
    IntVec2,
    IntVec3,
    IntVec4,
    Bool,
    FloatMat2,
    FloatMat3,
    FloatMat4,
    Sampler2D,
    SamplerCube,
    Sampler2DShadow,
}

impl UniformType {
    /// Maps a GL type enum (`GL_FLOAT_VEC3`, `GL_SAMPLER_CUBE`, ...).
    pub fn from_gl(gl_type: u32) -> Result<Self> {
        Ok(match gl_type {
            0x1406 => Self::Float,
            0x8B50 => Self::FloatVec2,
            0x8B51 => Self::FloatVec3,
            0x8B52 => Self::FloatVec4,
            0x1404 => Self::Int,
            0x8B53 => Self::IntVec2,
            0x8B54 => Self::IntVec3,
            0x8B55 => Self::IntVec4,
            0x8B56 => Self::Bool,
            0x8B5A => Self::FloatMat2,
            0x8B5B => Self::FloatMat3,
            0x8B5C => Self::FloatMat4,
            0x8B5E => Self::Sampler2D,
            0x8B60 => Self::SamplerCube,
            0x8B62 => Self::Sampler2DShadow,
            other => return Err(UmbraError::UnsupportedUniformType(other)),
        })
    }

    #[must_use]
    pub const fn glsl_name(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::FloatVec2 => "vec2",
            Self::FloatVec3 => "vec3",
            Self::FloatVec4 => "vec4",
            Self::Int => "int",
            Self::IntVec2 => "ivec2",
            Self::IntVec3 => "ivec3",
            Self::IntVec4 => "ivec4",
            Self::Bool => "bool",
            Self::FloatMat2 => "mat2",
            Self::FloatMat3 => "mat3",
            Self::FloatMat4 => "mat4",
            Self::Sampler2D => "sampler2D",
            Self::SamplerCube => "samplerCube",
            Self::Sampler2DShadow => "sampler2DShadow",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_sampler(self) -> bool {
        matches!(self, Self::Sampler2D | Self::SamplerCube | Self::Sampler2DShadow)
    }
}

// ============================================================================
// Values
// ============================================================================

/// A value pushed into a uniform node.
///
/// Struct values are keyed by member name; members the program does not
/// declare (optimised away) are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat3(Mat3),
    Mat4(Mat4),
    FloatArray(Vec<f32>),
    IntArray(Vec<i32>),
    Vec3Array(Vec<Vec3>),
    Mat4Array(Vec<Mat4>),
    Texture(TextureBinding),
    TextureArray(Vec<TextureBinding>),
    Struct(Vec<(UniformName, UniformValue)>),
    StructArray(Vec<Vec<(UniformName, UniformValue)>>),
}

impl UniformValue {
    /// Short description used in type-mismatch errors.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Vec2(_) => "vec2",
            Self::Vec3(_) => "vec3",
            Self::Vec4(_) => "vec4",
            Self::Mat3(_) => "mat3",
            Self::Mat4(_) => "mat4",
            Self::FloatArray(_) => "float[]",
            Self::IntArray(_) => "int[]",
            Self::Vec3Array(_) => "vec3[]",
            Self::Mat4Array(_) => "mat4[]",
            Self::Texture(_) => "texture",
            Self::TextureArray(_) => "texture[]",
            Self::Struct(_) => "struct",
            Self::StructArray(_) => "struct[]",
        }
    }
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<i32> for UniformValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for UniformValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec3> for UniformValue {
    fn from(v: Vec3) -> Self {
        Self::Vec3(v)
    }
}

impl From<Vec4> for UniformValue {
    fn from(v: Vec4) -> Self {
        Self::Vec4(v)
    }
}

impl From<Mat4> for UniformValue {
    fn from(v: Mat4) -> Self {
        Self::Mat4(v)
    }
}

impl From<TextureBinding> for UniformValue {
    fn from(v: TextureBinding) -> Self {
        Self::Texture(v)
    }
}

// ============================================================================
// Upload Payload
// ============================================================================

/// Raw data handed to [`GraphicsContext::upload_uniform`]. Matrices are column
/// major. Slices may hold several elements for array uniforms.
///
/// [`GraphicsContext::upload_uniform`]: crate::renderer::GraphicsContext::upload_uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformData<'a> {
    Float { components: u8, data: &'a [f32] },
    Int { components: u8, data: &'a [i32] },
    Matrix3(&'a [f32]),
    Matrix4(&'a [f32]),
}

impl UniformData<'_> {
    /// Number of array elements carried by the payload.
    #[must_use]
    pub fn element_count(&self) -> usize {
        match self {
            Self::Float { components, data } => data.len() / usize::from((*components).max(1)),
            Self::Int { components, data } => data.len() / usize::from((*components).max(1)),
            Self::Matrix3(data) => data.len() / 9,
            Self::Matrix4(data) => data.len() / 16,
        }
    }
}

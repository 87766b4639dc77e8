//! Uniform reflection
//!
//! Builds a typed [`UniformTree`] from the active uniforms a linked program
//! reports, and pushes [`UniformValue`]s through it at draw time:
//!
//! - [`name`]: closed registry of uniform identifiers
//! - [`value`]: declared types, values and raw upload payloads
//! - [`tree`]: leaf / array / struct nodes
//! - [`binder`]: name parsing and value binding
//! - [`texture_units`]: sampler-array unit allocation

pub mod binder;
pub mod name;
pub mod texture_units;
pub mod tree;
pub mod value;

pub use binder::{parse_active_uniform, set_value};
pub use name::UniformName;
pub use texture_units::TextureUnits;
pub use tree::{StructUniform, Uniform, UniformContainer, UniformNode, UniformTree};
pub use value::{UniformData, UniformLocation, UniformType, UniformValue};

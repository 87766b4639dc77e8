//! Shadow mapping
//!
//! - [`shadow_map`]: the per-frame shadow pass
//! - [`depth_material`]: depth-only material substitutes
//! - [`cube`]: six-face atlas layout for point lights

pub mod cube;
pub mod depth_material;
pub mod shadow_map;

pub use depth_material::{DepthMaterialParams, DepthMaterials, DepthVariant, shadow_side};
pub use shadow_map::{SHADOW_BIAS_MATRIX, ShadowMap, ShadowPassStats};

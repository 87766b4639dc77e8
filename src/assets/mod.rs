//! Asset Storage
//!
//! Materials, geometries and textures are stored once and referenced from the
//! scene by lightweight handles. Handle equality is asset identity: the depth
//! material override cache keys on material handles.

pub mod storage;

pub use storage::AssetStorage;

use slotmap::new_key_type;

use crate::resources::geometry::Geometry;
use crate::resources::material::Material;
use crate::resources::texture::Texture;

new_key_type! {
    pub struct GeometryHandle;
    pub struct MaterialHandle;
    pub struct TextureHandle;
}

/// All asset families consumed by the renderer core.
#[derive(Default)]
pub struct Assets {
    pub geometries: AssetStorage<GeometryHandle, Geometry>,
    pub materials: AssetStorage<MaterialHandle, Material>,
    pub textures: AssetStorage<TextureHandle, Texture>,
}

impl Assets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

//! Core resource definitions
//!
//! Plain data records consumed by the renderer, independent of any GPU API:
//! - Mesh: renderable component of a scene node
//! - Material: material definition
//! - Texture: texture description and sampler bindings
//! - Geometry: positions, draw groups and bounds
//! - RenderTarget: off-screen target descriptions and viewports

pub mod mesh;
pub mod material;
pub mod texture;
pub mod geometry;
pub mod render_target;

pub use mesh::{Mesh, RenderableKind};
pub use material::{Clipping, DepthPacking, DistanceParams, Material, MaterialKind, Side};
pub use texture::{Texture, TextureBinding, TextureKind};
pub use geometry::{BoundingBox, BoundingSphere, Geometry, GeometryGroup};
pub use render_target::{RenderTargetDescriptor, RenderTargetId, Viewport};

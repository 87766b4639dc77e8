#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod assets;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod scene;

pub use assets::{Assets, GeometryHandle, MaterialHandle, TextureHandle};
pub use errors::{Result, UmbraError};
pub use renderer::uniforms::{UniformName, UniformTree, UniformValue};
pub use renderer::{GraphicsContext, Renderer, RendererSettings, ShadowMap};
pub use resources::{Geometry, Material, Mesh, Side, Texture};
pub use scene::{Camera, Light, Node, Scene};

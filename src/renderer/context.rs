//! Graphics context seam.
//!
//! The renderer core never talks to a GPU API directly. Backends implement
//! [`GraphicsContext`]; the core drives it with state changes, render target
//! bindings, uniform uploads and draw calls.

use glam::{Mat4, Vec4};

use crate::assets::TextureHandle;
use crate::renderer::capabilities::Capabilities;
use crate::renderer::uniforms::{UniformData, UniformLocation};
use crate::resources::geometry::{Geometry, GeometryGroup};
use crate::resources::material::Material;
use crate::resources::mesh::Mesh;
use crate::resources::render_target::{RenderTargetDescriptor, RenderTargetId, Viewport};
use crate::scene::camera::Camera;
use crate::scene::fog::Fog;
use crate::scene::node::Node;
use crate::scene::NodeHandle;

/// The object half of a draw call.
#[derive(Debug, Clone, Copy)]
pub struct RenderObject<'a> {
    pub handle: NodeHandle,
    pub node: &'a Node,
    pub mesh: &'a Mesh,
    /// Object → camera transform for this draw.
    pub model_view_matrix: Mat4,
}

pub trait GraphicsContext {
    fn capabilities(&self) -> Capabilities;

    // === Global state ===

    fn set_blending(&mut self, enabled: bool);
    fn set_clear_color(&mut self, color: Vec4);
    fn set_depth_test(&mut self, enabled: bool);
    fn set_scissor_test(&mut self, enabled: bool);

    // === Render targets ===

    fn create_render_target(&mut self, descriptor: &RenderTargetDescriptor) -> RenderTargetId;
    /// Binds `target`, or the default framebuffer for `None`.
    fn set_render_target(&mut self, target: Option<RenderTargetId>);
    fn clear(&mut self, color: bool, depth: bool, stencil: bool);
    fn set_viewport(&mut self, viewport: Viewport);

    // === Drawing ===

    /// Issues one draw call. `group` restricts the draw to a geometry range.
    fn render_buffer_direct(
        &mut self,
        camera: &Camera,
        fog: Option<&Fog>,
        geometry: &Geometry,
        material: &Material,
        object: &RenderObject<'_>,
        group: Option<&GeometryGroup>,
    );

    // === Textures & uniforms ===

    /// Next free texture unit for the current draw.
    fn alloc_texture_unit(&mut self) -> u32;
    /// Makes every texture unit available again (start of a draw).
    fn reset_texture_units(&mut self);
    fn set_texture_2d(&mut self, texture: TextureHandle, unit: u32);
    fn set_texture_cube(&mut self, texture: TextureHandle, unit: u32);
    fn upload_uniform(&mut self, location: UniformLocation, data: UniformData<'_>);
}

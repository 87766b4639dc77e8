//! Shared test fixtures: a recording graphics context and scene builders.

#![allow(dead_code)]

use glam::{Mat4, Vec3, Vec4};

use umbra::assets::{Assets, MaterialHandle, TextureHandle};
use umbra::renderer::uniforms::{UniformData, UniformLocation};
use umbra::renderer::{Capabilities, GraphicsContext, RenderObject};
use umbra::resources::{
    Geometry, GeometryGroup, Material, Mesh, RenderTargetDescriptor, RenderTargetId, Viewport,
};
use umbra::scene::{Camera, Fog, Node, NodeHandle, Scene};

pub const EPSILON: f32 = 1e-4;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

pub fn mat4_approx(a: &Mat4, b: &Mat4) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| approx(*x, *y))
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Recording Context
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Upload {
    Float { components: u8, data: Vec<f32> },
    Int { components: u8, data: Vec<i32> },
    Matrix3(Vec<f32>),
    Matrix4(Vec<f32>),
}

impl From<UniformData<'_>> for Upload {
    fn from(data: UniformData<'_>) -> Self {
        match data {
            UniformData::Float { components, data } => Self::Float { components, data: data.to_vec() },
            UniformData::Int { components, data } => Self::Int { components, data: data.to_vec() },
            UniformData::Matrix3(data) => Self::Matrix3(data.to_vec()),
            UniformData::Matrix4(data) => Self::Matrix4(data.to_vec()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DrawCall {
    pub node: NodeHandle,
    pub material: Material,
    pub group: Option<GeometryGroup>,
    pub model_view: Mat4,
    pub camera_projection: Mat4,
    pub camera_view: Mat4,
    pub camera_position: Vec3,
    pub has_fog: bool,
}

#[derive(Debug, Clone)]
pub enum Call {
    SetBlending(bool),
    SetClearColor(Vec4),
    SetDepthTest(bool),
    SetScissorTest(bool),
    CreateRenderTarget(RenderTargetDescriptor),
    SetRenderTarget(Option<RenderTargetId>),
    Clear(bool, bool, bool),
    SetViewport(Viewport),
    Draw(Box<DrawCall>),
    ResetTextureUnits,
    SetTexture2D(TextureHandle, u32),
    SetTextureCube(TextureHandle, u32),
    Upload(UniformLocation, Upload),
}

/// Graphics context double that records every call.
#[derive(Debug)]
pub struct RecordingContext {
    pub caps: Capabilities,
    pub calls: Vec<Call>,
    next_target: u32,
    next_unit: u32,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::default())
    }

    pub fn with_capabilities(caps: Capabilities) -> Self {
        Self {
            caps,
            calls: Vec::new(),
            next_target: 0,
            next_unit: 0,
        }
    }

    pub fn draws(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Draw(d) => Some(d.as_ref()),
                _ => None,
            })
            .collect()
    }

    pub fn drawn_nodes(&self) -> Vec<NodeHandle> {
        self.draws().iter().map(|d| d.node).collect()
    }

    pub fn viewports(&self) -> Vec<Viewport> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::SetViewport(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn created_targets(&self) -> Vec<RenderTargetDescriptor> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::CreateRenderTarget(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn clears(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Clear(..))).count()
    }

    pub fn uploads(&self) -> Vec<(UniformLocation, Upload)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Upload(location, data) => Some((*location, data.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl GraphicsContext for RecordingContext {
    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn set_blending(&mut self, enabled: bool) {
        self.calls.push(Call::SetBlending(enabled));
    }

    fn set_clear_color(&mut self, color: Vec4) {
        self.calls.push(Call::SetClearColor(color));
    }

    fn set_depth_test(&mut self, enabled: bool) {
        self.calls.push(Call::SetDepthTest(enabled));
    }

    fn set_scissor_test(&mut self, enabled: bool) {
        self.calls.push(Call::SetScissorTest(enabled));
    }

    fn create_render_target(&mut self, descriptor: &RenderTargetDescriptor) -> RenderTargetId {
        self.calls.push(Call::CreateRenderTarget(*descriptor));
        self.next_target += 1;
        RenderTargetId(self.next_target)
    }

    fn set_render_target(&mut self, target: Option<RenderTargetId>) {
        self.calls.push(Call::SetRenderTarget(target));
    }

    fn clear(&mut self, color: bool, depth: bool, stencil: bool) {
        self.calls.push(Call::Clear(color, depth, stencil));
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.calls.push(Call::SetViewport(viewport));
    }

    fn render_buffer_direct(
        &mut self,
        camera: &Camera,
        fog: Option<&Fog>,
        _geometry: &Geometry,
        material: &Material,
        object: &RenderObject<'_>,
        group: Option<&GeometryGroup>,
    ) {
        self.calls.push(Call::Draw(Box::new(DrawCall {
            node: object.handle,
            material: material.clone(),
            group: group.copied(),
            model_view: object.model_view_matrix,
            camera_projection: *camera.projection_matrix(),
            camera_view: *camera.matrix_world_inverse(),
            camera_position: camera.position,
            has_fog: fog.is_some(),
        })));
    }

    fn alloc_texture_unit(&mut self) -> u32 {
        let unit = self.next_unit;
        self.next_unit += 1;
        unit
    }

    fn reset_texture_units(&mut self) {
        self.next_unit = 0;
        self.calls.push(Call::ResetTextureUnits);
    }

    fn set_texture_2d(&mut self, texture: TextureHandle, unit: u32) {
        self.calls.push(Call::SetTexture2D(texture, unit));
    }

    fn set_texture_cube(&mut self, texture: TextureHandle, unit: u32) {
        self.calls.push(Call::SetTextureCube(texture, unit));
    }

    fn upload_uniform(&mut self, location: UniformLocation, data: UniformData<'_>) {
        self.calls.push(Call::Upload(location, data.into()));
    }
}

// ============================================================================
// Scene Builders
// ============================================================================

/// Unit cube positions centered on the origin (bounding radius √3 / 2).
pub fn unit_cube() -> Geometry {
    let mut positions = Vec::with_capacity(8);
    for x in [-0.5, 0.5] {
        for y in [-0.5, 0.5] {
            for z in [-0.5, 0.5] {
                positions.push(Vec3::new(x, y, z));
            }
        }
    }
    Geometry::from_positions(positions)
}

/// Adds a shadow-casting unit cube at `position` and returns its node and
/// material handles.
pub fn add_caster(
    scene: &mut Scene,
    assets: &mut Assets,
    position: Vec3,
) -> (NodeHandle, MaterialHandle) {
    let geometry = assets.geometries.add(unit_cube());
    let material = assets.materials.add(Material::new_standard(Vec3::ONE));
    let mut mesh = Mesh::new(geometry, material);
    mesh.cast_shadow = true;

    let mut node = Node::with_mesh(mesh);
    node.transform.position = position;
    (scene.add_node(node), material)
}

/// Viewing camera at (0, 0, 10) looking at the origin.
pub fn viewer() -> Camera {
    let mut camera = Camera::new_perspective(60.0, 1.0, 0.1, 100.0);
    camera.position = Vec3::new(0.0, 0.0, 10.0);
    camera.look_at(Vec3::ZERO);
    camera.update_matrix_world();
    camera
}

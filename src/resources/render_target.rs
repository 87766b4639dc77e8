use glam::UVec2;

/// Opaque identifier of a render target created by a [`GraphicsContext`].
///
/// [`GraphicsContext`]: crate::renderer::GraphicsContext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTargetId(pub u32);

/// Description of an off-screen color + depth target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTargetDescriptor {
    pub size: UVec2,
    pub format: wgpu::TextureFormat,
    pub min_filter: wgpu::FilterMode,
    pub mag_filter: wgpu::FilterMode,
    pub depth_buffer: bool,
}

impl RenderTargetDescriptor {
    /// Nearest-filtered RGBA target with a depth buffer, as used for shadow
    /// maps.
    #[must_use]
    pub fn shadow_map(size: UVec2) -> Self {
        Self {
            size,
            format: wgpu::TextureFormat::Rgba8Unorm,
            min_filter: wgpu::FilterMode::Nearest,
            mag_filter: wgpu::FilterMode::Nearest,
            depth_buffer: true,
        }
    }
}

/// Pixel rectangle of a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

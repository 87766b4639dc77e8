/// Limits of the device behind a [`GraphicsContext`](super::GraphicsContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub max_texture_size: u32,
    pub max_texture_units: u32,
}

impl Capabilities {
    /// Derives capabilities from the limits of a wgpu device.
    #[must_use]
    pub fn from_limits(limits: &wgpu::Limits) -> Self {
        Self {
            max_texture_size: limits.max_texture_dimension_2d,
            max_texture_units: limits.max_sampled_textures_per_shader_stage,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            max_texture_size: 4096,
            max_texture_units: 16,
        }
    }
}

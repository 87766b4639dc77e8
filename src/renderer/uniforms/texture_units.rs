use rustc_hash::FxHashMap;

use crate::renderer::context::GraphicsContext;

/// Scratch buffers for sampler-array uploads, keyed by element count.
///
/// Buffers are reused across calls but the unit values are always fetched
/// fresh from the context: unit availability changes between draws.
#[derive(Debug, Default)]
pub struct TextureUnits {
    buffers: FxHashMap<usize, Vec<u32>>,
}

impl TextureUnits {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates `count` texture units.
    pub fn alloc_units<C>(&mut self, ctx: &mut C, count: usize) -> &[u32]
    where
        C: GraphicsContext + ?Sized,
    {
        let buffer = self.buffers.entry(count).or_insert_with(|| {
            log::debug!("Texture unit buffer created for {count} samplers");
            vec![0; count]
        });
        for unit in buffer.iter_mut() {
            *unit = ctx.alloc_texture_unit();
        }
        buffer
    }

    /// Number of distinct buffer sizes cached so far.
    #[must_use]
    pub fn cached_buffers(&self) -> usize {
        self.buffers.len()
    }
}

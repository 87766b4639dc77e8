//! Renderer core
//!
//! - [`context`]: the [`GraphicsContext`] seam implemented by backends
//! - [`uniforms`]: reflected uniform trees and value binding
//! - [`program`]: linked programs
//! - [`shadow`]: the shadow map pass
//! - [`settings`] / [`capabilities`]: configuration and device limits

pub mod capabilities;
pub mod context;
pub mod program;
pub mod settings;
pub mod shadow;
pub mod uniforms;

pub use capabilities::Capabilities;
pub use context::{GraphicsContext, RenderObject};
pub use program::{ActiveUniform, Program};
pub use settings::{RendererSettings, ShadowMapSettings};
pub use shadow::{ShadowMap, ShadowPassStats};

use crate::assets::Assets;
use crate::errors::Result;
use crate::scene::{Camera, Scene};

/// Owns the graphics context and the passes driven through it.
pub struct Renderer<C: GraphicsContext> {
    context: C,
    settings: RendererSettings,
    shadow_map: ShadowMap,
    next_program_id: u32,
}

impl<C: GraphicsContext> Renderer<C> {
    /// Creates a renderer; shadow depth materials are registered in `assets`.
    pub fn new(context: C, settings: RendererSettings, assets: &mut Assets) -> Self {
        let mut shadow_map = ShadowMap::new(assets);
        shadow_map.settings = settings.shadow_map;
        shadow_map.local_clipping_enabled = settings.local_clipping_enabled;

        let caps = context.capabilities();
        log::info!(
            "Renderer created: max texture size {}, {} texture units",
            caps.max_texture_size,
            caps.max_texture_units
        );

        Self {
            context,
            settings,
            shadow_map,
            next_program_id: 1,
        }
    }

    #[inline]
    pub fn context(&self) -> &C {
        &self.context
    }

    #[inline]
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Current settings, including shadow flags updated by the last pass.
    #[must_use]
    pub fn settings(&self) -> RendererSettings {
        RendererSettings {
            shadow_map: self.shadow_map.settings,
            ..self.settings
        }
    }

    #[inline]
    pub fn shadow_map(&self) -> &ShadowMap {
        &self.shadow_map
    }

    #[inline]
    pub fn shadow_map_mut(&mut self) -> &mut ShadowMap {
        &mut self.shadow_map
    }

    pub fn set_local_clipping_enabled(&mut self, enabled: bool) {
        self.settings.local_clipping_enabled = enabled;
        self.shadow_map.local_clipping_enabled = enabled;
    }

    /// Refreshes world matrices and renders the shadow maps of every light in
    /// the scene.
    pub fn render_shadows(
        &mut self,
        scene: &mut Scene,
        camera: &Camera,
        assets: &mut Assets,
    ) -> ShadowPassStats {
        scene.update_matrix_world();
        let lights = scene.light_nodes();
        let stats = self
            .shadow_map
            .render(&mut self.context, &lights, scene, camera, assets);

        if stats.lights > 0 {
            log::debug!(
                "Shadow pass: {} lights, {} faces, {} draw calls",
                stats.lights,
                stats.faces,
                stats.draw_calls
            );
        }
        stats
    }

    /// Reflects a freshly linked program's active uniforms.
    pub fn link_program(&mut self, name: &str, active: &[ActiveUniform]) -> Result<Program> {
        let id = self.next_program_id;
        let program = Program::link(id, name, active)?;
        self.next_program_id += 1;
        Ok(program)
    }
}

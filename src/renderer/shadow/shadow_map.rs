//! Shadow map pass.
//!
//! Renders one depth target per shadow-casting light, once per frame (or on
//! request). Directional and spot lights take a single pass from the light
//! towards its target. Point lights take six passes packed into one atlas
//! target (see [`cube`](super::cube)).

use glam::{Mat4, UVec2, Vec3, Vec4};
use slotmap::SlotMap;

use crate::assets::storage::AssetStorage;
use crate::assets::{Assets, GeometryHandle, MaterialHandle};
use crate::renderer::context::{GraphicsContext, RenderObject};
use crate::renderer::settings::ShadowMapSettings;
use crate::resources::geometry::{Geometry, GeometryGroup};
use crate::resources::material::Material;
use crate::resources::mesh::Mesh;
use crate::resources::render_target::RenderTargetDescriptor;
use crate::scene::camera::{Camera, Frustum};
use crate::scene::light::LightKind;
use crate::scene::node::Node;
use crate::scene::{NodeHandle, Scene};

use super::cube::{CUBE_DIRECTIONS, CUBE_FACE_COUNT, CUBE_UPS, cube_atlas_size, cube_face_viewports};
use super::depth_material::{DepthMaterialParams, DepthMaterials};

/// Remaps clip space [-1, 1] to texture space [0, 1].
pub const SHADOW_BIAS_MATRIX: Mat4 = Mat4::from_cols_array(&[
    0.5, 0.0, 0.0, 0.0, //
    0.0, 0.5, 0.0, 0.0, //
    0.0, 0.0, 0.5, 0.0, //
    0.5, 0.5, 0.5, 1.0,
]);

/// Work done by one call to [`ShadowMap::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadowPassStats {
    /// Lights whose shadow map was rendered.
    pub lights: usize,
    /// Depth passes (6 per point light, 1 otherwise).
    pub faces: usize,
    pub draw_calls: usize,
}

/// Per-pass scratch state threaded through the scene traversal.
struct DepthPass<'a> {
    /// Camera the frame is rendered for; its layers filter casters.
    viewer: &'a Camera,
    shadow_camera: &'a Camera,
    frustum: Frustum,
    params: DepthMaterialParams,
}

pub struct ShadowMap {
    pub settings: ShadowMapSettings,
    pub local_clipping_enabled: bool,
    depth_materials: DepthMaterials,
}

impl ShadowMap {
    /// Creates the pass; its depth material variants are added to `assets`.
    pub fn new(assets: &mut Assets) -> Self {
        Self {
            settings: ShadowMapSettings::default(),
            local_clipping_enabled: false,
            depth_materials: DepthMaterials::new(&mut assets.materials),
        }
    }

    #[inline]
    #[must_use]
    pub fn depth_materials(&self) -> &DepthMaterials {
        &self.depth_materials
    }

    /// Selects the depth substitute for one draw.
    pub fn depth_material(
        &mut self,
        materials: &mut AssetStorage<MaterialHandle, Material>,
        mesh: &Mesh,
        geometry: &Geometry,
        source: MaterialHandle,
        params: &DepthMaterialParams,
    ) -> crate::errors::Result<MaterialHandle> {
        self.depth_materials.select(
            materials,
            mesh,
            geometry,
            source,
            &self.settings,
            self.local_clipping_enabled,
            params,
        )
    }

    /// Renders the shadow maps of `lights` (light-carrying nodes) in order.
    ///
    /// World matrices are read as they are; call
    /// [`Scene::update_matrix_world`] first.
    pub fn render<C>(
        &mut self,
        ctx: &mut C,
        lights: &[NodeHandle],
        scene: &mut Scene,
        camera: &Camera,
        assets: &mut Assets,
    ) -> ShadowPassStats
    where
        C: GraphicsContext + ?Sized,
    {
        let mut stats = ShadowPassStats::default();

        if !self.settings.should_render() || lights.is_empty() {
            return stats;
        }

        ctx.set_blending(false);
        ctx.set_clear_color(Vec4::ONE);
        ctx.set_depth_test(true);
        ctx.set_scissor_test(false);

        let max_size = UVec2::splat(ctx.capabilities().max_texture_size);

        let Scene {
            nodes,
            root_nodes,
            lights: light_components,
            ..
        } = scene;
        let Assets {
            geometries,
            materials,
            ..
        } = assets;

        for &handle in lights {
            let Some(node) = nodes.get(handle) else {
                log::trace!("Shadow light {handle:?} not in scene, skipped");
                continue;
            };
            let light_position = node.transform.world_position();
            let Some(light) = node.light.and_then(|key| light_components.get_mut(key)) else {
                log::trace!("Node {handle:?} carries no light, skipped");
                continue;
            };
            if !light.cast_shadow {
                continue;
            }
            let is_point = light.is_point();
            let target = light.target();
            let Some(shadow) = light.shadow.as_mut() else {
                log::trace!("Light {handle:?} has no shadow configuration, skipped");
                continue;
            };

            if let LightKind::Spot(spot) = &light.kind {
                shadow.update_for_spot(spot);
            }

            let map_size = shadow.map_size.min(max_size);

            let map = match shadow.map {
                Some(map) => map,
                None => {
                    let size = if is_point { cube_atlas_size(map_size) } else { map_size };
                    let map = ctx.create_render_target(&RenderTargetDescriptor::shadow_map(size));
                    shadow.camera.update_projection_matrix();
                    shadow.map = Some(map);
                    log::debug!(
                        "Shadow map {map:?} allocated ({} x {}) for {handle:?}",
                        size.x,
                        size.y
                    );
                    map
                }
            };

            shadow.camera.position = light_position;

            if is_point {
                shadow.matrix = Mat4::from_translation(-light_position);
            } else {
                shadow.camera.look_at(target.unwrap_or(Vec3::ZERO));
                shadow.camera.update_matrix_world();
                shadow.matrix = SHADOW_BIAS_MATRIX
                    * *shadow.camera.projection_matrix()
                    * *shadow.camera.matrix_world_inverse();
            }

            ctx.set_render_target(Some(map));
            ctx.clear(true, true, true);

            let (face_count, viewports) = if is_point {
                (CUBE_FACE_COUNT, Some(cube_face_viewports(map_size)))
            } else {
                (1, None)
            };

            for face in 0..face_count {
                if let Some(viewports) = &viewports {
                    shadow.camera.up = CUBE_UPS[face];
                    shadow.camera.look_at(light_position + CUBE_DIRECTIONS[face]);
                    shadow.camera.update_matrix_world();
                    ctx.set_viewport(viewports[face]);
                }

                let pass = DepthPass {
                    viewer: camera,
                    shadow_camera: &shadow.camera,
                    frustum: shadow.camera.frustum(),
                    params: DepthMaterialParams {
                        is_point_light: is_point,
                        light_position,
                        near: shadow.camera.near,
                        far: shadow.camera.far,
                    },
                };

                log::trace!("Shadow pass: light {handle:?}, face {face}");
                for &root in root_nodes.iter() {
                    self.render_object(ctx, nodes, root, geometries, materials, &pass, &mut stats);
                }
                stats.faces += 1;
            }

            stats.lights += 1;
        }

        self.settings.needs_update = false;
        stats
    }

    /// Depth-first traversal, parent before children.
    fn render_object<C>(
        &mut self,
        ctx: &mut C,
        nodes: &SlotMap<NodeHandle, Node>,
        handle: NodeHandle,
        geometries: &AssetStorage<GeometryHandle, Geometry>,
        materials: &mut AssetStorage<MaterialHandle, Material>,
        pass: &DepthPass<'_>,
        stats: &mut ShadowPassStats,
    ) where
        C: GraphicsContext + ?Sized,
    {
        let Some(node) = nodes.get(handle) else {
            return;
        };
        if !node.visible || !node.layers.test(pass.viewer.layers) {
            return;
        }

        if let Some(mesh) = &node.mesh
            && mesh.cast_shadow
            && mesh.is_shadow_renderable()
        {
            if let Some(geometry) = geometries.get(mesh.geometry) {
                let world = node.transform.world_matrix_as_mat4();
                let in_frustum = !mesh.frustum_culled
                    || geometry.bounding_sphere().is_none_or(|sphere| {
                        pass.frustum.intersects_bounding_sphere(&sphere.transform(&world))
                    });

                if in_frustum {
                    let object = RenderObject {
                        handle,
                        node,
                        mesh,
                        model_view_matrix: *pass.shadow_camera.matrix_world_inverse() * world,
                    };

                    if mesh.material_count() > 1 {
                        for group in geometry.groups() {
                            if let Some(source) = mesh.material(group.material_index) {
                                self.draw(
                                    ctx,
                                    geometry,
                                    materials,
                                    source,
                                    &object,
                                    Some(group),
                                    pass,
                                    stats,
                                );
                            }
                        }
                    } else if let Some(source) = mesh.material(0) {
                        self.draw(ctx, geometry, materials, source, &object, None, pass, stats);
                    }
                }
            } else {
                log::debug!("Shadow caster {handle:?} references a missing geometry");
            }
        }

        for &child in &node.children {
            self.render_object(ctx, nodes, child, geometries, materials, pass, stats);
        }
    }

    fn draw<C>(
        &mut self,
        ctx: &mut C,
        geometry: &Geometry,
        materials: &mut AssetStorage<MaterialHandle, Material>,
        source: MaterialHandle,
        object: &RenderObject<'_>,
        group: Option<&GeometryGroup>,
        pass: &DepthPass<'_>,
        stats: &mut ShadowPassStats,
    ) where
        C: GraphicsContext + ?Sized,
    {
        // Missing or hidden materials leave the range out of the pass.
        if !materials.get(source).is_some_and(|m| m.visible) {
            return;
        }

        let depth = match self.depth_material(
            materials,
            object.mesh,
            geometry,
            source,
            &pass.params,
        ) {
            Ok(depth) => depth,
            Err(err) => {
                log::warn!("No depth material for {:?}: {err}", object.handle);
                return;
            }
        };

        // Depth substitutes are drawn without scene fog.
        if let Some(material) = materials.get(depth) {
            ctx.render_buffer_direct(pass.shadow_camera, None, geometry, material, object, group);
            stats.draw_calls += 1;
        }
    }
}

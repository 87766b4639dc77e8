//! Depth-only material substitutes for shadow passes.
//!
//! Shadow passes never draw with an object's own material. Each draw picks
//! one of four precomputed variants per family (depth for directional and
//! spot lights, distance for point lights), indexed by:
//!
//! | bit | flag       | set when                                         |
//! |-----|------------|--------------------------------------------------|
//! | 0   | `MORPHING` | material morphs and the geometry has targets     |
//! | 1   | `SKINNING` | mesh is skinned and the material allows skinning |
//!
//! Source materials that clip their shadows get a private copy of the variant
//! per `(variant, source)` pair, so their clip planes never leak into the
//! shared variant.

use bitflags::bitflags;
use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::assets::MaterialHandle;
use crate::assets::storage::AssetStorage;
use crate::errors::{Result, UmbraError};
use crate::renderer::settings::ShadowMapSettings;
use crate::resources::geometry::Geometry;
use crate::resources::material::{Clipping, DepthPacking, Material, Side};
use crate::resources::mesh::Mesh;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DepthVariant: u8 {
        const MORPHING = 1 << 0;
        const SKINNING = 1 << 1;
    }
}

impl DepthVariant {
    /// Slot of this variant in a variant table.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.bits())
    }

    #[must_use]
    pub fn for_draw(mesh: &Mesh, geometry: &Geometry, material: &Material) -> Self {
        let mut variant = Self::empty();
        variant.set(Self::MORPHING, material.morph_targets && geometry.has_morph_targets());
        variant.set(Self::SKINNING, mesh.skinned && material.skinning);
        variant
    }
}

const VARIANT_COUNT: usize = 4;

/// Light-dependent inputs of a depth material selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthMaterialParams {
    pub is_point_light: bool,
    pub light_position: Vec3,
    pub near: f32,
    pub far: f32,
}

/// Fields copied from the source material, read before the substitute is
/// borrowed mutably.
struct SourceState {
    visible: bool,
    wireframe: bool,
    wireframe_line_width: f32,
    clipping: Clipping,
    side: Side,
}

/// Variant tables plus the clipping override cache.
#[derive(Debug)]
pub struct DepthMaterials {
    depth_variants: [MaterialHandle; VARIANT_COUNT],
    distance_variants: [MaterialHandle; VARIANT_COUNT],
    overrides: FxHashMap<(MaterialHandle, MaterialHandle), MaterialHandle>,
}

impl DepthMaterials {
    /// Registers the eight variants in `materials`.
    pub fn new(materials: &mut AssetStorage<MaterialHandle, Material>) -> Self {
        let depth_variants = std::array::from_fn(|index| {
            materials.add(Self::variant_material(Material::new_depth(DepthPacking::Rgba), index))
        });
        let distance_variants = std::array::from_fn(|index| {
            materials.add(Self::variant_material(Material::new_distance(), index))
        });

        Self {
            depth_variants,
            distance_variants,
            overrides: FxHashMap::default(),
        }
    }

    fn variant_material(base: Material, index: usize) -> Material {
        let flags = DepthVariant::from_bits_truncate(index as u8);
        base.with_morph_targets(flags.contains(DepthVariant::MORPHING))
            .with_skinning(flags.contains(DepthVariant::SKINNING))
            .with_side(Side::Double)
    }

    #[must_use]
    pub fn variant(&self, is_point_light: bool, variant: DepthVariant) -> MaterialHandle {
        self.variants(is_point_light)[variant.index()]
    }

    #[must_use]
    pub fn variants(&self, is_point_light: bool) -> &[MaterialHandle; VARIANT_COUNT] {
        if is_point_light {
            &self.distance_variants
        } else {
            &self.depth_variants
        }
    }

    /// Number of clipping overrides created so far.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Picks the depth-only material a shadow pass draws `mesh` with, and
    /// syncs it with the `source` material the mesh renders with normally.
    pub fn select(
        &mut self,
        materials: &mut AssetStorage<MaterialHandle, Material>,
        mesh: &Mesh,
        geometry: &Geometry,
        source: MaterialHandle,
        settings: &ShadowMapSettings,
        local_clipping_enabled: bool,
        params: &DepthMaterialParams,
    ) -> Result<MaterialHandle> {
        let (variant, state) = {
            let material = materials
                .get(source)
                .ok_or_else(|| UmbraError::AssetNotFound(format!("material {source:?}")))?;
            let state = SourceState {
                visible: material.visible,
                wireframe: material.wireframe,
                wireframe_line_width: material.wireframe_line_width,
                clipping: material.clipping.clone(),
                side: material.side,
            };
            (DepthVariant::for_draw(mesh, geometry, material), state)
        };

        let base = mesh
            .custom_shadow_material(params.is_point_light)
            .unwrap_or_else(|| self.variant(params.is_point_light, variant));

        let result = if local_clipping_enabled
            && state.clipping.clip_shadows
            && !state.clipping.planes.is_empty()
        {
            self.clipping_override(materials, base, source)?
        } else {
            base
        };

        let substitute = materials
            .get_mut(result)
            .ok_or_else(|| UmbraError::AssetNotFound(format!("depth material {result:?}")))?;

        substitute.visible = state.visible;
        substitute.wireframe = state.wireframe;
        substitute.wireframe_line_width = state.wireframe_line_width;
        substitute.clipping = state.clipping;
        substitute.side = shadow_side(state.side, settings);

        if params.is_point_light
            && !substitute.setup_point_light(params.light_position, params.near, params.far)
        {
            log::warn!(
                "Distance material '{}' cannot take point light parameters",
                substitute.name
            );
        }

        Ok(result)
    }

    fn clipping_override(
        &mut self,
        materials: &mut AssetStorage<MaterialHandle, Material>,
        base: MaterialHandle,
        source: MaterialHandle,
    ) -> Result<MaterialHandle> {
        if let Some(&handle) = self.overrides.get(&(base, source)) {
            return Ok(handle);
        }

        let copy = materials
            .get(base)
            .ok_or_else(|| UmbraError::AssetNotFound(format!("depth material {base:?}")))?
            .duplicate();
        let handle = materials.add(copy);
        self.overrides.insert((base, source), handle);

        log::debug!("Clipping depth material created for {source:?}");
        Ok(handle)
    }
}

/// Face culling used when a material casts a shadow.
#[must_use]
pub fn shadow_side(side: Side, settings: &ShadowMapSettings) -> Side {
    let side = if settings.render_single_sided && side == Side::Double {
        Side::Front
    } else {
        side
    };

    if settings.render_reverse_sided {
        match side {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
            Side::Double => Side::Double,
        }
    } else {
        side
    }
}

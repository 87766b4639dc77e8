use smallvec::{SmallVec, smallvec};

use crate::assets::{GeometryHandle, MaterialHandle};

/// Primitive family of a renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderableKind {
    #[default]
    Mesh,
    Line,
    Points,
    /// Camera-facing quads; never rendered into shadow maps.
    Sprite,
}

/// Renderable component attached to a scene node.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,
    pub kind: RenderableKind,

    // === Asset references ===
    pub geometry: GeometryHandle,
    materials: SmallVec<[MaterialHandle; 1]>,

    // === Per-instance render settings ===
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub frustum_culled: bool,
    /// Whether the mesh is bound to a skeleton.
    pub skinned: bool,

    /// Replaces the depth variant in directional / spot shadow passes.
    pub custom_depth_material: Option<MaterialHandle>,
    /// Replaces the distance variant in point-light shadow passes.
    pub custom_distance_material: Option<MaterialHandle>,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: GeometryHandle, material: MaterialHandle) -> Self {
        Self::with_materials(geometry, &[material])
    }

    /// Multi-material mesh; geometry groups select materials by index.
    #[must_use]
    pub fn with_materials(geometry: GeometryHandle, materials: &[MaterialHandle]) -> Self {
        Self {
            name: "Mesh".to_string(),
            kind: RenderableKind::Mesh,
            geometry,
            materials: SmallVec::from_slice(materials),
            cast_shadow: false,
            receive_shadow: false,
            frustum_culled: true,
            skinned: false,
            custom_depth_material: None,
            custom_distance_material: None,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: RenderableKind) -> Self {
        self.kind = kind;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_shadow_renderable(&self) -> bool {
        !matches!(self.kind, RenderableKind::Sprite)
    }

    #[inline]
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    #[inline]
    #[must_use]
    pub fn material(&self, index: usize) -> Option<MaterialHandle> {
        self.materials.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn materials(&self) -> &[MaterialHandle] {
        &self.materials
    }

    pub fn set_material(&mut self, material: MaterialHandle) {
        self.materials = smallvec![material];
    }

    /// Custom override for the given shadow family.
    #[inline]
    #[must_use]
    pub fn custom_shadow_material(&self, is_point_light: bool) -> Option<MaterialHandle> {
        if is_point_light {
            self.custom_distance_material
        } else {
            self.custom_depth_material
        }
    }
}

//! Typed, hierarchical view of a program's active uniforms.
//!
//! ```text
//! UniformTree
//! ├── Leaf   diffuse                 (vec3, loc 3)
//! ├── Array  boneMatrices            (mat4[64], loc 7)
//! └── Struct pointLights  [indexed]
//!     ├── Leaf color                 (vec3, loc 12 @0, loc 17 @1)
//!     └── Leaf distance              (float, loc 13 @0, loc 18 @1)
//! ```
//!
//! Struct arrays are never expanded per index: the struct is flagged as
//! indexed and each leaf below it records one location per element.

use rustc_hash::FxHashMap;
use smallvec::{SmallVec, smallvec};

use crate::errors::{Result, UmbraError};
use crate::renderer::context::GraphicsContext;

use super::binder;
use super::name::UniformName;
use super::texture_units::TextureUnits;
use super::value::{UniformLocation, UniformType, UniformValue};

// ============================================================================
// Nodes
// ============================================================================

/// Terminal uniform: a single value or a contiguous array slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    id: UniformName,
    ty: UniformType,
    /// Declared array length; 1 for plain values.
    size: u32,
    /// `(element index, location)` pairs. A single entry unless the uniform
    /// lives inside a struct array.
    locations: SmallVec<[(u32, UniformLocation); 1]>,
}

impl Uniform {
    #[must_use]
    pub fn new(id: UniformName, ty: UniformType, size: u32, location: UniformLocation) -> Self {
        Self::at_element(id, ty, size, 0, location)
    }

    pub(crate) fn at_element(
        id: UniformName,
        ty: UniformType,
        size: u32,
        element: u32,
        location: UniformLocation,
    ) -> Self {
        Self {
            id,
            ty,
            size: size.max(1),
            locations: smallvec![(element, location)],
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> UniformName {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn ty(&self) -> UniformType {
        self.ty
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Location of the first recorded element.
    #[must_use]
    pub fn location(&self) -> UniformLocation {
        self.locations[0].1
    }

    /// Location recorded for `element`, if that element is active.
    #[must_use]
    pub fn location_at(&self, element: u32) -> Option<UniformLocation> {
        self.locations
            .iter()
            .find(|(index, _)| *index == element)
            .map(|(_, location)| *location)
    }

    #[must_use]
    pub fn locations(&self) -> &[(u32, UniformLocation)] {
        &self.locations
    }

    /// Records the location of another element. Re-declaring a known element
    /// keeps the first location.
    pub(crate) fn record(&mut self, element: u32, location: UniformLocation) {
        if self.location_at(element).is_none() {
            self.locations.push((element, location));
        }
    }
}

/// Ordered name → node mapping shared by the tree root and struct nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformContainer {
    seq: Vec<UniformNode>,
    map: FxHashMap<UniformName, usize>,
}

impl UniformContainer {
    #[must_use]
    pub fn get(&self, id: UniformName) -> Option<&UniformNode> {
        self.map.get(&id).and_then(|&index| self.seq.get(index))
    }

    pub fn get_mut(&mut self, id: UniformName) -> Option<&mut UniformNode> {
        self.map.get(&id).and_then(|&index| self.seq.get_mut(index))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: UniformName) -> bool {
        self.map.contains_key(&id)
    }

    /// Children in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &UniformNode> {
        self.seq.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Appends a node; the caller guarantees its id is not present yet.
    pub(crate) fn push(&mut self, node: UniformNode) -> usize {
        let index = self.seq.len();
        self.map.insert(node.id(), index);
        self.seq.push(node);
        index
    }

    pub(crate) fn index_of(&self, id: UniformName) -> Option<usize> {
        self.map.get(&id).copied()
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> Option<&mut UniformNode> {
        self.seq.get_mut(index)
    }
}

/// Struct node (`directionalLights`, `pointLights[i]`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct StructUniform {
    id: UniformName,
    pub(crate) indexed: bool,
    pub(crate) members: UniformContainer,
}

impl StructUniform {
    #[must_use]
    pub fn new(id: UniformName) -> Self {
        Self {
            id,
            indexed: false,
            members: UniformContainer::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> UniformName {
        self.id
    }

    /// Whether the struct was declared as an array (`name[i].member`).
    #[inline]
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    #[inline]
    #[must_use]
    pub fn members(&self) -> &UniformContainer {
        &self.members
    }

    #[must_use]
    pub fn get(&self, id: UniformName) -> Option<&UniformNode> {
        self.members.get(id)
    }
}

/// A node of the uniform tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformNode {
    Leaf(Uniform),
    Array(Uniform),
    Struct(StructUniform),
}

impl UniformNode {
    #[must_use]
    pub fn id(&self) -> UniformName {
        match self {
            Self::Leaf(u) | Self::Array(u) => u.id,
            Self::Struct(s) => s.id,
        }
    }

    /// The terminal uniform of a leaf or array node.
    #[must_use]
    pub fn as_uniform(&self) -> Option<&Uniform> {
        match self {
            Self::Leaf(u) | Self::Array(u) => Some(u),
            Self::Struct(_) => None,
        }
    }

    #[must_use]
    pub fn as_struct(&self) -> Option<&StructUniform> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::Leaf(_) => "leaf",
            Self::Array(_) => "array",
            Self::Struct(_) => "struct",
        }
    }
}

// ============================================================================
// Tree
// ============================================================================

/// Root of a program's uniform tree. Owns every node; lives as long as the
/// program it was reflected from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformTree {
    pub(crate) root: UniformContainer,
}

impl UniformTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: UniformName) -> Option<&UniformNode> {
        self.root.get(id)
    }

    /// Looks up a dotted path such as `pointLights.color`. Index subscripts are
    /// accepted and ignored (`pointLights[1].color`).
    pub fn find(&self, path: &str) -> Result<&UniformNode> {
        let not_found = || UmbraError::UniformNotFound(path.to_string());

        let mut container = &self.root;
        let mut names = binder::path_names(path)?.into_iter().peekable();

        while let Some(name) = names.next() {
            let node = container.get(UniformName::resolve(name)?).ok_or_else(not_found)?;
            if names.peek().is_none() {
                return Ok(node);
            }
            container = match node {
                UniformNode::Struct(s) => &s.members,
                _ => return Err(not_found()),
            };
        }

        Err(not_found())
    }

    /// Root-level nodes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &UniformNode> {
        self.root.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Pushes every root-level uniform for which `values` supplies a value.
    /// Returns the number of nodes updated; uniforms without a value keep
    /// whatever the program last received.
    pub fn upload<C>(
        &self,
        ctx: &mut C,
        units: &mut TextureUnits,
        values: &[(UniformName, UniformValue)],
    ) -> Result<usize>
    where
        C: GraphicsContext + ?Sized,
    {
        let mut uploaded = 0;
        for (id, value) in values {
            if let Some(node) = self.root.get(*id) {
                binder::set_value(node, value, ctx, units)?;
                uploaded += 1;
            }
        }
        Ok(uploaded)
    }
}

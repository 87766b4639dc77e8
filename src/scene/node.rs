use glam::Affine3A;

use crate::resources::mesh::Mesh;
use crate::scene::layers::Layers;
use crate::scene::transform::Transform;
use crate::scene::{LightKey, NodeHandle};

/// A scene node: hierarchy, transform and optional components.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships kept in sync by
/// [`Scene::attach`](crate::scene::Scene::attach):
/// - `parent`: optional handle to the parent node (None for root nodes)
/// - `children`: child handles in insertion order
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,

    // === Core Hierarchy ===
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    // === Core Spatial Data ===
    pub transform: Transform,

    // === Core State ===
    pub visible: bool,
    pub layers: Layers,

    // === Components ===
    pub mesh: Option<Mesh>,
    pub light: Option<LightKey>,
}

impl Node {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            visible: true,
            layers: Layers::default(),
            mesh: None,
            light: None,
        }
    }

    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Self { name: name.to_string(), ..Self::new() }
    }

    #[must_use]
    pub fn with_mesh(mesh: Mesh) -> Self {
        Self { mesh: Some(mesh), ..Self::new() }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

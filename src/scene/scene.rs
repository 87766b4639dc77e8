use glam::{Affine3A, Vec3};
use slotmap::SlotMap;

use crate::scene::fog::Fog;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::{LightKey, NodeHandle};

/// Scene container: node hierarchy plus light components.
///
/// Lights live in their own slot map so the shadow pass can mutate a light's
/// shadow state while walking the node hierarchy.
#[derive(Debug, Default)]
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,
    pub lights: SlotMap<LightKey, Light>,
    pub fog: Option<Fog>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        } else {
            log::warn!("Parent node not found, adding child as root");
            self.root_nodes.push(handle);
            return handle;
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent);
        }

        handle
    }

    /// Removes a node, its subtree and their light components.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let Some(children) = self.nodes.get(handle).map(|n| n.children.clone()) else {
            return;
        };

        for child in children {
            self.remove_node(child);
        }

        self.detach(handle);

        if let Some(node) = self.nodes.remove(handle)
            && let Some(light) = node.light
        {
            self.lights.remove(light);
        }
    }

    /// Re-parents `child` under `parent`.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent || self.is_ancestor(child, parent) {
            log::warn!("Cannot attach a node below itself");
            return;
        }
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            log::error!("Node not found during attach");
            return;
        }

        self.detach(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    /// Unlinks `handle` from its parent (or the root list).
    fn detach(&mut self, handle: NodeHandle) {
        match self.nodes.get(handle).and_then(|n| n.parent) {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(parent) {
                    p.children.retain(|&c| c != handle);
                }
            }
            None => self.root_nodes.retain(|&r| r != handle),
        }
        if let Some(node) = self.nodes.get_mut(handle) {
            node.parent = None;
        }
    }

    fn is_ancestor(&self, ancestor: NodeHandle, mut node: NodeHandle) -> bool {
        while let Some(parent) = self.nodes.get(node).and_then(|n| n.parent) {
            if parent == ancestor {
                return true;
            }
            node = parent;
        }
        false
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    // ========================================================================
    // Lights
    // ========================================================================

    /// Adds a root node carrying `light`, placed at `position`.
    pub fn add_light(&mut self, light: Light, position: Vec3) -> NodeHandle {
        let key = self.lights.insert(light);
        let mut node = Node::with_name("Light");
        node.transform.position = position;
        node.light = Some(key);
        self.add_node(node)
    }

    #[must_use]
    pub fn get_light(&self, handle: NodeHandle) -> Option<&Light> {
        let key = self.nodes.get(handle)?.light?;
        self.lights.get(key)
    }

    pub fn get_light_mut(&mut self, handle: NodeHandle) -> Option<&mut Light> {
        let key = self.nodes.get(handle)?.light?;
        self.lights.get_mut(key)
    }

    /// Nodes carrying a light, in depth-first hierarchy order.
    #[must_use]
    pub fn light_nodes(&self) -> Vec<NodeHandle> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeHandle> = self.root_nodes.iter().rev().copied().collect();

        while let Some(handle) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            if node.light.is_some() {
                result.push(handle);
            }
            stack.extend(node.children.iter().rev());
        }

        result
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Propagates local transforms down the hierarchy, parents first.
    pub fn update_matrix_world(&mut self) {
        let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);
        for &root in self.root_nodes.iter().rev() {
            stack.push((root, Affine3A::IDENTITY, false));
        }

        while let Some((handle, parent_world, parent_changed)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(handle) else {
                continue;
            };

            let local_changed = node.transform.update_local_matrix();
            let changed = local_changed || parent_changed;
            if changed {
                let world = parent_world * *node.transform.local_matrix();
                node.transform.set_world_matrix(world);
            }

            let world = *node.transform.world_matrix();
            for &child in node.children.iter().rev() {
                stack.push((child, world, changed));
            }
        }
    }

    /// World-space position of a node as of the last matrix update.
    #[must_use]
    pub fn world_position(&self, handle: NodeHandle) -> Option<Vec3> {
        self.nodes.get(handle).map(|n| n.transform.world_position())
    }
}

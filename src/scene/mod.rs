//! Scene graph
//!
//! Scene hierarchy and components:
//! - Node: scene node (parent-child relationships and transform)
//! - Transform: position, rotation, scale
//! - Scene: node and light container
//! - Camera: free-standing camera and frustum
//! - Light: light component and its shadow configuration
//! - Layers / Fog

pub mod camera;
pub mod fog;
pub mod layers;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;

pub use camera::{Camera, Frustum, Projection};
pub use fog::Fog;
pub use layers::Layers;
pub use light::{DirectionalLight, Light, LightKind, LightShadow, PointLight, SpotLight};
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct LightKey;
}

//! Renderer Settings
//!
//! Global switches read by the renderer and its shadow pass.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use umbra::renderer::settings::{RendererSettings, ShadowMapSettings};
//!
//! // Shadows on, only re-rendered when explicitly requested
//! let settings = RendererSettings {
//!     shadow_map: ShadowMapSettings {
//!         enabled: true,
//!         auto_update: false,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! // Or from a JSON document; missing fields keep their defaults
//! let settings = RendererSettings::from_json_str(r#"{ "shadow_map": { "enabled": true } }"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Result;

// ---------------------------------------------------------------------------
// ShadowMapSettings
// ---------------------------------------------------------------------------

/// Shadow pass switches.
///
/// | Field                  | Default | Effect                                      |
/// |------------------------|---------|---------------------------------------------|
/// | `enabled`              | false   | Master switch for the shadow pass           |
/// | `auto_update`          | true    | Re-render shadow maps every frame           |
/// | `needs_update`         | false   | One-shot request, cleared after a pass      |
/// | `render_single_sided`  | true    | Double-sided casters render front faces     |
/// | `render_reverse_sided` | true    | Single-sided casters render the other side  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowMapSettings {
    pub enabled: bool,
    pub auto_update: bool,
    pub needs_update: bool,
    pub render_single_sided: bool,
    pub render_reverse_sided: bool,
}

impl Default for ShadowMapSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            auto_update: true,
            needs_update: false,
            render_single_sided: true,
            render_reverse_sided: true,
        }
    }
}

impl ShadowMapSettings {
    /// Whether a shadow pass would do any work this frame.
    #[inline]
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.enabled && (self.auto_update || self.needs_update)
    }
}

// ---------------------------------------------------------------------------
// RendererSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    pub shadow_map: ShadowMapSettings,
    /// Honour per-material clipping planes (including in shadow passes).
    pub local_clipping_enabled: bool,
}

impl RendererSettings {
    /// Parses settings from JSON. Missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

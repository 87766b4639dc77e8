//! Renderer Settings Tests
//!
//! Tests for:
//! - Defaults and the shadow pass gate
//! - JSON loading with partial documents
//! - Renderer facade settings wiring

mod common;

use common::RecordingContext;
use umbra::assets::Assets;
use umbra::renderer::{Renderer, RendererSettings, ShadowMapSettings};
use umbra::UmbraError;

#[test]
fn shadow_defaults() {
    let settings = ShadowMapSettings::default();
    assert!(!settings.enabled);
    assert!(settings.auto_update);
    assert!(!settings.needs_update);
    assert!(settings.render_single_sided);
    assert!(settings.render_reverse_sided);
    assert!(!settings.should_render());
}

#[test]
fn should_render_gate() {
    let on = |auto_update, needs_update| ShadowMapSettings {
        enabled: true,
        auto_update,
        needs_update,
        ..Default::default()
    };

    assert!(on(true, false).should_render());
    assert!(on(false, true).should_render());
    assert!(on(true, true).should_render());
    assert!(!on(false, false).should_render());
}

#[test]
fn partial_json_keeps_defaults() -> anyhow::Result<()> {
    let settings = RendererSettings::from_json_str(
        r#"{ "shadow_map": { "enabled": true, "auto_update": false }, "local_clipping_enabled": true }"#,
    )?;

    assert!(settings.shadow_map.enabled);
    assert!(!settings.shadow_map.auto_update);
    assert!(settings.shadow_map.render_single_sided);
    assert!(settings.local_clipping_enabled);

    let empty = RendererSettings::from_json_str("{}")?;
    assert_eq!(empty, RendererSettings::default());
    Ok(())
}

#[test]
fn json_round_trip_preserves_settings() -> anyhow::Result<()> {
    let settings = RendererSettings {
        shadow_map: ShadowMapSettings {
            enabled: true,
            render_reverse_sided: false,
            ..Default::default()
        },
        local_clipping_enabled: true,
    };

    let json = settings.to_json_string()?;
    assert!(json.contains("render_reverse_sided"));
    assert_eq!(RendererSettings::from_json_str(&json)?, settings);
    Ok(())
}

#[test]
fn malformed_json_is_a_config_error() {
    let result = RendererSettings::from_json_str(r#"{ "shadow_map": { "enabled": "yes" } }"#);
    let Err(err) = result else {
        panic!("expected a parse error");
    };
    assert!(matches!(err, UmbraError::Config(_)));
    assert!(err.to_string().starts_with("Config parse error"));
}

#[test]
fn renderer_applies_settings_to_shadow_pass() {
    let mut assets = Assets::new();
    let settings = RendererSettings {
        shadow_map: ShadowMapSettings {
            enabled: true,
            needs_update: true,
            ..Default::default()
        },
        local_clipping_enabled: true,
    };

    let mut renderer = Renderer::new(RecordingContext::new(), settings, &mut assets);
    assert!(renderer.shadow_map().settings.enabled);
    assert!(renderer.shadow_map().local_clipping_enabled);
    assert_eq!(renderer.settings(), settings);

    renderer.set_local_clipping_enabled(false);
    assert!(!renderer.shadow_map().local_clipping_enabled);
    assert!(!renderer.settings().local_clipping_enabled);

    // Eight depth material variants are registered on creation.
    assert_eq!(assets.materials.len(), 8);
}

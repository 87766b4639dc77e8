//! Resource Component Tests
//!
//! Tests for:
//! - Geometry: bounding volumes, draw groups
//! - BoundingSphere transforms
//! - Mesh: materials, shadow eligibility, custom shadow materials
//! - Material: distance parameters, uniform values, duplication
//! - AssetStorage: handles and UUID deduplication
//! - Texture bindings

mod common;

use glam::{Mat4, Vec3};
use uuid::Uuid;

use common::{approx, unit_cube};
use umbra::assets::{AssetStorage, Assets, GeometryHandle, MaterialHandle};
use umbra::renderer::uniforms::{UniformName, UniformValue};
use umbra::resources::{
    BoundingSphere, Geometry, GeometryGroup, Material, MaterialKind, Mesh, RenderableKind, Texture,
    TextureBinding, TextureKind,
};

// ============================================================================
// Geometry Tests
// ============================================================================

#[test]
fn geometry_bounds_enclose_positions() {
    let geometry = unit_cube();
    let bounds = geometry.bounding_box().expect("box");
    assert_eq!(bounds.min, Vec3::splat(-0.5));
    assert_eq!(bounds.max, Vec3::splat(0.5));
    assert_eq!(bounds.size(), Vec3::ONE);

    let sphere = geometry.bounding_sphere().expect("sphere");
    assert_eq!(sphere.center, Vec3::ZERO);
    assert!(approx(sphere.radius, 3f32.sqrt() / 2.0));
}

#[test]
fn empty_geometry_has_no_bounds() {
    let geometry = Geometry::new();
    assert!(geometry.bounding_box().is_none());
    assert!(geometry.bounding_sphere().is_none());

    let mut geometry = Geometry::from_positions(vec![Vec3::new(2.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0)]);
    assert!(geometry.bounding_sphere().is_some_and(|s| s.center == Vec3::new(3.0, 0.0, 0.0)));
    geometry.set_positions(Vec::new());
    assert!(geometry.bounding_sphere().is_none());
}

#[test]
fn geometry_groups() {
    let mut geometry = unit_cube();
    assert!(geometry.groups().is_empty());

    geometry.add_group(0, 3, 0);
    geometry.add_group(3, 3, 1);
    assert_eq!(geometry.groups(), &[GeometryGroup::new(0, 3, 0), GeometryGroup::new(3, 3, 1)]);

    geometry.clear_groups();
    assert!(geometry.groups().is_empty());
    assert!(!geometry.has_morph_targets());
}

#[test]
fn bounding_sphere_transform_scales_radius() {
    let sphere = BoundingSphere { center: Vec3::X, radius: 1.0 };
    let matrix = Mat4::from_scale_rotation_translation(
        Vec3::new(1.0, 3.0, 2.0),
        glam::Quat::IDENTITY,
        Vec3::new(0.0, 5.0, 0.0),
    );

    let moved = sphere.transform(&matrix);
    assert_eq!(moved.center, Vec3::new(1.0, 5.0, 0.0));
    assert!(approx(moved.radius, 3.0));
}

// ============================================================================
// Mesh Tests
// ============================================================================

fn handles() -> (GeometryHandle, MaterialHandle, MaterialHandle) {
    let mut assets = Assets::new();
    let geometry = assets.geometries.add(unit_cube());
    let a = assets.materials.add(Material::new_basic(Vec3::ONE));
    let b = assets.materials.add(Material::new_basic(Vec3::ZERO));
    (geometry, a, b)
}

#[test]
fn mesh_defaults() {
    let (geometry, material, _) = handles();
    let mesh = Mesh::new(geometry, material);

    assert!(!mesh.cast_shadow);
    assert!(!mesh.receive_shadow);
    assert!(mesh.frustum_culled);
    assert!(!mesh.skinned);
    assert_eq!(mesh.material_count(), 1);
    assert_eq!(mesh.material(0), Some(material));
    assert_eq!(mesh.material(1), None);
    assert!(mesh.is_shadow_renderable());
}

#[test]
fn mesh_materials_and_kinds() {
    let (geometry, a, b) = handles();
    let mut mesh = Mesh::with_materials(geometry, &[a, b]);
    assert_eq!(mesh.materials(), &[a, b]);

    mesh.set_material(b);
    assert_eq!(mesh.materials(), &[b]);

    for (kind, casts) in [
        (RenderableKind::Mesh, true),
        (RenderableKind::Line, true),
        (RenderableKind::Points, true),
        (RenderableKind::Sprite, false),
    ] {
        assert_eq!(mesh.clone().with_kind(kind).is_shadow_renderable(), casts, "{kind:?}");
    }
}

#[test]
fn mesh_custom_shadow_material_per_family() {
    let (geometry, a, b) = handles();
    let mut mesh = Mesh::new(geometry, a);
    assert_eq!(mesh.custom_shadow_material(false), None);

    mesh.custom_depth_material = Some(a);
    mesh.custom_distance_material = Some(b);
    assert_eq!(mesh.custom_shadow_material(false), Some(a));
    assert_eq!(mesh.custom_shadow_material(true), Some(b));
}

// ============================================================================
// Material Tests
// ============================================================================

#[test]
fn distance_material_takes_point_light_parameters() {
    let mut material = Material::new_distance();
    assert!(material.is_distance());
    assert!(material.setup_point_light(Vec3::new(1.0, 2.0, 3.0), 0.5, 25.0));

    let values = material.uniform_values();
    let names: Vec<UniformName> = values.iter().map(|(n, _)| *n).collect();
    assert_eq!(
        names,
        vec![
            UniformName::ReferencePosition,
            UniformName::NearDistance,
            UniformName::FarDistance,
            UniformName::Opacity,
        ]
    );
    assert!(matches!(values[2].1, UniformValue::Float(f) if approx(f, 25.0)));
}

#[test]
fn non_distance_material_rejects_point_light_parameters() {
    let mut material = Material::new_standard(Vec3::ONE);
    assert!(!material.setup_point_light(Vec3::ZERO, 1.0, 2.0));
    assert!(matches!(material.kind, MaterialKind::Standard));

    let values = material.uniform_values();
    assert_eq!(values[0].0, UniformName::Diffuse);
    assert_eq!(values[1].0, UniformName::Opacity);
}

#[test]
fn duplicate_gets_fresh_identity() {
    let material = Material::new_basic(Vec3::X).with_skinning(true);
    let copy = material.duplicate();

    assert_ne!(copy.uuid, material.uuid);
    assert_eq!(copy.color, material.color);
    assert!(copy.skinning);
}

// ============================================================================
// Asset Storage Tests
// ============================================================================

#[test]
fn storage_add_get_remove() {
    let mut storage: AssetStorage<MaterialHandle, Material> = AssetStorage::new();
    assert!(storage.is_empty());

    let handle = storage.add(Material::new_basic(Vec3::ONE));
    assert!(storage.contains(handle));
    assert_eq!(storage.len(), 1);

    if let Some(material) = storage.get_mut(handle) {
        material.opacity = 0.5;
    }
    assert!(storage.get(handle).is_some_and(|m| approx(m.opacity, 0.5)));

    assert!(storage.remove(handle).is_some());
    assert!(storage.get(handle).is_none());
    assert!(storage.remove(handle).is_none());
}

#[test]
fn storage_deduplicates_by_uuid() {
    let mut storage: AssetStorage<MaterialHandle, Material> = AssetStorage::new();
    let uuid = Uuid::new_v4();

    let first = storage.add_with_uuid(uuid, Material::new_basic(Vec3::X));
    let second = storage.add_with_uuid(uuid, Material::new_basic(Vec3::Y));

    assert_eq!(first, second);
    assert_eq!(storage.len(), 1);
    assert_eq!(storage.get_handle_by_uuid(&uuid), Some(first));
    assert!(storage.get(first).is_some_and(|m| m.color == Vec3::X));

    storage.remove(first);
    assert_eq!(storage.get_handle_by_uuid(&uuid), None);
}

// ============================================================================
// Texture Tests
// ============================================================================

#[test]
fn texture_binding_follows_texture_kind() {
    let mut assets = Assets::new();
    let flat = Texture::new_2d(Some("albedo"), 64, 32, wgpu::TextureFormat::Rgba8Unorm);
    let cube = Texture::new_cube(None, 16, wgpu::TextureFormat::Rgba8Unorm);
    assert_eq!(flat.name, "albedo");
    assert_eq!(cube.name, "TextureCube");
    assert_eq!((cube.width, cube.height), (16, 16));

    let flat_binding = {
        let handle = assets.textures.add(flat.clone());
        TextureBinding::new(handle, &flat)
    };
    let cube_binding = {
        let handle = assets.textures.add(cube.clone());
        TextureBinding::new(handle, &cube)
    };

    assert_eq!(flat_binding.kind, TextureKind::Flat);
    assert_eq!(cube_binding.kind, TextureKind::Cube);
    assert_eq!(TextureBinding::cube(flat_binding.handle).kind, TextureKind::Cube);
}

//! Active uniform reflection and per-draw value binding.
//!
//! Raw names reported by the driver follow the grammar
//! `ident ( '[' index ']' )? ( '.' ident ( '[' index ']' )? )*`, tokenized as
//! repeated `(ident)(])?([|.)?` segments:
//!
//! | Raw name                 | Segments                                   |
//! |--------------------------|--------------------------------------------|
//! | `diffuse`                | `diffuse`                                  |
//! | `boneMatrices[0]`        | `boneMatrices[`, `0]`                      |
//! | `pointLights[1].color`   | `pointLights[`, `1].`, `color`             |

use glam::{Mat4, Vec3};
use smallvec::SmallVec;

use crate::errors::{Result, UmbraError};
use crate::renderer::context::GraphicsContext;
use crate::resources::texture::{TextureBinding, TextureKind};

use super::name::UniformName;
use super::texture_units::TextureUnits;
use super::tree::{StructUniform, Uniform, UniformContainer, UniformNode, UniformTree};
use super::value::{UniformData, UniformLocation, UniformType, UniformValue};

// ============================================================================
// Tokenizer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// Identifier; `subscript` is set when `[` follows it.
    Name { ident: &'a str, subscript: bool },
    /// Array index closed by `]`.
    Index(u32),
}

fn tokenize(raw: &str) -> Result<SmallVec<[Segment<'_>; 4]>> {
    let malformed = || UmbraError::MalformedUniformName(raw.to_string());

    let bytes = raw.as_bytes();
    let mut segments = SmallVec::new();
    let mut pos = 0;
    let mut expect_index = false;

    loop {
        let start = pos;
        while bytes.get(pos).is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_') {
            pos += 1;
        }
        let ident = &raw[start..pos];
        if ident.is_empty() {
            return Err(malformed());
        }

        let closed = bytes.get(pos) == Some(&b']');
        if closed {
            pos += 1;
        }
        if closed != expect_index {
            return Err(malformed());
        }

        let opener = bytes.get(pos).copied();
        match opener {
            Some(b'[' | b'.') => pos += 1,
            None => {}
            Some(_) => return Err(malformed()),
        }

        if closed {
            let index = ident.parse::<u32>().map_err(|_| malformed())?;
            segments.push(Segment::Index(index));
        } else {
            if ident.as_bytes()[0].is_ascii_digit() {
                return Err(malformed());
            }
            segments.push(Segment::Name {
                ident,
                subscript: opener == Some(b'['),
            });
        }

        match opener {
            None => return Ok(segments),
            Some(b) => expect_index = b == b'[',
        }
    }
}

/// Identifier segments of a uniform path, subscripts dropped.
pub(crate) fn path_names(path: &str) -> Result<SmallVec<[&str; 4]>> {
    Ok(tokenize(path)?
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Name { ident, .. } => Some(ident),
            Segment::Index(_) => None,
        })
        .collect())
}

// ============================================================================
// Tree Construction
// ============================================================================

/// A raw uniform name with every identifier resolved.
#[derive(Debug)]
struct UniformPath {
    /// Struct steps from the root, each with its element index when the
    /// struct is an array.
    structs: SmallVec<[(UniformName, Option<u32>); 2]>,
    name: UniformName,
    /// The final name carries a bottom-level `[N]` suffix.
    array: bool,
}

impl UniformPath {
    fn resolve(raw_name: &str) -> Result<Self> {
        let segments = tokenize(raw_name)?;
        let malformed = || UmbraError::MalformedUniformName(raw_name.to_string());

        let mut structs = SmallVec::new();
        let mut rest = segments.as_slice();

        loop {
            match rest {
                [Segment::Name { ident, subscript: false }] => {
                    let name = UniformName::resolve(ident)?;
                    return Ok(Self { structs, name, array: false });
                }
                [Segment::Name { ident, subscript: true }, Segment::Index(_)] => {
                    let name = UniformName::resolve(ident)?;
                    return Ok(Self { structs, name, array: true });
                }
                [Segment::Name { ident, subscript }, tail @ ..] => {
                    let id = UniformName::resolve(ident)?;
                    rest = tail;

                    let mut element = None;
                    if *subscript {
                        let [Segment::Index(index), tail @ ..] = rest else {
                            return Err(malformed());
                        };
                        element = Some(*index);
                        rest = tail;
                    }
                    structs.push((id, element));
                }
                _ => return Err(malformed()),
            }
        }
    }
}

/// Inserts one active uniform into `tree`.
///
/// Non-final names become struct steps. The final name becomes a leaf, or an
/// array node when it carries a bottom-level `[N]` suffix. Inside a struct
/// array the element index selects which location slot the leaf records.
///
/// The whole name is resolved before the tree is touched: a malformed or
/// unknown name leaves `tree` as it was.
pub fn parse_active_uniform(
    raw_name: &str,
    ty: UniformType,
    size: u32,
    location: UniformLocation,
    tree: &mut UniformTree,
) -> Result<()> {
    let path = UniformPath::resolve(raw_name)?;

    let mut container = &mut tree.root;
    let mut element = 0;

    for &(id, index) in &path.structs {
        let node = descend(container, id, raw_name)?;
        if let Some(index) = index {
            node.indexed = true;
            element = index;
        }
        container = &mut node.members;
    }

    let uniform = Uniform::at_element(path.name, ty, size, element, location);
    let node = if path.array {
        UniformNode::Array(uniform)
    } else {
        UniformNode::Leaf(uniform)
    };
    declare(container, node, raw_name)
}

/// Returns the struct child `id`, creating it if absent.
fn descend<'a>(
    container: &'a mut UniformContainer,
    id: UniformName,
    raw_name: &str,
) -> Result<&'a mut StructUniform> {
    let index = match container.index_of(id) {
        Some(index) => index,
        None => container.push(UniformNode::Struct(StructUniform::new(id))),
    };

    match container.node_mut(index) {
        Some(UniformNode::Struct(s)) => Ok(s),
        _ => Err(UmbraError::InvalidContainer {
            path: raw_name.to_string(),
            segment: id,
        }),
    }
}

fn declare(container: &mut UniformContainer, node: UniformNode, raw_name: &str) -> Result<()> {
    let id = node.id();
    if !container.contains(id) {
        container.push(node);
        return Ok(());
    }

    match (container.get_mut(id), node) {
        (Some(UniformNode::Leaf(existing)), UniformNode::Leaf(declared))
        | (Some(UniformNode::Array(existing)), UniformNode::Array(declared))
            if existing.ty() == declared.ty() =>
        {
            for &(element, location) in declared.locations() {
                existing.record(element, location);
            }
            Ok(())
        }
        (existing, declared) => {
            log::debug!(
                "Uniform '{raw_name}' declares {} '{id}' over existing {}",
                declared.kind_name(),
                existing.map_or("node", |n| n.kind_name()),
            );
            Err(UmbraError::InvalidContainer {
                path: raw_name.to_string(),
                segment: id,
            })
        }
    }
}

// ============================================================================
// Value Binding
// ============================================================================

/// Pushes `value` into the program location(s) of `node`.
///
/// Texture values acquire a fresh texture unit on every call.
pub fn set_value<C>(
    node: &UniformNode,
    value: &UniformValue,
    ctx: &mut C,
    units: &mut TextureUnits,
) -> Result<()>
where
    C: GraphicsContext + ?Sized,
{
    set_value_at(node, 0, value, ctx, units)
}

fn set_value_at<C>(
    node: &UniformNode,
    element: u32,
    value: &UniformValue,
    ctx: &mut C,
    units: &mut TextureUnits,
) -> Result<()>
where
    C: GraphicsContext + ?Sized,
{
    match node {
        UniformNode::Leaf(uniform) => {
            let Some(location) = uniform.location_at(element) else {
                return Ok(());
            };
            set_single(uniform, location, value, ctx)
        }
        UniformNode::Array(uniform) => {
            let Some(location) = uniform.location_at(element) else {
                return Ok(());
            };
            set_array(uniform, location, value, ctx, units)
        }
        UniformNode::Struct(s) => match value {
            UniformValue::Struct(fields) => set_members(s, element, fields, ctx, units),
            UniformValue::StructArray(elements) if s.is_indexed() => {
                for (index, fields) in (0u32..).zip(elements) {
                    set_members(s, index, fields, ctx, units)?;
                }
                Ok(())
            }
            other => Err(UmbraError::UniformTypeMismatch {
                name: s.id(),
                expected: if s.is_indexed() { "struct[]" } else { "struct" },
                found: other.kind_name(),
            }),
        },
    }
}

fn set_members<C>(
    s: &StructUniform,
    element: u32,
    fields: &[(UniformName, UniformValue)],
    ctx: &mut C,
    units: &mut TextureUnits,
) -> Result<()>
where
    C: GraphicsContext + ?Sized,
{
    for (id, value) in fields {
        // Members the program never reads are not reported as active.
        if let Some(member) = s.get(*id) {
            set_value_at(member, element, value, ctx, units)?;
        }
    }
    Ok(())
}

fn set_single<C>(
    uniform: &Uniform,
    location: UniformLocation,
    value: &UniformValue,
    ctx: &mut C,
) -> Result<()>
where
    C: GraphicsContext + ?Sized,
{
    use UniformType as T;
    use UniformValue as V;

    match (value, uniform.ty()) {
        (V::Float(v), T::Float) => {
            ctx.upload_uniform(location, UniformData::Float { components: 1, data: &[*v] });
        }
        (V::Int(v), T::Int | T::Bool) => {
            ctx.upload_uniform(location, UniformData::Int { components: 1, data: &[*v] });
        }
        (V::Bool(v), T::Bool | T::Int) => {
            let data = [i32::from(*v)];
            ctx.upload_uniform(location, UniformData::Int { components: 1, data: &data });
        }
        (V::Vec2(v), T::FloatVec2) => {
            let data = v.to_array();
            ctx.upload_uniform(location, UniformData::Float { components: 2, data: &data });
        }
        (V::Vec3(v), T::FloatVec3) => {
            let data = v.to_array();
            ctx.upload_uniform(location, UniformData::Float { components: 3, data: &data });
        }
        (V::Vec4(v), T::FloatVec4) => {
            let data = v.to_array();
            ctx.upload_uniform(location, UniformData::Float { components: 4, data: &data });
        }
        (V::Mat3(m), T::FloatMat3) => {
            ctx.upload_uniform(location, UniformData::Matrix3(&m.to_cols_array()));
        }
        (V::Mat4(m), T::FloatMat4) => {
            ctx.upload_uniform(location, UniformData::Matrix4(&m.to_cols_array()));
        }
        (V::Texture(texture), ty) if ty.is_sampler() => {
            let unit = ctx.alloc_texture_unit();
            let data = [bytemuck::cast::<u32, i32>(unit)];
            ctx.upload_uniform(location, UniformData::Int { components: 1, data: &data });
            bind_texture(ctx, texture, unit);
        }
        (other, _) => return Err(mismatch(uniform, other)),
    }
    Ok(())
}

fn set_array<C>(
    uniform: &Uniform,
    location: UniformLocation,
    value: &UniformValue,
    ctx: &mut C,
    units: &mut TextureUnits,
) -> Result<()>
where
    C: GraphicsContext + ?Sized,
{
    use UniformType as T;
    use UniformValue as V;

    let limit = uniform.size() as usize;

    match (value, uniform.ty()) {
        (V::FloatArray(v), T::Float) => {
            let data = &v[..v.len().min(limit)];
            ctx.upload_uniform(location, UniformData::Float { components: 1, data });
        }
        (V::IntArray(v), T::Int | T::Bool) => {
            let data = &v[..v.len().min(limit)];
            ctx.upload_uniform(location, UniformData::Int { components: 1, data });
        }
        (V::Vec3Array(v), T::FloatVec3) => {
            let data: &[f32] = bytemuck::cast_slice::<Vec3, f32>(&v[..v.len().min(limit)]);
            ctx.upload_uniform(location, UniformData::Float { components: 3, data });
        }
        (V::Mat4Array(v), T::FloatMat4) => {
            let data: &[f32] = bytemuck::cast_slice::<Mat4, f32>(&v[..v.len().min(limit)]);
            ctx.upload_uniform(location, UniformData::Matrix4(data));
        }
        (V::TextureArray(textures), ty) if ty.is_sampler() => {
            let textures = &textures[..textures.len().min(limit)];
            let allocated = units.alloc_units(ctx, textures.len());
            let data: &[i32] = bytemuck::cast_slice(allocated);
            ctx.upload_uniform(location, UniformData::Int { components: 1, data });
            for (texture, &unit) in textures.iter().zip(allocated) {
                bind_texture(ctx, texture, unit);
            }
        }
        // A single value addresses element 0 of the array.
        _ => return set_single(uniform, location, value, ctx),
    }
    Ok(())
}

fn bind_texture<C>(ctx: &mut C, texture: &TextureBinding, unit: u32)
where
    C: GraphicsContext + ?Sized,
{
    match texture.kind {
        TextureKind::Flat => ctx.set_texture_2d(texture.handle, unit),
        TextureKind::Cube => ctx.set_texture_cube(texture.handle, unit),
    }
}

fn mismatch(uniform: &Uniform, value: &UniformValue) -> UmbraError {
    UmbraError::UniformTypeMismatch {
        name: uniform.id(),
        expected: uniform.ty().glsl_name(),
        found: value.kind_name(),
    }
}

use std::borrow::Cow;

use crate::assets::TextureHandle;

/// Binding target of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Flat,
    Cube,
}

#[derive(Debug, Clone)]
pub struct Texture {
    pub name: Cow<'static, str>,
    pub kind: TextureKind,
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
}

impl Texture {
    #[must_use]
    pub fn new_2d(
        name: Option<&str>,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        Self {
            name: name.map_or(Cow::Borrowed("Texture2D"), |n| Cow::Owned(n.to_string())),
            kind: TextureKind::Flat,
            width,
            height,
            format,
        }
    }

    #[must_use]
    pub fn new_cube(name: Option<&str>, size: u32, format: wgpu::TextureFormat) -> Self {
        Self {
            name: name.map_or(Cow::Borrowed("TextureCube"), |n| Cow::Owned(n.to_string())),
            kind: TextureKind::Cube,
            width: size,
            height: size,
            format,
        }
    }
}

/// A texture reference as pushed into a sampler uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureBinding {
    pub handle: TextureHandle,
    pub kind: TextureKind,
}

impl TextureBinding {
    #[must_use]
    pub fn new(handle: TextureHandle, texture: &Texture) -> Self {
        Self { handle, kind: texture.kind }
    }

    #[must_use]
    pub fn flat(handle: TextureHandle) -> Self {
        Self { handle, kind: TextureKind::Flat }
    }

    #[must_use]
    pub fn cube(handle: TextureHandle) -> Self {
        Self { handle, kind: TextureKind::Cube }
    }
}

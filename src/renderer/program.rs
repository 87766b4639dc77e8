use crate::errors::Result;
use crate::renderer::context::GraphicsContext;
use crate::renderer::uniforms::{
    TextureUnits, UniformLocation, UniformName, UniformTree, UniformType, UniformValue,
    parse_active_uniform,
};

/// One entry of a linked program's active uniform list, as the driver reports
/// it (`glGetActiveUniform` + `glGetUniformLocation`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveUniform {
    pub name: String,
    pub ty: UniformType,
    /// Array length; 1 for non-arrays.
    pub size: u32,
    pub location: UniformLocation,
}

impl ActiveUniform {
    #[must_use]
    pub fn new(name: &str, ty: UniformType, location: i32) -> Self {
        Self {
            name: name.to_string(),
            ty,
            size: 1,
            location: UniformLocation(location),
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

/// A linked GPU program and the uniform tree reflected from it.
#[derive(Debug)]
pub struct Program {
    pub id: u32,
    pub name: String,
    uniforms: UniformTree,
    texture_units: TextureUnits,
}

impl Program {
    /// Builds the uniform tree from the program's active uniforms. Any name
    /// outside the uniform registry fails the whole program.
    pub fn link(id: u32, name: &str, active: &[ActiveUniform]) -> Result<Self> {
        let mut uniforms = UniformTree::new();
        for uniform in active {
            parse_active_uniform(
                &uniform.name,
                uniform.ty,
                uniform.size,
                uniform.location,
                &mut uniforms,
            )?;
        }

        log::debug!(
            "Program '{name}' ({id}) linked: {} active uniforms, {} root nodes",
            active.len(),
            uniforms.len()
        );

        Ok(Self {
            id,
            name: name.to_string(),
            uniforms,
            texture_units: TextureUnits::new(),
        })
    }

    #[inline]
    #[must_use]
    pub fn uniforms(&self) -> &UniformTree {
        &self.uniforms
    }

    /// Pushes the values of one draw; uniforms the program does not declare
    /// are ignored. Returns the number of uniforms updated.
    ///
    /// Every call starts a new draw, so texture units are handed out from the
    /// first unit again.
    pub fn upload<C>(
        &mut self,
        ctx: &mut C,
        values: &[(UniformName, UniformValue)],
    ) -> Result<usize>
    where
        C: GraphicsContext + ?Sized,
    {
        ctx.reset_texture_units();
        self.uniforms.upload(ctx, &mut self.texture_units, values)
    }
}

//! Error Types
//!
//! This module defines the error types used throughout the renderer core.
//!
//! # Overview
//!
//! The main error type [`UmbraError`] covers the structural failures the core
//! can detect:
//! - Shader / renderer contract mismatches found while reflecting uniforms
//! - Values pushed to uniforms of an incompatible type
//! - Missing assets referenced by scene objects
//! - Malformed configuration documents
//!
//! None of these are retried. They indicate a programming error upstream
//! (malformed shader, inconsistent scene state) and are propagated to the
//! caller.
//!
//! # Usage
//!
//! ```rust,ignore
//! use umbra::errors::Result;
//!
//! fn link() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::renderer::uniforms::UniformName;

/// The main error type for the renderer core.
#[derive(Error, Debug)]
pub enum UmbraError {
    // ========================================================================
    // Uniform Reflection Errors
    // ========================================================================
    /// An active uniform name is not part of the closed name registry.
    #[error("Unknown uniform name: {0}")]
    UnknownUniform(String),

    /// A path segment is already bound to a node of another kind.
    #[error("Invalid uniform container: '{segment}' in '{path}' is not a struct")]
    InvalidContainer {
        /// Raw name of the active uniform being parsed
        path: String,
        /// Segment that collided
        segment: UniformName,
    },

    /// The raw uniform name does not follow the `ident([N])?(.ident)*` grammar.
    #[error("Malformed uniform name: '{0}'")]
    MalformedUniformName(String),

    /// A GL type enum without a corresponding
    /// [`UniformType`](crate::renderer::uniforms::UniformType).
    #[error("Unsupported uniform type: {0:#06x}")]
    UnsupportedUniformType(u32),

    // ========================================================================
    // Uniform Binding Errors
    // ========================================================================
    /// A value was pushed to a uniform declared with an incompatible type.
    #[error("Uniform type mismatch for '{name}': declared {expected}, got {found}")]
    UniformTypeMismatch {
        /// Uniform being set
        name: UniformName,
        /// Declared type (GLSL spelling, or `struct`)
        expected: &'static str,
        /// Kind of the supplied value
        found: &'static str,
    },

    /// A lookup path does not address any node of the uniform tree.
    #[error("Uniform not found: {0}")]
    UniformNotFound(String),

    // ========================================================================
    // Asset Errors
    // ========================================================================
    /// The requested asset was not found.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Settings document could not be parsed.
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Alias for `Result<T, UmbraError>`.
pub type Result<T> = std::result::Result<T, UmbraError>;

//! Closed registry of uniform identifiers.
//!
//! Every active uniform reported by a linked program must resolve to one of
//! these names. Anything else is a shader/engine contract violation and fails
//! with [`UmbraError::UnknownUniform`].

use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, UmbraError};

// ============================================================================
// Name table (single source of truth)
// ============================================================================

macro_rules! define_uniform_names {
    (
        $( $variant:ident => $ident:literal ),* $(,)?
    ) => {
        /// Semantic identifier of a uniform or uniform struct member.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum UniformName {
            $( $variant, )*
        }

        impl UniformName {
            /// Every registered name, in table order.
            pub const ALL: &'static [UniformName] = &[ $( UniformName::$variant, )* ];

            /// Looks up the identifier as it appears in shader source.
            pub fn resolve(name: &str) -> Result<Self> {
                match name {
                    $( $ident => Ok(Self::$variant), )*
                    _ => Err(UmbraError::UnknownUniform(name.to_string())),
                }
            }

            /// Identifier as it appears in shader source.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $ident, )*
                }
            }
        }
    };
}

define_uniform_names! {
    // --- Environment / background ---
    Cube => "cube",
    Equirect => "equirect",
    Flip => "flip",

    // --- Common material factors ---
    Opacity => "opacity",
    Diffuse => "diffuse",
    Emissive => "emissive",
    Specular => "specular",
    Shininess => "shininess",

    // --- Camera / object matrices ---
    ProjectionMatrix => "projectionMatrix",
    ViewMatrix => "viewMatrix",
    ModelViewMatrix => "modelViewMatrix",
    NormalMatrix => "normalMatrix",
    ModelMatrix => "modelMatrix",
    LogDepthBufFc => "logDepthBufFC",
    BoneMatrices => "boneMatrices",
    BindMatrix => "bindMatrix",
    BindMatrixInverse => "bindMatrixInverse",
    ToneMappingExposure => "toneMappingExposure",
    ToneMappingWhitePoint => "toneMappingWhitePoint",
    CameraPosition => "cameraPosition",

    // --- Material maps ---
    Map => "map",
    UvTransform => "uvTransform",
    AlphaMap => "alphaMap",
    SpecularMap => "specularMap",
    EnvMap => "envMap",
    FlipEnvMap => "flipEnvMap",
    Reflectivity => "reflectivity",
    RefractionRatio => "refractionRatio",
    AoMap => "aoMap",
    AoMapIntensity => "aoMapIntensity",
    LightMap => "lightMap",
    LightMapIntensity => "lightMapIntensity",
    EmissiveMap => "emissiveMap",
    BumpMap => "bumpMap",
    BumpScale => "bumpScale",
    NormalMap => "normalMap",
    NormalScale => "normalScale",
    DisplacementMap => "displacementMap",
    DisplacementScale => "displacementScale",
    DisplacementBias => "displacementBias",
    RoughnessMap => "roughnessMap",
    MetalnessMap => "metalnessMap",
    GradientMap => "gradientMap",
    Roughness => "roughness",
    Metalness => "metalness",
    ClearCoat => "clearCoat",
    ClearCoatRoughness => "clearCoatRoughness",
    EnvMapIntensity => "envMapIntensity",

    // --- Fog ---
    FogDensity => "fogDensity",
    FogNear => "fogNear",
    FogFar => "fogFar",
    FogColor => "fogColor",

    // --- Lights ---
    AmbientLightColor => "ambientLightColor",
    Direction => "direction",
    Color => "color",
    Shadow => "shadow",
    ShadowBias => "shadowBias",
    ShadowRadius => "shadowRadius",
    ShadowMapSize => "shadowMapSize",
    Size => "size",
    Scale => "scale",
    DashSize => "dashSize",
    TotalSize => "totalSize",

    // --- Distance material ---
    ReferencePosition => "referencePosition",
    NearDistance => "nearDistance",
    FarDistance => "farDistance",

    ClippingPlanes => "clippingPlanes",

    // --- Light arrays ---
    DirectionalLights => "directionalLights",
    SpotLights => "spotLights",
    RectAreaLights => "rectAreaLights",
    PointLights => "pointLights",
    HemisphereLights => "hemisphereLights",

    // --- Shadow maps ---
    DirectionalShadowMap => "directionalShadowMap",
    DirectionalShadowMatrix => "directionalShadowMatrix",
    SpotShadowMap => "spotShadowMap",
    SpotShadowMatrix => "spotShadowMatrix",
    PointShadowMap => "pointShadowMap",
    PointShadowMatrix => "pointShadowMatrix",

    // --- Light struct members ---
    Distance => "distance",
    Position => "position",
    ConeCos => "coneCos",
    PenumbraCos => "penumbraCos",
    Decay => "decay",
}

impl FromStr for UniformName {
    type Err = UmbraError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for UniformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

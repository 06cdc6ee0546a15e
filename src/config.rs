//! Ambient decode/explain configuration, threaded explicitly rather than
//! held in statics.
use crate::render::OutputMode;

/// Explainer XML dialect, selected by which of the three disjoint PGN-id
/// ranges a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplainDialect {
    Generic,
    Actisense,
    IKonvert,
}

/// camelCase mode for explainer field-id derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CamelMode {
    None,
    LowerCamel,
    UpperCamel,
}

/// Schema-version flag selecting the explainer's v1 (legacy) or v2 dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    V1,
    V2,
}

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub output_mode: OutputMode,
    pub schema_version: SchemaVersion,
    pub camel_mode: CamelMode,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_mode: OutputMode::Text,
            schema_version: SchemaVersion::V2,
            camel_mode: CamelMode::None,
            debug: false,
        }
    }
}

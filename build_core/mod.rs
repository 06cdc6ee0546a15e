//! Workspace for the build script: data structures and code generators.
pub mod conf;
pub mod domain;
pub mod errors;
pub mod gen_catalog;
pub mod gen_lookups;

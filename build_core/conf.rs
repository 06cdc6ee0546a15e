//! Paths and constants used during build-time code generation.
//==================================================================================CONF
/// Bundled PGN catalogue (repository-local, no network fetch at build time).
pub(crate) const PGN_CATALOG_PATH: &str = "build_core/var/pgn_catalog.json";
/// Bundled lookup-table dataset (pair / triplet / bit / field-type enumerators).
pub(crate) const LOOKUPS_PATH: &str = "build_core/var/lookups.json";
/// Generated catalogue file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_CATALOG_FILE_NAME: &str = "generated_catalog.rs";
/// Generated lookup-table file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_LOOKUPS_FILE_NAME: &str = "generated_lookups.rs";

//! Cargo build script: generates the PGN catalogue and lookup tables from
//! the bundled, repository-local JSON datasets (no network fetch).

#[path = "src/core.rs"]
mod core;

mod build_core;
use crate::build_core::conf::*;
use crate::build_core::domain::{Catalog, Lookups};
use crate::build_core::errors::BuildError;
use crate::build_core::gen_catalog::run_catalog_gen;
use crate::build_core::gen_lookups::{build_index, run_lookup_gen};

use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={PGN_CATALOG_PATH}");
    println!("cargo:rerun-if-changed={LOOKUPS_PATH}");

    let catalog_string = fs::read_to_string(PGN_CATALOG_PATH).map_err(|e| BuildError::ReadFile {
        path: PathBuf::from(PGN_CATALOG_PATH),
        source: e,
    })?;
    let catalog: Catalog = serde_json::from_str(&catalog_string)?;

    let lookups_string = fs::read_to_string(LOOKUPS_PATH).map_err(|e| BuildError::ReadFile {
        path: PathBuf::from(LOOKUPS_PATH),
        source: e,
    })?;
    let lookups: Lookups = serde_json::from_str(&lookups_string)?;

    let lookup_index = build_index(&lookups);
    let catalog_code = run_catalog_gen(&catalog, &lookup_index)?;
    let lookups_code = run_lookup_gen(&lookups)?;

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(|e| BuildError::OutDirErr { source: e })?);
    let catalog_path = out_dir.join(OUT_DIR_CATALOG_FILE_NAME);
    let lookups_path = out_dir.join(OUT_DIR_LOOKUPS_FILE_NAME);

    fs::write(&catalog_path, &catalog_code).map_err(|e| BuildError::WriteFile {
        path: catalog_path,
        source: e,
    })?;
    fs::write(&lookups_path, &lookups_code).map_err(|e| BuildError::WriteFile {
        path: lookups_path,
        source: e,
    })?;

    Ok(())
}

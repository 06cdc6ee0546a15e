//! Generates the pair / triplet / bit / field-type lookup functions consumed
//! at runtime by `crate::lookups`.
//!
//! Enumerations are expressed as `match` tables exhaustive over their tags
//! rather than as generated Rust enum types, treating the textual content
//! of enumerations as opaque, integer-keyed data — a flat match table
//! models that directly without inventing a few hundred PGNs' worth of
//! enum type names.
use std::collections::HashMap;
use std::fmt::Write;

use crate::build_core::conf::LOOKUPS_PATH;
use crate::build_core::domain::Lookups;
use crate::build_core::errors::BuildError;

/// Maps a lookup table's declared `Name` to the numeric `table_id` baked
/// into the generated match arms, one map per lookup category.
pub(crate) struct LookupIndex {
    pub(crate) pair: HashMap<String, u16>,
    pub(crate) triplet: HashMap<String, u16>,
    pub(crate) bit: HashMap<String, u16>,
    pub(crate) fieldtype: HashMap<String, u16>,
}

pub(crate) fn build_index(lookups: &Lookups) -> LookupIndex {
    fn index(names: impl Iterator<Item = String>) -> HashMap<String, u16> {
        names.enumerate().map(|(i, name)| (name, i as u16)).collect()
    }
    LookupIndex {
        pair: index(lookups.pair.iter().map(|l| l.name.clone())),
        triplet: index(lookups.triplet.iter().map(|l| l.name.clone())),
        bit: index(lookups.bit.iter().map(|l| l.name.clone())),
        fieldtype: index(lookups.fieldtype.iter().map(|l| l.name.clone())),
    }
}

pub(crate) fn run_lookup_gen(lookups: &Lookups) -> Result<String, BuildError> {
    let mut out = String::new();

    writeln!(out, "// @generated by build.rs from {LOOKUPS_PATH}")?;
    writeln!(out)?;

    writeln!(out, "pub(crate) fn lookup_pair(table_id: u16, n: i64) -> Option<&'static str> {{")?;
    writeln!(out, "\tmatch table_id {{")?;
    for (id, table) in lookups.pair.iter().enumerate() {
        writeln!(out, "\t\t{id} => match n {{")?;
        for v in &table.values {
            writeln!(out, "\t\t\t{} => Some({:?}),", v.value, v.name)?;
        }
        writeln!(out, "\t\t\t_ => None,")?;
        writeln!(out, "\t\t}},")?;
    }
    writeln!(out, "\t\t_ => None,")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(
        out,
        "pub(crate) fn lookup_triplet(table_id: u16, n1: i64, n2: i64) -> Option<&'static str> {{"
    )?;
    writeln!(out, "\tmatch table_id {{")?;
    for (id, table) in lookups.triplet.iter().enumerate() {
        writeln!(out, "\t\t{id} => match (n1, n2) {{")?;
        for v in &table.values {
            writeln!(out, "\t\t\t({}, {}) => Some({:?}),", v.value1, v.value2, v.name)?;
        }
        writeln!(out, "\t\t\t_ => None,")?;
        writeln!(out, "\t\t}},")?;
    }
    writeln!(out, "\t\t_ => None,")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "pub(crate) fn lookup_bit(table_id: u16, bit: u8) -> Option<&'static str> {{")?;
    writeln!(out, "\tmatch table_id {{")?;
    for (id, table) in lookups.bit.iter().enumerate() {
        writeln!(out, "\t\t{id} => match bit {{")?;
        for v in &table.values {
            writeln!(out, "\t\t\t{} => Some({:?}),", v.bit, v.name)?;
        }
        writeln!(out, "\t\t\t_ => None,")?;
        writeln!(out, "\t\t}},")?;
    }
    writeln!(out, "\t\t_ => None,")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(
        out,
        "pub(crate) fn lookup_fieldtype(table_id: u16, n: i64) -> Option<&'static str> {{"
    )?;
    writeln!(out, "\tmatch table_id {{")?;
    for (id, table) in lookups.fieldtype.iter().enumerate() {
        writeln!(out, "\t\t{id} => match n {{")?;
        for v in &table.values {
            writeln!(out, "\t\t\t{} => Some({:?}),", v.value, v.field_type)?;
        }
        writeln!(out, "\t\t\t_ => None,")?;
        writeln!(out, "\t\t}},")?;
    }
    writeln!(out, "\t\t_ => None,")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")?;

    Ok(out)
}

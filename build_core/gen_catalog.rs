//! Generates the flat `PGNS: &[PgnDef]` catalogue consumed at runtime by
//! `crate::catalog`, `crate::resolver` and `crate::decode`.
//!
//! The catalogue is a single `&'static` slice rather than one typed Rust
//! struct per PGN: the resolver walks arbitrary, match-disambiguated PGN
//! entries and the decoder walks an arbitrary field list, so nothing in the
//! runtime engine can be hung off a compile-time-known field set: a data
//! table the engine interprets generically, rather than a per-message
//! typed-struct codegen.
use std::fmt::Write;

use crate::build_core::conf::PGN_CATALOG_PATH;
use crate::build_core::domain::{Catalog, Fields, PgnInstructions};
use crate::build_core::errors::BuildError;
use crate::build_core::gen_lookups::LookupIndex;

pub(crate) fn run_catalog_gen(catalog: &Catalog, lookups: &LookupIndex) -> Result<String, BuildError> {
    let mut out = String::new();

    writeln!(out, "// @generated by build.rs from {PGN_CATALOG_PATH}")?;
    writeln!(out, "pub static PGNS: &[crate::core::PgnDef] = &[")?;

    for pgn in &catalog.pgns {
        emit_pgn(&mut out, pgn, lookups)?;
    }

    writeln!(out, "];")?;
    Ok(out)
}

fn emit_pgn(out: &mut String, pgn: &PgnInstructions, lookups: &LookupIndex) -> Result<(), BuildError> {
    let packet_class = match pgn.packet_class.as_str() {
        "Single" => "Single",
        "Fast" => "Fast",
        "ISO" => "IsoTp",
        "Mixed" => "Mixed",
        other => {
            return Err(BuildError::UnknownLookupTable {
                pgn: pgn.pgn_id,
                field: "Type".to_string(),
                table: other.to_string(),
            });
        }
    };

    let has_match_fields = pgn
        .fields
        .iter()
        .any(|f| f.unit.as_deref().is_some_and(|u| u.starts_with('=')));

    writeln!(out, "\tcrate::core::PgnDef {{")?;
    writeln!(out, "\t\tid: {},", pgn.pgn_id)?;
    writeln!(out, "\t\tname: {:?},", pgn.pgn_name)?;
    writeln!(out, "\t\tdescription: {:?},", pgn.pgn_description)?;
    writeln!(out, "\t\texplanation: {},", opt_str(&pgn.explanation))?;
    writeln!(out, "\t\turl: {},", opt_str(&pgn.url))?;
    writeln!(out, "\t\tpacket_class: crate::core::PacketClass::{packet_class},")?;
    writeln!(
        out,
        "\t\tcompleteness: {},",
        if pgn.complete {
            "crate::core::Completeness::COMPLETE"
        } else {
            "crate::core::Completeness::empty()"
        }
    )?;
    writeln!(out, "\t\tinterval_ms: {},", pgn.trans_interval.unwrap_or(0))?;
    writeln!(out, "\t\trepeat_groups: [{}, {}],", repeat_group(pgn, 1), repeat_group(pgn, 2))?;
    writeln!(out, "\t\tfields: &[")?;
    for field in &pgn.fields {
        emit_field(out, pgn.pgn_id, field, lookups)?;
    }
    writeln!(out, "\t\t],")?;
    writeln!(out, "\t\tfallback: {},", pgn.fallback)?;
    writeln!(out, "\t\thas_match_fields: {has_match_fields},")?;
    writeln!(out, "\t}},")?;
    Ok(())
}

fn repeat_group(pgn: &PgnInstructions, which: u8) -> String {
    let (size, start, count) = if which == 1 {
        (
            pgn.repeating_field_set_1_size,
            pgn.repeating_field_set_1_start_field,
            pgn.repeating_field_set_1_count_field,
        )
    } else {
        (
            pgn.repeating_field_set_2_size,
            pgn.repeating_field_set_2_start_field,
            pgn.repeating_field_set_2_count_field,
        )
    };
    match (size, start) {
        (Some(size), Some(start)) => {
            let count_field_order = count.unwrap_or(crate::core::COUNT_UNTIL_EXHAUSTED);
            format!(
                "Some(crate::core::RepeatGroup {{ start_field_order: {start}, field_count: {size}, count_field_order: {count_field_order} }})"
            )
        }
        _ => "None".to_string(),
    }
}

fn emit_field(
    out: &mut String,
    pgn_id: u32,
    field: &Fields,
    lookups: &LookupIndex,
) -> Result<(), BuildError> {
    let kind = field_kind(&field.kind);
    let bits = if field.bits_length_var {
        "crate::core::VARIABLE_LENGTH".to_string()
    } else {
        field
            .bits_length
            .ok_or_else(|| BuildError::BitLengthErr {
                pgn: pgn_id,
                field: field.id.clone(),
                comment: "missing BitLength for a non-variable field",
            })?
            .to_string()
    };
    let bit_width = field.bits_length.unwrap_or(0).min(64) as u8;

    let lookup = if let Some(name) = &field.enum_direct_name {
        let table_id = lookups.pair.get(name).ok_or_else(|| BuildError::UnknownLookupTable {
            pgn: pgn_id,
            field: field.id.clone(),
            table: name.clone(),
        })?;
        format!(
            "crate::core::LookupHandle {{ kind: crate::core::LookupKind::Pair, table_id: {table_id}, bit_width: {bit_width}, first_key_order: None }}"
        )
    } else if let Some(name) = &field.enum_indirect_name {
        let table_id = lookups.triplet.get(name).ok_or_else(|| BuildError::UnknownLookupTable {
            pgn: pgn_id,
            field: field.id.clone(),
            table: name.clone(),
        })?;
        let first_key_order = field
            .enum_indirect_field_order
            .map(|o| format!("Some({o})"))
            .unwrap_or_else(|| "None".to_string());
        format!(
            "crate::core::LookupHandle {{ kind: crate::core::LookupKind::Triplet, table_id: {table_id}, bit_width: {bit_width}, first_key_order: {first_key_order} }}"
        )
    } else if let Some(name) = &field.enum_bit_name {
        let table_id = lookups.bit.get(name).ok_or_else(|| BuildError::UnknownLookupTable {
            pgn: pgn_id,
            field: field.id.clone(),
            table: name.clone(),
        })?;
        format!(
            "crate::core::LookupHandle {{ kind: crate::core::LookupKind::Bit, table_id: {table_id}, bit_width: {bit_width}, first_key_order: None }}"
        )
    } else if let Some(name) = &field.enum_fieldtype_name {
        let table_id = lookups.fieldtype.get(name).ok_or_else(|| BuildError::UnknownLookupTable {
            pgn: pgn_id,
            field: field.id.clone(),
            table: name.clone(),
        })?;
        format!(
            "crate::core::LookupHandle {{ kind: crate::core::LookupKind::FieldType, table_id: {table_id}, bit_width: {bit_width}, first_key_order: None }}"
        )
    } else {
        "crate::core::LookupHandle::NONE".to_string()
    };

    writeln!(out, "\t\t\tcrate::core::FieldDef {{")?;
    writeln!(out, "\t\t\t\torder: {},", field.order)?;
    writeln!(out, "\t\t\t\tid: {:?},", field.id)?;
    writeln!(out, "\t\t\t\tname: {:?},", field.name)?;
    writeln!(out, "\t\t\t\tdescription: {},", opt_str(&field.description))?;
    writeln!(out, "\t\t\t\tkind: crate::core::FieldKind::{kind},")?;
    writeln!(out, "\t\t\t\tbits: {bits},")?;
    writeln!(out, "\t\t\t\tsigned: {},", field.signed)?;
    writeln!(out, "\t\t\t\tresolution: {:?}_f64,", field.resolution.unwrap_or(1.0))?;
    writeln!(out, "\t\t\t\toffset: {},", field.offset.unwrap_or(0))?;
    writeln!(out, "\t\t\t\tunit: {},", opt_str(&field.unit))?;
    writeln!(out, "\t\t\t\tphysical_quantity: {},", opt_str(&field.physical_quantity))?;
    writeln!(out, "\t\t\t\trange_min: {},", opt_f64(field.range_min))?;
    writeln!(out, "\t\t\t\trange_max: {},", opt_f64(field.range_max))?;
    writeln!(out, "\t\t\t\tlookup: {lookup},")?;
    writeln!(out, "\t\t\t\tproprietary: {},", field.proprietary)?;
    writeln!(
        out,
        "\t\t\t\tlength_from_previous_field: {},",
        field.length_from_previous_field
    )?;
    writeln!(out, "\t\t\t}},")?;
    Ok(())
}

fn field_kind(raw: &str) -> &'static str {
    match raw {
        "NUMBER" => "Number",
        "FLOAT" => "Float",
        "DECIMAL" => "Decimal",
        "LOOKUP" => "Lookup",
        "INDIRECT_LOOKUP" => "IndirectLookup",
        "BITLOOKUP" => "BitLookup",
        "PGN" => "Pgn",
        "DATE" => "Date",
        "TIME" => "Time",
        "DURATION" => "Duration",
        "LATITUDE" => "Latitude",
        "LONGITUDE" => "Longitude",
        "MMSI" => "Mmsi",
        "STRING_FIX" => "StringFix",
        "STRING_LZ" => "StringLz",
        "STRING_LAU" => "StringLau",
        "BINARY" => "Binary",
        "RESERVED" => "Reserved",
        "SPARE" => "Spare",
        "ISO_NAME" => "IsoName",
        "KEY_VALUE" => "KeyValue",
        "VARIABLE" => "Variable",
        "FIELDTYPE" => "FieldType",
        _ => "Unimplemented",
    }
}

fn opt_str(v: &Option<String>) -> String {
    match v {
        Some(s) => format!("Some({s:?})"),
        None => "None".to_string(),
    }
}

fn opt_f64(v: Option<f64>) -> String {
    match v {
        Some(f) => format!("Some({f:?}_f64)"),
        None => "None".to_string(),
    }
}

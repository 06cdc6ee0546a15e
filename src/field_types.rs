//! Closed registry binding a runtime-resolved FIELDTYPE name (e.g. `"FLOAT"`,
//! `"STRING_LZ"`) to the `FieldKind` + default bit width a following
//! KEY_VALUE field should use.
//!
//! The field-type base-type chain is resolved once, at compile time, into
//! a single `match` over the canonical canboat type names, rather than
//! walked at runtime.
use crate::core::FieldKind;

/// Defaults a FIELDTYPE lookup hands to the next KEY_VALUE field.
#[derive(Debug, Clone, Copy)]
pub struct FieldTypeDescriptor {
    pub kind: FieldKind,
    /// Default bit width, when the type implies a fixed size (e.g. FLOAT).
    pub bits: Option<u32>,
    pub signed: bool,
}

/// Resolve a canonical field-type name (as produced by a `LookupFieldTypeEnumeration`)
/// to its descriptor. Returns `None` for unrecognized names, which the
/// decoder treats as `FieldDecodeError::UnsupportedFieldKind`.
pub fn by_name(name: &str) -> Option<FieldTypeDescriptor> {
    let (kind, bits, signed) = match name {
        "NUMBER" | "INTEGER" => (FieldKind::Number, None, true),
        "FLOAT" => (FieldKind::Float, Some(32), true),
        "DECIMAL" => (FieldKind::Decimal, None, false),
        "LOOKUP" => (FieldKind::Lookup, None, false),
        "BITLOOKUP" => (FieldKind::BitLookup, None, false),
        "INDIRECT_LOOKUP" => (FieldKind::IndirectLookup, None, false),
        "DATE" => (FieldKind::Date, Some(16), false),
        "TIME" => (FieldKind::Time, Some(32), false),
        "DURATION" => (FieldKind::Duration, None, false),
        "LATITUDE" => (FieldKind::Latitude, Some(32), true),
        "LONGITUDE" => (FieldKind::Longitude, Some(32), true),
        "MMSI" => (FieldKind::Mmsi, Some(32), false),
        "BINARY" => (FieldKind::Binary, None, false),
        "STRING_FIX" => (FieldKind::StringFix, None, false),
        "STRING_LZ" => (FieldKind::StringLz, None, false),
        "STRING_LAU" => (FieldKind::StringLau, None, false),
        _ => return None,
    };
    Some(FieldTypeDescriptor { kind, bits, signed })
}

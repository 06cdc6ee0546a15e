//! Defines the "data contract" between `build.rs` (the scribe) and the
//! decode/resolve/render/explain engine (the interpreter).
//!
//! `build.rs` generates the static `PGNS` catalogue and the lookup tables
//! that implement this contract. Nothing in `decode`, `resolver`, `render`
//! or `explain` knows about any single PGN by name; everything is driven
//! generically from these descriptors.

use bitflags::bitflags;

/// Maximum payload a single decode call will ever see (ISO-TP upper bound).
pub const MAX_PAYLOAD_BYTES: usize = 1785;

/// Semantic type of a field within a PGN. Mirrors the `FieldType` entries
/// found in canboat-shaped PGN definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Signed or unsigned integer; `is_signed` carries the distinction.
    Number,
    /// Floating-point value, 32-bit IEEE-754 little-endian.
    Float,
    /// BCD-style decimal digits.
    Decimal,
    /// Value is an index into a pair enumeration (n -> name).
    Lookup,
    /// Lookup resolved through another field's value (triplet enumerator).
    IndirectLookup,
    /// Bitfield where each individual bit is a flag.
    BitLookup,
    /// Encodes a Parameter Group Number controlling interactions.
    Pgn,
    /// Date stored as a day count since 1970-01-01 UTC. 16 bits.
    Date,
    /// Time since midnight UTC, resolution-scaled.
    Time,
    /// Duration, resolution depends on source width.
    Duration,
    /// Signed scaled geographic latitude.
    Latitude,
    /// Signed scaled geographic longitude.
    Longitude,
    /// Maritime Mobile Service Identity, 32-bit unsigned.
    Mmsi,
    /// Fixed-length ASCII string.
    StringFix,
    /// Variable-length string prefixed by a length byte, NUL-terminated.
    StringLz,
    /// Variable-length string prefixed by length and encoding bytes.
    StringLau,
    /// Raw binary block; length may be fixed, variable, or payload-filling.
    Binary,
    /// Reserved bits; skip when all-ones.
    Reserved,
    /// Spare bits; skip when zero.
    Spare,
    /// 64-bit device-identity field (ISO Address Claim NAME).
    IsoName,
    /// Value whose printer is bound by a preceding FIELDTYPE field.
    KeyValue,
    /// Value bound to `previousFieldType` + `previousLength`.
    Variable,
    /// Integer resolved through the field-type pair enumerator; stashes
    /// the resolved type name for a following KEY_VALUE field.
    FieldType,
    /// Field type not supported by this catalogue.
    Unimplemented,
}

/// Tag distinguishing how a field's enumerated value is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    None,
    Pair,
    Triplet,
    Bit,
    FieldType,
}

/// Process-static description of how a field's enumerated value resolves.
#[derive(Debug, Clone, Copy)]
pub struct LookupHandle {
    pub kind: LookupKind,
    /// Index into the generated lookup-table registry.
    pub table_id: u16,
    /// Bit width of the raw value fed to the lookup function.
    pub bit_width: u8,
    /// For `Triplet`, the order (1-based) of the field carrying the first key.
    pub first_key_order: Option<u16>,
}

impl LookupHandle {
    pub const NONE: LookupHandle = LookupHandle {
        kind: LookupKind::None,
        table_id: 0,
        bit_width: 0,
        first_key_order: None,
    };
}

/// Transport packet classification. Drives Explainer's v1 collapse and the
/// resolver's fallback-range admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketClass {
    Single,
    Fast,
    IsoTp,
    Mixed,
}

bitflags! {
    /// Completeness flags carried by a `PgnDef`, surfaced by the Explainer's
    /// text dump (Complete / Incomplete PGN grouping).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Completeness: u8 {
        const FIELDS_UNKNOWN         = 0b0000_0001;
        const FIELD_LENGTHS_UNKNOWN  = 0b0000_0010;
        const RESOLUTION_UNKNOWN     = 0b0000_0100;
        const LOOKUPS_UNKNOWN        = 0b0000_1000;
        const NOT_SEEN               = 0b0001_0000;
        const INTERVAL_UNKNOWN       = 0b0010_0000;
        const COMPLETE               = 0b0100_0000;
    }
}

/// Sentinel `FieldDef.bits` value meaning "variable length, resolved at
/// decode time" rather than a fixed bit count.
pub const VARIABLE_LENGTH: u32 = u32::MAX;

/// Sentinel repeat-group count-field index meaning "repeat until the
/// payload is exhausted".
pub const COUNT_UNTIL_EXHAUSTED: u16 = 0xFF;

/// Descriptor for a single PGN field.
#[derive(Debug)]
pub struct FieldDef {
    /// 1-based position within the PGN's field list.
    pub order: u16,
    pub id: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub kind: FieldKind,
    /// Bit width, or `VARIABLE_LENGTH`.
    pub bits: u32,
    pub signed: bool,
    /// Multiplicative resolution; `1.0` means "raw integer".
    pub resolution: f64,
    /// Additive Excess-K offset (0 = none, enables sign-extension instead).
    pub offset: i64,
    /// Unit string. A value beginning with `=` encodes a match constant
    /// (e.g. `"=128"`) rather than a physical unit.
    pub unit: Option<&'static str>,
    pub physical_quantity: Option<&'static str>,
    pub range_min: Option<f64>,
    pub range_max: Option<f64>,
    pub lookup: LookupHandle,
    pub proprietary: bool,
    /// True for the three AIS PGNs whose BINARY field's length is implied
    /// by a preceding field's decoded value rather than a fixed bit count.
    pub length_from_previous_field: bool,
}

impl FieldDef {
    /// True when this field's unit encodes a match constraint (`"=N"`).
    pub fn match_value(&self) -> Option<i64> {
        let unit = self.unit?;
        let digits = unit.strip_prefix('=')?;
        digits.parse::<i64>().ok()
    }
}

/// Describes a repeating field set within a PGN.
#[derive(Debug)]
pub struct RepeatGroup {
    /// 1-based order of the first field in the group.
    pub start_field_order: u16,
    /// Number of consecutive fields forming one repetition.
    pub field_count: u16,
    /// 1-based order of the field carrying the repeat count, or
    /// `COUNT_UNTIL_EXHAUSTED`.
    pub count_field_order: u16,
}

/// Descriptor for an entire PGN schema entry.
#[derive(Debug)]
pub struct PgnDef {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub explanation: Option<&'static str>,
    pub url: Option<&'static str>,
    pub packet_class: PacketClass,
    pub completeness: Completeness,
    /// Transmission interval in ms; 0 = unknown, 0xFFFF = on-demand.
    pub interval_ms: u16,
    pub repeat_groups: [Option<RepeatGroup>; 2],
    pub fields: &'static [FieldDef],
    pub fallback: bool,
    pub has_match_fields: bool,
}

impl PgnDef {
    /// Fixed byte length implied by summing non-variable field widths up to
    /// the first repeating group, or `None` if the PGN is not fixed-length.
    pub fn fixed_length_bytes(&self) -> Option<u16> {
        if self.fields.iter().any(|f| f.bits == VARIABLE_LENGTH) {
            return None;
        }
        let total_bits: u32 = self.fields.iter().map(|f| f.bits).sum();
        if total_bits % 8 != 0 {
            return None;
        }
        Some((total_bits / 8) as u16)
    }
}

//! XML assembly for the three explainer dialects. Element
//! ordering is controlled by hand so the three dialects (generic, Actisense,
//! iKonvert) and both schema versions (v1/v2) can diverge per field without
//! fighting a derived serializer; `quick_xml::escape::escape` supplies the
//! `& < > "` escaping each dialect requires.
use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::config::{CamelMode, ExplainDialect, SchemaVersion};
use crate::core::{FieldKind, PacketClass, PgnDef};
use crate::error::ExplainError;

use super::camel::camelize;

/// PGN ids at and above this value are Actisense-proprietary range PGNs
/// (generic below; Actisense from here up to `IKONVERT_BEM`).
const ACTISENSE_BEM: u32 = 65280;
/// PGN ids at and above this value are iKonvert-proprietary range PGNs.
const IKONVERT_BEM: u32 = 65380;

fn dialect_for(pgn_id: u32) -> ExplainDialect {
    if pgn_id >= IKONVERT_BEM {
        ExplainDialect::IKonvert
    } else if pgn_id >= ACTISENSE_BEM {
        ExplainDialect::Actisense
    } else {
        ExplainDialect::Generic
    }
}

fn el(out: &mut String, name: &str, text: &str) {
    let _ = write!(out, "<{name}>{}</{name}>\n", escape(text));
}

fn packet_class_text(class: PacketClass, version: SchemaVersion) -> &'static str {
    match (class, version) {
        (PacketClass::Single, _) => "Single",
        (PacketClass::Fast, _) => "Fast",
        (PacketClass::IsoTp, SchemaVersion::V1) => "ISO",
        (PacketClass::IsoTp, SchemaVersion::V2) => "ISOTP",
        (PacketClass::Mixed, SchemaVersion::V1) => "Fast",
        (PacketClass::Mixed, SchemaVersion::V2) => "Mixed",
    }
}

/// v1's field-type mapping collapses `Latitude`/`Longitude` into a single
/// alias and splits it back out by field name inspection — the inverse of
/// the runtime's own split, kept here since only the explainer's v1 dialect
/// needs it.
fn v1_field_type_name(kind: FieldKind, field_name: &str) -> &'static str {
    match kind {
        FieldKind::Latitude | FieldKind::Longitude => {
            if field_name.to_ascii_lowercase().contains("ongit") {
                "Longitude"
            } else {
                "Latitude"
            }
        }
        other => v2_field_type_name(other),
    }
}

/// v2's field-type mapping: `Latitude`/`Longitude` are distinct `FieldKind`
/// variants already, so no name-sniffing is needed to tell them apart.
fn v2_field_type_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Latitude => "Latitude",
        FieldKind::Longitude => "Longitude",
        FieldKind::Number => "Number",
        FieldKind::Float => "Float",
        FieldKind::Decimal => "Decimal",
        FieldKind::Lookup => "Lookup",
        FieldKind::IndirectLookup => "Indirect Lookup",
        FieldKind::BitLookup => "Bitfield",
        FieldKind::Pgn => "PGN",
        FieldKind::Date => "Date",
        FieldKind::Time => "Time",
        FieldKind::Duration => "Duration",
        FieldKind::Mmsi => "MMSI",
        FieldKind::StringFix => "String with length",
        FieldKind::StringLz => "ASCII string starting with length byte",
        FieldKind::StringLau => "ASCII or UNICODE string starting with length and control byte",
        FieldKind::Binary => "Binary data",
        FieldKind::Reserved => "Reserved",
        FieldKind::Spare => "Spare",
        FieldKind::IsoName => "ISO Name",
        FieldKind::KeyValue => "Key/value",
        FieldKind::Variable => "Variable",
        FieldKind::FieldType => "Field Index",
        FieldKind::Unimplemented => "Unknown",
    }
}

fn write_field(out: &mut String, field: &crate::core::FieldDef, camel: CamelMode, proprietary_pgn: bool, version: SchemaVersion, deterministic_offset: &mut Option<u32>) {
    out.push_str("<Field>\n");
    let _ = write!(out, "<Order>{}</Order>\n", field.order);
    el(out, "Id", &camelize(field.name, camel));
    el(out, "Name", field.name);
    if let Some(desc) = field.description {
        el(out, "Description", desc);
    }
    if field.bits == crate::core::VARIABLE_LENGTH {
        out.push_str("<BitLengthVariable>true</BitLengthVariable>\n");
        *deterministic_offset = None;
    } else {
        let _ = write!(out, "<BitLength>{}</BitLength>\n", field.bits);
        if let Some(offset) = deterministic_offset {
            let _ = write!(out, "<BitOffset>{offset}</BitOffset>\n");
            *offset += field.bits;
        }
    }
    if proprietary_pgn && field.proprietary {
        el(out, "Condition", "PGNIsProprietary");
    }
    if let Some(target) = field.match_value() {
        let _ = write!(out, "<Match>{target}</Match>\n");
    }
    if let Some(unit) = field.unit {
        if field.match_value().is_none() {
            el(out, "Unit", unit);
        }
    }
    if field.resolution != 1.0 {
        let _ = write!(out, "<Resolution>{}</Resolution>\n", field.resolution);
    }
    if field.signed {
        out.push_str("<Signed>true</Signed>\n");
    }
    if field.offset != 0 {
        let _ = write!(out, "<Offset>{}</Offset>\n", field.offset);
    }
    if let Some(min) = field.range_min {
        let _ = write!(out, "<RangeMin>{min}</RangeMin>\n");
    }
    if let Some(max) = field.range_max {
        let _ = write!(out, "<RangeMax>{max}</RangeMax>\n");
    }
    match version {
        SchemaVersion::V1 => el(out, "FieldType", v1_field_type_name(field.kind, field.name)),
        SchemaVersion::V2 => el(out, "FieldType", v2_field_type_name(field.kind)),
    }
    if let Some(pq) = field.physical_quantity {
        el(out, "PhysicalQuantity", pq);
    }
    out.push_str("</Field>\n");
}

fn write_pgn(out: &mut String, pgn: &PgnDef, camel: CamelMode, version: SchemaVersion) {
    out.push_str("<PGNInfo>\n");
    let _ = write!(out, "<PGN>{}</PGN>\n", pgn.id);
    el(out, "Id", &camelize(pgn.name, camel));
    el(out, "Description", pgn.description);
    if version == SchemaVersion::V2 {
        if let Some(explanation) = pgn.explanation {
            el(out, "Explanation", explanation);
        }
        if let Some(url) = pgn.url {
            el(out, "URL", url);
        }
    }
    el(out, "Type", packet_class_text(pgn.packet_class, version));
    if version == SchemaVersion::V2 {
        let _ = write!(out, "<Complete>{}</Complete>\n", pgn.completeness.contains(crate::core::Completeness::COMPLETE));
        if pgn.fallback {
            out.push_str("<Fallback>true</Fallback>\n");
        }
        if pgn.interval_ms != 0 {
            let _ = write!(out, "<TransmissionInterval>{}</TransmissionInterval>\n", pgn.interval_ms);
        }
    }
    for (slot, group) in pgn.repeat_groups.iter().enumerate() {
        if let Some(group) = group {
            let n = slot + 1;
            let _ = write!(out, "<RepeatingFieldSet{n}Size>{}</RepeatingFieldSet{n}Size>\n", group.field_count);
            let _ = write!(out, "<RepeatingFieldSet{n}StartField>{}</RepeatingFieldSet{n}StartField>\n", group.start_field_order);
            let _ = write!(out, "<RepeatingFieldSet{n}CountField>{}</RepeatingFieldSet{n}CountField>\n", group.count_field_order);
        }
    }
    let proprietary_pgn = pgn.fields.iter().any(|f| f.proprietary);
    out.push_str("<Fields>\n");
    let mut deterministic_offset = Some(0u32);
    for field in pgn.fields {
        write_field(out, field, camel, proprietary_pgn, version, &mut deterministic_offset);
    }
    out.push_str("</Fields>\n");
    out.push_str("</PGNInfo>\n");
}

fn write_text_element(out: &mut String, name: &str, text: &str) {
    el(out, name, text);
}

fn write_physical_quantities(out: &mut String) {
    out.push_str("<PhysicalQuantities>\n");
    for name in ["ANGLE", "DISTANCE", "SPEED", "FREQUENCY", "VOLTAGE", "CURRENT", "TEMPERATURE", "PRESSURE"] {
        out.push_str("<PhysicalQuantity>\n");
        el(out, "Name", name);
        out.push_str("</PhysicalQuantity>\n");
    }
    out.push_str("</PhysicalQuantities>\n");
}

fn write_field_types(out: &mut String) {
    out.push_str("<FieldTypes>\n");
    for name in ["NUMBER", "FLOAT", "DECIMAL", "LOOKUP", "BITLOOKUP", "INDIRECT_LOOKUP", "DATE", "TIME", "DURATION", "LATITUDE", "LONGITUDE", "MMSI", "BINARY", "RESERVED", "SPARE", "STRING_FIX", "STRING_LZ", "STRING_LAU", "KEY_VALUE", "VARIABLE", "FIELDTYPE"] {
        out.push_str("<FieldType>\n");
        el(out, "Name", name);
        out.push_str("</FieldType>\n");
    }
    out.push_str("</FieldTypes>\n");
}

fn write_missing_enumerations(out: &mut String) {
    out.push_str("<MissingEnumerations>\n");
    for (value, label) in [(0i64, "Unknown"), (1, "ERROR"), (2, "RESERVED")] {
        out.push_str("<MissingEnumeration>\n");
        let _ = write!(out, "<Value>{value}</Value>\n");
        el(out, "Name", label);
        out.push_str("</MissingEnumeration>\n");
    }
    out.push_str("</MissingEnumerations>\n");
}

/// Assemble the full `<PGNDefinitions>` document for one dialect/version.
/// `dialect` selects which of the three disjoint PGN-id ranges is included;
/// `ExplainDialect::Generic` includes every PGN below `ACTISENSE_BEM`.
pub fn write_pgn_definitions(pgns: &[PgnDef], dialect: ExplainDialect, version: SchemaVersion, camel: CamelMode) -> Result<String, ExplainError> {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<PGNDefinitions>\n");
    if version == SchemaVersion::V2 {
        write_text_element(&mut out, "SchemaVersion", "2.0");
    }
    write_text_element(&mut out, "Comment", "Generated PGN catalogue");
    write_text_element(&mut out, "CreatorCode", "n2k-pgn");
    write_text_element(&mut out, "License", "MIT");
    write_text_element(&mut out, "Version", env!("CARGO_PKG_VERSION"));
    write_text_element(&mut out, "Copyright", "");

    write_physical_quantities(&mut out);
    write_field_types(&mut out);
    write_missing_enumerations(&mut out);
    // Enumeration textual content is explicitly out of scope; the
    // three lookup sections are valid, empty containers rather than a full
    // enumerated legend.
    out.push_str("<LookupEnumerations/>\n<LookupIndirectEnumerations/>\n<LookupBitEnumerations/>\n");

    out.push_str("<PGNs>\n");
    for pgn in pgns.iter().filter(|p| dialect_for(p.id) == dialect) {
        write_pgn(&mut out, pgn, camel, version);
    }
    out.push_str("</PGNs>\n");
    out.push_str("</PGNDefinitions>\n");
    Ok(out)
}

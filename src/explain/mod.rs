//! Explainer: serializes the schema catalogue into a text dump
//! or one of three XML dialects, bypassing the decoder entirely.
mod camel;
mod xml;

use crate::config::{CamelMode, ExplainDialect, SchemaVersion};
use crate::core::{Completeness, PgnDef};
use crate::error::ExplainError;

/// `-explain`: a human-readable dump grouped into Complete / Incomplete
/// PGNs, each with its fields and their bit length, unit, resolution,
/// signedness, offset, and enumeration (when any).
pub fn explain_text(pgns: &[PgnDef]) -> String {
    let mut out = String::new();
    out.push_str("PGN definitions\n===============\n\n");

    for (heading, want_complete) in [("Complete PGNs", true), ("Incomplete PGNs", false)] {
        out.push_str(heading);
        out.push_str("\n");
        out.push_str(&"-".repeat(heading.len()));
        out.push('\n');
        for pgn in pgns.iter().filter(|p| p.completeness.contains(Completeness::COMPLETE) == want_complete) {
            write_pgn_text(&mut out, pgn);
        }
        out.push('\n');
    }
    out
}

fn write_pgn_text(out: &mut String, pgn: &PgnDef) {
    out.push_str(&format!("PGN: {0} / {0:o} / 0x{0:x} - {1}\n", pgn.id, pgn.description));
    if let Some(explanation) = pgn.explanation {
        out.push_str(&format!("  {explanation}\n"));
    }
    if let Some(len) = pgn.fixed_length_bytes() {
        out.push_str(&format!("  Length: {len} bytes\n"));
    }
    for (slot, group) in pgn.repeat_groups.iter().enumerate() {
        if let Some(group) = group {
            out.push_str(&format!(
                "  Repeating group {}: fields {}..{} count field {}\n",
                slot + 1,
                group.start_field_order,
                group.start_field_order + group.field_count,
                group.count_field_order
            ));
        }
    }
    out.push_str(&format!("  Interval: {} ms\n", pgn.interval_ms));
    for field in pgn.fields {
        out.push_str(&format!(
            "    {}: Bits={} Unit={} Resolution={} Signed={} Offset={}\n",
            field.name,
            field.bits,
            field.unit.unwrap_or("-"),
            field.resolution,
            field.signed,
            field.offset,
        ));
    }
    out.push('\n');
}

/// `-explain-xml` / `-explain-ngt-xml` / `-explain-ik-xml`: the corresponding
/// XML dialect, `-v1` selecting the legacy schema variant.
pub fn explain_xml(pgns: &[PgnDef], dialect: ExplainDialect, version: SchemaVersion, camel: CamelMode) -> Result<String, ExplainError> {
    xml::write_pgn_definitions(pgns, dialect, version, camel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    /// Every `&`, `<`, `>`, `"` occurring in user-supplied
    /// description/name text is escaped before any raw occurrence survives
    /// into the document.
    #[test]
    fn xml_escapes_reserved_characters() {
        let xml = explain_xml(catalog::all(), ExplainDialect::Generic, SchemaVersion::V2, CamelMode::None).unwrap();
        // A raw, unescaped ampersand would only appear as part of an entity
        // (e.g. "&amp;") if escaping ran correctly everywhere.
        for (i, _) in xml.match_indices('&') {
            let rest = &xml[i..];
            assert!(
                rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;") || rest.starts_with("&quot;") || rest.starts_with("&apos;"),
                "unescaped ampersand at byte {i}"
            );
        }
    }

    #[test]
    fn xml_is_one_well_formed_root_element() {
        let xml = explain_xml(catalog::all(), ExplainDialect::Generic, SchemaVersion::V2, CamelMode::None).unwrap();
        assert_eq!(xml.matches("<PGNDefinitions>").count(), 1);
        assert_eq!(xml.matches("</PGNDefinitions>").count(), 1);
    }
}

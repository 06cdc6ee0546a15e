//! Generated PGN catalogue: a single flat, sorted `&'static [PgnDef]` built
//! by `build.rs` from `build_core/var/pgn_catalog.json`.
use crate::core::PgnDef;

include!(concat!(env!("OUT_DIR"), "/generated_catalog.rs"));

/// The full, PGN-id-ascending catalogue. `PGNS` is declared by the generated
/// file included above.
pub fn all() -> &'static [PgnDef] {
    PGNS
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sorted ascending by id, fallback entries last within an id group.
    #[test]
    fn catalog_is_sorted_by_id() {
        let pgns = all();
        for w in pgns.windows(2) {
            assert!(w[0].id <= w[1].id, "catalog not sorted at ids {} {}", w[0].id, w[1].id);
        }
    }

    /// Non-variable field sizes summed up to the first repeat group form a
    /// multiple of 8 bits.
    #[test]
    fn fixed_prefix_is_byte_aligned() {
        for pgn in all() {
            let prefix_end = pgn
                .repeat_groups
                .iter()
                .flatten()
                .map(|g| g.start_field_order)
                .min();
            let mut bits = 0u32;
            for field in pgn.fields {
                if let Some(end) = prefix_end {
                    if field.order >= end {
                        break;
                    }
                }
                if field.bits == crate::core::VARIABLE_LENGTH {
                    bits = 0;
                    break;
                }
                bits += field.bits;
            }
            if bits > 0 {
                assert_eq!(bits % 8, 0, "PGN {} fixed prefix not byte-aligned ({bits} bits)", pgn.id);
            }
        }
    }

    /// `has_match_fields` is true iff some field's unit starts with `=`.
    #[test]
    fn has_match_fields_is_consistent() {
        for pgn in all() {
            let any_match = pgn.fields.iter().any(|f| f.match_value().is_some());
            assert_eq!(pgn.has_match_fields, any_match, "PGN {} has_match_fields mismatch", pgn.id);
        }
    }
}

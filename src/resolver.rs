//! Resolves a PGN id + payload to the best-matching `PgnDef`.
use crate::bits;
use crate::catalog;
use crate::core::PgnDef;
use crate::error::ResolveError;

/// PDU2 (broadcast / group-extension) PGNs have a PDU format byte (bits 8-15
/// of the 18-bit id) of 240 (0xF0) or above; PDU1 PGNs carry an explicit
/// destination address instead and the byte is below that.
fn is_pdu2(id: u32) -> bool {
    ((id >> 8) & 0xFF) >= 0xF0
}

/// Given a candidate's advertised match fields, extract and compare each one
/// against its `"=N"` target. All must match for the candidate to apply.
fn matches_fixed_fields(candidate: &PgnDef, payload: &[u8]) -> bool {
    let mut bit_cursor = 0usize;
    for field in candidate.fields {
        let Some(target) = field.match_value() else {
            if field.bits != crate::core::VARIABLE_LENGTH {
                bit_cursor += field.bits as usize;
            }
            continue;
        };
        let Ok(extracted) = bits::extract(payload, bit_cursor, field.bits.min(64) as u8, field.signed, field.offset)
        else {
            return false;
        };
        if extracted.value != target {
            return false;
        }
        bit_cursor += field.bits as usize;
    }
    true
}

/// Proprietary PGNs (e.g. 126208 Command/Request/Acknowledge) may also be
/// disambiguated by an ISO-command-style parameter list: payload[0] is a
/// parameter count, followed by `(field order, value)` pairs. A candidate
/// applies when every advertised parameter's value matches that field's
/// `"=N"` target.
fn matches_proprietary_parameters(candidate: &PgnDef, payload: &[u8]) -> bool {
    let Some(&count) = payload.first() else {
        return false;
    };
    let mut cursor = 1usize;
    for _ in 0..count {
        let Some(&field_order) = payload.get(cursor) else {
            return false;
        };
        let Some(field) = candidate.fields.iter().find(|f| f.order as u8 == field_order) else {
            return false;
        };
        let width_bytes = (field.bits.min(64) as usize).div_ceil(8).max(1);
        let Some(value_bytes) = payload.get(cursor + 1..cursor + 1 + width_bytes) else {
            return false;
        };
        let Ok(extracted) = bits::extract(value_bytes, 0, field.bits.min(64) as u8, field.signed, field.offset)
        else {
            return false;
        };
        if let Some(target) = field.match_value() {
            if extracted.value != target {
                return false;
            }
        }
        cursor += 1 + width_bytes;
    }
    true
}

/// Find the best catch-all fallback at or below `pgn_id` whose PDU class
/// (PDU1 vs PDU2) matches the request.
fn find_catch_all(pgn_id: u32) -> Option<&'static PgnDef> {
    let want_pdu2 = is_pdu2(pgn_id);
    catalog::all()
        .iter()
        .rev()
        .find(|p| p.fallback && p.id <= pgn_id && is_pdu2(p.id) == want_pdu2)
}

/// Given a PGN id and payload, select the schema entry that describes it.
///
/// Binary-search the sorted catalogue for an exact id
/// match; among same-id variants, walk match fields (including the
/// proprietary parameter-list form) to disambiguate; fall back to the
/// nearest PDU-class-compatible catch-all otherwise.
pub fn resolve(pgn_id: u32, payload: &[u8]) -> Result<&'static PgnDef, ResolveError> {
    let pgns = catalog::all();
    let start = pgns.partition_point(|p| p.id < pgn_id);
    let end = pgns[start..].partition_point(|p| p.id == pgn_id) + start;
    let candidates = &pgns[start..end];

    let real_candidates: Vec<&PgnDef> = candidates.iter().filter(|c| !c.fallback).collect();

    if !real_candidates.is_empty() {
        for candidate in &real_candidates {
            if !candidate.has_match_fields {
                return Ok(candidate);
            }
            if matches_fixed_fields(candidate, payload) {
                return Ok(candidate);
            }
            if candidate.fields.iter().any(|f| f.proprietary) && matches_proprietary_parameters(candidate, payload) {
                return Ok(candidate);
            }
        }
    }

    find_catch_all(pgn_id).ok_or(ResolveError::NoFallback { pgn: pgn_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The resolver is total over the full 18-bit PGN space, given a
    /// catalogue with a catch-all fallback in every PDU-class range it
    /// advertises support for.
    #[test]
    fn resolver_is_total_for_represented_ranges() {
        // Every PGN explicitly present in the catalogue resolves to itself
        // or a same-id variant, never erroring for lack of a match.
        for pgn in catalog::all().iter().filter(|p| !p.fallback) {
            let payload = vec![0u8; 32];
            let got = resolve(pgn.id, &payload);
            assert!(got.is_ok(), "PGN {} failed to resolve", pgn.id);
        }
    }

    #[test]
    fn command_pgn_disambiguates_by_proprietary_parameter_list() {
        let command = catalog::all().iter().find(|p| p.id == 126208 && !p.fallback).expect("126208 catalog entry");
        // count=1, (field order 1, value 1) meaning Function Code (order 1) == 1 (Command)
        let payload = [1u8, 1, 1];
        assert!(matches_proprietary_parameters(command, &payload));
        let wrong = [1u8, 1, 0];
        assert!(!matches_proprietary_parameters(command, &wrong));
    }
}

//! Decoder: walks a resolved `PgnDef` against a payload, sequencing fields,
//! honoring repeating groups, and driving the renderer.
mod printers;

use crate::core::{PgnDef, COUNT_UNTIL_EXHAUSTED, VARIABLE_LENGTH};
use crate::error::DecodeError;
use crate::render::Renderer;

pub use printers::PrinterOutcome;

/// Carries state that later fields in the same decode depend on: repeat
/// counts, the most recently extracted integer (for variable-length
/// successors), and the FIELDTYPE/length stashed for a following KEY_VALUE
/// field, threaded explicitly rather than through statics.
#[derive(Debug, Default)]
pub struct DecodeContext {
    pub repeat_counts: [u32; 2],
    pub previous_value: Option<i64>,
    pub previous_field_type: Option<&'static str>,
    pub previous_length: Option<u32>,
}

/// Walk `pgn`'s field list against `payload`, writing rendered fields into
/// `renderer`. Never returns `Err` for malformed wire data — truncation,
/// reserved values, and match mismatches collapse into skipped fields or an
/// early, still-balanced stop. `Err` is reserved
/// for decoder misuse (an empty schema).
pub fn decode(pgn: &'static PgnDef, payload: &[u8], renderer: &mut Renderer) -> Result<(), DecodeError> {
    if pgn.fields.is_empty() {
        return Err(DecodeError::EmptySchema);
    }

    let mut ctx = DecodeContext::default();
    let mut bit_cursor = 0usize;
    let mut i = 0usize;

    while i < pgn.fields.len() {
        let order = pgn.fields[i].order;

        if let Some((slot, group)) = pgn
            .repeat_groups
            .iter()
            .enumerate()
            .find_map(|(slot, g)| g.as_ref().filter(|g| g.start_field_order == order).map(|g| (slot, g)))
        {
            let group_fields = &pgn.fields[i..(i + group.field_count as usize).min(pgn.fields.len())];
            let bounded = group.count_field_order != COUNT_UNTIL_EXHAUSTED;
            let count = ctx.repeat_counts[slot];

            renderer.begin_scope(if slot == 0 { "list" } else { "list2" }, true).map_err(DecodeError::Render)?;

            let mut iteration = 0u32;
            loop {
                if bounded && iteration >= count {
                    break;
                }
                if bit_cursor >= payload.len() * 8 {
                    break;
                }
                renderer.begin_scope("", false).map_err(DecodeError::Render)?;
                let mut truncated = false;
                for field in group_fields {
                    match printers::decode_field(field, payload, bit_cursor, &mut ctx, renderer) {
                        Ok(PrinterOutcome::Rendered { bits_consumed } | PrinterOutcome::Skipped { bits_consumed }) => {
                            bit_cursor += bits_consumed as usize;
                        }
                        Err(_) => {
                            truncated = true;
                            break;
                        }
                    }
                }
                renderer.end_scope().map_err(DecodeError::Render)?;
                iteration += 1;
                if truncated {
                    break;
                }
            }
            renderer.end_scope().map_err(DecodeError::Render)?;
            i += group.field_count as usize;
            continue;
        }

        let field = &pgn.fields[i];
        match printers::decode_field(field, payload, bit_cursor, &mut ctx, renderer) {
            Ok(PrinterOutcome::Rendered { bits_consumed } | PrinterOutcome::Skipped { bits_consumed }) => {
                bit_cursor += bits_consumed as usize;
                for (slot, group) in pgn.repeat_groups.iter().enumerate() {
                    if let Some(group) = group {
                        if group.count_field_order == field.order {
                            if let Some(v) = ctx.previous_value {
                                ctx.repeat_counts[slot] = v.max(0) as u32;
                            }
                        }
                    }
                }
            }
            Err(_) => {
                tracing::debug!(pgn = pgn.id, field = field.name, "extraction truncated, stopping decode");
                break;
            }
        }

        i += 1;
        if field.bits == VARIABLE_LENGTH {
            // bits_consumed already folded bit_cursor above; nothing further.
        }
    }

    Ok(())
}

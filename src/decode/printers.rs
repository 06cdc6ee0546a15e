//! Per-`FieldKind` printer dispatch. Each printer extracts its
//! field's bits, applies the type's rendering rule, and tells the caller how
//! many bits it consumed — which may differ from `field.bits` for
//! length-prefixed strings, KEY_VALUE, and VARIABLE fields.
use crate::bits::{self, Extracted};
use crate::core::{FieldDef, FieldKind, LookupKind};
use crate::error::{BitExtractError, FieldDecodeError};
use crate::field_types;
use crate::lookups;
use crate::render::Renderer;

use super::DecodeContext;

pub enum PrinterOutcome {
    Rendered { bits_consumed: u32 },
    Skipped { bits_consumed: u32 },
}

fn raw_classification(field: &FieldDef, payload: &[u8], bit_cursor: usize) -> Result<(crate::bits::Reserved, i64), FieldDecodeError> {
    let width = field.bits.min(64) as u8;
    let raw = bits::extract(payload, bit_cursor, width, false, 0).map_err(FieldDecodeError::from)?;
    Ok((Extracted::classify(raw.value as u64, raw.max as u64), raw.value))
}

fn extract(field: &FieldDef, payload: &[u8], bit_cursor: usize) -> Result<Extracted, FieldDecodeError> {
    let width = field.bits.min(64) as u8;
    bits::extract(payload, bit_cursor, width, field.signed, field.offset).map_err(FieldDecodeError::from)
}

fn precision_for(resolution: f64) -> usize {
    if resolution <= 0.0 || resolution >= 1.0 {
        0
    } else {
        (-resolution.log10()).ceil().clamp(0.0, 9.0) as usize
    }
}

fn trim_string_bytes(bytes: &[u8]) -> &str {
    let end = bytes
        .iter()
        .rposition(|&b| !matches!(b, 0x00 | 0x20 | 0x40 | 0xFF) && !b.is_ascii_whitespace())
        .map(|p| p + 1)
        .unwrap_or(0);
    std::str::from_utf8(&bytes[..end]).unwrap_or("")
}

/// Decode one field at `bit_cursor`, writing it into `renderer` unless it is
/// skipped (reserved/spare default, or a failed non-fatal match). Returns
/// the number of bits the field occupied, which the caller advances the
/// cursor by.
pub fn decode_field(
    field: &FieldDef,
    payload: &[u8],
    bit_cursor: usize,
    ctx: &mut DecodeContext,
    renderer: &mut Renderer,
) -> Result<PrinterOutcome, FieldDecodeError> {
    match field.kind {
        FieldKind::Number | FieldKind::Mmsi => {
            let got = extract(field, payload, bit_cursor)?;
            ctx.previous_value = Some(got.value);
            if field.kind == FieldKind::Number {
                // A NUMBER field ahead of a KEY_VALUE/VARIABLE field (directly,
                // or across an intervening FIELDTYPE field in a Length/Type/
                // Value triplet) carries that field's length in bytes.
                ctx.previous_length = Some(got.value.max(0) as u32);
            }
            let (reserved, _) = raw_classification(field, payload, bit_cursor)?;
            if matches!(reserved, crate::bits::Reserved::Error | crate::bits::Reserved::Unknown) {
                let label = if matches!(reserved, crate::bits::Reserved::Error) { "ERROR" } else { "Unknown" };
                renderer.write_empty(field.name, label)?;
                return Ok(PrinterOutcome::Skipped { bits_consumed: field.bits });
            }
            if field.kind == FieldKind::Mmsi {
                renderer.write_text(field.name, &format!("{:09}", got.value))?;
            } else if field.resolution == 1.0 && field.offset == 0 {
                renderer.write_integer(field.name, got.value, field.unit)?;
            } else {
                let value = got.value as f64 * field.resolution;
                renderer.write_number(field.name, value, field.unit, precision_for(field.resolution))?;
            }
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::Float => {
            if bit_cursor % 8 != 0 || field.bits != 32 {
                return Err(FieldDecodeError::UnsupportedFieldKind(field.kind));
            }
            let start = bit_cursor / 8;
            let bytes: [u8; 4] = payload
                .get(start..start + 4)
                .ok_or(BitExtractError::OutOfBounds { start_bit: bit_cursor, bits: 32, available: payload.len() * 8 })?
                .try_into()
                .unwrap();
            let value = f32::from_le_bytes(bytes) as f64;
            renderer.write_number(field.name, value, field.unit, 6)?;
            Ok(PrinterOutcome::Rendered { bits_consumed: 32 })
        }

        FieldKind::Decimal => {
            let got = extract(field, payload, bit_cursor)?;
            let text = if got.value < 100 { format!("{:02}", got.value) } else { got.value.to_string() };
            renderer.write_text(field.name, &text)?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::Lookup => {
            let got = extract(field, payload, bit_cursor)?;
            if let Some(target) = field.match_value() {
                if got.value != target {
                    return Ok(PrinterOutcome::Skipped { bits_consumed: field.bits });
                }
            }
            let name = lookups::pair(field.lookup.table_id, got.value);
            renderer.write_lookup(field.name, got.value, name)?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::IndirectLookup => {
            let got = extract(field, payload, bit_cursor)?;
            let key_value = field
                .lookup
                .first_key_order
                .and_then(|_order| ctx.previous_value)
                .unwrap_or(0);
            let name = lookups::triplet(field.lookup.table_id, key_value, got.value);
            renderer.write_lookup(field.name, got.value, name)?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::BitLookup => {
            let got = extract(field, payload, bit_cursor)?;
            renderer.begin_scope(field.name, true)?;
            for bit in 0..field.bits.min(64) as u8 {
                if got.value & (1i64 << bit) != 0 {
                    let name = lookups::bit(field.lookup.table_id, bit).unwrap_or("");
                    if !name.is_empty() {
                        renderer.write_text("", name)?;
                    }
                }
            }
            renderer.end_scope()?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::Pgn => {
            let got = extract(field, payload, bit_cursor)?;
            renderer.write_integer(field.name, got.value, None)?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::Date => {
            let got = extract(field, payload, bit_cursor)?;
            if got.value >= 0xFFFD {
                renderer.write_empty(field.name, "Unknown")?;
                return Ok(PrinterOutcome::Skipped { bits_consumed: field.bits });
            }
            let date = chrono_like_date(got.value as i64);
            renderer.write_text(field.name, &date)?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::Time | FieldKind::Duration => {
            let got = extract(field, payload, bit_cursor)?;
            let units_per_second = if field.resolution > 0.0 { 1.0 / field.resolution } else { 1.0 };
            let total_seconds = got.value as f64 / units_per_second;
            let sign = if total_seconds < 0.0 { "-" } else { "" };
            let total_seconds = total_seconds.abs();
            let hours = (total_seconds / 3600.0) as u64;
            let minutes = ((total_seconds % 3600.0) / 60.0) as u64;
            let seconds = total_seconds % 60.0;
            let frac_digits = units_per_second.log10().max(0.0).ceil() as usize;
            renderer.write_text(field.name, &format!("{sign}{hours}:{minutes:02}:{seconds:0width$.prec$}", width = frac_digits + 3, prec = frac_digits))?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::Latitude | FieldKind::Longitude => {
            let got = extract(field, payload, bit_cursor)?;
            let degrees = got.value as f64 * field.resolution;
            renderer.write_number(field.name, degrees, field.unit.or(Some("deg")), 7)?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::StringFix => {
            let start = bit_cursor / 8;
            let len = (field.bits / 8) as usize;
            let bytes = payload.get(start..start + len).ok_or(BitExtractError::OutOfBounds {
                start_bit: bit_cursor,
                bits: field.bits.min(u8::MAX as u32) as u8,
                available: payload.len() * 8,
            })?;
            renderer.write_text(field.name, trim_string_bytes(bytes))?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::StringLz => {
            let start = bit_cursor / 8;
            let &len = payload.get(start).ok_or(BitExtractError::OutOfBounds { start_bit: bit_cursor, bits: 8, available: payload.len() * 8 })?;
            let len = len as usize;
            let bytes = payload.get(start + 1..start + 1 + len).ok_or(BitExtractError::OutOfBounds {
                start_bit: bit_cursor,
                bits: (len as u8).saturating_mul(8),
                available: payload.len() * 8,
            })?;
            renderer.write_text(field.name, trim_string_bytes(bytes))?;
            Ok(PrinterOutcome::Rendered { bits_consumed: ((len + 1) * 8) as u32 })
        }

        FieldKind::StringLau => {
            let start = bit_cursor / 8;
            let &total_len = payload.get(start).ok_or(BitExtractError::OutOfBounds { start_bit: bit_cursor, bits: 8, available: payload.len() * 8 })?;
            let &encoding = payload.get(start + 1).ok_or(BitExtractError::OutOfBounds { start_bit: bit_cursor, bits: 16, available: payload.len() * 8 })?;
            if encoding > 1 {
                return Err(FieldDecodeError::EncodingUnsupported(encoding));
            }
            let payload_len = (total_len as usize).saturating_sub(2);
            let bytes = payload.get(start + 2..start + 2 + payload_len).ok_or(BitExtractError::OutOfBounds {
                start_bit: bit_cursor,
                bits: (payload_len as u8).saturating_mul(8),
                available: payload.len() * 8,
            })?;
            let text = if encoding == 0 {
                let units: Vec<u16> = bytes.chunks_exact(2).map(|c| u16::from_le_bytes([c[0], c[1]])).collect();
                String::from_utf16_lossy(&units)
            } else {
                String::from_utf8_lossy(bytes).into_owned()
            };
            renderer.write_text(field.name, text.trim_end_matches(['\0', ' ']))?;
            Ok(PrinterOutcome::Rendered { bits_consumed: (total_len as u32) * 8 })
        }

        FieldKind::Binary => {
            let bits_len = if field.length_from_previous_field {
                ctx.previous_value.unwrap_or(0).max(0) as u32 * 8
            } else if field.bits == crate::core::VARIABLE_LENGTH {
                (payload.len() * 8).saturating_sub(bit_cursor) as u32
            } else {
                field.bits
            };
            let (buffer, start_bit) = bits::adjust_data_len_start(payload, bit_cursor).ok_or(BitExtractError::OutOfBounds {
                start_bit: bit_cursor,
                bits: 0,
                available: payload.len() * 8,
            })?;
            let byte_len = (start_bit + bits_len as usize).div_ceil(8);
            let bytes = buffer.get(..byte_len).ok_or(BitExtractError::OutOfBounds { start_bit: bit_cursor, bits: bits_len.min(255) as u8, available: payload.len() * 8 })?;
            let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02x}")).collect();
            renderer.write_text(field.name, &hex.join(" "))?;
            Ok(PrinterOutcome::Rendered { bits_consumed: bits_len })
        }

        FieldKind::Reserved => {
            let got = extract(field, payload, bit_cursor)?;
            if got.value == got.max {
                return Ok(PrinterOutcome::Skipped { bits_consumed: field.bits });
            }
            renderer.write_text(field.name, &format!("{:b}", got.value))?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::Spare => {
            let got = extract(field, payload, bit_cursor)?;
            if got.value == 0 {
                return Ok(PrinterOutcome::Skipped { bits_consumed: field.bits });
            }
            renderer.write_text(field.name, &format!("{:b}", got.value))?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::IsoName => {
            let got = extract(field, payload, bit_cursor)?;
            renderer.write_text(field.name, &format!("{:016x}", got.value as u64))?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::FieldType => {
            let got = extract(field, payload, bit_cursor)?;
            let resolved = if field.lookup.kind == LookupKind::FieldType {
                lookups::field_type(field.lookup.table_id, got.value)
            } else {
                None
            };
            ctx.previous_field_type = resolved;
            ctx.previous_value = Some(got.value);
            renderer.write_lookup(field.name, got.value, resolved)?;
            Ok(PrinterOutcome::Rendered { bits_consumed: field.bits })
        }

        FieldKind::KeyValue => {
            let Some(type_name) = ctx.previous_field_type else {
                return Err(FieldDecodeError::UnsupportedFieldKind(field.kind));
            };
            let Some(descriptor) = field_types::by_name(type_name) else {
                return Err(FieldDecodeError::UnsupportedFieldKind(field.kind));
            };
            let bits_len = ctx
                .previous_length
                .map(|len| len * 8)
                .or(descriptor.bits)
                .unwrap_or((payload.len() * 8).saturating_sub(bit_cursor) as u32);
            let synthetic = FieldDef {
                order: field.order,
                id: field.id,
                name: field.name,
                description: field.description,
                kind: descriptor.kind,
                bits: bits_len,
                signed: descriptor.signed,
                resolution: field.resolution,
                offset: field.offset,
                unit: field.unit,
                physical_quantity: field.physical_quantity,
                range_min: field.range_min,
                range_max: field.range_max,
                lookup: field.lookup,
                proprietary: field.proprietary,
                length_from_previous_field: false,
            };
            decode_field(&synthetic, payload, bit_cursor, ctx, renderer)
        }

        FieldKind::Variable => {
            let Some(type_name) = ctx.previous_field_type else {
                return Err(FieldDecodeError::UnsupportedFieldKind(field.kind));
            };
            let Some(descriptor) = field_types::by_name(type_name) else {
                return Err(FieldDecodeError::UnsupportedFieldKind(field.kind));
            };
            let bits_len = ctx.previous_length.map(|len| len * 8).or(descriptor.bits).unwrap_or(field.bits);
            let synthetic = FieldDef {
                order: field.order,
                id: field.id,
                name: field.name,
                description: field.description,
                kind: descriptor.kind,
                bits: bits_len,
                signed: descriptor.signed,
                resolution: field.resolution,
                offset: field.offset,
                unit: field.unit,
                physical_quantity: field.physical_quantity,
                range_min: field.range_min,
                range_max: field.range_max,
                lookup: field.lookup,
                proprietary: field.proprietary,
                length_from_previous_field: false,
            };
            decode_field(&synthetic, payload, bit_cursor, ctx, renderer)
        }

        FieldKind::Unimplemented => Err(FieldDecodeError::UnsupportedFieldKind(field.kind)),
    }
}

/// Days-since-epoch to `YYYY.MM.DD`, civil calendar (proleptic Gregorian),
/// matching canboat's DATE rendering without pulling in a full calendar
/// crate for one conversion.
fn chrono_like_date(days_since_epoch: i64) -> String {
    // Howard Hinnant's civil_from_days algorithm.
    let z = days_since_epoch + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    format!("{y:04}.{m:02}.{d:02}")
}

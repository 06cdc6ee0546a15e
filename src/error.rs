//! Error taxonomy for the decode/resolve/render/explain engine.
//!
//! Recoverable conditions (truncation, reserved values, match mismatches,
//! unsupported encodings) never produce an `Err` from `Decoder::decode` —
//! they collapse into skipped fields or partial output, as the decode path
//! must never abort on untrusted wire data. `Err` is reserved for
//! programmer-facing misuse (decoding against an empty schema, asking the
//! renderer to close more braces than were opened) and for schema
//! self-checks performed once at catalogue-build time.
use thiserror::Error;

use crate::core::FieldKind;

#[derive(Debug, Error)]
/// Raised once, at catalogue construction, when the generated `PGNS` table
/// violates one of its structural invariants. Fatal: the binary logs this
/// and exits with status 2 rather than decoding against a broken catalogue.
pub enum SchemaError {
    #[error("PGN catalogue is not sorted by id ascending at index {index}")]
    SortOrderViolated { index: usize },

    #[error("PGN {pgn} fixed portion is not byte-aligned ({bits} bits before first repeat group)")]
    NonByteAligned { pgn: u32, bits: u32 },

    #[error("single-frame PGN {pgn} has length {length} bytes, expected 8")]
    BadSingleFrameLength { pgn: u32, length: u16 },

    #[error("PGN {pgn} has no catch-all fallback in its PDU range/packet-class")]
    MissingFallback { pgn: u32 },

    #[error("PGN {pgn} packet class does not admit its own PDU range")]
    PacketClassMismatch { pgn: u32 },

    #[error("field {field} of PGN {pgn} has no printer: base-type chain does not resolve")]
    UnresolvedFieldType { pgn: u32, field: &'static str },
}

#[derive(Debug, Error)]
/// Bit-level read failures from [`crate::bits::BitExtractor`].
pub enum BitExtractError {
    #[error("requested {bits} bits starting at bit {start_bit}, buffer has only {available} bits")]
    OutOfBounds {
        start_bit: usize,
        bits: u8,
        available: usize,
    },
    #[error("cannot extract more than 64 bits in one call, asked for {0}")]
    TooWide(u8),
}

#[derive(Debug, Error)]
/// Conditions a printer can hit while rendering a single field. All of
/// these are recoverable: the decoder records them and moves on.
pub enum FieldDecodeError {
    #[error("extraction truncated: {0}")]
    ExtractionTruncation(#[from] BitExtractError),

    #[error("value is in the reserved range")]
    ReservedValueEmpty,

    #[error("match field expected {expected}, got {actual}")]
    MatchMismatch { expected: i64, actual: i64 },

    #[error("unsupported STRING_LAU control byte {0}")]
    EncodingUnsupported(u8),

    #[error("unsupported field kind {0:?}")]
    UnsupportedFieldKind(FieldKind),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

#[derive(Debug, Error)]
/// Irrecoverable misuse of the decoder, as opposed to malformed wire data.
pub enum DecodeError {
    #[error("schema has no fields to decode")]
    EmptySchema,
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

#[derive(Debug, Error)]
/// Renderer/OutputBuffer misuse — this indicates a decoder bug, not bad
/// wire data, since the decoder is responsible for balancing every open
/// object/array it starts. Arena overflow is not represented here: it is
/// handled inside `Renderer` by silently truncating further writes rather
/// than erroring.
pub enum RenderError {
    #[error("attempted to close a brace with none open")]
    UnbalancedClose,
}

#[derive(Debug, Error)]
/// Errors surfaced by [`crate::resolver::PgnResolver`].
pub enum ResolveError {
    #[error("internal definition error: no catch-all fallback registered for PGN {pgn}")]
    NoFallback { pgn: u32 },
}

#[derive(Debug, Error)]
/// Errors surfaced by [`crate::explain`].
pub enum ExplainError {
    #[error("xml writer error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("io error: {0}")]
    Io(#[from] std::fmt::Error),
}

//! `n2k-pgn`: decodes NMEA 2000 Parameter Group Number payloads into
//! structured, textual, and XML representations from a data-driven PGN
//! catalogue.
//==================================================================================
/// Bit-accurate field extraction.
pub mod bits;
/// Generated `PGNS` catalogue, re-exported from `OUT_DIR`.
pub mod catalog;
/// Ambient runtime configuration.
pub mod config;
/// Core data types shared by the build script and the decode/resolve/render
/// engine.
pub mod core;
/// Decoder: walks a resolved `PgnDef` against a payload, producing fields.
pub mod decode;
/// Domain and low-level errors.
pub mod error;
/// Explainer: renders a `PgnDef`'s schema as XML (3 dialects).
pub mod explain;
/// Registry of runtime-resolved FIELDTYPE -> printer bindings.
pub mod field_types;
/// Lookup-table registry (pair / triplet / bit / field-type).
pub mod lookups;
/// Raw NMEA 2000 message envelope (PGN id + payload bytes).
pub mod message;
/// Renderer: assembles decoded fields into text / JSON / extended JSON.
pub mod render;
/// Resolves a raw message to the `PgnDef` describing its schema.
pub mod resolver;
//==================================================================================

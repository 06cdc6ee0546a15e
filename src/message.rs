//! `RawMessage`: the already-reassembled input the decode core consumes.
//! Fast-packet reassembly, CAN-id splitting, and the raw
//! transport formats (Actisense, Airmar, Chetco, Garmin CSV, YDWG-02) are
//! explicitly out of scope; this struct is the interface boundary.
use crate::core::MAX_PAYLOAD_BYTES;

/// One already-reassembled NMEA 2000 message ready for `resolver::resolve` +
/// `decode::decode`.
#[derive(Debug, Clone)]
pub struct RawMessage {
    /// ISO-8601-ish timestamp text, carried opaquely (never interpreted by
    /// the core).
    pub timestamp: String,
    pub priority: u8,
    /// 18-bit Parameter Group Number.
    pub pgn: u32,
    /// 255 = broadcast.
    pub destination: u8,
    pub source: u8,
    pub data: Vec<u8>,
}

impl RawMessage {
    /// `data.len()` must not exceed the ISO-TP reassembly ceiling.
    pub fn new(
        timestamp: impl Into<String>,
        priority: u8,
        pgn: u32,
        destination: u8,
        source: u8,
        data: Vec<u8>,
    ) -> Option<Self> {
        if data.len() > MAX_PAYLOAD_BYTES {
            return None;
        }
        Some(RawMessage {
            timestamp: timestamp.into(),
            priority,
            pgn,
            destination,
            source,
            data,
        })
    }
}

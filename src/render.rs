//! Renderer / OutputBuffer: assembles decoded fields into text,
//! compact JSON, or extended JSON, with a closing-brace stack that
//! guarantees balanced output even when decoding stops early.
use crate::error::RenderError;

/// Default capacity for a top-level decode's output arena (>= 8 KiB).
/// Content bytes past this capacity are silently dropped rather than
/// growing the buffer or aborting the decode; `Renderer::truncated` reports
/// whether that happened. Scope closers are exempt from the cap so the
/// emitted document is always brace-balanced.
pub const DEFAULT_CAPACITY: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
    ExtendedJson,
}

struct Frame {
    closer: Option<u8>,
    wrote_first: bool,
}

/// Accumulates one top-level decode's rendered output.
pub struct Renderer {
    mode: OutputMode,
    buf: Vec<u8>,
    capacity: usize,
    frames: Vec<Frame>,
    /// When false, fields that would render empty (reserved/unknown values)
    /// are suppressed entirely rather than emitted as `null`/`Unknown`.
    emit_empties: bool,
    /// Set once the arena fills; further bytes are dropped, not buffered.
    truncated: bool,
}

impl Renderer {
    pub fn new(mode: OutputMode, capacity: usize, emit_empties: bool) -> Result<Self, RenderError> {
        let mut renderer = Renderer {
            mode,
            buf: Vec::with_capacity(capacity.min(64 * 1024)),
            capacity,
            frames: Vec::new(),
            emit_empties,
            truncated: false,
        };
        renderer.open_scope(false);
        Ok(renderer)
    }

    /// Whether the output arena filled before the decode finished. The
    /// emitted document is still brace-balanced; its content past the fill
    /// point is simply missing.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    fn push_byte(&mut self, b: u8) {
        if self.buf.len() >= self.capacity {
            self.truncated = true;
            return;
        }
        self.buf.push(b);
    }

    fn push_str(&mut self, s: &str) {
        for b in s.bytes() {
            self.push_byte(b);
        }
    }

    fn write_separator(&mut self) {
        let needs_sep = match self.frames.last_mut() {
            Some(frame) if frame.wrote_first => true,
            Some(frame) => {
                frame.wrote_first = true;
                false
            }
            None => false,
        };
        if needs_sep {
            let sep = match self.mode {
                OutputMode::Text => "; ",
                OutputMode::Json | OutputMode::ExtendedJson => ",",
            };
            self.push_str(sep);
        }
    }

    fn open_scope(&mut self, is_array: bool) {
        let closer = match self.mode {
            OutputMode::Text => None,
            OutputMode::Json | OutputMode::ExtendedJson => {
                self.push_byte(if is_array { b'[' } else { b'{' });
                Some(if is_array { b']' } else { b'}' })
            }
        };
        self.frames.push(Frame { closer, wrote_first: false });
    }

    fn close_scope(&mut self) -> Result<(), RenderError> {
        let frame = self.frames.pop().ok_or(RenderError::UnbalancedClose)?;
        if let Some(c) = frame.closer {
            // Bypasses the capacity cap: closers are what keeps a truncated
            // buffer brace-balanced, so they're never the thing dropped.
            self.buf.push(c);
        }
        Ok(())
    }

    /// Anonymous array elements pass `name == ""`: no key precedes them,
    /// just the separator already written by the caller.
    fn write_key(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        match self.mode {
            OutputMode::Text => {
                self.push_str(name);
                self.push_str(" = ");
            }
            OutputMode::Json | OutputMode::ExtendedJson => {
                self.push_byte(b'"');
                self.push_escaped_json(name);
                self.push_str("\":");
            }
        }
    }

    fn push_escaped_json(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '"' => self.push_str("\\\""),
                '\\' => self.push_str("\\\\"),
                _ => {
                    let mut buf = [0u8; 4];
                    self.push_str(c.encode_utf8(&mut buf));
                }
            }
        }
    }

    /// Begin a named nested object or array (repeating groups become
    /// arrays; KEY_VALUE sub-records become objects).
    pub fn begin_scope(&mut self, name: &str, is_array: bool) -> Result<(), RenderError> {
        self.write_separator();
        if !matches!(self.mode, OutputMode::Text) {
            self.write_key(name);
        }
        self.open_scope(is_array);
        Ok(())
    }

    pub fn end_scope(&mut self) -> Result<(), RenderError> {
        self.close_scope()
    }

    /// Whether a truncated/reserved value should still be emitted (as
    /// `null`/"Unknown") rather than suppressed.
    pub fn emit_empties(&self) -> bool {
        self.emit_empties
    }

    /// A numeric value, already scaled by resolution, with optional unit
    /// text (text mode only) and decimal precision.
    pub fn write_number(&mut self, name: &str, value: f64, unit: Option<&str>, precision: usize) -> Result<(), RenderError> {
        self.write_separator();
        self.write_key(name);
        self.push_str(&format!("{value:.precision$}"));
        if let OutputMode::Text = self.mode {
            if let Some(u) = unit {
                self.push_byte(b' ');
                self.push_str(u);
            }
        }
        Ok(())
    }

    /// A raw integer value (resolution == 1, offset == 0).
    pub fn write_integer(&mut self, name: &str, value: i64, unit: Option<&str>) -> Result<(), RenderError> {
        self.write_separator();
        self.write_key(name);
        self.push_str(&value.to_string());
        if let OutputMode::Text = self.mode {
            if let Some(u) = unit {
                self.push_byte(b' ');
                self.push_str(u);
            }
        }
        Ok(())
    }

    /// A quoted text value (strings, formatted dates/times/lat-lon/binary).
    pub fn write_text(&mut self, name: &str, value: &str) -> Result<(), RenderError> {
        self.write_separator();
        self.write_key(name);
        match self.mode {
            OutputMode::Text => self.push_str(value),
            OutputMode::Json | OutputMode::ExtendedJson => {
                self.push_byte(b'"');
                self.push_escaped_json(value);
                self.push_byte(b'"');
            }
        }
        Ok(())
    }

    /// A LOOKUP-style value: numeric `value`, optionally resolved to `name`.
    /// Extended JSON always emits `{"value": n, "name": "label"}`; compact
    /// JSON and text prefer the resolved name.
    pub fn write_lookup(&mut self, key: &str, value: i64, resolved: Option<&str>) -> Result<(), RenderError> {
        self.write_separator();
        self.write_key(key);
        match self.mode {
            OutputMode::Text => {
                self.push_str(resolved.unwrap_or(&value.to_string()));
            }
            OutputMode::Json => match resolved {
                Some(name) => {
                    self.push_byte(b'"');
                    self.push_escaped_json(name);
                    self.push_byte(b'"');
                }
                None => self.push_str(&value.to_string()),
            },
            OutputMode::ExtendedJson => {
                self.push_str(&format!("{{\"value\":{value},\"name\":"));
                match resolved {
                    Some(name) => {
                        self.push_byte(b'"');
                        self.push_escaped_json(name);
                        self.push_byte(b'"');
                    }
                    None => self.push_str("null"),
                }
                self.push_byte(b'}');
            }
        }
        Ok(())
    }

    /// An empty/reserved/truncated field. Suppressed unless `emit_empties`.
    /// `label` is one of "Unknown", "ERROR", or "RESERVEDn".
    pub fn write_empty(&mut self, name: &str, label: &str) -> Result<(), RenderError> {
        if !self.emit_empties {
            return Ok(());
        }
        self.write_separator();
        self.write_key(name);
        match self.mode {
            OutputMode::Text => self.push_str(label),
            OutputMode::Json | OutputMode::ExtendedJson => self.push_str("null"),
        }
        Ok(())
    }

    /// Drains any remaining open scopes and returns the finished buffer.
    /// Always balances braces/brackets regardless of how decoding ended,
    /// including when the arena filled partway through.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        while !self.frames.is_empty() {
            self.close_scope()?;
        }
        Ok(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_well_formed_even_when_truncated_mid_scope() {
        let mut r = Renderer::new(OutputMode::Json, DEFAULT_CAPACITY, false).unwrap();
        r.write_integer("SID", 0, None).unwrap();
        r.begin_scope("Items", true).unwrap();
        r.write_integer("a", 1, None).unwrap();
        // deliberately do not close the array: finish() must balance it
        let out = r.finish().unwrap();
        let s = String::from_utf8(out).unwrap();
        assert_eq!(s.matches('{').count(), s.matches('}').count());
        assert_eq!(s.matches('[').count(), s.matches(']').count());
    }

    #[test]
    fn text_mode_joins_with_semicolons() {
        let mut r = Renderer::new(OutputMode::Text, DEFAULT_CAPACITY, false).unwrap();
        r.write_integer("SID", 0, None).unwrap();
        r.write_integer("COG", 7, Some("rad")).unwrap();
        let out = String::from_utf8(r.finish().unwrap()).unwrap();
        assert_eq!(out, "SID = 0; COG = 7 rad");
    }

    #[test]
    fn extended_json_lookup_shape() {
        let mut r = Renderer::new(OutputMode::ExtendedJson, DEFAULT_CAPACITY, false).unwrap();
        r.write_lookup("Reference", 0, Some("True")).unwrap();
        let out = String::from_utf8(r.finish().unwrap()).unwrap();
        assert_eq!(out, "{\"Reference\":{\"value\":0,\"name\":\"True\"}}");
    }

    #[test]
    fn close_scope_without_open_errors() {
        let mut r = Renderer::new(OutputMode::Json, DEFAULT_CAPACITY, false).unwrap();
        // consume the implicit root scope
        r.end_scope().unwrap();
        assert!(matches!(r.end_scope(), Err(RenderError::UnbalancedClose)));
    }

    #[test]
    fn overflow_truncates_silently_and_still_closes_balanced() {
        let mut r = Renderer::new(OutputMode::Json, 8, false).unwrap();
        r.write_integer("SID", 0, None).unwrap();
        r.write_integer("COG Reference", 12345, None).unwrap();
        assert!(r.truncated());
        let out = r.finish().unwrap();
        let s = String::from_utf8(out).unwrap();
        assert_eq!(s.matches('{').count(), s.matches('}').count());
    }
}

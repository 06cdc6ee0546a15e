//! CLI entry point exercising the decode/explain core end to end. Argument
//! parsing, logging setup, and the stdin line format are ambient plumbing
//! around the library, not part of the decode core itself.
use std::io::{BufRead, Write};

use clap::Parser;

use n2k_pgn::catalog;
use n2k_pgn::config::{CamelMode, Config, ExplainDialect, SchemaVersion};
use n2k_pgn::core::PgnDef;
use n2k_pgn::decode;
use n2k_pgn::explain;
use n2k_pgn::message::RawMessage;
use n2k_pgn::render::{OutputMode, Renderer};
use n2k_pgn::resolver;

/// Decode NMEA 2000 PGNs, or explain the bundled schema catalogue.
#[derive(Parser, Debug)]
#[command(name = "n2k-pgn", version)]
struct Args {
    /// Emit a human-readable schema dump instead of decoding stdin.
    #[arg(long = "explain")]
    explain: bool,
    /// Emit the generic XML schema dialect.
    #[arg(long = "explain-xml")]
    explain_xml: bool,
    /// Emit the Actisense-range XML schema dialect.
    #[arg(long = "explain-ngt-xml")]
    explain_ngt_xml: bool,
    /// Emit the iKonvert-range XML schema dialect.
    #[arg(long = "explain-ik-xml")]
    explain_ik_xml: bool,
    /// Use the legacy v1 schema variant for explainer output.
    #[arg(long = "v1")]
    v1: bool,
    /// lowerCamelCase field ids in explainer output.
    #[arg(long = "camel")]
    camel: bool,
    /// UpperCamelCase (Pascal) field ids in explainer output.
    #[arg(long = "upper-camel")]
    upper_camel: bool,
    /// Emit extended JSON (`{"value":N,"name":"label"}`) instead of text.
    #[arg(long = "json")]
    json: bool,
    /// Emit compact JSON instead of text.
    #[arg(long = "extended-json")]
    extended_json: bool,
    /// Verbose (debug) logging.
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let config = Config {
        output_mode: if args.extended_json {
            OutputMode::ExtendedJson
        } else if args.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
        schema_version: if args.v1 { SchemaVersion::V1 } else { SchemaVersion::V2 },
        camel_mode: if args.upper_camel {
            CamelMode::UpperCamel
        } else if args.camel {
            CamelMode::LowerCamel
        } else {
            CamelMode::None
        },
        debug: args.debug,
    };

    let exit_code = if args.explain {
        print!("{}", explain::explain_text(catalog::all()));
        0
    } else if args.explain_xml || args.explain_ngt_xml || args.explain_ik_xml {
        let dialect = if args.explain_ngt_xml {
            ExplainDialect::Actisense
        } else if args.explain_ik_xml {
            ExplainDialect::IKonvert
        } else {
            ExplainDialect::Generic
        };
        match explain::explain_xml(catalog::all(), dialect, config.schema_version, config.camel_mode) {
            Ok(xml) => {
                print!("{xml}");
                0
            }
            Err(err) => {
                tracing::error!(%err, "failed to render explainer XML");
                1
            }
        }
    } else {
        run_decode_loop(&config)
    };

    std::process::exit(exit_code);
}

/// Reads newline-delimited `timestamp,priority,pgn,dst,src,hex-bytes`
/// records from stdin (canboat's own Actisense-N2K-ASCII-like convention)
/// and decodes each against the bundled catalogue. This line format is not
/// part of the specified decode core — it exists only so the binary has
/// *some* way to demonstrate the decode path end to end.
fn run_decode_loop(config: &Config) -> i32 {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(message) => decode_one(&message, config, &mut out),
            None => tracing::warn!(%line, "malformed input line, skipping"),
        }
    }
    0
}

fn parse_line(line: &str) -> Option<RawMessage> {
    let mut parts = line.splitn(6, ',');
    let timestamp = parts.next()?;
    let priority: u8 = parts.next()?.trim().parse().ok()?;
    let pgn: u32 = parts.next()?.trim().parse().ok()?;
    let destination: u8 = parts.next()?.trim().parse().ok()?;
    let source: u8 = parts.next()?.trim().parse().ok()?;
    let hex = parts.next()?;
    let data = hex
        .split_whitespace()
        .map(|byte| u8::from_str_radix(byte, 16))
        .collect::<Result<Vec<u8>, _>>()
        .ok()?;
    RawMessage::new(timestamp, priority, pgn, destination, source, data)
}

fn decode_one(message: &RawMessage, config: &Config, out: &mut impl Write) {
    let schema: &'static PgnDef = match resolver::resolve(message.pgn, &message.data) {
        Ok(schema) => schema,
        Err(err) => {
            tracing::warn!(pgn = message.pgn, %err, "no schema resolved");
            return;
        }
    };

    let mut renderer = match Renderer::new(config.output_mode, n2k_pgn::render::DEFAULT_CAPACITY, false) {
        Ok(r) => r,
        Err(err) => {
            tracing::error!(%err, "failed to allocate renderer");
            return;
        }
    };

    if let Err(err) = decode::decode(schema, &message.data, &mut renderer) {
        tracing::warn!(pgn = message.pgn, %err, "decode error");
        return;
    }

    let was_truncated = renderer.truncated();
    match renderer.finish() {
        Ok(bytes) => {
            if was_truncated {
                tracing::warn!(pgn = message.pgn, "output arena filled, record truncated");
            }
            let _ = out.write_all(&bytes);
            let _ = out.write_all(b"\n");
        }
        Err(err) => tracing::error!(%err, "failed to finish render"),
    }
}

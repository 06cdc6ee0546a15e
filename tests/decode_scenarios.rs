//! End-to-end decode scenarios against the bundled PGN catalogue: resolve a
//! (pgn, payload) pair, decode it, and check the rendered JSON.

use n2k_pgn::decode;
use n2k_pgn::render::{OutputMode, Renderer, DEFAULT_CAPACITY};
use n2k_pgn::resolver;

fn decode_json(pgn_id: u32, payload: &[u8]) -> String {
    let schema = resolver::resolve(pgn_id, payload).expect("resolve");
    let mut renderer = Renderer::new(OutputMode::Json, DEFAULT_CAPACITY, false).unwrap();
    decode::decode(schema, payload, &mut renderer).unwrap();
    String::from_utf8(renderer.finish().unwrap()).unwrap()
}

#[test]
fn cog_sog_rapid_update_skips_all_ones_reserved_fields() {
    let payload = [0x00, 0xFC, 0x88, 0x13, 0xC8, 0x00, 0xFF, 0xFF];
    let json = decode_json(129026, &payload);
    assert_eq!(json, r#"{"SID":0,"COG Reference":"True","COG":0.5000,"SOG":2.00}"#);
}

#[test]
fn iso_request_reads_the_requested_pgn_from_a_three_byte_payload() {
    let payload = [0x14, 0xF0, 0x01];
    let json = decode_json(59904, &payload);
    assert_eq!(json, r#"{"PGN":126996}"#);
}

#[test]
fn command_group_function_resolves_via_proprietary_match_fields() {
    let payload = [0x01, 0x41, 0x87, 0x04, 0xFF, 0x01, 0x01, 0x02, 0x05];
    let json = decode_json(126208, &payload);
    assert_eq!(
        json,
        r#"{"Function Code":1,"Manufacturer Code":1857,"Reserved":"0","Industry Code":4,"Commanded PGN":130820,"Number of Parameters":1,"Parameter":2,"Value":5}"#
    );
}

#[test]
fn simnet_key_value_binds_its_printer_from_the_preceding_fieldtype_field() {
    let payload = [0x01, 0x00, 0x00, 0x60, 0x40];
    let json = decode_json(130845, &payload);
    assert_eq!(json, r#"{"Key":"FLOAT","Value":3.500000}"#);
}

#[test]
fn waypoint_list_decodes_a_bounded_repeating_group() {
    let payload = [
        0x00, 0x00, 0x02, 0x00, 0x01, 0x00, 0x07, 0x00, 0x0A, 0x00, 0x03, 0x01, 0x41, 0x14, 0x00, 0x04, 0x01, 0x42, 0x43,
    ];
    let json = decode_json(129285, &payload);
    assert_eq!(
        json,
        r#"{"Start RPS#":0,"Number of Items":2,"Database Version":1,"Route ID":7,"list":[{"WP ID":10,"WP Name":"A"},{"WP ID":20,"WP Name":"BC"}]}"#
    );
}

#[test]
fn unmodeled_pdu2_pgn_falls_back_to_the_nearest_compatible_catch_all() {
    let payload = [0x3B, 0x87, 0xDE, 0xAD, 0xBE, 0xEF];
    let json = decode_json(130000, &payload);
    assert_eq!(json, r#"{"Manufacturer Code":1851,"Reserved":"0","Industry Code":4,"Data":"de ad be ef"}"#);
}

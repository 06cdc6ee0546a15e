//! Runtime entry points over the lookup functions `build.rs` generates into
//! `OUT_DIR/generated_lookups.rs`: pair `(n -> name)`, triplet
//! `(n1, n2 -> name)`, bit `(bit-index -> name)`, and field-type
//! `(n -> canonical type name)` enumerators.
include!(concat!(env!("OUT_DIR"), "/generated_lookups.rs"));

/// `n -> name` enumerator, used by LOOKUP and (per set bit) BITLOOKUP fields.
pub fn pair(table_id: u16, n: i64) -> Option<&'static str> {
    lookup_pair(table_id, n)
}

/// `(n1, n2) -> name` enumerator, used by INDIRECT_LOOKUP fields.
pub fn triplet(table_id: u16, n1: i64, n2: i64) -> Option<&'static str> {
    lookup_triplet(table_id, n1, n2)
}

/// `bit-index -> name` enumerator, used by BITLOOKUP fields.
pub fn bit(table_id: u16, bit_index: u8) -> Option<&'static str> {
    lookup_bit(table_id, bit_index)
}

/// `n -> canonical field-type name` enumerator, used by FIELDTYPE fields.
pub fn field_type(table_id: u16, n: i64) -> Option<&'static str> {
    lookup_fieldtype(table_id, n)
}

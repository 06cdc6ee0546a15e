//! Structures used to deserialize the bundled PGN catalogue and lookup
//! datasets (`build_core/var/pgn_catalog.json`, `build_core/var/lookups.json`).
//! Field names follow the canboat.json convention, extended with the
//! attributes the decode/resolve/explain engine needs (`URL`, `Fallback`,
//! `Offset`, `RangeMin`/`RangeMax`, `Proprietary`, and
//! `LengthFromPreviousField`).
use serde::Deserialize;

//==================================================================================CATALOG
#[derive(Debug, Deserialize)]
pub(crate) struct Catalog {
    #[serde(rename = "PGNs")]
    pub(crate) pgns: Vec<PgnInstructions>,
}

#[derive(Debug, Deserialize)]
#[allow(unused)]
/// Full PGN descriptor, one entry per schema variant (several entries may
/// share the same `PGN` id when `hasMatchFields` distinguishes them).
pub(crate) struct PgnInstructions {
    #[serde(rename = "PGN")]
    pub pgn_id: u32,
    #[serde(rename = "Id")]
    pub pgn_name: String,
    #[serde(rename = "Description")]
    pub pgn_description: String,
    #[serde(rename = "Explanation")]
    pub explanation: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    /// "Single" | "Fast" | "ISO" | "Mixed".
    #[serde(rename = "Type")]
    pub packet_class: String,
    #[serde(rename = "TransmissionInterval")]
    pub trans_interval: Option<u16>,
    #[serde(rename = "TransmissionIrregular")]
    pub trans_irregular: Option<bool>,
    #[serde(rename = "Complete", default)]
    pub complete: bool,
    #[serde(rename = "Fallback", default)]
    pub fallback: bool,
    #[serde(rename = "RepeatingFieldSet1Size")]
    pub repeating_field_set_1_size: Option<u16>,
    #[serde(rename = "RepeatingFieldSet1StartField")]
    pub repeating_field_set_1_start_field: Option<u16>,
    #[serde(rename = "RepeatingFieldSet1CountField")]
    pub repeating_field_set_1_count_field: Option<u16>,
    #[serde(rename = "RepeatingFieldSet2Size")]
    pub repeating_field_set_2_size: Option<u16>,
    #[serde(rename = "RepeatingFieldSet2StartField")]
    pub repeating_field_set_2_start_field: Option<u16>,
    #[serde(rename = "RepeatingFieldSet2CountField")]
    pub repeating_field_set_2_count_field: Option<u16>,
    #[serde(rename = "Fields")]
    pub fields: Vec<Fields>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Fields {
    #[serde(rename = "Order")]
    pub order: u16,
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "FieldType")]
    pub kind: String,
    #[serde(rename = "BitLength")]
    pub bits_length: Option<u32>,
    #[serde(rename = "BitLengthVariable", default)]
    pub bits_length_var: bool,
    #[serde(rename = "Signed", default)]
    pub signed: bool,
    #[serde(rename = "Resolution")]
    pub resolution: Option<f64>,
    #[serde(rename = "Offset")]
    pub offset: Option<i64>,
    #[serde(rename = "LookupEnumeration")]
    pub enum_direct_name: Option<String>,
    #[serde(rename = "LookupIndirectEnumeration")]
    pub enum_indirect_name: Option<String>,
    #[serde(rename = "LookupIndirectEnumerationFieldOrder")]
    pub enum_indirect_field_order: Option<u16>,
    #[serde(rename = "LookupBitEnumeration")]
    pub enum_bit_name: Option<String>,
    #[serde(rename = "LookupFieldTypeEnumeration")]
    pub enum_fieldtype_name: Option<String>,
    #[serde(rename = "Unit")]
    pub unit: Option<String>,
    #[serde(rename = "PhysicalQuantity")]
    pub physical_quantity: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "RangeMin")]
    pub range_min: Option<f64>,
    #[serde(rename = "RangeMax")]
    pub range_max: Option<f64>,
    #[serde(rename = "Proprietary", default)]
    pub proprietary: bool,
    #[serde(rename = "LengthFromPreviousField", default)]
    pub length_from_previous_field: bool,
}

//==============================================================LOOKUP_DOMAIN
#[derive(Debug, Deserialize)]
pub(crate) struct Lookups {
    #[serde(rename = "LookupEnumerations", default)]
    pub(crate) pair: Vec<LookupEnum>,
    #[serde(rename = "LookupIndirectEnumerations", default)]
    pub(crate) triplet: Vec<LookupIndirEnum>,
    #[serde(rename = "LookupBitEnumerations", default)]
    pub(crate) bit: Vec<LookupBitEnum>,
    #[serde(rename = "LookupFieldTypeEnumerations", default)]
    pub(crate) fieldtype: Vec<LookupFieldTypeEnum>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupEnum {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "MaxValue")]
    pub(crate) max_value: u32,
    #[serde(rename = "EnumValues")]
    pub(crate) values: Vec<EnumValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EnumValue {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "Value")]
    pub(crate) value: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupIndirEnum {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "MaxValue")]
    pub(crate) max_value: u32,
    #[serde(rename = "EnumValues")]
    pub(crate) values: Vec<IndirEnumValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IndirEnumValue {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "Value1")]
    pub(crate) value1: i64,
    #[serde(rename = "Value2")]
    pub(crate) value2: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupBitEnum {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "MaxValue")]
    pub(crate) max_value: u32,
    #[serde(rename = "EnumBitValues")]
    pub(crate) values: Vec<BitEnumValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BitEnumValue {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "Bit")]
    pub(crate) bit: u8,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupFieldTypeEnum {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "MaxValue")]
    pub(crate) max_value: u32,
    #[serde(rename = "EnumFieldTypeValues")]
    pub(crate) values: Vec<FieldTypeEnumValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FieldTypeEnumValue {
    #[serde(rename = "name")]
    pub(crate) name: String,
    #[serde(rename = "value")]
    pub(crate) value: i64,
    #[serde(rename = "FieldType")]
    pub(crate) field_type: String,
}

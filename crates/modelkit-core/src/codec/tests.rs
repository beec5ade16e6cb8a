use super::Codec;
use crate::{error::ValidationError, record::Record};
use modelkit_schema::{
    build::{Registry, RegistryBuilder},
    node::{Field, Model},
};
use serde_json::json;

fn registry() -> Registry {
    RegistryBuilder::new()
        .model(
            Model::new("Measurement")
                .field(Field::text("unit"))
                .field(Field::int64("value")),
        )
        .model(
            Model::new("Reading")
                .field(Field::model("measurement", "Measurement"))
                .field(Field::int64("sequence")),
        )
        .model(Model::new("Marker"))
        .model(
            Model::new("Sparse")
                .field(Field::text("label").optional())
                .field(Field::int64("weight").optional()),
        )
        .model(
            Model::new("Unordered")
                .field(Field::text("zeta"))
                .field(Field::text("alpha")),
        )
        .build()
        .expect("test registry must validate")
}

fn measurement(registry: &Registry) -> Record {
    Record::build("Measurement")
        .set("unit", "ms")
        .set("value", 250)
        .finish(registry)
        .expect("measurement record must validate")
}

#[test]
fn to_json_keys_follow_declaration_order_not_alphabetical() {
    let registry = registry();
    let codec = Codec::new(&registry);
    let record = Record::build("Unordered")
        .set("alpha", "a")
        .set("zeta", "z")
        .finish(&registry)
        .expect("record must validate");

    assert_eq!(codec.to_json(&record), r#"{"zeta":"z","alpha":"a"}"#);
}

#[test]
fn to_json_is_deterministic() {
    let registry = registry();
    let codec = Codec::new(&registry);
    let record = measurement(&registry);

    assert_eq!(codec.to_json(&record), codec.to_json(&record));
}

#[test]
fn to_value_projects_nested_records_as_objects() {
    let registry = registry();
    let codec = Codec::new(&registry);
    let reading = Record::build("Reading")
        .set("measurement", measurement(&registry))
        .set("sequence", 1)
        .finish(&registry)
        .expect("reading record must validate");

    assert_eq!(
        codec.to_value(&reading),
        json!({"measurement": {"unit": "ms", "value": 250}, "sequence": 1})
    );
}

#[test]
fn from_json_round_trips_nested_records() {
    let registry = registry();
    let codec = Codec::new(&registry);
    let reading = Record::build("Reading")
        .set("measurement", measurement(&registry))
        .set("sequence", 1)
        .finish(&registry)
        .expect("reading record must validate");

    let text = codec.to_json(&reading);
    let parsed = codec
        .from_json("Reading", &text)
        .expect("serialized record must parse back");

    assert_eq!(parsed, reading);
}

#[test]
fn absent_optional_fields_are_skipped_in_text() {
    let registry = registry();
    let codec = Codec::new(&registry);
    let record = Record::build("Sparse")
        .set("label", "calibration")
        .finish(&registry)
        .expect("record must validate");

    assert_eq!(codec.to_json(&record), r#"{"label":"calibration"}"#);

    let empty = codec
        .from_json("Sparse", "{}")
        .expect("all-optional model must accept an empty object");
    assert!(empty.is_empty());
}

#[test]
fn malformed_text_is_a_parse_error() {
    let registry = registry();
    let codec = Codec::new(&registry);

    let err = codec
        .from_json("Measurement", r#"{"unit":"ms""#)
        .expect_err("truncated text must fail");
    assert!(err.is_parse(), "unexpected error: {err:?}");
}

#[test]
fn non_object_top_level_is_a_validation_error() {
    let registry = registry();
    let codec = Codec::new(&registry);

    let err = codec
        .from_json("Measurement", "3")
        .expect_err("top-level number must fail");
    assert!(err.is_validation(), "unexpected error: {err:?}");
    assert!(
        err.to_string().contains("expects a top-level object, got number"),
        "unexpected error: {err}"
    );
}

#[test]
fn fractional_number_is_not_an_int64() {
    let registry = registry();
    let codec = Codec::new(&registry);

    let err = codec
        .from_json("Measurement", r#"{"unit":"ms","value":1.5}"#)
        .expect_err("fractional value must fail");
    assert!(
        err.to_string().contains("expects Int64, got number"),
        "unexpected error: {err}"
    );
}

#[test]
fn number_beyond_i64_is_rejected() {
    let registry = registry();
    let codec = Codec::new(&registry);

    let err = codec
        .from_json("Measurement", r#"{"unit":"ms","value":9223372036854775808}"#)
        .expect_err("out-of-range value must fail");
    assert!(err.is_validation(), "unexpected error: {err:?}");
}

#[test]
fn schema_document_maps_primitive_kinds() {
    let registry = registry();
    let codec = Codec::new(&registry);

    let document = codec
        .schema_document("Measurement")
        .expect("registered model must document");
    assert_eq!(
        document,
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Measurement",
            "type": "object",
            "required": ["unit", "value"],
            "properties": {
                "unit": {"type": "string"},
                "value": {"type": "integer", "format": "int64"},
            },
        })
    );
}

#[test]
fn zero_field_model_omits_required_and_properties() {
    let registry = registry();
    let codec = Codec::new(&registry);

    assert_eq!(
        codec.schema_json("Marker").expect("marker must document"),
        r#"{"$schema":"http://json-schema.org/draft-07/schema#","title":"Marker","type":"object"}"#
    );
}

#[test]
fn all_optional_model_omits_required_but_keeps_properties() {
    let registry = registry();
    let codec = Codec::new(&registry);

    let document = codec
        .schema_document("Sparse")
        .expect("sparse must document");
    assert!(document.get("required").is_none());
    assert!(document.get("properties").is_some());
}

#[test]
fn nested_model_field_documents_as_inline_subschema() {
    let registry = registry();
    let codec = Codec::new(&registry);

    let document = codec
        .schema_document("Reading")
        .expect("reading must document");
    assert_eq!(
        document["properties"]["measurement"],
        json!({
            "title": "Measurement",
            "type": "object",
            "required": ["unit", "value"],
            "properties": {
                "unit": {"type": "string"},
                "value": {"type": "integer", "format": "int64"},
            },
        })
    );
}

#[test]
fn unknown_model_has_no_document() {
    let registry = registry();
    let codec = Codec::new(&registry);

    let err = codec
        .schema_document("Missing")
        .expect_err("unknown model must fail");
    assert!(matches!(err, ValidationError::UnknownModel { model } if model == "Missing"));
}

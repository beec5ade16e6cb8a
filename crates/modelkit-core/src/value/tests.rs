use super::Value;

#[test]
fn from_impls_map_onto_variants() {
    assert_eq!(Value::from(3i64), Value::Int(3));
    assert_eq!(Value::from(3i8), Value::Int(3));
    assert_eq!(Value::from("foo"), Value::Text("foo".to_string()));
    assert_eq!(
        Value::from(String::from("foo")),
        Value::Text("foo".to_string())
    );
}

#[test]
fn accessors_match_their_variant_only() {
    let int = Value::Int(11);
    assert_eq!(int.as_int(), Some(11));
    assert_eq!(int.as_text(), None);
    assert!(int.as_record().is_none());

    let text = Value::from("foo");
    assert_eq!(text.as_text(), Some("foo"));
    assert_eq!(text.as_int(), None);
}

#[test]
fn kind_labels_are_stable() {
    assert_eq!(Value::Int(0).kind_label(), "integer");
    assert_eq!(Value::Text(String::new()).kind_label(), "string");
}

use jsonlens::{ErrorKind, JsonBytes, Parser};

const DOC: &[u8] = br#"[0, 1, {"2": true}]"#;

#[test]
fn subscripts_resolve_on_the_happy_path() {
    let parser = DOC.array_parser();

    assert_eq!(parser.value_at::<i64>(0), Some(0));
    assert_eq!(parser.value_at::<i64>(1), Some(1));
    let nested = parser.object_at(2).unwrap();
    assert_eq!(nested.value_at::<bool>("2"), Some(true));
}

#[test]
fn subscripts_collapse_every_failure_into_absence() {
    let parser = DOC.array_parser();

    // Wrong kind, missing key, wrong container shape: all read as absent.
    assert_eq!(parser.value_at::<bool>(0), None);
    assert_eq!(parser.value_at::<i64>(9), None);
    assert!(parser.array_at(2).is_none());
    assert!(parser.object_at(0).is_none());

    let broken = b"not json".array_parser();
    assert_eq!(broken.value_at::<i64>(0), None);
    assert!(broken.array_at(0).is_none());
}

#[test]
fn strict_accessors_keep_the_error_detail_subscripts_drop() {
    let parser = DOC.array_parser();

    assert_eq!(parser.value_at::<bool>(0), None);
    assert_eq!(
        parser.get_value::<bool>(0).unwrap_err().kind(),
        ErrorKind::InvalidType
    );

    assert_eq!(parser.value_at::<i64>(9), None);
    assert_eq!(
        parser.get_value::<i64>(9).unwrap_err().kind(),
        ErrorKind::InvalidKey
    );
}

#[test]
fn subscripts_chain_for_deep_descent() {
    let doc = br#"{"rows": [[1, 2], [3]], "labels": {"first": "a"}}"#;
    let parser = doc.object_parser();

    let rows = parser.array_at("rows").unwrap();
    assert_eq!(rows.array_at(0).unwrap().value_at::<i64>(1), Some(2));
    assert_eq!(rows.array_at(1).unwrap().value_at::<i64>(0), Some(3));
    assert!(rows.array_at(2).is_none());
    assert_eq!(
        parser.object_at("labels").unwrap().value_at::<String>("first"),
        Some("a".to_string())
    );
}

#[test]
fn raw_bytes_expose_both_entry_points() {
    assert_eq!(br#"[true]"#.array_parser().value_at::<bool>(0), Some(true));
    assert_eq!(
        br#"{"on": false}"#.object_parser().value_at::<bool>("on"),
        Some(false)
    );
}

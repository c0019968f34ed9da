use jsonlens::{ArrayParser, ContainerKind, ErrorKind, ObjectParser, Parser};
use rstest::rstest;
use serde_json::json;

const DOC: &[u8] = br#"[0, 1, {"2": true}]"#;

#[test]
fn typed_access_agrees_with_parse() {
    let parser = ArrayParser::new(DOC);
    let parsed = parser.parse().unwrap();

    assert_eq!(parser.get_value::<i64>(0).unwrap(), 0);
    assert_eq!(parsed[0].as_i64().unwrap(), 0);
    assert_eq!(parser.get_value::<i64>(1).unwrap(), parsed[1].as_i64().unwrap());
    assert_eq!(
        json!(parser.get_value::<serde_json::Map<String, serde_json::Value>>(2).unwrap()),
        parsed[2]
    );
}

#[test]
fn out_of_bounds_index_is_an_invalid_key() {
    let parser = ArrayParser::new(DOC);

    let err = parser.get_value::<i64>(5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);
    let err = parser.get_document(3, ContainerKind::Object).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);
}

#[test]
fn kind_mismatch_is_an_invalid_type() {
    let parser = ArrayParser::new(DOC);

    let err = parser.get_value::<bool>(2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidType);
    let err = parser.get_value::<String>(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidType);
}

#[rstest]
#[case(&br#"{"a": 1}"#[..])]
#[case(&b"[1, 2"[..])]
#[case(&b"true"[..])]
#[case(&b""[..])]
fn non_array_documents_are_invalid_data(#[case] data: &[u8]) {
    let parser = ArrayParser::new(data);

    assert_eq!(parser.parse().unwrap_err().kind(), ErrorKind::InvalidData);
    assert_eq!(
        parser.get_value::<i64>(0).unwrap_err().kind(),
        ErrorKind::InvalidData
    );
    assert_eq!(
        parser
            .get_document(0, ContainerKind::Array)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidData
    );
}

#[test]
fn extracted_document_round_trips() {
    let parser = ArrayParser::new(DOC);

    let bytes = parser.get_document(2, ContainerKind::Object).unwrap();
    let nested = ObjectParser::new(bytes);
    assert_eq!(
        serde_json::Value::Object(nested.parse().unwrap()),
        json!({"2": true})
    );
    assert!(nested.get_value::<bool>("2").unwrap());
}

#[test]
fn document_extraction_checks_the_container_shape() {
    let parser = ArrayParser::new(DOC);

    let err = parser.get_document(0, ContainerKind::Object).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidType);
    let err = parser.get_document(2, ContainerKind::Array).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidType);
}

#[test]
fn numbers_read_as_any_numeric_width_that_fits() {
    let parser = ArrayParser::new(&br#"[3, -4, 2.5]"#[..]);

    assert_eq!(parser.get_value::<u64>(0).unwrap(), 3);
    assert_eq!(parser.get_value::<i64>(1).unwrap(), -4);
    assert_eq!(parser.get_value::<f64>(0).unwrap(), 3.0);
    assert_eq!(parser.get_value::<f64>(2).unwrap(), 2.5);
    assert_eq!(
        parser.get_value::<u64>(1).unwrap_err().kind(),
        ErrorKind::InvalidType
    );
    assert_eq!(
        parser.get_value::<i64>(2).unwrap_err().kind(),
        ErrorKind::InvalidType
    );
}

#[test]
fn container_extraction_is_typed_all_the_way_down() {
    let parser = ArrayParser::new(&br#"[[1, 2, 3], [1, "2"]]"#[..]);

    assert_eq!(parser.get_value::<Vec<i64>>(0).unwrap(), vec![1, 2, 3]);
    let err = parser.get_value::<Vec<i64>>(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidType);
}

#[test]
fn every_access_redecodes_the_same_buffer() {
    let parser = ArrayParser::new(DOC);

    for _ in 0..3 {
        assert_eq!(parser.get_value::<i64>(0).unwrap(), 0);
    }
    assert_eq!(parser.data(), DOC);
}

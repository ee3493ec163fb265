//! Property-based tests for record access and encoding
//!
//! Covers field lookup through the name index, append semantics, encoder
//! idempotence, CSV re-readability and JSON duplicate precedence.

use csv::ReaderBuilder;
use proptest::prelude::*;

use csv_record::{Record, RecordError, Value};

/// Strategy for distinct lowercase column names
fn unique_names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,8}", 1..8).prop_map(|set| set.into_iter().collect())
}

/// Strategy for field contents, including delimiters, quotes and newlines
fn field_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,12}".prop_map(|s| s),
        "[a-z]{0,5},[a-z]{0,5}".prop_map(|s| s),
        "[a-z]{0,5}\"[a-z]{0,5}".prop_map(|s| s),
        "[a-z]{0,5}\n[a-z]{0,5}".prop_map(|s| s),
        Just(String::new()),
    ]
}

/// Strategy for a record with distinct names and a possibly short or long row
fn record_strategy() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    unique_names_strategy().prop_flat_map(|names| {
        let width = names.len();
        (
            Just(names),
            prop::collection::vec(field_strategy(), 0..=width + 2),
        )
    })
}

fn parse_single_row(bytes: &[u8]) -> Vec<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let row = reader
        .records()
        .next()
        .expect("encoded row should produce one record")
        .expect("encoded row should parse");
    row.iter().map(str::to_string).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // *For any* record, a name at position i reads as values[i] when the row
    // reaches that position and as the empty string when it does not.
    #[test]
    fn property_get_follows_name_index((names, values) in record_strategy()) {
        let record = Record::with_header(names.clone(), values.clone());

        for (i, name) in names.iter().enumerate() {
            let expected = values.get(i).cloned().unwrap_or_default();
            prop_assert_eq!(record.get(name).unwrap(), Value::from_string(expected));
        }
    }

    // *For any* record, a name outside the index fails with FieldNotFound.
    #[test]
    fn property_get_unknown_name_fails(
        (names, values) in record_strategy(),
        unknown in "[A-Z]{1,8}",
    ) {
        let record = Record::with_header(names, values);
        let is_not_found = matches!(record.get(&unknown), Err(RecordError::FieldNotFound(_)));
        prop_assert!(is_not_found);
    }

    // *For any* record, set grows both sequences by one and leaves the index alone.
    #[test]
    fn property_set_appends_one_field(
        (names, values) in record_strategy(),
        new_name in "[a-z]{1,8}",
        new_value in field_strategy(),
    ) {
        let mut record = Record::with_header(names.clone(), values.clone());
        let index_before = record.name_index().clone();

        record.set(new_name.clone(), &Value::from_string(new_value.clone())).unwrap();

        prop_assert_eq!(record.column_names().len(), names.len() + 1);
        prop_assert_eq!(record.values().len(), values.len() + 1);
        prop_assert_eq!(record.column_names().last(), Some(&new_name));
        prop_assert_eq!(record.values().last(), Some(&new_value));
        prop_assert_eq!(record.name_index(), &index_before);
    }

    // *For any* record, encoding twice yields identical bytes.
    #[test]
    fn property_encoders_are_idempotent((names, values) in record_strategy()) {
        let record = Record::with_header(names, values);

        prop_assert_eq!(record.to_json().unwrap(), record.to_json().unwrap());
        prop_assert_eq!(
            record.to_delimited_text(b',').unwrap(),
            record.to_delimited_text(b',').unwrap()
        );
    }

    // *For any* row of two or more fields, the encoded line parses back to the same fields
    // and carries no trailing newline of its own.
    #[test]
    fn property_csv_line_reparses(
        values in prop::collection::vec(field_strategy(), 2..8),
        delimiter in prop_oneof![Just(b','), Just(b';'), Just(b'\t'), Just(b'|')],
    ) {
        let names: Vec<String> = (0..values.len()).map(|i| format!("c{i}")).collect();
        let record = Record::with_header(names, values.clone());

        let encoded = record.to_delimited_text(delimiter).unwrap();
        prop_assert!(!encoded.ends_with(b"\n"));

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .from_reader(encoded.as_slice());
        let row = reader.records().next().unwrap().unwrap();
        let parsed: Vec<String> = row.iter().map(str::to_string).collect();
        prop_assert_eq!(parsed, values);
    }

    // *For any* record with distinct names, the JSON object holds exactly the
    // columns the row reaches.
    #[test]
    fn property_json_holds_present_columns((names, values) in record_strategy()) {
        let record = Record::with_header(names.clone(), values.clone());
        let json: serde_json::Value = serde_json::from_slice(&record.to_json().unwrap()).unwrap();
        let object = json.as_object().unwrap();

        let present = names.len().min(values.len());
        prop_assert_eq!(object.len(), present);
        for i in 0..present {
            prop_assert_eq!(object[names[i].as_str()].as_str(), Some(values[i].as_str()));
        }
    }

    // *For any* sequence of values set under one name, JSON keeps the first.
    #[test]
    fn property_json_duplicate_keeps_earliest(
        name in "[a-z]{1,8}",
        values in prop::collection::vec("[a-z0-9]{0,8}", 1..6),
    ) {
        let mut record = Record::new();
        for value in &values {
            record.set(name.clone(), &Value::from_string(value.clone())).unwrap();
        }

        let json: serde_json::Value = serde_json::from_slice(&record.to_json().unwrap()).unwrap();
        prop_assert_eq!(json[&name].as_str(), Some(values[0].as_str()));
    }

    // *For any* record, appending to a clone leaves the original's encoding unchanged.
    #[test]
    fn property_clone_is_independent((names, values) in record_strategy()) {
        let original = Record::with_header(names, values);
        let before = original.to_delimited_text(b',').unwrap();

        let mut copy = original.clone();
        copy.set("extra", &Value::Int(1)).unwrap();

        prop_assert_eq!(original.to_delimited_text(b',').unwrap(), before);
    }
}

#[test]
fn test_csv_reparse_helper_reads_quoted_newline() {
    let record = Record::with_header(
        vec!["a".to_string(), "b".to_string()],
        vec!["x\ny".to_string(), "z".to_string()],
    );
    let encoded = record.to_delimited_text(b',').unwrap();
    assert_eq!(parse_single_row(&encoded), vec!["x\ny", "z"]);
}

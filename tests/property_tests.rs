//! Property-based tests for the line parser and loader.
//!
//! These cover the guarantees that hold for whole families of lines rather
//! than hand-picked examples.

use proptest::prelude::*;
use csv_table::{from_str, parse_line, LineParser};

/// Unquoted field content: no commas, no quotes, no line breaks.
fn plain_field() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ._-]{0,12}"
}

/// Arbitrary content for a quoted field, quotes and commas included.
fn quoted_content() -> impl Strategy<Value = String> {
    "[a-z ,\"]{0,12}"
}

fn quote(content: &str) -> String {
    format!("\"{}\"", content.replace('"', "\"\""))
}

proptest! {
    #[test]
    fn prop_unquoted_field_count(fields in prop::collection::vec(plain_field(), 1..10)) {
        let line = fields.join(",");
        let parsed = parse_line(&line, false).unwrap();
        if line.trim().is_empty() {
            prop_assert!(parsed.is_empty());
        } else {
            prop_assert_eq!(parsed.len(), fields.len());
        }
    }

    #[test]
    fn prop_unquoted_trimmed_values(fields in prop::collection::vec(plain_field(), 1..10)) {
        let line = fields.join(",");
        prop_assume!(!line.trim().is_empty());

        let parsed = parse_line(&line, true).unwrap();
        let expected: Vec<String> = fields.iter().map(|f| f.trim().to_string()).collect();
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn prop_quoted_fields_preserved(fields in prop::collection::vec(quoted_content(), 1..8)) {
        let line = fields.iter().map(|f| quote(f)).collect::<Vec<_>>().join(",");
        let parsed = parse_line(&line, false).unwrap();
        prop_assert_eq!(parsed, fields);
    }

    #[test]
    fn prop_reparse_is_idempotent(line in "[a-z ,\"]{0,30}") {
        let mut parser = LineParser::new(false);
        let first = parser.parse(&line);
        let second = parser.parse(&line);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_never_panics(line in "\\PC{0,40}", trim in any::<bool>()) {
        let _ = parse_line(&line, trim);
    }

    #[test]
    fn prop_records_follow_input_order(
        rows in prop::collection::vec(prop::collection::vec("[a-z0-9]{1,6}", 3), 0..20)
    ) {
        let mut csv = String::from("a,b,c\n");
        for row in &rows {
            csv.push_str(&row.join(","));
            csv.push_str("\n  \n");
        }

        let table = from_str(&csv).unwrap();
        prop_assert_eq!(table.record_count(), rows.len());
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(table.record(i).unwrap().fields(), row.as_slice());
        }
    }
}

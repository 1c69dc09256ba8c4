//! Plain text report formatter for the JSONL ingester
use crate::error::IngestError;
use crate::formats::traits::RecordFormatter;
use crate::ingest::{FieldMap, RunSummary};
use serde_json::Value;

/// Line printed after every decoded record
pub const SEPARATOR: &str = "=================";

/// Text formatter that prints one `key: value` line per field
pub struct TextFormatter;

/// Strings print bare; everything else prints as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl RecordFormatter for TextFormatter {
    fn format_fields(&self, fields: &FieldMap) -> String {
        let mut output = String::new();

        for (key, value) in fields {
            output.push_str(key);
            output.push_str(": ");
            output.push_str(&render_value(value));
            output.push('\n');
        }
        output.push_str(SEPARATOR);
        output.push('\n');

        output
    }

    fn format_failure(&self, error: &IngestError) -> String {
        format!("Bad json record: {}\n", error)
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        format!("The file has {} lines\n", summary.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(render_value(&json!("Ann")), "Ann");
        assert_eq!(render_value(&json!(1)), "1");
        assert_eq!(render_value(&json!(-2.5)), "-2.5");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&Value::Null), "null");
    }

    #[test]
    fn test_render_nested() {
        assert_eq!(render_value(&json!([1, "a", null])), "[1,\"a\",null]");
        assert_eq!(render_value(&json!({"x": {"y": 2}})), "{\"x\":{\"y\":2}}");
    }

    #[test]
    fn test_format_fields_keeps_source_order() {
        let map: FieldMap =
            serde_json::from_str(r#"{"zeta": 1, "alpha": "b", "mid": false}"#).unwrap();
        let text = TextFormatter.format_fields(&map);
        assert_eq!(text, "zeta: 1\nalpha: b\nmid: false\n=================\n");
    }

    #[test]
    fn test_format_empty_object() {
        let text = TextFormatter.format_fields(&fields(json!({})));
        assert_eq!(text, format!("{}\n", SEPARATOR));
    }

    #[test]
    fn test_format_failure_and_summary() {
        let err = IngestError::NotAnObject { line: 4, kind: "number" };
        assert_eq!(
            TextFormatter.format_failure(&err),
            "Bad json record: line 4: expected a JSON object, found number\n"
        );

        let summary = RunSummary { lines: 7, records: 6, failures: 1 };
        assert_eq!(TextFormatter.format_summary(&summary), "The file has 7 lines\n");
    }
}

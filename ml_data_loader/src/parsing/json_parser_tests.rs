#[cfg(test)]
mod tests {
    use crate::options::{JsonOptions, LoadOptions};
    use crate::parsing::json_parser::read_json;
    use polars::prelude::*;
    use std::io::Cursor;

    /// Test parsing a JSON array of records
    #[test]
    fn test_read_records_array() {
        let json = r#"[
            {"id": 1, "value": "a"},
            {"id": 2, "value": "b"},
            {"id": 3, "value": "c"}
        ]"#;

        let df = read_json(Cursor::new(json.as_bytes()), &LoadOptions::default()).unwrap();

        assert_eq!(df.height(), 3);
        let names: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["id", "value"]);

        let values = df.column("value").unwrap().str().unwrap();
        assert_eq!(values.get(1), Some("b"));
    }

    /// Test newline-delimited records
    #[test]
    fn test_read_json_lines() {
        let ndjson = "{\"id\": 1, \"score\": 0.5}\n{\"id\": 2, \"score\": 0.75}\n";
        let opts = LoadOptions::default().with_json(JsonOptions {
            lines: true,
            ..JsonOptions::default()
        });

        let df = read_json(Cursor::new(ndjson.as_bytes()), &opts).unwrap();

        assert_eq!(df.height(), 2);
        let scores = df.column("score").unwrap().f64().unwrap();
        assert_eq!(scores.get(1), Some(0.75));
    }

    /// Test records with missing keys become nulls
    #[test]
    fn test_missing_keys_are_null() {
        let json = r#"[{"id": 1, "value": "a"}, {"id": 2}]"#;
        let df = read_json(Cursor::new(json.as_bytes()), &LoadOptions::default()).unwrap();

        let values = df.column("value").unwrap().str().unwrap();
        assert_eq!(values.get(1), None);
    }

    /// Test a zero inference length falls back to scanning every record
    #[test]
    fn test_zero_infer_schema_length_scans_all_records() {
        let json = r#"[{"id": 1}, {"id": 2, "score": 0.5}]"#;
        let opts = LoadOptions::default().with_json(JsonOptions {
            infer_schema_length: Some(0),
            ..JsonOptions::default()
        });
        let df = read_json(Cursor::new(json.as_bytes()), &opts).unwrap();

        assert_eq!(df.column("id").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("score").unwrap().f64().unwrap().get(1), Some(0.5));
    }

    /// Test that CSV text is not accepted as JSON
    #[test]
    fn test_csv_content_fails() {
        let csv = "id,value\n1,a\n2,b\n";
        let result = read_json(Cursor::new(csv.as_bytes()), &LoadOptions::default());
        assert!(result.is_err(), "CSV text must not decode as JSON");
    }
}

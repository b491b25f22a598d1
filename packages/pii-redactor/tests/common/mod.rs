// Shared fixtures for integration tests

#![allow(dead_code)]

use pii_redactor::{redact_csv, Config, RecordProcessor, RunSummary};

/// Escape a JSON payload for an unquoted-header, quoted-field CSV cell.
pub fn csv_cell(payload: &str) -> String {
    format!("\"{}\"", payload.replace('"', "\"\""))
}

/// Build a comma-separated input file from (record_id, payload) pairs.
pub fn csv_input(rows: &[(&str, &str)]) -> String {
    let mut input = String::from("record_id,data_json\n");
    for (id, payload) in rows {
        input.push_str(&format!("{},{}\n", id, csv_cell(payload)));
    }
    input
}

/// One parsed output row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub record_id: String,
    pub payload: String,
    pub flag: String,
}

/// Run the pipeline over `input` with default config.
pub fn run(input: &str) -> (RunSummary, Vec<Row>) {
    run_with(input, &Config::default())
}

pub fn run_with(input: &str, config: &Config) -> (RunSummary, Vec<Row>) {
    let processor = RecordProcessor::new();
    let mut output = Vec::new();
    let summary = redact_csv(input.as_bytes(), &mut output, &processor, config)
        .expect("redaction should succeed");

    (summary, parse_output(&output))
}

pub fn parse_output(output: &[u8]) -> Vec<Row> {
    let mut reader = csv::Reader::from_reader(output);
    let headers = reader.headers().expect("output has a header").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["record_id", "redacted_data_json", "is_pii"]
    );

    reader
        .records()
        .map(|row| {
            let row = row.expect("output row parses");
            Row {
                record_id: row[0].to_string(),
                payload: row[1].to_string(),
                flag: row[2].to_string(),
            }
        })
        .collect()
}

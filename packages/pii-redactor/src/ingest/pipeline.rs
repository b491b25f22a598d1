use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::delimited::{detect_delimiter, find_column, strip_bom};
use super::json_repair::repair_json;
use super::output::{render_record, OutputRow, PiiFlag, OUTPUT_HEADER};
use crate::common::pii::RecordProcessor;
use crate::common::record::Record;
use crate::config::Config;
use crate::error::{PayloadError, RedactError, Result};

/// Counters for one redaction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Records that reached the detector, repaired ones included
    pub records_processed: usize,
    pub pii_detected: usize,
    /// Records that only parsed after repair
    pub repaired: usize,
    /// Records written with the `error` flag
    pub errors: usize,
    /// Rows without a record id or payload
    pub skipped: usize,
}

impl RunSummary {
    fn tally(&mut self, row: &OutputRow) {
        match row.flag {
            PiiFlag::Detected => {
                self.records_processed += 1;
                self.pii_detected += 1;
            }
            PiiFlag::Clean => self.records_processed += 1,
            PiiFlag::Error => self.errors += 1,
        }
    }
}

/// Parse a payload into a record.
///
/// Valid JSON that is not an object is rejected; the detector only ever sees
/// field maps.
pub fn parse_record(payload: &str) -> std::result::Result<Record, PayloadError> {
    match serde_json::from_str::<Value>(payload)? {
        Value::Object(record) => Ok(record),
        other => Err(PayloadError::NotAnObject {
            kind: json_kind(&other),
        }),
    }
}

/// Redact every row of `input` into `output`.
///
/// The whole input is read up front. Rows missing a record id or payload are
/// skipped; every other row produces exactly one output row.
pub fn redact_csv<R, W>(
    mut input: R,
    output: W,
    processor: &RecordProcessor,
    config: &Config,
) -> Result<RunSummary>
where
    R: Read,
    W: Write,
{
    let mut raw = String::new();
    input.read_to_string(&mut raw)?;
    let text = strip_bom(&raw);

    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(OUTPUT_HEADER)?;

    let mut summary = RunSummary::default();

    if text.trim().is_empty() {
        debug!("input is empty, nothing to redact");
        writer.flush()?;
        return Ok(summary);
    }

    let delimiter = detect_delimiter(text.lines().next().unwrap_or_default());
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let id_column = require_column(&headers, &config.record_id_column)?;
    let payload_column = require_column(&headers, &config.payload_column)?;

    debug!(
        delimiter = %char::from(delimiter).escape_default(),
        id_column,
        payload_column,
        "resolved input layout"
    );

    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let record_id = row.get(id_column).unwrap_or_default().trim();
        let payload = row.get(payload_column).unwrap_or_default().trim();

        if record_id.is_empty() || payload.is_empty() {
            debug!(row = index + 1, "skipping row without record id or payload");
            summary.skipped += 1;
            continue;
        }

        let (output_row, repaired) = redact_payload(record_id, payload, processor, config)?;
        if repaired {
            summary.repaired += 1;
        }
        summary.tally(&output_row);
        writer.write_record(output_row.fields())?;
    }

    writer.flush()?;
    Ok(summary)
}

/// Redact `input_path` into `output_path`.
pub fn redact_file(
    input_path: &Path,
    output_path: &Path,
    processor: &RecordProcessor,
    config: &Config,
) -> Result<RunSummary> {
    let input = File::open(input_path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => RedactError::InputNotFound {
            path: input_path.to_path_buf(),
        },
        _ => RedactError::Io(err),
    })?;
    let output = File::create(output_path)?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        "Redacting records"
    );

    let summary = redact_csv(
        BufReader::new(input),
        BufWriter::new(output),
        processor,
        config,
    )?;

    info!(
        records_processed = summary.records_processed,
        pii_detected = summary.pii_detected,
        repaired = summary.repaired,
        errors = summary.errors,
        skipped = summary.skipped,
        "Redaction complete"
    );

    Ok(summary)
}

/// Turn one payload into an output row. The flag is `error` only when the
/// payload cannot be parsed even after repair. Returns whether repair was
/// needed.
fn redact_payload(
    record_id: &str,
    payload: &str,
    processor: &RecordProcessor,
    config: &Config,
) -> Result<(OutputRow, bool)> {
    let (parsed, repaired) = match parse_record(payload) {
        Ok(record) => (Ok(record), false),
        Err(err) => {
            warn!(record_id, error = %err, "Malformed payload, attempting repair");
            let fixed = repair_json(payload);
            (parse_record(&fixed).map_err(|err| (fixed, err)), true)
        }
    };

    let record = match parsed {
        Ok(record) => record,
        Err((fixed, err)) => {
            warn!(record_id, error = %err, "Payload repair failed, marking record as error");
            let row = OutputRow {
                record_id: record_id.to_string(),
                payload: fixed,
                flag: PiiFlag::Error,
            };
            return Ok((row, false));
        }
    };

    let processed = processor.process(&record);
    debug!(
        record_id,
        is_pii = processed.is_pii,
        masked_fields = ?processed.masked_fields,
        "Processed record"
    );

    let row = OutputRow {
        record_id: record_id.to_string(),
        payload: render_record(&processed.record, config.ascii_json)?,
        flag: processed.is_pii.into(),
    };
    Ok((row, repaired))
}

fn require_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    find_column(headers, name).ok_or_else(|| RedactError::MissingColumn {
        column: name.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

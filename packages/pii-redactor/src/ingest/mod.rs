// File-facing collaborators around the detection core
//
// Reads the delimited input, turns each row's payload into a Record (repairing
// it when it can), hands it to the RecordProcessor and writes the output row.

pub mod delimited;
pub mod json_repair;
pub mod output;
pub mod pipeline;

pub use json_repair::repair_json;
pub use output::{render_record, OutputRow, PiiFlag};
pub use pipeline::{parse_record, redact_csv, redact_file, RunSummary};

// Detection core shared by the pipeline and the CLI

pub mod pii;
pub mod record;

pub use record::{is_present, value_text, Record};

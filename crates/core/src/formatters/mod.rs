pub mod csv;
pub mod json;
pub mod text;

pub use csv::{CSV_HEADER, CsvConfig, CsvFormatter, convert_to_csv};
pub use json::{JsonConfig, JsonFormatter, convert_to_json, extraction_to_json};
pub use text::{TextConfig, TextFormatter, convert_to_text};

use crate::profile::Profile;

/// Column order of the CSV export.
pub const CSV_HEADER: &str = "name,role,company,quote,confidence";

/// Configuration for CSV output
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Emit the header row
    pub include_header: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self { include_header: true }
    }
}

/// CSV formatter for profile lists
pub struct CsvFormatter {
    config: CsvConfig,
}

impl CsvFormatter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, profiles: &[Profile]) -> String {
        convert_to_csv(profiles, &self.config)
    }
}

/// Convert profiles to CSV, one `\n`-terminated row each
pub fn convert_to_csv(profiles: &[Profile], config: &CsvConfig) -> String {
    let mut output = String::new();

    if config.include_header {
        output.push_str(CSV_HEADER);
        output.push('\n');
    }

    for profile in profiles {
        let confidence = profile.confidence.to_string();
        let row = [&profile.name, &profile.role, &profile.company, &profile.quote, &confidence]
            .iter()
            .map(|field| escape_field(field))
            .collect::<Vec<_>>()
            .join(",");
        output.push_str(&row);
        output.push('\n');
    }

    output
}

/// Quote a field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

use super::record::{Mode, ProjectRecord};
use log::*;
use std::collections::HashSet;

/// Output of a single parse: records in file order and every class label seen.
///
#[derive(Debug, Default)]
pub struct ParsedDataset {
    pub records: Vec<ProjectRecord>,
    pub labels: HashSet<String>,
}

/// Turn the raw pipe-delimited text into records for the given mode.
///
/// A leading byte-order mark is ignored. Blank lines are skipped. Column count is never validated: a short line
/// yields empty strings for its missing fields instead of failing the parse.
///
pub fn parse(raw: &str, mode: Mode) -> ParsedDataset {
    let mut parsed = ParsedDataset::default();
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    for (number, line) in raw.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let columns = line.split('|').map(str::trim).collect::<Vec<_>>();
        if columns.len() < 5 {
            trace!(
                "Line {} has {} of 5 columns, missing fields left empty.",
                number + 1,
                columns.len()
            );
        }
        let record = ProjectRecord::from_columns(&columns, mode);
        parsed.labels.insert(record.class_label().to_string());
        parsed.records.push(record);
    }
    debug!(
        "Parsed {} {} records across {} classes.",
        parsed.records.len(),
        mode,
        parsed.labels.len()
    );
    parsed
}

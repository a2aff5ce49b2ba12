//! CSV reader for drug feature tables.
//!
//! Expects a header row, the drug name in column 0 and one float per
//! remaining column:
//! ```text
//! drug,f0,f1,f2
//! Aspirin,1.0,0.0,0.0
//! Ibuprofen,0.0,1.0,0.0
//! ```

use ddix_core::{Error, FeatureVector, Result};
use std::io::Read;
use std::path::Path;

/// Parse a feature table from a reader, keeping row order.
///
/// Every row must carry the same number of feature columns as the first one.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<(String, FeatureVector)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut dim: Option<usize> = None;

    for (row_idx, result) in csv_reader.records().enumerate() {
        let line = row_idx + 2; // 1-based, after the header
        let record = result.map_err(|e| Error::Parse(format!("CSV row {}: {}", line, e)))?;

        let name = record
            .get(0)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| Error::Parse(format!("row {}: missing drug name", line)))?
            .to_string();

        let width = record.len().saturating_sub(1);
        match dim {
            None if width == 0 => {
                return Err(Error::Parse(format!("row {}: no feature columns", line)));
            }
            None => dim = Some(width),
            Some(expected) if expected != width => {
                return Err(Error::Parse(format!(
                    "row {}: expected {} features, got {}",
                    line, expected, width
                )));
            }
            Some(_) => {}
        }

        let mut values = Vec::with_capacity(width);
        for (col, field) in record.iter().enumerate().skip(1) {
            let value: f32 = field.parse().map_err(|e| {
                Error::Parse(format!("row {}, col {}: bad float {:?}: {}", line, col, field, e))
            })?;
            if !value.is_finite() {
                return Err(Error::Parse(format!(
                    "row {}, col {}: non-finite value {:?}",
                    line, col, field
                )));
            }
            values.push(value);
        }

        rows.push((name, FeatureVector::new(values)));
    }

    Ok(rows)
}

/// Parse a feature table from a file path
pub fn parse_csv_file<P: AsRef<Path>>(path: P) -> Result<Vec<(String, FeatureVector)>> {
    let file = std::fs::File::open(path.as_ref())?;
    parse_csv(std::io::BufReader::new(file))
}

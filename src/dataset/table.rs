use std::path::Path;

use crate::dataset::DatasetError;

/// Row limit applied to a single uploaded table
pub const MAX_UPLOAD_ROWS: usize = 5000;

/// Numeric table: named columns, rows of finite values
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    /// Messages for rows dropped while parsing
    pub skipped: Vec<String>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self {
            headers,
            rows,
            skipped: Vec::new(),
        }
    }

    /// Parse comma- or tab-separated text with a header row.
    ///
    /// The delimiter is a tab when the header line contains one, otherwise a
    /// comma. Rows with the wrong width or a non-numeric cell are skipped and
    /// noted in `skipped`.
    pub fn parse(text: &str, max_rows: usize) -> Result<Self, DatasetError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DatasetError::Empty);
        }

        let lines: Vec<&str> = trimmed
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if lines.len() < 2 {
            return Err(DatasetError::MissingRows);
        }

        let delimiter = if lines[0].contains('\t') { '\t' } else { ',' };
        let headers: Vec<String> = lines[0]
            .split(delimiter)
            .map(|h| h.trim().to_string())
            .collect();
        if headers.len() < 2 {
            return Err(DatasetError::TooFewColumns);
        }

        let mut rows = Vec::new();
        let mut skipped = Vec::new();

        for (i, line) in lines.iter().enumerate().skip(1) {
            let parts: Vec<&str> = line.split(delimiter).map(str::trim).collect();

            if parts.iter().all(|p| p.is_empty()) {
                continue;
            }

            if parts.len() != headers.len() {
                skipped.push(format!("Row {}: wrong number of columns.", i + 1));
                continue;
            }

            let values: Option<Vec<f64>> = parts
                .iter()
                .map(|p| p.parse::<f64>().ok().filter(|v| v.is_finite()))
                .collect();

            match values {
                Some(values) => rows.push(values),
                None => {
                    skipped.push(format!("Row {}: non-numeric value detected.", i + 1));
                    continue;
                }
            }

            if rows.len() > max_rows {
                return Err(DatasetError::TooManyRows { max: max_rows });
            }
        }

        if rows.is_empty() {
            let message = skipped
                .first()
                .cloned()
                .unwrap_or_else(|| "No numeric rows found.".to_string());
            return Err(DatasetError::NoNumericRows(message));
        }

        Ok(Self {
            headers,
            rows,
            skipped,
        })
    }

    /// Read and parse a CSV/TSV file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text, MAX_UPLOAD_ROWS)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Render as comma-separated text. `decimals` fixes the precision of
    /// every value; `None` prints the shortest round-trip form.
    pub fn to_csv(&self, decimals: Option<usize>) -> String {
        let mut out = self.headers.join(",");

        for row in &self.rows {
            out.push('\n');
            let cells: Vec<String> = row
                .iter()
                .map(|v| match decimals {
                    Some(d) => format!("{:.*}", d, v),
                    None => v.to_string(),
                })
                .collect();
            out.push_str(&cells.join(","));
        }

        out
    }
}

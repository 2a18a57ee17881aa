//! CSV/TSV ingestion with delimiter detection.

use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::source::{Cell, Dataset};
use crate::error::{DpqlError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
    /// Accept records whose length differs from the header.
    /// Short records are padded with missing cells, long ones truncated.
    pub flexible: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            flexible: false,
            max_rows: None,
        }
    }
}

/// Turns delimited text into [`Dataset`]s.
///
/// The first record supplies column names. Every cell is kept as a string;
/// no type inference is performed.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a file. The dataset is named after the file stem.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| DpqlError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string());
        let source = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());

        Ok(self.parse_bytes(&name, &contents)?.with_source(source))
    }

    /// Parse in-memory text into a dataset called `name`.
    pub fn parse_str(&self, name: &str, text: &str) -> Result<Dataset> {
        self.parse_bytes(name, text.as_bytes())
    }

    /// Parse bytes directly.
    pub fn parse_bytes(&self, name: &str, bytes: &[u8]) -> Result<Dataset> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes, self.config.quote)?,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let columns: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        if columns.is_empty() {
            return Err(DpqlError::EmptyData("No columns found".to_string()));
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(DpqlError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }

        let expected_cols = columns.len();
        let mut rows = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            if record.len() != expected_cols && !self.config.flexible {
                return Err(DpqlError::Parse {
                    row: row_idx + 1,
                    message: format!(
                        "expected {} fields, found {}",
                        expected_cols,
                        record.len()
                    ),
                });
            }

            let mut row: Vec<Cell> = record.iter().map(|s| Some(s.to_string())).collect();
            row.resize(expected_cols, None);
            rows.push(row);
        }

        debug!(
            dataset = name,
            columns = expected_cols,
            rows = rows.len(),
            delimiter = %(delimiter as char).escape_default(),
            "parsed dataset"
        );

        Ok(Dataset::new(name, columns, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8], quote: u8) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .take(10)
        .collect();

    if lines.is_empty() {
        return Err(DpqlError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim, quote))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Higher count with consistent lines wins; tab gets a slight bonus
        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8, quote: u8) -> usize {
    let delim_char = delimiter as char;
    let quote_char = quote as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == quote_char {
            in_quotes = !in_quotes;
        } else if ch == delim_char && !in_quotes {
            count += 1;
        }
    }

    count
}

//! Catalog Source
//!
//! Reads the vector table and the stopword list from disk.
//!
//! Vector table format (comma-separated text, one word per line):
//! - First field: the word
//! - Remaining fields: vector components as decimal floats
//!
//! Stopword list format: one word per line.

use hashbrown::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

use crate::error::SourceError;
use crate::parallel::map_partitioned;

/// One parsed row of the vector table
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    pub word: String,
    pub values: Vec<f64>,
}

impl SourceRow {
    pub fn new(word: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            word: word.into(),
            values,
        }
    }
}

/// Read all non-blank lines with their 1-based line numbers
fn read_lines(path: &Path) -> Result<Vec<(usize, String)>, SourceError> {
    let io_err = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut lines = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(io_err)?;
        if !line.trim().is_empty() {
            lines.push((i + 1, line));
        }
    }
    Ok(lines)
}

/// Parse a single `word,v1,...,vn` line
fn parse_row(
    path: &Path,
    line_no: usize,
    line: &str,
    dimension: Option<usize>,
) -> Result<SourceRow, SourceError> {
    let malformed = |reason: String| SourceError::MalformedRow {
        path: path.to_path_buf(),
        line: line_no,
        reason,
    };

    let mut fields = line.trim().split(',');
    let word = fields.next().map(str::trim).unwrap_or_default();
    if word.is_empty() {
        return Err(malformed("missing word".to_string()));
    }

    let values = fields
        .map(|field| {
            let field = field.trim();
            field
                .parse::<f64>()
                .map_err(|e| malformed(format!("invalid number '{}': {}", field, e)))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if values.is_empty() {
        return Err(malformed(format!("word '{}' has no vector components", word)));
    }

    if let Some(expected) = dimension {
        if values.len() != expected {
            return Err(SourceError::DimensionMismatch {
                path: path.to_path_buf(),
                line: line_no,
                expected,
                actual: values.len(),
            });
        }
    }

    Ok(SourceRow::new(word, values))
}

/// Load the vector table
///
/// Lines are parsed across `workers` threads; rows come back in file order.
/// The first malformed line (by line number) is reported.
pub fn load_vectors(
    path: &Path,
    dimension: Option<usize>,
    workers: usize,
) -> Result<Vec<SourceRow>, SourceError> {
    let lines = read_lines(path)?;
    let rows = map_partitioned(&lines, workers, |(line_no, line)| {
        parse_row(path, *line_no, line, dimension)
    })
    .into_iter()
    .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(SourceError::EmptySource {
            path: path.to_path_buf(),
        });
    }

    info!("Loaded {} vectors from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load the stopword list
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>, SourceError> {
    let words: HashSet<String> = read_lines(path)?
        .into_iter()
        .map(|(_, line)| line.trim().to_string())
        .collect();

    info!("Loaded {} stopwords from {}", words.len(), path.display());
    Ok(words)
}

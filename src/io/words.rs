//! Word-file loading and matrix display.
//!
//! The input format is the original one: the first whitespace-separated
//! token is the record count N, followed by N words of at most
//! [`MAX_WORD_LEN`](crate::record::MAX_WORD_LEN) bytes each.

use crate::mesh_error::MeshShearError;
use crate::record::{Record, MAX_WORD_LEN};
use crate::topology::Mesh;
use itertools::Itertools;
use std::fmt::Write as _;
use std::path::Path;

/// Display column width, matching the original's `%-15s` matrix layout.
const COLUMN_WIDTH: usize = 15;

/// Reads the word file at `path`.
pub fn read_words(path: &Path) -> Result<Vec<Record>, MeshShearError> {
    let text = std::fs::read_to_string(path)?;
    parse_words(&text)
}

/// Parses `count word*` text into records.
pub fn parse_words(text: &str) -> Result<Vec<Record>, MeshShearError> {
    let mut tokens = text.split_whitespace();
    let count_token = tokens
        .next()
        .ok_or_else(|| MeshShearError::InvalidInput("empty word file".into()))?;
    let count: usize = count_token.parse().map_err(|_| {
        MeshShearError::InvalidInput(format!("`{count_token}` is not a record count"))
    })?;

    let mut words = Vec::new();
    words
        .try_reserve_exact(count)
        .map_err(|_| MeshShearError::Allocation(count * MAX_WORD_LEN))?;
    for index in 0..count {
        let token = tokens.next().ok_or_else(|| {
            MeshShearError::InvalidInput(format!("expected {count} words, found {index}"))
        })?;
        words.push(Record::try_from_word(token)?);
    }
    Ok(words)
}

/// Formats `records` as a left-aligned `side × side` matrix in row-major
/// order, one row per line.
pub fn format_matrix(records: &[Record], side: usize) -> String {
    let mut out = String::new();
    for row in &records.iter().chunks(side) {
        for record in row {
            let _ = write!(out, "{:<1$}", record, COLUMN_WIDTH);
        }
        out.push('\n');
    }
    out
}

/// The records reread along the snake path (row 0 left to right, row 1
/// right to left, …). For a sorted grid this is one ascending sequence.
pub fn snake_reading(records: &[Record], mesh: &Mesh) -> Vec<Record> {
    mesh.snake_indices().map(|i| records[i]).collect()
}

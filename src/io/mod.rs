//! Input/output collaborators: word files in, matrices out.

pub mod words;

pub use words::{format_matrix, parse_words, read_words, snake_reading};

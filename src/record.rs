//! `Record`: the fixed-width word buffer exchanged between workers.
//!
//! A record is a zero-padded byte array of [`MAX_WORD_LEN`] bytes. Ordering
//! is plain lexicographic byte order over the padded array, which for
//! NUL-padded ASCII words coincides with `strcmp` ordering. Records are
//! `Pod`, so an exchange casts them straight to wire bytes; they are only
//! ever replaced wholesale, never mutated in place.

use crate::mesh_error::MeshShearError;
use bytemuck::{Pod, Zeroable};
use std::borrow::Cow;
use std::fmt;

/// Fixed record capacity in bytes.
pub const MAX_WORD_LEN: usize = 20;

/// One fixed-width record, owned by exactly one worker between exchanges.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct Record([u8; MAX_WORD_LEN]);

impl Record {
    /// Builds a record from a word, zero-padding up to [`MAX_WORD_LEN`].
    ///
    /// Fails with [`MeshShearError::RecordTooLong`] when the word does not
    /// fit the fixed width.
    pub fn try_from_word(word: &str) -> Result<Self, MeshShearError> {
        let bytes = word.as_bytes();
        if bytes.len() > MAX_WORD_LEN {
            return Err(MeshShearError::RecordTooLong {
                word: word.to_string(),
                len: bytes.len(),
                max: MAX_WORD_LEN,
            });
        }
        let mut buf = [0u8; MAX_WORD_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Record(buf))
    }

    /// Raw wire view of the record.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Decodes a record from exactly [`MAX_WORD_LEN`] wire bytes.
    pub fn from_wire(bytes: &[u8]) -> Result<Self, String> {
        bytemuck::try_from_bytes::<Record>(bytes)
            .map(|r| *r)
            .map_err(|_| format!("expected {MAX_WORD_LEN} record bytes, got {}", bytes.len()))
    }

    /// Number of payload bytes before the zero padding.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.iter().position(|&b| b == 0).unwrap_or(MAX_WORD_LEN)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The word as text. Lossy only if the record was decoded from
    /// non-UTF-8 wire bytes.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0[..self.len()])
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Record").field(&self.text()).finish()
    }
}

const _: () = {
    assert!(std::mem::size_of::<Record>() == MAX_WORD_LEN);
};

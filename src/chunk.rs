//! Grapheme-safe byte chunking of atoms.
//!
//! Chunks are sub-slices of the atom whose boundaries always fall on
//! extended grapheme cluster boundaries, so a user-perceived character is
//! never split. Every chunk fits the byte bound except a single cluster
//! that is itself larger than the bound (a multi-codepoint combined-family
//! emoji, say), which stands alone as the one documented exception.

use std::iter::FusedIterator;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Byte bound for [`chunk_grapheme_safe`]: either a positive number of
/// UTF-8 bytes or explicitly unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteBound {
    #[default]
    Unbounded,
    Bytes(usize),
}

impl From<usize> for ByteBound {
    fn from(max_bytes: usize) -> Self {
        ByteBound::Bytes(max_bytes)
    }
}

/// Public error type for chunking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChunkError {
    #[error("invalid chunk bound: max_bytes must be at least 1")]
    InvalidBound,
}

/// Split `atom` into ordered chunks of at most `bound` UTF-8 bytes without
/// splitting grapheme clusters.
///
/// Unbounded returns the atom unchanged; `Bytes(0)` is rejected before any
/// processing. Deterministic and idempotent: re-chunking an
/// already-compliant atom returns it whole.
pub fn chunk_grapheme_safe(atom: &str, bound: ByteBound) -> Result<Vec<&str>, ChunkError> {
    let max_bytes = match bound {
        ByteBound::Unbounded => return Ok(vec![atom]),
        ByteBound::Bytes(0) => return Err(ChunkError::InvalidBound),
        ByteBound::Bytes(n) => n,
    };
    if atom.len() <= max_bytes {
        return Ok(vec![atom]);
    }
    Ok(ChunkIter {
        atom,
        clusters: atom.grapheme_indices(true),
        chunk_start: 0,
        chunk_len: 0,
        max_bytes,
        done: false,
    }
    .collect())
}

// Greedy cluster packing: a cluster that does not fit flushes the buffer
// and opens the next chunk. A cluster alone in its buffer is emitted even
// when oversized, which also covers the single-cluster atom.
struct ChunkIter<'a> {
    atom: &'a str,
    clusters: unicode_segmentation::GraphemeIndices<'a>,
    chunk_start: usize,
    chunk_len: usize,
    max_bytes: usize,
    done: bool,
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        for (idx, cluster) in self.clusters.by_ref() {
            if self.chunk_len + cluster.len() > self.max_bytes && self.chunk_len > 0 {
                let chunk = &self.atom[self.chunk_start..idx];
                self.chunk_start = idx;
                self.chunk_len = cluster.len();
                return Some(chunk);
            }
            self.chunk_len += cluster.len();
        }
        self.done = true;
        Some(&self.atom[self.chunk_start..])
    }
}

impl<'a> FusedIterator for ChunkIter<'a> {}

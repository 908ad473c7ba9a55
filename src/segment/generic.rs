//! Fallback segmentation for runs no category segmenter claims.
//!
//! The algorithm scans left to right. A maximal non-whitespace core followed
//! by exactly one whitespace character closes as `core + that character`; a
//! core followed by two or more whitespace characters closes bare, and the
//! entire following whitespace run becomes one atom of its own; a core at
//! end of input closes bare. A whitespace run with no preceding core —
//! including one at the very start, and including a run of one — is its own
//! atom. Atoms are sub-slices of the run, so the whole pass allocates only
//! the output vector.

use crate::segment::Segmenter;
use crate::unicode::is_any_whitespace;
use std::borrow::Cow;
use std::iter::FusedIterator;

#[derive(Debug, Default, Clone, Copy)]
pub struct GenericSegmenter;

impl Segmenter for GenericSegmenter {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn segment<'a>(&self, run: &'a str) -> Vec<Cow<'a, str>> {
        generic_atoms(run).map(Cow::Borrowed).collect()
    }
}

/// Iterate the generic atoms of `run` as sub-slices.
pub fn generic_atoms(run: &str) -> GenericAtoms<'_> {
    GenericAtoms { rest: run }
}

pub struct GenericAtoms<'a> {
    rest: &'a str,
}

impl<'a> GenericAtoms<'a> {
    // Byte length of the whitespace run at the start of `s`, with its
    // character count capped at 2 (the caller only distinguishes 0/1/many).
    fn leading_ws(s: &str) -> (usize, usize) {
        let mut bytes = 0;
        let mut count = 0;
        for c in s.chars() {
            if !is_any_whitespace(c) {
                break;
            }
            bytes += c.len_utf8();
            count += 1;
        }
        (bytes, count)
    }
}

impl<'a> Iterator for GenericAtoms<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        // Whitespace with no core in front of it: the full run is one atom.
        let (ws_bytes, _) = Self::leading_ws(self.rest);
        if ws_bytes > 0 {
            let (atom, rest) = self.rest.split_at(ws_bytes);
            self.rest = rest;
            return Some(atom);
        }

        // Maximal non-whitespace core.
        let core_bytes = self
            .rest
            .char_indices()
            .find(|&(_, c)| is_any_whitespace(c))
            .map_or(self.rest.len(), |(i, _)| i);

        let (ws_bytes, ws_count) = Self::leading_ws(&self.rest[core_bytes..]);
        let atom_bytes = if ws_count == 1 {
            // Exactly one whitespace character attaches to the core.
            core_bytes + ws_bytes
        } else {
            // Zero (end of run) or two-plus (the whitespace run becomes the
            // next atom in full): the core closes bare.
            core_bytes
        };

        let (atom, rest) = self.rest.split_at(atom_bytes);
        self.rest = rest;
        Some(atom)
    }
}

impl<'a> FusedIterator for GenericAtoms<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(run: &str) -> Vec<&str> {
        let out: Vec<&str> = generic_atoms(run).collect();
        let rebuilt: String = out.concat();
        assert_eq!(rebuilt, run, "lossless violated for {run:?}");
        out
    }

    #[test]
    fn empty_run() {
        assert!(atoms("").is_empty());
    }

    #[test]
    fn single_word() {
        assert_eq!(atoms("hello"), vec!["hello"]);
    }

    #[test]
    fn word_with_one_trailing_space_attaches() {
        assert_eq!(atoms("hello "), vec!["hello "]);
        assert_eq!(atoms("hello world"), vec!["hello ", "world"]);
    }

    #[test]
    fn two_plus_whitespace_becomes_its_own_atom_in_full() {
        assert_eq!(atoms("hello  world"), vec!["hello", "  ", "world"]);
        assert_eq!(atoms("hello    world"), vec!["hello", "    ", "world"]);
    }

    #[test]
    fn whitespace_run_at_start() {
        assert_eq!(atoms(" world"), vec![" ", "world"]);
        assert_eq!(atoms("   world"), vec!["   ", "world"]);
    }

    #[test]
    fn whitespace_only_run_is_one_atom() {
        assert_eq!(atoms(" "), vec![" "]);
        assert_eq!(atoms("   \n\t  "), vec!["   \n\t  "]);
    }

    #[test]
    fn json_text() {
        assert_eq!(
            atoms("{\"name\": \"test\", \"value\": 123}"),
            vec!["{\"name\": ", "\"test\", ", "\"value\": ", "123}"]
        );
    }

    #[test]
    fn multiline_code() {
        let text = "def foo():\n        return \"bar\"";
        assert_eq!(
            atoms(text),
            vec!["def ", "foo():", "\n        ", "return ", "\"bar\""]
        );
    }

    #[test]
    fn mixed_whitespace_kinds_count_together() {
        // "\n " after the core is a two-character whitespace run.
        assert_eq!(atoms("a\n b"), vec!["a", "\n ", "b"]);
        // A single ideographic space attaches like any other whitespace.
        assert_eq!(atoms("a\u{3000}b"), vec!["a\u{3000}", "b"]);
    }

    #[test]
    fn trailing_whitespace_run() {
        assert_eq!(atoms("hello  "), vec!["hello", "  "]);
    }

    #[test]
    fn segmenter_contract() {
        let seg = GenericSegmenter;
        assert_eq!(seg.name(), "generic");
        let out = seg.segment("a b");
        assert_eq!(out, vec!["a ", "b"]);
    }
}

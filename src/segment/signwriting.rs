//! Sign segmentation for Sutton SignWriting in Unicode (SWU).
//!
//! A sign has a fixed shape: an optional prefix (the sequence marker
//! U+1D800 followed by one or more symbols), then a signbox marker, two
//! coordinates, and zero or more spatial groups of one symbol plus two
//! coordinates. Because every sign opens with one of five marker
//! codepoints, adjacent signs split correctly even with no whitespace
//! between them. Codepoints that fit no sign accumulate into residue atoms
//! so the run always concatenates back exactly.

use crate::segment::Segmenter;
use crate::unicode::{SIGN_SORT, is_sign_box, is_sign_coord, is_sign_symbol};
use std::borrow::Cow;

#[derive(Debug, Default, Clone, Copy)]
pub struct SignWritingSegmenter;

impl Segmenter for SignWritingSegmenter {
    fn name(&self) -> &'static str {
        "signwriting"
    }

    fn segment<'a>(&self, run: &'a str) -> Vec<Cow<'a, str>> {
        let mut atoms = Vec::new();
        let mut residue_start = 0;
        let mut pos = 0;
        while pos < run.len() {
            if let Some(len) = match_sign(&run[pos..]) {
                if residue_start < pos {
                    atoms.push(Cow::Borrowed(&run[residue_start..pos]));
                }
                atoms.push(Cow::Borrowed(&run[pos..pos + len]));
                pos += len;
                residue_start = pos;
            } else {
                match run[pos..].chars().next() {
                    Some(c) => pos += c.len_utf8(),
                    None => break,
                }
            }
        }
        if residue_start < run.len() {
            atoms.push(Cow::Borrowed(&run[residue_start..]));
        }
        atoms
    }
}

/// Byte length of the sign starting at the beginning of `s`, if any.
fn match_sign(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    let mut cur = chars.next()?;
    let mut len = 0;

    // Optional prefix: sequence marker, then one or more symbols.
    if cur == SIGN_SORT {
        len += cur.len_utf8();
        let mut symbols = 0;
        loop {
            cur = chars.next()?;
            if !is_sign_symbol(cur) {
                break;
            }
            symbols += 1;
            len += cur.len_utf8();
        }
        if symbols == 0 {
            return None;
        }
    }

    // Signbox marker plus its two coordinates.
    if !is_sign_box(cur) {
        return None;
    }
    len += cur.len_utf8();
    for _ in 0..2 {
        let c = chars.next()?;
        if !is_sign_coord(c) {
            return None;
        }
        len += c.len_utf8();
    }

    // Spatial groups: symbol + two coordinates, as many as fully match.
    loop {
        let mut attempt = chars.clone();
        let Some(sym) = attempt.next() else { break };
        if !is_sign_symbol(sym) {
            break;
        }
        let (Some(x), Some(y)) = (attempt.next(), attempt.next()) else {
            break;
        };
        if !is_sign_coord(x) || !is_sign_coord(y) {
            break;
        }
        len += sym.len_utf8() + x.len_utf8() + y.len_utf8();
        chars = attempt;
    }

    Some(len)
}

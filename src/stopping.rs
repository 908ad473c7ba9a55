//! Word-completeness oracle and the batched streaming-stop predicate.
//!
//! A generation loop that decodes byte-level output token by token needs to
//! know when the text produced so far constitutes a finished word. The
//! oracle answers that for one fragment; the stop predicate maps it over a
//! batch of decoded fragments, one verdict per sequence, in order. Both are
//! total functions with no state, safe to call once per decoding step.

use crate::unicode::{is_any_whitespace, is_completion_marker};

/// True iff `fragment` is a finished word.
///
/// A fragment is complete when it is exactly one completion marker, or when
/// its entire length is one or more non-whitespace, non-marker characters
/// followed by exactly one trailing whitespace character.
///
/// The empty string is incomplete. Whitespace-only fragments are reported
/// incomplete as well; whether a fragment made only of whitespace should
/// ever count as a finished word is an unresolved question upstream, and
/// this keeps the conservative answer.
pub fn is_word_complete(fragment: &str) -> bool {
    let mut chars = fragment.chars();
    let Some(last) = chars.next_back() else {
        return false;
    };
    let body = chars.as_str();

    if body.is_empty() {
        return is_completion_marker(last);
    }
    is_any_whitespace(last)
        && body
            .chars()
            .all(|c| !is_any_whitespace(c) && !is_completion_marker(c))
}

/// Apply [`is_word_complete`] to each sequence's decoded fragment.
///
/// One boolean per fragment, same order, no cross-sequence coupling. The
/// caller owns the generation loop and halts a sequence upon `true`.
pub fn stopping_criteria<S: AsRef<str>>(fragments: &[S]) -> Vec<bool> {
    fragments
        .iter()
        .map(|fragment| is_word_complete(fragment.as_ref()))
        .collect()
}

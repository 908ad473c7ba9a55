//! Script classification and maximal-run scanning.
//!
//! Each character gets a script category by fixed precedence: kana is
//! Japanese-exclusive and wins, Han alone defaults to Chinese, SWU codepoints
//! are sign notation, everything else (letters, digits, punctuation,
//! whitespace) is generic. Consecutive characters sharing a category merge
//! into maximal runs; a contiguous CJK span containing any kana becomes one
//! Japanese run because Han ideographs are ambiguous between the two
//! languages while kana is not.

use crate::unicode::{is_any_whitespace, is_han, is_kana, is_sign_notation};
use smallvec::SmallVec;
use std::fmt;

/// The closed set of script categories. This set does not grow at runtime;
/// dispatch over it is an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Chinese,
    Japanese,
    SignNotation,
    Generic,
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Script::Chinese => "Chinese",
            Script::Japanese => "Japanese",
            Script::SignNotation => "SignNotation",
            Script::Generic => "Generic",
        };
        f.write_str(name)
    }
}

/// A maximal contiguous span of one script category. Runs partition the
/// input with no gaps or overlaps, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRun<'a> {
    pub script: Script,
    pub text: &'a str,
}

// Raw per-character kind; Han stays ambiguous until the run closes.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Kana,
    Han,
    Sign,
    Generic,
}

#[inline(always)]
fn kind_of(c: char) -> CharKind {
    if is_kana(c) {
        CharKind::Kana
    } else if is_han(c) {
        CharKind::Han
    } else if is_sign_notation(c) {
        CharKind::Sign
    } else {
        CharKind::Generic
    }
}

// Open-run accumulator: CJK spans track whether kana disambiguated them.
#[derive(Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Cjk { has_kana: bool },
    Sign,
    Generic,
}

impl RunKind {
    #[inline(always)]
    fn open(kind: CharKind) -> Self {
        match kind {
            CharKind::Kana => RunKind::Cjk { has_kana: true },
            CharKind::Han => RunKind::Cjk { has_kana: false },
            CharKind::Sign => RunKind::Sign,
            CharKind::Generic => RunKind::Generic,
        }
    }

    #[inline(always)]
    fn extend(self, kind: CharKind) -> Option<Self> {
        match (self, kind) {
            (RunKind::Cjk { has_kana }, CharKind::Kana | CharKind::Han) => Some(RunKind::Cjk {
                has_kana: has_kana || kind == CharKind::Kana,
            }),
            (RunKind::Sign, CharKind::Sign) => Some(RunKind::Sign),
            (RunKind::Generic, CharKind::Generic) => Some(RunKind::Generic),
            _ => None,
        }
    }

    #[inline(always)]
    fn script(self) -> Script {
        match self {
            RunKind::Cjk { has_kana: true } => Script::Japanese,
            RunKind::Cjk { has_kana: false } => Script::Chinese,
            RunKind::Sign => Script::SignNotation,
            RunKind::Generic => Script::Generic,
        }
    }
}

/// Partition `text` into maximal script runs.
///
/// A generic run that directly precedes a non-generic run gives up its
/// trailing whitespace span as a run of its own, so a single space between
/// two script runs surfaces as a standalone atom downstream rather than
/// being attached to the preceding word.
pub fn script_runs(text: &str) -> SmallVec<[ScriptRun<'_>; 4]> {
    let mut runs: SmallVec<[ScriptRun<'_>; 4]> = SmallVec::new();
    let mut open: Option<(usize, RunKind)> = None;

    for (i, c) in text.char_indices() {
        let kind = kind_of(c);
        open = match open {
            None => Some((i, RunKind::open(kind))),
            Some((start, run)) => match run.extend(kind) {
                Some(merged) => Some((start, merged)),
                None => {
                    close_run(&mut runs, text, start, i, run, kind != CharKind::Generic);
                    Some((i, RunKind::open(kind)))
                }
            },
        };
    }
    if let Some((start, run)) = open {
        close_run(&mut runs, text, start, text.len(), run, false);
    }
    runs
}

fn close_run<'a>(
    runs: &mut SmallVec<[ScriptRun<'a>; 4]>,
    text: &'a str,
    start: usize,
    end: usize,
    run: RunKind,
    next_is_script: bool,
) {
    let span = &text[start..end];
    if run == RunKind::Generic && next_is_script {
        // Split the trailing whitespace off into its own generic run.
        let core_len = span.trim_end_matches(is_any_whitespace).len();
        if core_len > 0 && core_len < span.len() {
            runs.push(ScriptRun {
                script: Script::Generic,
                text: &span[..core_len],
            });
            runs.push(ScriptRun {
                script: Script::Generic,
                text: &span[core_len..],
            });
            return;
        }
    }
    runs.push(ScriptRun {
        script: run.script(),
        text: span,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<(Script, &str)> {
        script_runs(text).iter().map(|r| (r.script, r.text)).collect()
    }

    #[test]
    fn empty_and_single_run() {
        assert!(script_runs("").is_empty());
        assert_eq!(collect("hello world"), vec![(Script::Generic, "hello world")]);
        assert_eq!(collect("我爱北京"), vec![(Script::Chinese, "我爱北京")]);
        assert_eq!(collect("ひらがな"), vec![(Script::Japanese, "ひらがな")]);
    }

    #[test]
    fn runs_partition_the_input() {
        let text = "hello 我爱北京 world こんにちは!";
        let runs = script_runs(text);
        let rebuilt: String = runs.iter().map(|r| r.text).collect();
        assert_eq!(rebuilt, text);
        assert!(runs.iter().all(|r| !r.text.is_empty()));
    }

    #[test]
    fn kana_disambiguates_han() {
        // Han mixed with kana in one contiguous CJK span is Japanese.
        assert_eq!(collect("私は学生です"), vec![(Script::Japanese, "私は学生です")]);
        // Pure Han stays Chinese even in the same text, once separated.
        assert_eq!(
            collect("学生 です"),
            vec![
                (Script::Chinese, "学生"),
                (Script::Generic, " "),
                (Script::Japanese, "です"),
            ]
        );
    }

    #[test]
    fn boundary_space_becomes_its_own_run() {
        assert_eq!(
            collect("hello 我爱北京 world"),
            vec![
                (Script::Generic, "hello"),
                (Script::Generic, " "),
                (Script::Chinese, "我爱北京"),
                (Script::Generic, " world"),
            ]
        );
    }

    #[test]
    fn multi_space_boundary_splits_in_full() {
        assert_eq!(
            collect("ab  你好"),
            vec![
                (Script::Generic, "ab"),
                (Script::Generic, "  "),
                (Script::Chinese, "你好"),
            ]
        );
    }

    #[test]
    fn whitespace_only_prefix_stays_one_run() {
        assert_eq!(
            collect("  你好"),
            vec![(Script::Generic, "  "), (Script::Chinese, "你好")]
        );
    }

    #[test]
    fn cjk_punctuation_is_generic() {
        assert_eq!(
            collect("私は学生です。"),
            vec![(Script::Japanese, "私は学生です"), (Script::Generic, "。")]
        );
    }

    #[test]
    fn sign_notation_runs() {
        let sign = "\u{1D800}\u{40001}\u{1D803}\u{1D84C}\u{1D84D}";
        let text = format!("hi {sign}");
        assert_eq!(
            collect(&text),
            vec![
                (Script::Generic, "hi"),
                (Script::Generic, " "),
                (Script::SignNotation, sign),
            ]
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(Script::Chinese.to_string(), "Chinese");
        assert_eq!(Script::SignNotation.to_string(), "SignNotation");
    }
}

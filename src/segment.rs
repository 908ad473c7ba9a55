//! The uniform segmenter contract and the per-script dispatch table.
//!
//! Every script category is served by one segmenter behind the same
//! contract: it receives the substring of one script run and returns an
//! ordered sequence of non-empty atoms whose concatenation equals that run
//! exactly. The in-core generic and sign-notation segmenters are plain
//! statics; the Chinese and Japanese segmenters wrap external engines whose
//! backing resource is acquired lazily, exactly once per process, behind a
//! `OnceLock`. A category whose resource cannot be acquired fails the whole
//! call with [`SegmentError::ResourceUnavailable`] — it is never silently
//! downgraded to generic segmentation.

#[cfg(feature = "chinese")]
pub mod chinese;
pub mod generic;
#[cfg(feature = "japanese")]
pub mod japanese;
pub mod signwriting;

use crate::script::{Script, script_runs};
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for segmentation.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("backing resource for the {script} segmenter is unavailable: {reason}")]
    ResourceUnavailable { script: Script, reason: String },
}

/// One script category's segmentation strategy.
pub trait Segmenter: Send + Sync {
    /// Human-readable name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Split one script run into atoms. The atoms must be non-empty and
    /// concatenate back to `run` exactly; a segmenter never introduces or
    /// removes characters.
    fn segment<'a>(&self, run: &'a str) -> Vec<Cow<'a, str>>;
}

/// Resolve the segmenter registered for a script category.
///
/// Acquisition of a category's backing resource happens here, before any of
/// the run's text is dispatched, so a failed call produces no partial output
/// for that run.
pub fn segmenter_for(script: Script) -> Result<&'static dyn Segmenter, SegmentError> {
    match script {
        Script::Generic => Ok(&generic::GenericSegmenter),
        Script::SignNotation => Ok(&signwriting::SignWritingSegmenter),
        #[cfg(feature = "chinese")]
        Script::Chinese => chinese::shared().map(|seg| seg as &'static dyn Segmenter),
        #[cfg(not(feature = "chinese"))]
        Script::Chinese => Err(SegmentError::ResourceUnavailable {
            script: Script::Chinese,
            reason: "crate built without the `chinese` feature".into(),
        }),
        #[cfg(feature = "japanese")]
        Script::Japanese => japanese::shared().map(|seg| seg as &'static dyn Segmenter),
        #[cfg(not(feature = "japanese"))]
        Script::Japanese => Err(SegmentError::ResourceUnavailable {
            script: Script::Japanese,
            reason: "crate built without the `japanese` feature".into(),
        }),
    }
}

/// Pretokenize `text` into an ordered sequence of word atoms.
///
/// The input is partitioned into maximal script runs, each run is handed to
/// its category's segmenter, and the per-run atom sequences are appended in
/// run order. Concatenating the returned atoms reconstructs `text` exactly.
pub fn segment_text(text: &str) -> Result<Vec<Cow<'_, str>>, SegmentError> {
    let mut atoms = Vec::new();
    for run in script_runs(text) {
        let segmenter = segmenter_for(run.script)?;
        atoms.extend(segmenter.segment(run.text));
    }
    Ok(atoms)
}

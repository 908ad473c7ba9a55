//! Japanese morphological segmentation via the vibrato Viterbi analyzer.
//!
//! vibrato needs a compiled system dictionary, which this crate does not
//! ship; the path is read once from the `WORDY_JA_DICT` environment
//! variable. The dictionary load is the only blocking acquisition in the
//! crate and happens at most once per process; a failed load is cached and
//! reported as `ResourceUnavailable` on every call that needs the script.
//!
//! Analysis itself runs on a per-call worker over the shared tokenizer, so
//! concurrent callers never contend after the one-time load.

use crate::script::Script;
use crate::segment::{SegmentError, Segmenter};
use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{debug, warn};
use vibrato::{Dictionary, Tokenizer};

/// Environment variable naming the compiled system dictionary file.
pub const DICT_ENV: &str = "WORDY_JA_DICT";

pub struct JapaneseSegmenter {
    tokenizer: Tokenizer,
}

static SHARED: OnceLock<Result<JapaneseSegmenter, String>> = OnceLock::new();

fn acquire() -> Result<JapaneseSegmenter, String> {
    let path = std::env::var_os(DICT_ENV)
        .map(PathBuf::from)
        .ok_or_else(|| format!("{DICT_ENV} is not set; point it at a compiled system dictionary"))?;
    let file =
        File::open(&path).map_err(|e| format!("cannot open dictionary {}: {e}", path.display()))?;
    let dict = Dictionary::read(BufReader::new(file))
        .map_err(|e| format!("cannot read dictionary {}: {e}", path.display()))?;
    debug!(path = %path.display(), "loaded Japanese dictionary");
    Ok(JapaneseSegmenter {
        tokenizer: Tokenizer::new(dict),
    })
}

/// The process-wide Japanese segmenter handle, built on first use.
pub(crate) fn shared() -> Result<&'static JapaneseSegmenter, SegmentError> {
    SHARED
        .get_or_init(|| {
            acquire().inspect_err(|reason| warn!(%reason, "Japanese segmenter unavailable"))
        })
        .as_ref()
        .map_err(|reason| SegmentError::ResourceUnavailable {
            script: Script::Japanese,
            reason: reason.clone(),
        })
}

impl Segmenter for JapaneseSegmenter {
    fn name(&self) -> &'static str {
        "japanese"
    }

    fn segment<'a>(&self, run: &'a str) -> Vec<Cow<'a, str>> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(run);
        worker.tokenize();
        // Surfaces borrow from the worker's sentence buffer, so the atoms
        // must be owned. Runs contain no whitespace (whitespace classifies
        // generic), so the surfaces concatenate back to the run exactly.
        worker
            .token_iter()
            .map(|token| Cow::Owned(token.surface().to_string()))
            .collect()
    }
}

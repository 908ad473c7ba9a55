//! Chinese word segmentation via the jieba dictionary/statistical engine.
//!
//! The engine ships its own dictionary, so acquisition amounts to building
//! the in-memory trie once per process. Precise-mode cut with HMM enabled
//! produces the finest conventional word boundaries; registered compounds
//! (中国科学院, 清华大学) stay whole.

use crate::segment::{SegmentError, Segmenter};
use jieba_rs::Jieba;
use std::borrow::Cow;
use std::sync::OnceLock;
use tracing::debug;

pub struct ChineseSegmenter {
    engine: Jieba,
}

static SHARED: OnceLock<ChineseSegmenter> = OnceLock::new();

/// The process-wide Chinese segmenter handle, built on first use.
pub(crate) fn shared() -> Result<&'static ChineseSegmenter, SegmentError> {
    Ok(SHARED.get_or_init(|| {
        debug!("loading embedded Chinese dictionary");
        ChineseSegmenter {
            engine: Jieba::new(),
        }
    }))
}

impl Segmenter for ChineseSegmenter {
    fn name(&self) -> &'static str {
        "chinese"
    }

    fn segment<'a>(&self, run: &'a str) -> Vec<Cow<'a, str>> {
        self.engine
            .cut(run, true)
            .into_iter()
            .map(Cow::Borrowed)
            .collect()
    }
}

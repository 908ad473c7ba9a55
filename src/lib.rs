pub mod chunk;
pub mod script;
pub mod segment;
pub mod stopping;
pub mod unicode;
pub mod wordy;

pub use chunk::{ByteBound, ChunkError, chunk_grapheme_safe};
pub use script::{Script, ScriptRun, script_runs};
pub use segment::{SegmentError, Segmenter, segment_text, segmenter_for};
pub use stopping::{is_word_complete, stopping_criteria};
pub use wordy::{Wordy, WordyBuilder, WordyError, words_to_text};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}

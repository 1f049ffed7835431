use crate::config::TokenizerConfig;
use crate::pipeline::traits::{PhonemeTokenizer, WordSegmenter};
use crate::text::phonemes::split_phonemes;
use crate::text::segmentation::segment_words;
use crate::types::Segment;

pub struct InventoryWordSegmenter {
    config: TokenizerConfig,
}

impl InventoryWordSegmenter {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }
}

impl WordSegmenter for InventoryWordSegmenter {
    fn segment(&self, text: &str) -> Vec<Segment> {
        segment_words(text, &self.config)
    }
}

pub struct IpaPhonemeTokenizer;

impl PhonemeTokenizer for IpaPhonemeTokenizer {
    fn tokenize(&self, word: &str) -> Vec<String> {
        split_phonemes(word)
    }
}

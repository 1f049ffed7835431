use crate::types::Segment;

/// Splits cleaned text into word and non-word segments.
pub trait WordSegmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<Segment>;
}

/// Splits one word segment into phonemic units.
pub trait PhonemeTokenizer: Send + Sync {
    fn tokenize(&self, word: &str) -> Vec<String>;
}

use unicode_normalization::char::is_combining_mark;

use crate::config::TokenizerConfig;
use crate::types::Segment;

pub fn is_word_char(c: char, config: &TokenizerConfig) -> bool {
    c.is_alphabetic() || is_combining_mark(c) || config.is_extra_word_char(c)
}

/// Splits text into word and non-word segments. Word characters merge into
/// one segment; every non-word character becomes its own segment.
pub fn segment_words(text: &str, config: &TokenizerConfig) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for c in text.chars() {
        if !is_word_char(c, config) {
            segments.push(Segment::non_word(c));
            continue;
        }
        match segments.last_mut() {
            Some(last) if last.is_word => last.text.push(c),
            _ => segments.push(Segment::word(c)),
        }
    }
    segments
}

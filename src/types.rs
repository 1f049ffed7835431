use std::collections::HashMap;
use std::fmt;

use crate::error::ConversionError;

/// Sentence id → cleaned sentence text.
pub type SentenceMap = HashMap<String, String>;

/// One run of text from the word segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub is_word: bool,
}

impl Segment {
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_word: true,
        }
    }

    pub fn non_word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_word: false,
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct SentenceLine {
    pub sentence: String,
    pub original_sentence_id: String,
}

/// Borrowed view of one `|`-separated line of the IPA file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtteranceLine<'a> {
    pub utterance_id: &'a str,
    pub speaker_id: &'a str,
    /// Always the last field, however many fields the line has.
    pub raw_ipa: &'a str,
    /// Second `-` separated segment of the utterance id.
    pub sentence_id: &'a str,
}

impl<'a> UtteranceLine<'a> {
    pub const MIN_FIELDS: usize = 3;

    pub fn parse(line: &'a str, line_no: usize) -> Result<Self, ConversionError> {
        let fields: Vec<&str> = line.trim().split('|').collect();
        if fields.len() < Self::MIN_FIELDS {
            return Err(ConversionError::malformed(
                "IPA file",
                line_no,
                format!(
                    "expected at least {} '|'-separated fields, found {}",
                    Self::MIN_FIELDS,
                    fields.len()
                ),
            ));
        }

        let utterance_id = fields[0];
        let sentence_id = utterance_id.split('-').nth(1).ok_or_else(|| {
            ConversionError::malformed(
                "IPA file",
                line_no,
                format!("utterance id '{utterance_id}' has no '-' separated sentence id segment"),
            )
        })?;

        Ok(Self {
            utterance_id,
            speaker_id: fields[2],
            raw_ipa: fields[fields.len() - 1],
            sentence_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub utterance_id: String,
    pub speaker_id: String,
    pub formatted_ipa: String,
    pub sentence: String,
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.utterance_id, self.speaker_id, self.formatted_ipa, self.sentence
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub sentences: usize,
    /// Sentence lines whose id had already been seen; the later text wins.
    pub duplicate_sentence_ids: usize,
    pub records: usize,
}

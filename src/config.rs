use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConversionError;

/// Corpus languages with a defined cleaning and tokenization profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Kanien'kéha, code `moh`.
    Mohawk,
    /// nêhiyawêwin, code `crk`.
    PlainsCree,
    /// SENĆOŦEN, code `str`.
    StraitsSalish,
}

impl Language {
    pub const ALL: [Language; 3] = [Self::Mohawk, Self::PlainsCree, Self::StraitsSalish];

    pub fn code(self) -> &'static str {
        match self {
            Self::Mohawk => "moh",
            Self::PlainsCree => "crk",
            Self::StraitsSalish => "str",
        }
    }

    /// SENĆOŦEN orthography is case-sensitive, so it keeps its casing.
    pub fn lowercases(self) -> bool {
        match self {
            Self::Mohawk | Self::PlainsCree => true,
            Self::StraitsSalish => false,
        }
    }

    pub fn tokenizer_config(self) -> TokenizerConfig {
        let base = TokenizerConfig::default();
        match self {
            Self::Mohawk | Self::StraitsSalish => base.with_extra_word_chars(['\'']),
            Self::PlainsCree => base,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConversionError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| ConversionError::unsupported_language(code))
    }
}

/// Characters the word segmenter treats as part of a word on top of
/// alphabetic characters and combining marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub extra_word_chars: Vec<char>,
}

impl TokenizerConfig {
    /// IPA tone letters ˥ ˦ ˧ ˨ ˩ are modifier symbols, not letters.
    pub const TONE_LETTERS: [char; 5] = ['\u{02E5}', '\u{02E6}', '\u{02E7}', '\u{02E8}', '\u{02E9}'];

    pub fn with_extra_word_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        for c in chars {
            if !self.extra_word_chars.contains(&c) {
                self.extra_word_chars.push(c);
            }
        }
        self
    }

    pub fn is_extra_word_char(&self, c: char) -> bool {
        self.extra_word_chars.contains(&c)
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            extra_word_chars: Self::TONE_LETTERS.to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConversionConfig {
    pub ipa_path: PathBuf,
    pub text_path: PathBuf,
    pub out_path: PathBuf,
    pub language: Language,
    pub show_progress: bool,
}

impl ConversionConfig {
    pub fn new(
        ipa_path: impl Into<PathBuf>,
        text_path: impl Into<PathBuf>,
        out_path: impl Into<PathBuf>,
        language: Language,
    ) -> Self {
        Self {
            ipa_path: ipa_path.into(),
            text_path: text_path.into(),
            out_path: out_path.into(),
            language,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

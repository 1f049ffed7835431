use crate::config::{Language, TokenizerConfig};
use crate::pipeline::defaults::{InventoryWordSegmenter, IpaPhonemeTokenizer};
use crate::pipeline::runtime::{Converter, ConverterParts};
use crate::pipeline::traits::{PhonemeTokenizer, WordSegmenter};

pub struct ConverterBuilder {
    language: Language,
    tokenizer_config: Option<TokenizerConfig>,
    word_segmenter: Option<Box<dyn WordSegmenter>>,
    phoneme_tokenizer: Option<Box<dyn PhonemeTokenizer>>,
}

impl ConverterBuilder {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            tokenizer_config: None,
            word_segmenter: None,
            phoneme_tokenizer: None,
        }
    }

    /// Overrides the language's default inventory. Ignored when a custom
    /// segmenter is supplied.
    pub fn with_tokenizer_config(mut self, tokenizer_config: TokenizerConfig) -> Self {
        self.tokenizer_config = Some(tokenizer_config);
        self
    }

    pub fn with_word_segmenter(mut self, word_segmenter: Box<dyn WordSegmenter>) -> Self {
        self.word_segmenter = Some(word_segmenter);
        self
    }

    pub fn with_phoneme_tokenizer(mut self, phoneme_tokenizer: Box<dyn PhonemeTokenizer>) -> Self {
        self.phoneme_tokenizer = Some(phoneme_tokenizer);
        self
    }

    pub fn build(self) -> Converter {
        let language = self.language;
        let tokenizer_config = self
            .tokenizer_config
            .unwrap_or_else(|| language.tokenizer_config());
        tracing::debug!(
            language = %language,
            extra_word_chars = tokenizer_config.extra_word_chars.len(),
            custom_segmenter = self.word_segmenter.is_some(),
            custom_phoneme_tokenizer = self.phoneme_tokenizer.is_some(),
            "building converter"
        );

        Converter::from_parts(ConverterParts {
            language,
            word_segmenter: self
                .word_segmenter
                .unwrap_or_else(|| Box::new(InventoryWordSegmenter::new(tokenizer_config))),
            phoneme_tokenizer: self
                .phoneme_tokenizer
                .unwrap_or_else(|| Box::new(IpaPhonemeTokenizer)),
        })
    }
}

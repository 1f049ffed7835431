pub mod config;
pub mod error;
pub mod pipeline;
pub mod text;
pub mod types;

pub use config::{ConversionConfig, Language, TokenizerConfig};
pub use error::ConversionError;
pub use pipeline::builder::ConverterBuilder;
pub use pipeline::runtime::{convert_files, format_ipa, Converter, LoadedSentences};
pub use pipeline::traits::{PhonemeTokenizer, WordSegmenter};
pub use text::cleaning::{clean, clean_text};
pub use types::{ConversionSummary, OutputRecord, Segment, SentenceMap, UtteranceLine};

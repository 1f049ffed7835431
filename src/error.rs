use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("I/O error while {context}{}: {source}", path_suffix(.path))]
    Io {
        context: &'static str,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {input} line {line_no}: {message}")]
    MalformedInputLine {
        input: &'static str,
        line_no: usize,
        message: String,
        #[source]
        cause: Option<serde_json::Error>,
    },
    #[error("unsupported language '{code}' (expected one of: moh, crk, str)")]
    UnsupportedLanguage { code: String },
    #[error(
        "IPA file line {line_no}: utterance '{utterance_id}' refers to sentence id \
         '{sentence_id}', which is not present in the sentence file"
    )]
    MissingSentenceMapping {
        line_no: usize,
        utterance_id: String,
        sentence_id: String,
    },
}

impl ConversionError {
    pub(crate) fn io(
        context: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            context,
            path: Some(path.into()),
            source,
        }
    }

    pub(crate) fn stream_io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: None,
            source,
        }
    }

    pub(crate) fn json(input: &'static str, line_no: usize, source: serde_json::Error) -> Self {
        Self::MalformedInputLine {
            input,
            line_no,
            message: source.to_string(),
            cause: Some(source),
        }
    }

    pub(crate) fn malformed(
        input: &'static str,
        line_no: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedInputLine {
            input,
            line_no,
            message: message.into(),
            cause: None,
        }
    }

    pub(crate) fn unsupported_language(code: impl Into<String>) -> Self {
        Self::UnsupportedLanguage { code: code.into() }
    }

    pub(crate) fn missing_sentence(
        line_no: usize,
        utterance_id: impl Into<String>,
        sentence_id: impl Into<String>,
    ) -> Self {
        Self::MissingSentenceMapping {
            line_no,
            utterance_id: utterance_id.into(),
            sentence_id: sentence_id.into(),
        }
    }

    /// Attaches a file path to stream I/O errors raised by reader-generic code.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io {
                context,
                path: None,
                source,
            } => Self::Io {
                context,
                path: Some(path.into()),
                source,
            },
            other => other,
        }
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" '{}'", path.display()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_path() {
        let err = ConversionError::io(
            "opening sentence file",
            "/tmp/sentences.jsonl",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("opening sentence file '/tmp/sentences.jsonl'"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn with_path_fills_missing_path_only() {
        let err = ConversionError::stream_io(
            "reading IPA file",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        )
        .with_path("ipa.txt");
        assert!(matches!(err, ConversionError::Io { path: Some(ref p), .. } if p.as_path() == std::path::Path::new("ipa.txt")));

        let untouched = ConversionError::unsupported_language("fra").with_path("ipa.txt");
        assert!(matches!(untouched, ConversionError::UnsupportedLanguage { .. }));
    }

    #[test]
    fn malformed_line_message_names_input_and_line() {
        let err = ConversionError::malformed("IPA file", 7, "expected at least 3 '|'-separated fields, found 2");
        assert_eq!(
            err.to_string(),
            "malformed IPA file line 7: expected at least 3 '|'-separated fields, found 2"
        );
    }

    #[test]
    fn json_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConversionError::json("sentence file", 3, source);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("malformed sentence file line 3:"));
    }
}

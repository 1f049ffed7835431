use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::config::Language;
use crate::error::ConversionError;

/// Hebrew sof pasuq, which Mohawk transcribers typed in place of the length mark.
const SOF_PASUQ: char = '\u{05C3}';
const LENGTH_MARK: &str = "\u{02D0}";

/// Normalizes sentence text or a raw IPA transcription for `language`.
pub fn clean_text(text: &str, language: Language) -> String {
    let mut cleaned = collapse_whitespace(&nfc_normalize(text));
    if language.lowercases() {
        // Lowercase pairs can compose where the uppercase ones did not (J + caron).
        cleaned = nfc_normalize(&lower(&cleaned));
    }
    if language == Language::Mohawk {
        cleaned = cleaned.replace(SOF_PASUQ, LENGTH_MARK);
    }
    cleaned
}

/// String-coded variant of [`clean_text`].
pub fn clean(text: &str, code: &str) -> Result<String, ConversionError> {
    let language = code.parse::<Language>()?;
    Ok(clean_text(text, language))
}

/// ```
/// use ipa_corpus_rs::text::cleaning::lower;
/// assert_eq!(lower("MiXeD ÇÀSÉ"), "mixed çàsé");
/// ```
pub fn lower(text: &str) -> String {
    text.to_lowercase()
}

/// ```
/// use ipa_corpus_rs::text::cleaning::nfc_normalize;
/// assert_eq!(nfc_normalize("e\u{0301}"), "\u{00E9}");
/// ```
pub fn nfc_normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Replaces every whitespace run with a single ASCII space. Leading and
/// trailing runs are collapsed, not trimmed.
///
/// ```
/// use ipa_corpus_rs::text::cleaning::collapse_whitespace;
/// assert_eq!(collapse_whitespace("  asdf  \t   qwer   "), " asdf qwer ");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
    RE.replace_all(text, " ").into_owned()
}

use std::fs;
use std::path::{Path, PathBuf};

use ipa_corpus_rs::{
    clean, convert_files, format_ipa, ConversionConfig, ConversionError, Language,
};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(sentences: &str, ipa: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("sentences.jsonl"), sentences).expect("write sentences");
        fs::write(dir.path().join("ipa.txt"), ipa).expect("write ipa");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn config(&self, language: Language) -> ConversionConfig {
        ConversionConfig::new(
            self.path("ipa.txt"),
            self.path("sentences.jsonl"),
            self.path("out.txt"),
            language,
        )
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn joins_sentence_and_formats_ipa() {
    let fixture = Fixture::new(
        "{\"sentence\": \"hello world\", \"original_sentence_id\": \"42\"}\n",
        "utt-42-3|x|spk1|h ə l o#w ɹ\u{0329} l d\n",
    );
    let summary = convert_files(&fixture.config(Language::PlainsCree)).expect("conversion");
    assert_eq!(summary.sentences, 1);
    assert_eq!(summary.records, 1);

    let raw = fs::read_to_string(fixture.path("out.txt")).unwrap();
    assert!(raw.ends_with('\n'));
    let lines = read_lines(&fixture.path("out.txt"));
    assert_eq!(
        lines,
        ["utt-42-3|spk1|{h # ə # l # o # w # ɹ\u{0329} # l # d}|hello world"]
    );
}

#[test]
fn output_follows_ipa_order_and_allows_repeated_sentences() {
    let fixture = Fixture::new(
        concat!(
            "{\"sentence\": \"Sh\u{00E9}:kon\", \"original_sentence_id\": \"1\"}\n",
            "{\"sentence\": \"Ni\u{00E1}:wen  KOWA\", \"original_sentence_id\": \"2\"}\n",
        ),
        concat!(
            "spk-2-a|_|b|njaːwen\n",
            "spk-1-a|_|a|sheːkon\n",
            "spk-2-b|_|c|njaːwen koːwa\n",
        ),
    );
    let summary = convert_files(&fixture.config(Language::Mohawk)).expect("conversion");
    assert_eq!(summary.records, 3);

    let lines = read_lines(&fixture.path("out.txt"));
    assert_eq!(
        lines,
        [
            "spk-2-a|b|{n j aː w e n}|ni\u{00E1}:wen kowa",
            "spk-1-a|a|{s h eː k o n}|sh\u{00E9}:kon",
            "spk-2-b|c|{n j aː w e n # k oː w a}|ni\u{00E1}:wen kowa",
        ]
    );
}

#[test]
fn straits_salish_keeps_case_in_both_fields() {
    let fixture = Fixture::new(
        "{\"sentence\": \"\u{00CD}Y  S\u{023B}\u{00C1}\u{0106}EL\", \"original_sentence_id\": \"9\"}\n",
        "u-9-1|_|s|ʔ\u{00CD}j\n",
    );
    convert_files(&fixture.config(Language::StraitsSalish)).expect("conversion");
    let lines = read_lines(&fixture.path("out.txt"));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("u-9-1|s|{ʔ \u{00CD} j}|"));
    assert!(lines[0].ends_with("|\u{00CD}Y S\u{023B}\u{00C1}\u{0106}EL"));
}

#[test]
fn missing_sentence_aborts_without_output() {
    let fixture = Fixture::new(
        "{\"sentence\": \"hello\", \"original_sentence_id\": \"1\"}\n",
        "u-1-1|_|s|a\nu-2-1|_|s|b\n",
    );
    let err = convert_files(&fixture.config(Language::PlainsCree)).unwrap_err();
    match err {
        ConversionError::MissingSentenceMapping {
            line_no,
            sentence_id,
            ..
        } => {
            assert_eq!(line_no, 2);
            assert_eq!(sentence_id, "2");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!fixture.path("out.txt").exists());
}

#[test]
fn malformed_sentence_line_is_fatal() {
    let fixture = Fixture::new("{\"sentence\": \"hello\"\n", "u-1-1|_|s|a\n");
    let err = convert_files(&fixture.config(Language::PlainsCree)).unwrap_err();
    assert!(matches!(
        err,
        ConversionError::MalformedInputLine { input: "sentence file", line_no: 1, .. }
    ));
    assert!(!fixture.path("out.txt").exists());
}

#[test]
fn missing_input_file_is_io_error_naming_path() {
    let fixture = Fixture::new("", "");
    let mut config = fixture.config(Language::PlainsCree);
    config.text_path = fixture.path("absent.jsonl");
    let err = convert_files(&config).unwrap_err();
    assert!(matches!(err, ConversionError::Io { .. }));
    assert!(err.to_string().contains("absent.jsonl"));
}

#[test]
fn empty_inputs_write_empty_output() {
    let fixture = Fixture::new("", "");
    let summary = convert_files(&fixture.config(Language::PlainsCree)).expect("conversion");
    assert_eq!(summary.records, 0);
    assert_eq!(fs::read_to_string(fixture.path("out.txt")).unwrap(), "");
}

#[test]
fn unsupported_language_is_rejected_on_both_paths() {
    assert!(matches!(
        clean("Text", "eng"),
        Err(ConversionError::UnsupportedLanguage { .. })
    ));
    assert!(matches!(
        format_ipa("t e k s t", "eng"),
        Err(ConversionError::UnsupportedLanguage { .. })
    ));
}

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{ConversionConfig, Language};
use crate::error::ConversionError;
use crate::pipeline::builder::ConverterBuilder;
use crate::pipeline::traits::{PhonemeTokenizer, WordSegmenter};
use crate::text::cleaning::clean_text;
use crate::text::formatting::render_segments;
use crate::types::{ConversionSummary, OutputRecord, SentenceLine, SentenceMap, UtteranceLine};

pub struct Converter {
    language: Language,
    word_segmenter: Box<dyn WordSegmenter>,
    phoneme_tokenizer: Box<dyn PhonemeTokenizer>,
}

pub(crate) struct ConverterParts {
    pub language: Language,
    pub word_segmenter: Box<dyn WordSegmenter>,
    pub phoneme_tokenizer: Box<dyn PhonemeTokenizer>,
}

/// Sentences loaded from the JSON-lines file.
#[derive(Debug, Clone, Default)]
pub struct LoadedSentences {
    pub sentences: SentenceMap,
    pub duplicate_ids: usize,
}

impl Converter {
    pub(crate) fn from_parts(parts: ConverterParts) -> Self {
        Self {
            language: parts.language,
            word_segmenter: parts.word_segmenter,
            phoneme_tokenizer: parts.phoneme_tokenizer,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn clean(&self, text: &str) -> String {
        clean_text(text, self.language)
    }

    /// Formats already-cleaned IPA text as a `{...}` unit sequence.
    pub fn format_ipa(&self, cleaned_ipa: &str) -> String {
        let segments = self.word_segmenter.segment(cleaned_ipa);
        render_segments(&segments, |word| self.phoneme_tokenizer.tokenize(word))
    }

    pub fn load_sentences<R: BufRead>(&self, reader: R) -> Result<LoadedSentences, ConversionError> {
        self.load_sentences_with_progress(reader, &ProgressBar::hidden())
    }

    fn load_sentences_with_progress<R: BufRead>(
        &self,
        reader: R,
        progress: &ProgressBar,
    ) -> Result<LoadedSentences, ConversionError> {
        let mut loaded = LoadedSentences::default();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| ConversionError::stream_io("reading sentence file", e))?;
            let parsed: SentenceLine = serde_json::from_str(&line)
                .map_err(|e| ConversionError::json("sentence file", line_no, e))?;

            let sentence = self.clean(&parsed.sentence);
            if let Some(previous) = loaded
                .sentences
                .insert(parsed.original_sentence_id.clone(), sentence)
            {
                loaded.duplicate_ids += 1;
                tracing::warn!(
                    line_no,
                    sentence_id = %parsed.original_sentence_id,
                    replaced = %previous,
                    "duplicate sentence id; keeping the later sentence"
                );
            }
            progress.inc(1);
        }
        tracing::debug!(
            sentences = loaded.sentences.len(),
            duplicates = loaded.duplicate_ids,
            "sentence file loaded"
        );
        Ok(loaded)
    }

    pub fn convert_line(
        &self,
        line: &str,
        line_no: usize,
        sentences: &SentenceMap,
    ) -> Result<OutputRecord, ConversionError> {
        let utterance = UtteranceLine::parse(line, line_no)?;
        let formatted_ipa = self.format_ipa(&self.clean(utterance.raw_ipa));
        let sentence = sentences.get(utterance.sentence_id).ok_or_else(|| {
            ConversionError::missing_sentence(line_no, utterance.utterance_id, utterance.sentence_id)
        })?;

        Ok(OutputRecord {
            utterance_id: utterance.utterance_id.to_string(),
            speaker_id: utterance.speaker_id.to_string(),
            formatted_ipa,
            sentence: sentence.clone(),
        })
    }

    /// Converts every line of an IPA transcription stream, in order.
    pub fn convert_lines<R: BufRead>(
        &self,
        reader: R,
        sentences: &SentenceMap,
    ) -> Result<Vec<OutputRecord>, ConversionError> {
        self.convert_lines_with_progress(reader, sentences, &ProgressBar::hidden())
    }

    fn convert_lines_with_progress<R: BufRead>(
        &self,
        reader: R,
        sentences: &SentenceMap,
        progress: &ProgressBar,
    ) -> Result<Vec<OutputRecord>, ConversionError> {
        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| ConversionError::stream_io("reading IPA file", e))?;
            records.push(self.convert_line(&line, idx + 1, sentences)?);
            progress.inc(1);
        }
        Ok(records)
    }

    /// Runs the whole job. Records are written only after every IPA line has
    /// converted, so a failing run never leaves a partial output file.
    pub fn convert_files(
        &self,
        config: &ConversionConfig,
    ) -> Result<ConversionSummary, ConversionError> {
        tracing::info!(
            language = %self.language,
            ipa = %config.ipa_path.display(),
            text = %config.text_path.display(),
            out = %config.out_path.display(),
            "starting conversion"
        );

        let loaded = {
            let reader = open_reader(&config.text_path, "opening sentence file")?;
            let progress = line_progress(config.show_progress, "sentences");
            let loaded = self
                .load_sentences_with_progress(reader, &progress)
                .map_err(|e| e.with_path(&config.text_path))?;
            progress.finish_with_message("sentences loaded");
            loaded
        };

        let records = {
            let reader = open_reader(&config.ipa_path, "opening IPA file")?;
            let progress = line_progress(config.show_progress, "utterances");
            let records = self
                .convert_lines_with_progress(reader, &loaded.sentences, &progress)
                .map_err(|e| e.with_path(&config.ipa_path))?;
            progress.finish_with_message("utterances converted");
            records
        };

        write_records(&config.out_path, &records, config.show_progress)?;

        let summary = ConversionSummary {
            sentences: loaded.sentences.len(),
            duplicate_sentence_ids: loaded.duplicate_ids,
            records: records.len(),
        };
        tracing::info!(
            sentences = summary.sentences,
            duplicate_sentence_ids = summary.duplicate_sentence_ids,
            records = summary.records,
            "conversion complete"
        );
        Ok(summary)
    }
}

/// Converts the files named in `config` with the language's default tokenizers.
pub fn convert_files(config: &ConversionConfig) -> Result<ConversionSummary, ConversionError> {
    ConverterBuilder::new(config.language)
        .build()
        .convert_files(config)
}

/// String-coded convenience over [`Converter::format_ipa`]; builds the
/// default tokenizers on every call.
pub fn format_ipa(cleaned_ipa: &str, code: &str) -> Result<String, ConversionError> {
    let language = code.parse::<Language>()?;
    Ok(ConverterBuilder::new(language).build().format_ipa(cleaned_ipa))
}

fn open_reader(path: &Path, context: &'static str) -> Result<BufReader<File>, ConversionError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| ConversionError::io(context, path, e))
}

fn write_records(
    path: &Path,
    records: &[OutputRecord],
    show_progress: bool,
) -> Result<(), ConversionError> {
    let file = File::create(path).map_err(|e| ConversionError::io("creating output file", path, e))?;
    let mut writer = BufWriter::new(file);

    let progress = if show_progress {
        let bar = ProgressBar::new(records.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
        );
        bar.set_message("writing");
        bar
    } else {
        ProgressBar::hidden()
    };

    for record in records {
        writeln!(writer, "{record}")
            .map_err(|e| ConversionError::io("writing output file", path, e))?;
        progress.inc(1);
    }
    writer
        .flush()
        .map_err(|e| ConversionError::io("flushing output file", path, e))?;
    progress.finish_with_message("output written");
    Ok(())
}

/// Spinner for inputs whose line count is unknown up front.
fn line_progress(show_progress: bool, unit: &'static str) -> ProgressBar {
    if !show_progress {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {pos} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(unit);
    spinner
}

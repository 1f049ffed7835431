use std::path::PathBuf;

use clap::Parser;
use ipa_corpus_rs::{convert_files, ConversionConfig, ConversionError, Language};
use tracing_subscriber::{filter::LevelFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "ipa_corpus_convert")]
#[command(about = "Join corpus sentences with re-tokenized IPA transcriptions")]
struct Args {
    /// Pipe-delimited transcription file: utterance_id|_|speaker_id|...|ipa
    ipa_file: PathBuf,
    /// JSON-lines file with `sentence` and `original_sentence_id` fields
    text_file: PathBuf,
    /// Destination for utterance_id|speaker_id|{ipa}|sentence lines
    out_file: PathBuf,
    /// Corpus language: moh, crk or str
    lang: String,
}

fn main() {
    let args = Args::parse();
    init_tracing(LevelFilter::INFO);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("tracing subscriber already set; skipping re-initialization");
    }
}

fn run(args: Args) -> Result<(), ConversionError> {
    let language = args.lang.parse::<Language>()?;
    let config = ConversionConfig::new(args.ipa_file, args.text_file, args.out_file, language)
        .with_progress(true);
    let summary = convert_files(&config)?;
    println!(
        "wrote {} record(s) from {} sentence(s) to {}",
        summary.records,
        summary.sentences,
        config.out_path.display()
    );
    Ok(())
}

//! Command-line transport for the classification pipeline.
//!
//! Loads the three lookup tables once at startup (any load failure aborts
//! before a document is touched), classifies one document from a file or
//! stdin, and prints the formatted result.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use lexiscan::input::read_document;
use lexiscan::lexicon::Lexicon;
use lexiscan::pipeline::format::{HtmlFormatter, JsonFormatter, ResultFormatter};
use lexiscan::pipeline::Pipeline;
use lexiscan::types::TokenizeMode;

#[derive(Debug, Parser)]
#[command(
    name = "lexiscan",
    about = "Classify the vocabulary of a text against known words and a frequency corpus"
)]
struct Args {
    /// Lemma dictionary: whitespace-delimited rows, lemma at column 1,
    /// surface form at column 5 (0-based)
    #[arg(long, value_name = "FILE")]
    lemmas: PathBuf,

    /// Frequency corpus: word,count CSV with a header row
    #[arg(long, value_name = "FILE")]
    frequencies: PathBuf,

    /// Known-words list: one lemma per line
    #[arg(long, value_name = "FILE")]
    known: PathBuf,

    /// Tokenization mode
    #[arg(long, value_enum, default_value = "simple")]
    mode: Mode,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Document to classify; reads stdin when omitted
    document: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Whitespace splitting over the whole document
    Simple,
    /// Blank-line-delimited caption blocks with phrase context
    Phrase,
}

impl From<Mode> for TokenizeMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Simple => TokenizeMode::Simple,
            Mode::Phrase => TokenizeMode::Phrase,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Html,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let lexicon = Lexicon::load(&args.lemmas, &args.frequencies, &args.known)
        .context("failed to load lookup tables")?;
    tracing::info!(
        lemmas = lexicon.lemmas.len(),
        frequencies = lexicon.frequencies.len(),
        known = lexicon.known.len(),
        "lexicon loaded"
    );

    let document = match &args.document {
        Some(path) => read_document(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read document from stdin")?;
            buf
        }
    };

    let pipeline = Pipeline::new(&lexicon, args.mode.into());
    let result = pipeline.classify(&document);

    let output = match args.format {
        Format::Json if args.pretty => JsonFormatter::pretty().format(&result)?,
        Format::Json => JsonFormatter::new().format(&result)?,
        Format::Html => HtmlFormatter.format(&result)?,
    };
    println!("{output}");

    Ok(())
}

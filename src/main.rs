use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use stylin::analysis::Analyzer;
use stylin::config::Config;
use stylin::corpus::{self, loader, AuthorText, CorpusRegistry};
use stylin::output::reporter::Reporter;
use stylin::output::terminal::{display_corpus_sizes, TerminalReporter};
use stylin::text::stopwords::StopwordSet;
use stylin::text::tagger::RuleTagger;
use stylin::text::tokenizer::WordTokenizer;

/// Stylin: stylometric authorship attribution.
///
/// Compares word length, stopword, part-of-speech, and vocabulary statistics
/// of texts by known authors against a text of unknown authorship.
#[derive(Parser)]
#[command(name = "stylin", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Inputs {
    /// A text of known authorship (repeatable)
    #[arg(long = "author", value_name = "NAME=PATH", required = true)]
    authors: Vec<String>,

    /// The text of unknown authorship
    #[arg(long, value_name = "PATH")]
    unknown: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all five tests and report the most likely author
    Analyze {
        #[command(flatten)]
        inputs: Inputs,

        /// Skip the frequency charts
        #[arg(long)]
        no_plot: bool,

        /// Also write the full report as JSON
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Also write the full report as markdown
        #[arg(long, value_name = "PATH")]
        markdown: Option<PathBuf>,

        /// Print the first N characters of the first known author's text
        #[arg(long, default_value = "0")]
        preview: usize,
    },

    /// Show token counts per corpus and the shortest corpus length
    Corpus {
        #[command(flatten)]
        inputs: Inputs,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("stylin=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            inputs,
            no_plot,
            json,
            markdown,
            preview,
        } => {
            let config = Config::load()?;
            let (texts, registry) = load_registry(&inputs)?;

            if preview > 0 {
                if let Some(first) = texts.first() {
                    println!(
                        "{}",
                        stylin::output::preview(&first.text, preview).dimmed()
                    );
                }
            }

            let stopwords = StopwordSet::for_language(&config.language)?;
            let tagger = RuleTagger::new();
            let analyzer = Analyzer::new(config.analysis(), &stopwords, &tagger);
            let report = analyzer.run(&registry);

            display_corpus_sizes(&report.corpora, report.shortest_length);

            let reporter = TerminalReporter::new(config.plot_style());
            if !no_plot {
                reporter.plot(&report.word_length);
                reporter.plot(&report.stopwords);
                reporter.plot(&report.parts_of_speech);
            }
            reporter.report(&report.vocabulary);
            reporter.report(&report.similarity);

            if let Some(path) = json {
                let body = serde_json::to_string_pretty(&report)?;
                std::fs::write(&path, body)
                    .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
                println!("\nJSON report written to {}", path.display());
            }

            if let Some(path) = markdown {
                stylin::output::markdown::write_report(&path, &report)?;
                println!("Markdown report written to {}", path.display());
            }
        }

        Commands::Corpus { inputs } => {
            let (_texts, registry) = load_registry(&inputs)?;
            let summaries = stylin::analysis::summarize(&registry);
            display_corpus_sizes(&summaries, corpus::shortest_length(&registry));
        }
    }

    Ok(())
}

/// Read every input file and build the validated registry.
fn load_registry(inputs: &Inputs) -> Result<(Vec<AuthorText>, CorpusRegistry)> {
    let authors = inputs
        .authors
        .iter()
        .map(|spec| loader::parse_author_spec(spec))
        .collect::<Result<Vec<_>, _>>()?;

    let texts = loader::load_inputs(&authors, &inputs.unknown)?;
    info!(texts = texts.len(), "Loaded input texts");

    let registry = CorpusRegistry::build(texts.clone(), &WordTokenizer)
        .context("Could not build the corpus registry")?;
    Ok((texts, registry))
}

use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tweetclean::pipeline::run_with_stats;
use tweetclean::{PipelineConfig, StopWordSource};

#[derive(Parser, Debug)]
#[command(name = "tweetclean")]
#[command(about = "Clean and tokenize the text and description columns of a tweet CSV")]
struct Args {
    /// Input CSV (overrides the config file)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// YAML pipeline configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// NLTK data root to search for stop words (repeatable)
    #[arg(long = "stopwords-dir")]
    stopwords_dirs: Vec<PathBuf>,

    /// Use the compiled-in English stop words
    #[arg(long, conflicts_with = "stopwords_dirs")]
    builtin_stopwords: bool,

    /// Clean rows on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Emit at most this many rows
    #[arg(short, long)]
    limit: Option<usize>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => match PipelineConfig::from_yaml_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load config {:?}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => PipelineConfig::default(),
    };

    if let Some(input) = args.input {
        config.data_path = input;
    }
    if args.builtin_stopwords {
        config.stopwords = StopWordSource::Builtin;
    } else if !args.stopwords_dirs.is_empty() {
        config.stopwords = StopWordSource::Corpus {
            roots: args.stopwords_dirs,
        };
    }
    config.parallel |= args.parallel;

    let (dataset, stats) = match run_with_stats(&config) {
        Ok(result) => result,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let limit = args.limit.unwrap_or(dataset.len());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for record in dataset.iter().take(limit) {
        let written = serde_json::to_writer(&mut out, record)
            .map_err(io::Error::from)
            .and_then(|_| out.write_all(b"\n"));
        if let Err(e) = written {
            error!("Failed to write output: {}", e);
            return ExitCode::FAILURE;
        }
    }
    if let Err(e) = out.flush() {
        error!("Failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Done: {} rows, {} emitted", stats.rows, limit.min(stats.rows));
    ExitCode::SUCCESS
}

//! Load, clean, tokenize.
//!
//! [`run`] is the full pipeline against the configured CSV and stop-word
//! source. [`process`] is the in-memory part and does no I/O.

use crate::config::{PipelineConfig, DESCRIPTION_COLUMN, TEXT_COLUMN};
use crate::dataset::{load_csv, CleanedRecord, Dataset, RawRecord, Table};
use crate::error::Result;
use crate::nl::{count_stopwords, tokenize};
use crate::normalization::clean;
use crate::stopwords::StopWords;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub rows: usize,
    pub tokens_kept: usize,
    pub stopwords_dropped: usize,
    pub empty_rows: usize,
}

struct Columns<'a> {
    text: &'a str,
    description: &'a str,
}

pub fn run(config: &PipelineConfig) -> Result<Dataset> {
    run_with_stats(config).map(|(dataset, _)| dataset)
}

pub fn run_with_stats(config: &PipelineConfig) -> Result<(Dataset, PipelineStats)> {
    info!("Reading {:?}", config.data_path);
    let table = load_csv(
        &config.data_path,
        &[config.text_column.as_str(), config.description_column.as_str()],
    )?;

    let stopwords = config.stopwords.load(&config.language)?;

    let columns = Columns {
        text: &config.text_column,
        description: &config.description_column,
    };
    let (dataset, stats) = process_columns(table, &stopwords, &columns, config.parallel);

    info!(
        "Cleaned {} rows: {} tokens kept, {} stop words dropped, {} rows without tokens",
        stats.rows, stats.tokens_kept, stats.stopwords_dropped, stats.empty_rows
    );
    Ok((dataset, stats))
}

/// Cleans `text` and `description` of every row and tokenizes the text.
/// Row count and order are preserved.
pub fn process(table: Table, stopwords: &StopWords, parallel: bool) -> Dataset {
    process_with_stats(table, stopwords, parallel).0
}

pub fn process_with_stats(
    table: Table,
    stopwords: &StopWords,
    parallel: bool,
) -> (Dataset, PipelineStats) {
    let columns = Columns {
        text: TEXT_COLUMN,
        description: DESCRIPTION_COLUMN,
    };
    process_columns(table, stopwords, &columns, parallel)
}

fn process_columns(
    table: Table,
    stopwords: &StopWords,
    columns: &Columns<'_>,
    parallel: bool,
) -> (Dataset, PipelineStats) {
    let Table { columns: names, rows } = table;

    let cleaned: Vec<(CleanedRecord, usize)> = if parallel {
        rows.into_par_iter()
            .map(|raw| clean_row(raw, stopwords, columns))
            .collect()
    } else {
        rows.into_iter()
            .map(|raw| clean_row(raw, stopwords, columns))
            .collect()
    };

    let mut stats = PipelineStats::default();
    let mut records = Vec::with_capacity(cleaned.len());
    for (record, dropped) in cleaned {
        stats.rows += 1;
        stats.tokens_kept += record.tweets.len();
        stats.stopwords_dropped += dropped;
        if record.tweets.is_empty() {
            stats.empty_rows += 1;
        }
        records.push(record);
    }

    (Dataset { columns: names, records }, stats)
}

fn clean_row(
    raw: RawRecord,
    stopwords: &StopWords,
    columns: &Columns<'_>,
) -> (CleanedRecord, usize) {
    let text = clean(raw.cell(columns.text));
    let description = clean(raw.cell(columns.description));
    let tweets = tokenize(&text, stopwords);
    let dropped = count_stopwords(&text, stopwords);
    debug!("{:?} -> {:?}", text, tweets);

    (
        CleanedRecord {
            raw,
            tweets,
            description,
        },
        dropped,
    )
}

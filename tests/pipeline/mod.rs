use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tweetclean::dataset::{read_csv, Cell, Table};
use tweetclean::error::{DataSourceError, PipelineError};
use tweetclean::pipeline::*;
use tweetclean::stopwords::{corpus_file, StopWordSource, StopWords};
use tweetclean::PipelineConfig;

const SAMPLE: &str = "\
gender,text,description
male,Hello World! #great day123,I love coding
female,This is a test,
brand,12345,Official account. Follow us!
female,,just me
";

fn table() -> Table {
    read_csv(SAMPLE.as_bytes(), "sample", &["text", "description"]).unwrap()
}

fn config_in(dir: &Path, source: StopWordSource) -> PipelineConfig {
    let data_path = dir.join("gender_tweets.csv");
    fs::write(&data_path, SAMPLE).unwrap();
    PipelineConfig {
        data_path,
        stopwords: source,
        ..PipelineConfig::default()
    }
}

#[test]
fn test_process_derives_both_columns() {
    let dataset = process(table(), &StopWords::english(), false);
    assert_eq!(dataset.len(), 4);

    let first = &dataset.records[0];
    assert_eq!(first.tweets, vec!["hello", "world", "great", "day"]);
    assert_eq!(first.description, "i love ding");

    let second = &dataset.records[1];
    assert_eq!(second.tweets, vec!["test"]);
    assert_eq!(second.description, "nan");

    let third = &dataset.records[2];
    assert!(third.tweets.is_empty());
    assert_eq!(third.description, "official aunt follow us ");

    // a missing text cell is cleaned as "nan", which is not a stop word
    assert_eq!(dataset.records[3].tweets, vec!["nan"]);
}

#[test]
fn test_original_columns_survive() {
    let dataset = process(table(), &StopWords::english(), false);
    assert_eq!(dataset.columns, vec!["gender", "text", "description"]);
    let genders: Vec<_> = dataset.iter().map(|r| r.raw.cell("gender").clone()).collect();
    assert_eq!(
        genders,
        vec![
            Cell::Text("male".into()),
            Cell::Text("female".into()),
            Cell::Text("brand".into()),
            Cell::Text("female".into()),
        ]
    );
}

#[test]
fn test_no_stopword_survives() {
    let stop = StopWords::english();
    let dataset = process(table(), &stop, false);
    for record in &dataset {
        for token in &record.tweets {
            assert!(!stop.contains(token), "{token} leaked through");
            assert_eq!(token, &token.to_lowercase());
        }
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let stop = StopWords::english();
    let (seq, seq_stats) = process_with_stats(table(), &stop, false);
    let (par, par_stats) = process_with_stats(table(), &stop, true);
    assert_eq!(seq.records, par.records);
    assert_eq!(seq_stats, par_stats);
}

#[test]
fn test_stats() {
    let (_, stats) = process_with_stats(table(), &StopWords::english(), false);
    assert_eq!(
        stats,
        PipelineStats {
            rows: 4,
            tokens_kept: 6,
            stopwords_dropped: 3,
            empty_rows: 1,
        }
    );
}

#[test]
fn test_run_with_builtin_stopwords() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), StopWordSource::Builtin);
    let dataset = run(&config).unwrap();
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.records[1].tweets, vec!["test"]);
}

#[test]
fn test_run_with_corpus() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nltk_data");
    let list = corpus_file(&root, "english");
    fs::create_dir_all(list.parent().unwrap()).unwrap();
    fs::write(&list, "hello\ntest\n").unwrap();

    let config = config_in(dir.path(), StopWordSource::Corpus { roots: vec![root] });
    let dataset = run(&config).unwrap();
    assert_eq!(dataset.records[0].tweets, vec!["world", "great", "day"]);
    assert_eq!(dataset.records[1].tweets, vec!["this", "is", "a"]);
}

#[test]
fn test_run_missing_stopwords() {
    let dir = TempDir::new().unwrap();
    let config = config_in(
        dir.path(),
        StopWordSource::Corpus { roots: vec![dir.path().join("absent")] },
    );
    let err = run(&config).unwrap_err();
    assert!(matches!(err, PipelineError::StopWordsUnavailable { .. }));
}

#[test]
fn test_data_source_error_comes_first() {
    let dir = TempDir::new().unwrap();
    let config = PipelineConfig {
        data_path: dir.path().join("missing.csv"),
        stopwords: StopWordSource::Corpus { roots: vec![] },
        ..PipelineConfig::default()
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(err, PipelineError::DataSource(DataSourceError::Io { .. })));
}

#[test]
fn test_json_output_shape() {
    let dataset = process(table(), &StopWords::english(), false);
    let value = serde_json::to_value(&dataset.records[1]).unwrap();
    assert_eq!(value["gender"], "female");
    assert_eq!(value["description"], serde_json::Value::Null);
    assert_eq!(value["Tweets"], serde_json::json!(["test"]));
    assert_eq!(value["Description"], "nan");
}

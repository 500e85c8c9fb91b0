pub mod config;
pub mod dataset;
pub mod error;
pub mod nl;
pub mod normalization;
pub mod pipeline;
pub mod stopwords;

pub use config::PipelineConfig;
pub use dataset::{CleanedRecord, Dataset, RawRecord};
pub use error::{DataSourceError, PipelineError};
pub use normalization::clean;
pub use pipeline::{run, PipelineStats};
pub use stopwords::{StopWordSource, StopWords};

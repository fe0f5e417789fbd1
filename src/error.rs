// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::model::PageId;

/// Failures while turning one page into a `StatTable`. Every variant carries
/// the page so a bad archive can be traced back to its source.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{page}: page layout not recognized: {detail}")]
    Layout { page: PageId, detail: String },

    #[error("{page}: row {row}, column {column}: cannot parse {text:?}: {reason}")]
    Parse {
        page: PageId,
        row: usize,
        column: usize,
        text: String,
        reason: String,
    },

    #[error(
        "{page}: {identities} identities vs {rows} stat rows, \
         {labels} stat labels vs {columns} stat columns"
    )]
    Consistency {
        page: PageId,
        identities: usize,
        rows: usize,
        labels: usize,
        columns: usize,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("page not in store: {0}")]
    NotStored(PathBuf),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid options: {0}")]
    Options(String),

    #[error("archive {path}: {detail}")]
    Archive { path: PathBuf, detail: String },

    #[error("analysis: {0}")]
    Analysis(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

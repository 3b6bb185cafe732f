use std::{io, path::PathBuf};

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way a cycle can fail. None of them are recovered from.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input is empty")]
    InputEmpty,

    #[error("invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status code {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("unable to read the response body of {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no img tags found in html")]
    NoMatchesFound,

    #[error("{} already exists", .0.display())]
    DirectoryAlreadyExists(PathBuf),

    #[error("unable to create directory {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no file suffix in {0:?}")]
    SuffixExtraction(String),

    #[error("unable to create file {}: {source}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console i/o failed: {0}")]
    Console(#[source] io::Error),

    #[error("download task did not finish: {0}")]
    Task(String),
}

impl Error {
    pub(crate) fn invalid_input(input: &str, reason: impl ToString) -> Self {
        Error::InvalidInput {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

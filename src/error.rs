use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HunterError {
    #[error("base identifier must not be empty")]
    EmptyBase,
    #[error("failed to read wordlist {path}: {source}")]
    Wordlist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid url {0}")]
    InvalidUrl(String),
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("listing returned status {0}")]
    Status(u16),
    #[error("malformed listing document: {0}")]
    Listing(#[from] quick_xml::DeError),
}

pub type Result<T> = std::result::Result<T, HunterError>;

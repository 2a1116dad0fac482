//! Generates the `LSApplicationQueriesSchemes` property list used by the
//! SRG analytics library to detect which SRG SSR applications are installed.
//!
//! The remote document is a JSON array of application records. Every record
//! with a non-empty `ios` URL scheme contributes that scheme, in order, to a
//! single-key plist written next to the caller.

pub mod config;
pub mod fetch;
pub mod record;
pub mod transform;
pub mod writer;

use thiserror::Error;

pub use config::Configuration;
pub use fetch::{fetch_bytes, fetch_records, DEFAULT_SOURCE_URL};
pub use record::{parse_records, AppRecord};
pub use transform::collect_schemes;
pub use writer::{
    schemes_document, serialize, write_schemes, OutputFormat, DEFAULT_OUTPUT_FILE, SCHEMES_KEY,
};

#[derive(Error, Debug)]
pub enum SchemesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("plist error: {0}")]
    Plist(#[from] plist::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http GET {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },
    #[error("unsupported url scheme {0:?}")]
    UnsupportedScheme(String),
    #[error("unknown output format {0:?}")]
    UnknownFormat(String),
    #[error("invalid configuration {path}: {message}")]
    Config { path: String, message: String },
}

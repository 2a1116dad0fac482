use std::io::Read;

use url::Url;

use crate::record::{parse_records, AppRecord};
use crate::SchemesError;

/// The published list of SRG SSR applications and their URL schemes.
pub const DEFAULT_SOURCE_URL: &str = "https://pastebin.com/raw/RnZYEWCA";

/// Retrieve the raw document behind `url`.
///
/// `http`/`https` URLs are fetched with a single blocking GET. `file` URLs
/// read a local copy of the document instead.
pub fn fetch_bytes(url: &Url) -> Result<Vec<u8>, SchemesError> {
    match url.scheme() {
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| SchemesError::UnsupportedScheme(url.to_string()))?;
            tracing::debug!(path = %path.display(), "reading local application list");
            Ok(std::fs::read(&path)?)
        }
        "http" | "https" => {
            tracing::debug!(%url, "fetching application list");
            let resp = ureq::get(url.as_str())
                .call()
                .map_err(|source| SchemesError::Http {
                    url: url.to_string(),
                    source,
                })?;
            let mut reader = resp.into_body().into_reader();
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf)?;
            tracing::debug!(bytes = buf.len(), "received application list");
            Ok(buf)
        }
        other => Err(SchemesError::UnsupportedScheme(other.to_string())),
    }
}

/// Fetch and parse the application list.
pub fn fetch_records(url: &Url) -> Result<Vec<AppRecord>, SchemesError> {
    let data = fetch_bytes(url)?;
    parse_records(&data)
}

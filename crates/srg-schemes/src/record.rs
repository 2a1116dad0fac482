use serde::Deserialize;

use crate::SchemesError;

/// One entry of the remote application list.
///
/// Only the iOS URL scheme is of interest; every other field the service
/// publishes (display name, Android package, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppRecord {
    #[serde(default)]
    pub ios: Option<String>,
}

impl AppRecord {
    /// The iOS URL scheme, if the record declares a non-empty one.
    pub fn scheme(&self) -> Option<&str> {
        self.ios.as_deref().filter(|s| !s.is_empty())
    }
}

/// Parse the application list document.
pub fn parse_records(data: &[u8]) -> Result<Vec<AppRecord>, SchemesError> {
    let records: Vec<AppRecord> = serde_json::from_slice(data)?;
    tracing::debug!(count = records.len(), "parsed application records");
    Ok(records)
}

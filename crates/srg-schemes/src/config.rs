use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use plist::Value;
use url::Url;

use crate::fetch::DEFAULT_SOURCE_URL;
use crate::writer::{OutputFormat, DEFAULT_OUTPUT_FILE};
use crate::SchemesError;

/// Environment variable naming an explicit configuration file.
pub const CONFIGURATION_PATH_ENV: &str = "SRG_SCHEMES_CONFIGURATION_PATH";

/// Where to fetch the application list from and where to write the plist.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub source_url: String,
    pub output_file: PathBuf,
    pub output_format: OutputFormat,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            output_format: OutputFormat::default(),
        }
    }
}

impl Configuration {
    /// The source URL, parsed.
    pub fn source_url(&self) -> Result<Url, SchemesError> {
        Ok(Url::parse(&self.source_url)?)
    }

    /// Default configuration file search paths.
    pub fn default_paths() -> Vec<String> {
        let mut paths = Vec::new();
        if let Ok(val) = std::env::var(CONFIGURATION_PATH_ENV) {
            paths.push(val);
        } else if let Some(home) = home_dir() {
            paths.push(format!("{home}/.srg-schemes/configuration.plist"));
        }
        paths
    }

    /// Load configuration from the first readable plist dictionary in `paths`.
    ///
    /// Files that are missing or not a plist dictionary are skipped. A file
    /// that parses but carries a bad value is an error.
    pub fn load(paths: &[String]) -> Result<Configuration, SchemesError> {
        for path in paths {
            let Ok(data) = fs::read(path) else {
                continue;
            };
            match Value::from_reader(Cursor::new(data)) {
                Ok(Value::Dictionary(dict)) => {
                    tracing::debug!(path = %path, "loaded configuration");
                    return Configuration::from_dictionary(&dict, path);
                }
                Ok(_) => {
                    tracing::warn!(path = %path, "configuration is not a dictionary, ignoring");
                }
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "unreadable configuration, ignoring");
                }
            }
        }
        Ok(Configuration::default())
    }

    fn from_dictionary(
        dict: &plist::Dictionary,
        path: &str,
    ) -> Result<Configuration, SchemesError> {
        let invalid = |message: String| SchemesError::Config {
            path: path.to_string(),
            message,
        };

        let mut config = Configuration::default();
        if let Some(url) = string_from_dict(dict, "SourceURL", path)? {
            Url::parse(url).map_err(|e| invalid(format!("SourceURL: {e}")))?;
            config.source_url = url.to_string();
        }
        if let Some(file) = string_from_dict(dict, "OutputFile", path)? {
            if file.is_empty() {
                return Err(invalid("OutputFile is empty".to_string()));
            }
            config.output_file = PathBuf::from(file);
        }
        if let Some(format) = string_from_dict(dict, "OutputFormat", path)? {
            config.output_format = OutputFormat::parse(format)
                .ok_or_else(|| invalid(format!("unknown OutputFormat {format:?}")))?;
        }
        Ok(config)
    }
}

fn string_from_dict<'a>(
    dict: &'a plist::Dictionary,
    key: &str,
    path: &str,
) -> Result<Option<&'a str>, SchemesError> {
    match dict.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(SchemesError::Config {
            path: path.to_string(),
            message: format!("{key} must be a string"),
        }),
    }
}

fn home_dir() -> Option<String> {
    std::env::var("HOME").ok()
}

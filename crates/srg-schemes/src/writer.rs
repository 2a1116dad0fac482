use std::io::Write;
use std::path::Path;

use plist::Value;

use crate::SchemesError;

/// Info.plist key listing the URL schemes an app may query.
pub const SCHEMES_KEY: &str = "LSApplicationQueriesSchemes";

/// File written to the working directory when no output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "LSApplicationQueriesSchemesForSRGAnalytics.plist";

/// Output encodings, named as plutil names them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Xml,
    Binary,
    Json,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml1",
            OutputFormat::Binary => "binary1",
            OutputFormat::Json => "json",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "xml1" | "xml" => Some(OutputFormat::Xml),
            "binary1" | "binary" => Some(OutputFormat::Binary),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = SchemesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::parse(s).ok_or_else(|| SchemesError::UnknownFormat(s.to_string()))
    }
}

/// Build the single-key document `{LSApplicationQueriesSchemes: [...]}`.
pub fn schemes_document(schemes: &[String]) -> Value {
    let mut dict = plist::Dictionary::new();
    dict.insert(
        SCHEMES_KEY.to_string(),
        Value::Array(schemes.iter().cloned().map(Value::String).collect()),
    );
    Value::Dictionary(dict)
}

/// Serialize a document in the given format.
pub fn serialize(value: &Value, format: OutputFormat) -> Result<Vec<u8>, SchemesError> {
    let mut buf = Vec::new();
    match format {
        OutputFormat::Xml => value.to_writer_xml(&mut buf)?,
        OutputFormat::Binary => value.to_writer_binary(&mut buf)?,
        OutputFormat::Json => {
            buf = serde_json::to_vec_pretty(&plist_to_json(value))?;
            buf.push(b'\n');
        }
    }
    Ok(buf)
}

// Only the shapes `schemes_document` produces need a JSON mapping.
fn plist_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(arr) => serde_json::Value::Array(arr.iter().map(plist_to_json).collect()),
        Value::Dictionary(dict) => {
            let mut map = serde_json::Map::new();
            for (k, v) in dict.iter() {
                map.insert(k.clone(), plist_to_json(v));
            }
            serde_json::Value::Object(map)
        }
        _ => serde_json::Value::Null,
    }
}

/// Write the schemes document to `path`.
///
/// The data goes to a temporary file in the destination directory which is
/// then renamed over `path`, so the destination is either the complete new
/// document or untouched.
pub fn write_schemes(
    path: &Path,
    schemes: &[String],
    format: OutputFormat,
) -> Result<(), SchemesError> {
    let data = serialize(&schemes_document(schemes), format)?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&data)?;
    // NamedTempFile creates 0600.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::info!(
        path = %path.display(),
        format = format.name(),
        schemes = schemes.len(),
        "wrote schemes plist"
    );
    Ok(())
}

// Raw records produced by metadata sources
//
// yt-dlp output is heterogeneous: any key may be missing, null, or of an
// unexpected JSON type. These wrappers keep the raw JSON and expose lenient
// accessors so that nothing downstream ever fails on a malformed field.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::errors::ExtractError;

/// One raw format descriptor exactly as the source emitted it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFormat(Value);

impl RawFormat {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// String field; non-string values count as unknown
    pub fn str_field(&self, key: &str) -> Option<String> {
        str_field(&self.0, key)
    }

    /// Non-negative integer field; whole floats are accepted
    pub fn u64_field(&self, key: &str) -> Option<u64> {
        u64_field(&self.0, key)
    }

    /// Numeric field kept as sent, so `160` stays `160` and `129.5` stays `129.5`
    pub fn number_field(&self, key: &str) -> Option<Number> {
        match self.0.get(key) {
            Some(Value::Number(n)) => Some(n.clone()),
            _ => None,
        }
    }
}

/// Raw video record returned by a metadata source
#[derive(Debug, Clone, Default)]
pub struct RawVideoInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Seconds, truncated to a whole number
    pub duration: Option<u64>,
    pub uploader: Option<String>,
    pub upload_date: Option<String>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub thumbnail: Option<String>,
    pub formats: Vec<RawFormat>,
}

impl RawVideoInfo {
    /// Build from a yt-dlp `--dump-json` document
    pub fn from_json(json: &Value) -> Result<Self, ExtractError> {
        if !json.is_object() {
            return Err(ExtractError::Unavailable(format!(
                "expected a JSON object, got {}",
                json_kind(json)
            )));
        }

        let formats = json
            .get("formats")
            .and_then(Value::as_array)
            .map(|items| items.iter().cloned().map(RawFormat::new).collect())
            .unwrap_or_default();

        Ok(Self {
            id: str_field(json, "id"),
            title: str_field(json, "title"),
            description: str_field(json, "description"),
            duration: duration_field(json),
            uploader: str_field(json, "uploader"),
            upload_date: str_field(json, "upload_date"),
            view_count: u64_field(json, "view_count"),
            like_count: u64_field(json, "like_count"),
            thumbnail: str_field(json, "thumbnail"),
            formats,
        })
    }

    /// Parse raw tool stdout
    pub fn from_stdout(stdout: &[u8]) -> Result<Self, ExtractError> {
        let json_str = String::from_utf8_lossy(stdout);
        let json: Value = serde_json::from_str(json_str.trim())
            .map_err(|e| ExtractError::ParseError(format!("Invalid JSON: {}", e)))?;
        Self::from_json(&json)
    }
}

fn str_field(json: &Value, key: &str) -> Option<String> {
    json.get(key).and_then(Value::as_str).map(|s| s.to_string())
}

fn u64_field(json: &Value, key: &str) -> Option<u64> {
    let value = json.get(key)?;
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}

// yt-dlp reports duration as int or float seconds
fn duration_field(json: &Value) -> Option<u64> {
    let value = json.get("duration")?;
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f.trunc() as u64)
    })
}

fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

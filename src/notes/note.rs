use crate::error::{Result, TakeoutError};
use serde_json::{Map, Value};
use std::path::Path;

/// One exported note, parsed from a JSON file on disk.
///
/// `fields` keeps the full top-level object so the metadata pass can walk
/// every property; the well-known ones are pulled out here for routing.
#[derive(Debug, Clone)]
pub struct Note {
    pub title: String,
    pub text_content: String,
    pub is_archived: bool,
    pub is_trashed: bool,
    pub fields: Map<String, Value>,
}

impl Note {
    /// Builds a note from a parsed JSON value. The file path supplies a
    /// fallback title (the file stem) when the record carries none.
    pub fn from_value(value: Value, source: &Path) -> Result<Note> {
        let fields = match value {
            Value::Object(map) => map,
            other => {
                return Err(TakeoutError::MalformedInput(format!(
                    "note {} is not a JSON object (found {})",
                    source.display(),
                    json_type_name(&other)
                )))
            }
        };

        let title = match fields.get("title").and_then(Value::as_str) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => source
                .file_stem()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .ok_or_else(|| {
                    TakeoutError::MalformedInput(format!(
                        "note {} has no title and no usable file name",
                        source.display()
                    ))
                })?,
        };

        let text_content = fields
            .get("textContent")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let is_archived = fields
            .get("isArchived")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let is_trashed = fields
            .get("isTrashed")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Ok(Note {
            title,
            text_content,
            is_archived,
            is_trashed,
            fields,
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

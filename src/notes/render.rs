use super::flatten::MetadataEntry;
use serde_json::Value;

/// Renders one note as Markdown: title heading, the text content verbatim,
/// then a metadata section with one line per ordered entry.
pub fn render_markdown(title: &str, text_content: &str, entries: &[MetadataEntry]) -> String {
    let mut out = String::new();
    out.push_str("# ");
    out.push_str(title);
    out.push_str("\n\n");
    out.push_str(text_content);
    out.push_str("\n\n## Metadata\n\n");
    for entry in entries {
        out.push('*');
        out.push_str(&entry.path);
        out.push_str("*: ");
        out.push_str(&format_value(&entry.value));
        out.push('\n');
    }
    out
}

/// Textual form of a metadata value. Strings stay verbatim (unquoted),
/// null renders empty, and anything structural is compacted to JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

/// Replaces the characters a title may carry that are unsafe in file
/// names (`/ \ : ?`) with underscores.
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '?' => '_',
            other => other,
        })
        .collect()
}

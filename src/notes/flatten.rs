use serde_json::{Map, Value};

/// One leaf of a note's metadata: a dotted path from the record root and
/// the scalar value found there.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataEntry {
    pub path: String,
    pub value: Value,
}

/// Collects every metadata leaf of a note record.
///
/// Walks the record's properties in their own enumeration order. A property
/// whose name appears in `ignore_keys` is dropped entirely at any depth,
/// including everything beneath it. Object values are descended into with
/// the path extended by `.name`; no entry is emitted for the object itself.
/// Everything else is a leaf, arrays included; they are kept whole rather
/// than descended into. The result carries no ordering guarantee; see
/// [`super::order::order_entries`].
pub fn flatten_metadata(record: &Map<String, Value>, ignore_keys: &[String]) -> Vec<MetadataEntry> {
    let mut entries = Vec::new();
    walk(record, "", ignore_keys, &mut entries);
    entries
}

fn walk(
    object: &Map<String, Value>,
    prefix: &str,
    ignore_keys: &[String],
    out: &mut Vec<MetadataEntry>,
) {
    for (key, value) in object {
        if ignore_keys.iter().any(|ignored| ignored == key) {
            continue;
        }
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => walk(nested, &path, ignore_keys, out),
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Array(_) => {
                out.push(MetadataEntry {
                    path,
                    value: value.clone(),
                });
            }
        }
    }
}

use super::phone::format_phone;
use serde::Serialize;
use serde_json::Value;

/// Lookup results from any other provider are dropped.
pub const EXPECTED_PROVIDER: &str = "linkedin";

/// One normalized contact, ready for the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct ContactRecord {
    pub full_name: Option<String>,
    pub profile_url: Option<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub current_company: Option<String>,
}

/// Why a lookup result is unusable, if it is. A usable result comes from
/// the expected provider and carries a non-empty public identifier.
pub fn skip_reason(profile: &Value) -> Option<String> {
    match profile.get("provider").and_then(Value::as_str) {
        Some(EXPECTED_PROVIDER) => {}
        Some(other) => {
            return Some(format!(
                "provider is '{other}', expected '{EXPECTED_PROVIDER}'"
            ))
        }
        None => return Some("response carries no provider field".to_string()),
    }

    match profile.get("public_identifier").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => None,
        _ => Some("response carries no public identifier".to_string()),
    }
}

/// Derives a contact record from a lookup response. Every field is
/// best-effort: anything missing or oddly shaped simply stays absent.
pub fn contact_from_profile(profile: &Value) -> ContactRecord {
    let first = profile.get("first_name").and_then(Value::as_str);
    let last = profile.get("last_name").and_then(Value::as_str);
    let full_name = match (first, last) {
        (Some(f), Some(l)) => Some(format!("{f} {l}")),
        _ => None,
    };

    let profile_url = profile
        .get("url")
        .and_then(Value::as_str)
        .map(str::to_string);

    let emails = profile
        .get("emails")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .map(str::to_lowercase)
                .collect()
        })
        .unwrap_or_default();

    let phones = profile
        .get("phone_numbers")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .filter_map(format_phone)
                .collect()
        })
        .unwrap_or_default();

    let current_company = profile
        .get("work_experience")
        .and_then(Value::as_array)
        .and_then(|jobs| jobs.first())
        .and_then(|job| {
            let company = job.get("company").and_then(Value::as_str)?;
            let position = job.get("position").and_then(Value::as_str)?;
            Some(format!("{company} - {position}"))
        });

    ContactRecord {
        full_name,
        profile_url,
        emails,
        phones,
        current_company,
    }
}

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use takeout::config::ContactsConfig;
use takeout::contacts::{self, profile_api::ProfileLookup};
use takeout::error::TakeoutError;
use tempfile::tempdir;

/// Serves canned lookup responses keyed by public identifier.
struct StubLookup {
    profiles: HashMap<String, Value>,
}

impl StubLookup {
    fn new(profiles: Vec<(&str, Value)>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|(id, profile)| (id.to_string(), profile))
                .collect(),
        }
    }
}

#[async_trait]
impl ProfileLookup for StubLookup {
    async fn fetch_profile(&self, public_id: &str) -> takeout::error::Result<Value> {
        self.profiles
            .get(public_id)
            .cloned()
            .ok_or_else(|| TakeoutError::Api {
                message: format!("no profile for '{public_id}'"),
            })
    }
}

fn test_config(input_file: &Path, output_dir: &Path) -> ContactsConfig {
    ContactsConfig {
        input_file: input_file.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        base_delay_ms: 0,
        jitter_ms: 0,
        ..ContactsConfig::default()
    }
}

#[tokio::test]
async fn test_contacts_run_with_mixed_outcomes() -> Result<()> {
    let dir = tempdir()?;
    let input_file = dir.path().join("profile_urls.json");
    fs::write(
        &input_file,
        serde_json::to_string(&json!([
            "https://www.linkedin.com/in/jane-doe/",
            "https://www.linkedin.com/company/acme",
            "https://www.linkedin.com/in/wrong-provider",
            "https://www.linkedin.com/in/lookup-fails"
        ]))?,
    )?;

    let api = StubLookup::new(vec![
        (
            "jane-doe",
            json!({
                "provider": "linkedin",
                "public_identifier": "jane-doe",
                "url": "https://www.linkedin.com/in/jane-doe",
                "first_name": "Jane",
                "last_name": "Doe",
                "emails": ["Jane.Doe@Example.COM"],
                "phone_numbers": ["212-555-1234", "bogus"],
                "work_experience": [{ "company": "Acme", "position": "Engineer" }]
            }),
        ),
        (
            "wrong-provider",
            json!({ "provider": "github", "public_identifier": "wrong-provider" }),
        ),
    ]);

    let config = test_config(&input_file, dir.path());
    let summary = contacts::run(&config, &api).await?;

    assert_eq!(summary.total_urls, 4);
    assert_eq!(summary.scraped, 1);
    // The company URL and the wrong-provider response are both skipped.
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.errors.len(), 1);
    assert!(summary.errors[0].contains("lookup-fails"));

    let report: Vec<Value> = serde_json::from_str(&fs::read_to_string(&summary.output_file)?)?;
    assert_eq!(report.len(), 1);
    assert_eq!(report[0]["full_name"], "Jane Doe");
    assert_eq!(report[0]["emails"][0], "jane.doe@example.com");
    assert_eq!(report[0]["phones"], json!(["(212) 555-1234"]));
    assert_eq!(report[0]["current_company"], "Acme - Engineer");

    Ok(())
}

#[tokio::test]
async fn test_one_failure_never_aborts_the_batch() -> Result<()> {
    let dir = tempdir()?;
    let input_file = dir.path().join("profile_urls.json");
    fs::write(
        &input_file,
        serde_json::to_string(&json!([
            "https://www.linkedin.com/in/missing-one",
            "https://www.linkedin.com/in/present-one"
        ]))?,
    )?;

    let api = StubLookup::new(vec![(
        "present-one",
        json!({
            "provider": "linkedin",
            "public_identifier": "present-one",
            "first_name": "Sam",
            "last_name": "Lee"
        }),
    )]);

    let config = test_config(&input_file, dir.path());
    let summary = contacts::run(&config, &api).await?;

    assert_eq!(summary.errors.len(), 1);
    assert_eq!(summary.scraped, 1);

    let report: Vec<Value> = serde_json::from_str(&fs::read_to_string(&summary.output_file)?)?;
    assert_eq!(report[0]["full_name"], "Sam Lee");

    Ok(())
}

#[tokio::test]
async fn test_missing_url_list_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    let config = test_config(&dir.path().join("absent.json"), dir.path());
    let api = StubLookup::new(vec![]);

    let result = contacts::run(&config, &api).await;
    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn test_url_list_must_be_an_array_of_strings() -> Result<()> {
    let dir = tempdir()?;
    let input_file = dir.path().join("profile_urls.json");
    fs::write(&input_file, r#"{ "urls": [] }"#)?;

    let config = test_config(&input_file, dir.path());
    let api = StubLookup::new(vec![]);

    let result = contacts::run(&config, &api).await;
    match result {
        Err(TakeoutError::MalformedInput(message)) => {
            assert!(message.contains("JSON array"));
        }
        other => panic!("expected MalformedInput, got {other:?}"),
    }

    Ok(())
}

pub mod phone;
pub mod profile_api;
pub mod transform;

use crate::config::ContactsConfig;
use crate::error::{Result, TakeoutError};
use chrono::Utc;
use profile_api::{public_identifier, ProfileLookup};
use rand::Rng;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use transform::{contact_from_profile, ContactRecord};

/// Result of a complete contacts run.
#[derive(Debug, Serialize)]
pub struct ScrapeSummary {
    pub total_urls: usize,
    pub scraped: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
    pub output_file: String,
}

/// Look up every profile URL in the input list and persist the derived
/// contacts as one timestamped JSON report.
#[instrument(skip(config, api))]
pub async fn run(config: &ContactsConfig, api: &dyn ProfileLookup) -> Result<ScrapeSummary> {
    info!("🚀 Starting contacts scrape");
    println!("🚀 Starting contacts scrape");

    let urls = load_profile_urls(&config.input_file)?;
    info!(
        "📡 Loaded {} profile URLs from {}",
        urls.len(),
        config.input_file.display()
    );
    println!(
        "📡 Loaded {} profile URLs from {}",
        urls.len(),
        config.input_file.display()
    );

    let mut contacts = Vec::new();
    let mut errors = Vec::new();
    let mut skipped = 0;

    for (i, url) in urls.iter().enumerate() {
        match process_profile_url(url, api).await {
            Ok(Some(contact)) => {
                contacts.push(contact);
                if (i + 1) % 10 == 0 {
                    debug!("Processed {}/{} profiles", i + 1, urls.len());
                    println!("   Processed {}/{} profiles", i + 1, urls.len());
                }
            }
            Ok(None) => {
                skipped += 1;
            }
            Err(e) => {
                let error_msg = format!("Failed to process {url}: {e}");
                error!("Lookup failed for {}: {}", url, e);
                errors.push(error_msg);
            }
        }
        // Pace every record, hit or miss, to respect the upstream rate limit.
        pace(config).await;
    }

    info!(
        "✅ Scraped {} contacts ({} skipped, {} errors)",
        contacts.len(),
        skipped,
        errors.len()
    );
    println!(
        "✅ Scraped {} contacts ({} skipped, {} errors)",
        contacts.len(),
        skipped,
        errors.len()
    );

    let output_file = persist_to_json(&contacts, &config.output_dir)?;
    info!("💾 Saved contacts to {}", output_file);
    println!("💾 Saved contacts to {}", output_file);

    Ok(ScrapeSummary {
        total_urls: urls.len(),
        scraped: contacts.len(),
        skipped,
        errors,
        output_file,
    })
}

/// Process one profile URL into zero-or-one contact.
async fn process_profile_url(url: &str, api: &dyn ProfileLookup) -> Result<Option<ContactRecord>> {
    let public_id = match public_identifier(url) {
        Some(id) => id,
        None => {
            warn!("Skipping {}: no public identifier after /in/", url);
            return Ok(None);
        }
    };

    let profile = api.fetch_profile(&public_id).await?;

    if let Some(reason) = transform::skip_reason(&profile) {
        warn!("Skipping {}: {}", url, reason);
        return Ok(None);
    }

    debug!("Derived contact for '{}'", public_id);
    Ok(Some(contact_from_profile(&profile)))
}

async fn pace(config: &ContactsConfig) {
    let jitter = rand::thread_rng().gen_range(0..=config.jitter_ms);
    tokio::time::sleep(Duration::from_millis(config.base_delay_ms + jitter)).await;
}

/// The input file holds one JSON array of profile URL strings.
fn load_profile_urls(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        TakeoutError::Config(format!(
            "Cannot read profile URL list {}: {e}",
            path.display()
        ))
    })?;
    let urls: Vec<String> = serde_json::from_str(&raw).map_err(|e| {
        TakeoutError::MalformedInput(format!(
            "profile URL list {} is not a JSON array of strings: {e}",
            path.display()
        ))
    })?;
    Ok(urls)
}

/// Persist derived contacts to a timestamped JSON file.
fn persist_to_json(contacts: &[ContactRecord], output_dir: &Path) -> Result<String> {
    fs::create_dir_all(output_dir)?;

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("contacts_{timestamp}.json");
    let filepath = output_dir.join(&filename);

    let json_content = serde_json::to_string_pretty(contacts)?;
    fs::write(&filepath, json_content)?;

    Ok(filepath.to_string_lossy().to_string())
}

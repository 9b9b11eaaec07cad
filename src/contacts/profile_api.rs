use crate::config::{ContactsConfig, LookupCredentials};
use crate::error::{Result, TakeoutError};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

static PUBLIC_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/in/([^/?#]+)").unwrap());

/// The path segment after `/in/` in a profile URL. Trailing slashes,
/// query strings and fragments are tolerated.
pub fn public_identifier(profile_url: &str) -> Option<String> {
    PUBLIC_ID_RE
        .captures(profile_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Seam between the pipeline and the profile-lookup service, so tests can
/// drive the pipeline without a network.
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    /// Fetch the raw lookup response for one public identifier.
    async fn fetch_profile(&self, public_id: &str) -> Result<Value>;
}

/// Production client for the profile-lookup HTTP API.
pub struct ProfileApiClient {
    client: reqwest::Client,
    base_url: String,
    include_experience: bool,
    credentials: LookupCredentials,
}

impl ProfileApiClient {
    pub fn new(config: &ContactsConfig, credentials: LookupCredentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            include_experience: config.include_experience,
            credentials,
        })
    }
}

#[async_trait]
impl ProfileLookup for ProfileApiClient {
    #[instrument(skip(self))]
    async fn fetch_profile(&self, public_id: &str) -> Result<Value> {
        let url = format!(
            "{}/v1/datasets/{}/profiles/{}",
            self.base_url, self.credentials.dataset_id, public_id
        );

        let mut request = self
            .client
            .get(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.credentials.api_key),
            )
            .header("X-Account-Id", self.credentials.account_id.as_str());
        if self.include_experience {
            request = request.query(&[("include", "experience")]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(TakeoutError::Api {
                message: format!(
                    "profile lookup for '{public_id}' returned status {}",
                    response.status()
                ),
            });
        }

        let profile = response.json::<Value>().await?;
        debug!("Fetched profile for '{}'", public_id);
        Ok(profile)
    }
}

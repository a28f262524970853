use std::time::Duration;

use super::client::DnsApiClient;
use super::models::{ApiResponse, RecordResult, RecordSnapshot, UpdateOutcome, UpdateRecordBody, UpdateResult};
use anyhow::Result;
use async_trait::async_trait;

const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

const API_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CloudflareClient {
    client: reqwest::Client,
    api_token: String,
    base_url: String,
}

impl CloudflareClient {
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, API_BASE_URL.to_string())
    }

    /// Point the client at an alternate API root (used by tests).
    pub fn with_base_url(api_token: String, base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(API_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_token,
            base_url,
        }
    }

    fn record_url(&self, zone_id: &str, record_id: &str) -> String {
        format!("{}/zones/{}/dns_records/{}", self.base_url, zone_id, record_id)
    }
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn fetch_record(&self, zone_id: &str, record_id: &str) -> Result<RecordSnapshot> {
        let response = self
            .client
            .get(self.record_url(zone_id, record_id))
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let text = response.text().await?;
        let parsed: ApiResponse<RecordResult> = serde_json::from_str(&text).map_err(|e| {
            anyhow::anyhow!("Failed to parse record response: {}. Response: {}", e, text)
        })?;

        if !parsed.success {
            log::debug!("Record fetch reported errors: {:?}", parsed.errors);
        }

        Ok(RecordSnapshot {
            content: parsed.result.content,
            proxied: parsed.result.proxied,
            ttl: parsed.result.ttl,
            success: parsed.success,
        })
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        name: &str,
        content: &str,
        ttl: u32,
        proxied: bool,
    ) -> Result<UpdateOutcome> {
        let body = UpdateRecordBody {
            r#type: "A",
            name,
            content,
            ttl,
            proxied,
        };

        let response = self
            .client
            .put(self.record_url(zone_id, record_id))
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let text = response.text().await?;
        let parsed: ApiResponse<UpdateResult> = serde_json::from_str(&text).map_err(|e| {
            anyhow::anyhow!("Failed to parse update response: {}. Response: {}", e, text)
        })?;

        if !parsed.success {
            log::debug!("Record update reported errors: {:?}", parsed.errors);
        }

        Ok(UpdateOutcome {
            content: parsed.result.content,
            success: parsed.success,
        })
    }
}

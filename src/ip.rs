use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use log::warn;
use std::time::Duration;
use tokio::time::sleep;

/// Plain-text echo service that answers with the caller's public address.
const IP_ECHO_URL: &str = "http://checkip.amazonaws.com";

const IP_TIMEOUT: Duration = Duration::from_secs(10);

/// Wait between failed resolution attempts.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(5);

/// Resolution attempts before giving up (~10 minutes at 5s apart).
pub const MAX_ATTEMPTS: u32 = 120;

#[async_trait]
pub trait IpSource {
    async fn fetch_ip(&self) -> Result<String>;
}

pub struct HttpIpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpIpSource {
    pub fn new() -> Self {
        Self::with_url(IP_ECHO_URL.to_string())
    }

    pub fn with_url(url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(IP_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self { client, url }
    }
}

impl Default for HttpIpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IpSource for HttpIpSource {
    async fn fetch_ip(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to reach the IP echo service")?
            .error_for_status()
            .context("IP echo service returned an error status")?;

        let body = response
            .text()
            .await
            .context("Failed to read the IP echo response")?;

        // Only whitespace is stripped; a malformed address is left for the
        // DNS API to reject.
        Ok(body.trim().to_string())
    }
}

/// Resolve the public IP, retrying on transport failure or an empty body
/// until a result arrives or the attempt ceiling is hit.
pub async fn resolve_with_retry<S: IpSource + ?Sized>(source: &S) -> Result<String> {
    let mut attempts = 0;
    loop {
        match source.fetch_ip().await {
            Ok(ip) if !ip.is_empty() => return Ok(ip),
            Ok(_) => warn!("Empty response from the IP echo service"),
            Err(e) => warn!("Could not resolve the public IP: {:#}", e),
        }

        attempts += 1;
        if attempts >= MAX_ATTEMPTS {
            bail!("Failed to resolve the public IP after {} attempts", MAX_ATTEMPTS);
        }

        warn!(
            "No internet connection. Retrying in {} seconds...",
            RETRY_INTERVAL.as_secs()
        );
        sleep(RETRY_INTERVAL).await;
    }
}

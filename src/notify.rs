use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

const PUSHBULLET_API_BASE: &str = "https://api.pushbullet.com";

const NOTIFY_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait Notifier {
    async fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// Push payload; only the "note" type is needed here.
#[derive(Debug, Serialize)]
struct Note<'a> {
    r#type: &'a str,
    title: &'a str,
    body: &'a str,
}

pub struct PushbulletNotifier {
    client: reqwest::Client,
    api_token: String,
    base_url: String,
}

impl PushbulletNotifier {
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, PUSHBULLET_API_BASE.to_string())
    }

    /// Point the notifier at an alternate API root (used by tests).
    pub fn with_base_url(api_token: String, base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(NOTIFY_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_token,
            base_url,
        }
    }
}

#[async_trait]
impl Notifier for PushbulletNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<()> {
        let note = Note {
            r#type: "note",
            title,
            body,
        };

        let response = self
            .client
            .post(format!("{}/v2/pushes", self.base_url))
            .header("Access-Token", &self.api_token)
            .header("Content-Type", "application/json")
            .json(&note)
            .send()
            .await
            .context("Failed to reach the notification service")?;

        if !response.status().is_success() {
            bail!("Notification request failed: HTTP {}", response.status());
        }

        Ok(())
    }
}

use super::models::{RecordSnapshot, UpdateOutcome};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient {
    async fn fetch_record(&self, zone_id: &str, record_id: &str) -> Result<RecordSnapshot>;

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        name: &str,
        content: &str,
        ttl: u32,
        proxied: bool,
    ) -> Result<UpdateOutcome>;
}

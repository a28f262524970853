use anyhow::{Context, Result};
use log::{error, info, warn};

use crate::api::DnsApiClient;
use crate::config::Target;
use crate::notify::Notifier;

/// Walks the configured targets once, replacing every record whose content
/// differs from the resolved public IP.
pub struct Reconciler<C, N> {
    client: C,
    notifier: Option<N>,
    notify_title: String,
}

impl<C: DnsApiClient, N: Notifier> Reconciler<C, N> {
    pub fn new(client: C, notifier: Option<N>, notify_title: String) -> Self {
        Self {
            client,
            notifier,
            notify_title,
        }
    }

    /// Reconcile every target against `current_ip`, in list order.
    ///
    /// A record fetch failure aborts the whole pass: it usually means the
    /// configured zone or record IDs are stale. An update failure only skips
    /// the affected target, and a notification failure is logged and ignored.
    pub async fn run(&self, targets: &[Target], current_ip: &str) -> Result<()> {
        for target in targets {
            let record = self
                .client
                .fetch_record(&target.zone_id, &target.id)
                .await
                .with_context(|| {
                    format!(
                        "Failed to fetch the current DNS record for {}. \
                         May be caused by an outdated config file",
                        target.name
                    )
                })?;

            // A provider-reported failure flag is logged but not fatal; only
            // transport and decode errors stop the pass.
            if !record.success {
                warn!("{}: provider reported success=false on fetch", target.name);
            }

            if record.content == current_ip {
                info!("{}: already up to date ({})", target.name, current_ip);
                continue;
            }

            // TTL and proxied are carried over unchanged from the fetch.
            match self
                .client
                .update_record(
                    &target.zone_id,
                    &target.id,
                    &target.name,
                    current_ip,
                    record.ttl,
                    record.proxied,
                )
                .await
            {
                Err(e) => error!("Error while updating {}: {:#}", target.name, e),
                Ok(outcome) => {
                    if !outcome.success {
                        warn!("{}: provider reported success=false on update", target.name);
                    }
                    info!(
                        "{}: successfully updated from {} to {}",
                        target.name, record.content, outcome.content
                    );

                    if let Some(notifier) = &self.notifier {
                        let body = format!("{}: {}", target.name, current_ip);
                        if let Err(e) = notifier.notify(&self.notify_title, &body).await {
                            warn!("Failed to send the update notification: {:#}", e);
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

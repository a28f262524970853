mod api;
mod config;
mod ddns;
mod ip;
mod notify;
#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use api::CloudflareClient;
use ddns::Reconciler;
use ip::HttpIpSource;
use notify::PushbulletNotifier;

/// Updates Cloudflare DNS records with the host's current public IP.
#[derive(Parser, Debug)]
#[command(name = "cfddns")]
#[command(about = "Cloudflare dynamic DNS updater", long_about = None)]
struct Args {
    /// Path to the JSON config file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Skip resolution and use this IP address instead
    #[arg(long)]
    ip: Option<String>,

    /// Title used for update notifications
    #[arg(long, default_value = "DNS record updated")]
    title: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()).await {
        error!("{:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(args: Args) -> Result<()> {
    let config = config::load(&args.config)?;

    let current_ip = match args.ip {
        Some(ip) => ip,
        None => ip::resolve_with_retry(&HttpIpSource::new()).await?,
    };
    info!("Current public IP: {}", current_ip);

    let client = CloudflareClient::new(config.api_key.clone());
    let notifier = config
        .notify_api_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .map(|key| PushbulletNotifier::new(key.to_string()));

    let reconciler = Reconciler::new(client, notifier, args.title);
    reconciler.run(&config.targets, &current_ip).await
}

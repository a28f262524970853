use crate::ip::{self, HttpIpSource, IpSource, MAX_ATTEMPTS, RETRY_INTERVAL};
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::time::Instant;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

struct FlakyIpSource {
    failures: u32,
    calls: AtomicU32,
    ip: &'static str,
}

#[async_trait]
impl IpSource for FlakyIpSource {
    async fn fetch_ip(&self) -> Result<String> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
            bail!("connection refused");
        }
        Ok(self.ip.to_string())
    }
}

struct AlwaysDown;

#[async_trait]
impl IpSource for AlwaysDown {
    async fn fetch_ip(&self) -> Result<String> {
        bail!("no route to host")
    }
}

struct EmptyThenOk {
    calls: AtomicU32,
}

#[async_trait]
impl IpSource for EmptyThenOk {
    async fn fetch_ip(&self) -> Result<String> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(String::new())
        } else {
            Ok("1.2.3.4".to_string())
        }
    }
}

#[tokio::test(start_paused = true)]
async fn retries_then_returns_the_first_success() {
    let source = FlakyIpSource {
        failures: 3,
        calls: AtomicU32::new(0),
        ip: "5.6.7.8",
    };
    let start = Instant::now();

    let ip = ip::resolve_with_retry(&source).await.unwrap();

    assert_eq!(ip, "5.6.7.8");
    // One fixed-interval sleep per failed attempt, none after the success.
    assert_eq!(start.elapsed(), RETRY_INTERVAL * 3);
}

#[tokio::test(start_paused = true)]
async fn gives_up_after_the_attempt_ceiling() {
    let result = ip::resolve_with_retry(&AlwaysDown).await;

    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains(&MAX_ATTEMPTS.to_string()));
}

#[tokio::test(start_paused = true)]
async fn empty_body_counts_as_a_failed_attempt() {
    let source = EmptyThenOk {
        calls: AtomicU32::new(0),
    };
    let start = Instant::now();

    let ip = ip::resolve_with_retry(&source).await.unwrap();

    assert_eq!(ip, "1.2.3.4");
    assert_eq!(start.elapsed(), Duration::from_secs(5));
}

#[tokio::test]
async fn http_source_trims_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1.2.3.4\n"))
        .mount(&server)
        .await;

    let source = HttpIpSource::with_url(server.uri());
    assert_eq!(source.fetch_ip().await.unwrap(), "1.2.3.4");
}

#[tokio::test]
async fn http_source_rejects_error_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = HttpIpSource::with_url(server.uri());
    assert!(source.fetch_ip().await.is_err());
}

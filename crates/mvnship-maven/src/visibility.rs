//! Checking that a deployed artifact can be fetched from its registry.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};

use mvnship_util::errors::ShipError;
use mvnship_util::progress;

use crate::auth::apply_auth;
use crate::pom::Coordinate;
use crate::repository::MavenRepository;

/// Build the HTTP client used for visibility checks.
pub fn client() -> Result<Client, ShipError> {
    Client::builder()
        .user_agent(concat!("mvnship/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| ShipError::Network {
            message: format!("Failed to build HTTP client: {e}"),
        })
}

/// `HEAD` the POM of `coord`: `Ok(true)` if it is there, `Ok(false)` on 404.
pub async fn artifact_visible(
    client: &Client,
    repo: &MavenRepository,
    coord: &Coordinate,
) -> Result<bool, ShipError> {
    let url = repo.pom_url(coord);
    tracing::debug!(%url, auth = repo.has_auth(), "checking artifact visibility");
    let response = apply_auth(client.head(&url), repo)
        .send()
        .await
        .map_err(|e| ShipError::Network {
            message: format!("HEAD {url} failed: {e}"),
        })?;

    match response.status() {
        s if s.is_success() => Ok(true),
        StatusCode::NOT_FOUND => Ok(false),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ShipError::Credentials {
            message: format!(
                "{} rejected the request for {coord} ({})",
                repo.name,
                response.status()
            ),
        }),
        other => Err(ShipError::Network {
            message: format!("HEAD {url} returned {other}"),
        }),
    }
}

/// Poll until `coord` is visible in `repo` or `timeout` elapses.
///
/// Returns whether the artifact showed up. Transient network errors are
/// logged and retried; credential errors end the wait immediately. A
/// `timeout` too large to represent as a deadline waits without limit.
pub async fn wait_until_visible(
    repo: &MavenRepository,
    coord: &Coordinate,
    timeout: Duration,
    interval: Duration,
) -> Result<bool, ShipError> {
    let client = client()?;
    let deadline = Instant::now().checked_add(timeout);
    let pb = progress::spinner(&format!("Waiting for {coord} on {}", repo.name));

    loop {
        match artifact_visible(&client, repo, coord).await {
            Ok(true) => {
                pb.finish_and_clear();
                return Ok(true);
            }
            Ok(false) => {}
            Err(e @ ShipError::Credentials { .. }) => {
                pb.finish_and_clear();
                return Err(e);
            }
            Err(e) => tracing::warn!("visibility check failed, retrying: {e}"),
        }

        let expired = deadline.is_some_and(|deadline| {
            Instant::now()
                .checked_add(interval)
                .map_or(true, |next| next > deadline)
        });
        if expired {
            pb.finish_and_clear();
            return Ok(false);
        }
        tokio::time::sleep(interval).await;
    }
}

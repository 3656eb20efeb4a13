//! Page retrieval for the CLI.

use anyhow::Context;
use tracing::info;

/// Fetch a page body over HTTP(S).
pub async fn fetch_page(url: &str) -> anyhow::Result<String> {
    info!(url = %url, "fetching page");
    let resp = reqwest::get(url)
        .await
        .with_context(|| format!("requesting {url}"))?;

    let status = resp.status();
    anyhow::ensure!(status.is_success(), "server returned {status} for {url}");

    resp.text().await.context("reading response body")
}

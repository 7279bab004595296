use anyhow::Result;
use reqwest::Client;

/// One GET, library defaults for redirects and timeouts. Only a 2xx status counts as content.
///
/// The body is decoded with the charset from `Content-Type`, falling back to UTF-8.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let text = client.get(url).send().await?.error_for_status()?.text().await?;
    Ok(text)
}

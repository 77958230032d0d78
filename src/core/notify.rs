use anyhow::{Context, Result};
use serde::Serialize;

pub const WEBHOOK_ENV: &str = "SLACK_WEBHOOK_URL";

#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Webhook destination from the environment. Unset or empty selects the
/// console fallback; neither is an error.
pub fn webhook_from_env() -> Option<String> {
    std::env::var(WEBHOOK_ENV).ok().filter(|url| !url.is_empty())
}

/// POST the message to the Slack incoming webhook.
///
/// A non-200 status is reported on stderr and the run still succeeds;
/// only a transport failure (unreachable endpoint) is an error.
pub async fn post(hook_url: &str, message: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .post(hook_url)
        .json(&WebhookPayload { text: message })
        .send()
        .await
        .context("Failed to reach the Slack webhook")?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        eprintln!("Slack webhook returned HTTP {}: {}", status.as_u16(), body);
    }
    Ok(())
}

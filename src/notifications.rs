use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::payload::NotificationPayload;

/// Webhook notifier for the destination chat platform
pub struct Notifier {
    client: Client,
    webhook_url: String,
}

impl Notifier {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            webhook_url: webhook_url.into(),
        }
    }

    /// POST the payload to the webhook. One attempt, no retries.
    pub async fn send(&self, payload: &NotificationPayload) -> Result<()> {
        debug!("Sending review reminder");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await
            .context("Failed to send notification")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Notification delivery failed");
            anyhow::bail!("Webhook returned error: {} - {}", status, body);
        }

        info!("Notification sent");
        Ok(())
    }
}

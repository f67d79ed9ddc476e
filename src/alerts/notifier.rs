use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::Config;
use crate::models::alert::Alert;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<()>;
}

/// One email per filter per run: subject names the city and count, body
/// is a plain-text block per newly created alert.
pub fn format_alert_email(city: &str, new_alerts: &[Alert]) -> (String, String) {
    let subject = format!("New listings in {} ({})", city, new_alerts.len());
    let body = new_alerts
        .iter()
        .map(|alert| format!("{}\n{}\nPrice: {} PLN\n\n", alert.title, alert.link, alert.price))
        .collect::<String>();

    (subject, body)
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Email delivery through the Resend HTTP API.
pub struct ResendMailer {
    client: Client,
    api_key: String,
    from: String,
}

impl ResendMailer {
    pub fn new(config: &Arc<Config>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.email_timeout_seconds.into()))
            .build()
            .context("Failed to create Resend HTTP client")?;

        Ok(ResendMailer {
            client,
            api_key: config.resend_api_key.clone(),
            from: config.email_from.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        let payload = SendEmailRequest {
            from: &self.from,
            to: &email.to,
            subject: &email.subject,
            text: &email.body,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .context("Failed to reach Resend")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Resend responded with error {}: {}", status, body));
        }

        Ok(())
    }
}

use log::{debug, info, warn};
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::document::Map;
use crate::errors::*;

#[derive(Serialize, Debug)]
pub struct WebhookPayload<'a> {
    pub embeds: &'a [Map],
}

/// Posts `embeds` to a Discord webhook as a single message.
pub async fn send_embeds(client: &Client, webhook: &Url, embeds: &[Map]) -> Result<()> {
    if embeds.is_empty() {
        return Err(ErrorKind::NoEmbeds.into());
    }

    let payload = WebhookPayload { embeds };
    let serialized = serde_json::to_string(&payload)?;
    debug!("posting {} embed(s) to {}", embeds.len(), webhook.host_str().unwrap_or("webhook"));

    let res = client
        .post(webhook.clone())
        .header("Content-Type", "application/json")
        .body(serialized)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await?;
        warn!("webhook responded with {}", status);
        return Err(ErrorKind::WebhookRejected(status.as_u16(), body).into());
    }

    info!("webhook accepted {} embed(s)", embeds.len());
    Ok(())
}

//! Remote persistence: append-one-record to the waitlist collection.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Serialize)]
struct WaitlistRecord<'a> {
    email: &'a str,
}

#[derive(Deserialize)]
struct StoreReply {
    #[serde(default)]
    error: Option<String>,
}

/// Append one record. The store assigns the timestamp on arrival, so the
/// body carries only the address. Transport errors and non-2xx statuses
/// collapse into one opaque error string; the form only distinguishes
/// success from failure.
pub async fn append_waitlist(email: &str) -> Result<(), String> {
    let response = Request::post(config::WAITLIST_ENDPOINT)
        .json(&WaitlistRecord { email })
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let detail = match response.text().await {
        Ok(body) => serde_json::from_str::<StoreReply>(&body)
            .ok()
            .and_then(|reply| reply.error),
        Err(_) => None,
    };
    match detail {
        Some(message) => Err(format!("store rejected append ({status}): {message}")),
        None => Err(format!("store rejected append ({status})")),
    }
}

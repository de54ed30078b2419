//! Outbound call trigger.
//!
//! One fixed call configuration, one external endpoint, one atomic
//! forward-and-relay: upstream success bodies and upstream error
//! bodies both pass through unchanged. No retries, no idempotency key,
//! no local timeout beyond the HTTP client's defaults.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

/// The external voice-call endpoint.
pub const BLAND_API_URL: &str = "https://api.bland.ai/v1/calls";

/// Persona script sent with every call. Bilingual support-agent role-play
/// for the Forest Rights Helpline.
pub const AGENT_SCRIPT: &str = "\
You are Sunita, a support agent at the Forest Rights Helpline. You assist claimants with FRA \
cases using the FRA Atlas. You are empathetic and bilingual (English + Hindi).

You're a support agent at the Forest Rights Helpline, a new service established to help community \
members and landowners navigate the Forest Rights Act (FRA) claim process. Your helpline uses the \
new AI-powered FRA Atlas as its core tool.

Your job is to answer calls from claimants. You use the new digital platform to give them \
real-time status updates and guide them on how to use the system's new features to strengthen \
their case. You are fluent in both English and Hindi, switching between them to make callers feel \
comfortable.

Open every call with: \"Forest Rights Helpline, Namaste. Mera naam Sunita hai, main aapki kya \
sahayata kar sakti hoon?\" Ask for the caller's village name and the head of household to look up \
their case. If a claim is pending on insufficient historical evidence, explain that the Atlas can \
analyse 20-30 year old satellite images to establish long-term cultivation, flag the file for \
Satellite Evidence Review, and tell the caller a support officer from their district will visit to \
attach the new evidence to their claim file. Close by reminding them they can call the helpline \
again any time.";

/// The fixed Bland call configuration. Only the phone number varies.
#[derive(Debug, Clone, Serialize)]
pub struct CallConfig {
    pub phone_number: String,
    pub voice: &'static str,
    pub wait_for_greeting: bool,
    pub record: bool,
    pub answered_by_enabled: bool,
    pub noise_cancellation: bool,
    pub interruption_threshold: u32,
    pub block_interruptions: bool,
    pub max_duration: u32,
    pub model: &'static str,
    pub language: &'static str,
    pub background_track: &'static str,
    pub voicemail_action: &'static str,
    pub task: &'static str,
}

impl CallConfig {
    pub fn for_number(phone_number: String) -> Self {
        Self {
            phone_number,
            voice: "June",
            wait_for_greeting: false,
            record: true,
            answered_by_enabled: true,
            noise_cancellation: false,
            interruption_threshold: 100,
            block_interruptions: false,
            max_duration: 12,
            model: "base",
            language: "en",
            background_track: "none",
            voicemail_action: "hangup",
            task: AGENT_SCRIPT,
        }
    }
}

#[derive(Error, Debug)]
pub enum CallError {
    #[error("call request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("call API returned {status}")]
    Upstream { status: u16, body: Value },
    #[error("BLAND_API_KEY is not configured")]
    MissingApiKey,
}

/// Seam for the outbound call so handlers can run against a fake.
#[async_trait]
pub trait CallDispatcher: Send + Sync {
    async fn dispatch(&self, config: &CallConfig) -> Result<Value, CallError>;
}

/// Production dispatcher: bearer-authenticated POST to the Bland API.
pub struct BlandDispatcher {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl BlandDispatcher {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_url(BLAND_API_URL.to_string(), api_key)
    }

    pub fn with_url(url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            api_key,
        }
    }
}

#[async_trait]
impl CallDispatcher for BlandDispatcher {
    async fn dispatch(&self, config: &CallConfig) -> Result<Value, CallError> {
        let api_key = self.api_key.as_deref().ok_or(CallError::MissingApiKey)?;

        info!(url = %self.url, phone = %config.phone_number, "dispatching outbound call");
        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(config)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        // Upstream bodies pass through as-is; non-JSON bodies are relayed
        // as plain strings rather than rejected.
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));

        if status.is_success() {
            info!(status = status.as_u16(), "call dispatched");
            Ok(body)
        } else {
            Err(CallError::Upstream {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_config_matches_the_fixed_contract() {
        let config = CallConfig::for_number("+911234567890".into());
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["phone_number"], "+911234567890");
        assert_eq!(value["voice"], "June");
        assert_eq!(value["record"], true);
        assert_eq!(value["max_duration"], 12);
        assert_eq!(value["language"], "en");
        assert_eq!(value["voicemail_action"], "hangup");
        assert!(value["task"].as_str().unwrap().contains("Forest Rights Helpline"));
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_network_io() {
        let dispatcher = BlandDispatcher::with_url("http://127.0.0.1:1/none".into(), None);
        let err = dispatcher
            .dispatch(&CallConfig::for_number("+911234567890".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, CallError::MissingApiKey));
    }
}

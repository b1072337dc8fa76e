//! HTTP client for the hosted model.

use gloo_net::http::Request;

use super::session::ChatSession;
use super::wire::GenerateContentResponse;
use crate::config::ChatConfig;
use crate::error::{Result, ScrollframeError};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    /// `None` when no API key is configured.
    pub fn from_config(config: &ChatConfig) -> Option<Self> {
        let api_key = config.api_key.as_deref()?.trim();
        if api_key.is_empty() {
            return None;
        }
        Some(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, model, self.api_key
        )
    }

    /// Send `text` with the session history and return the model's reply.
    ///
    /// The session is only borrowed to build the request; the caller records
    /// the exchange once the reply is in.
    pub async fn send(&self, session: &ChatSession, text: &str) -> Result<String> {
        let request = session.request_for(text);
        let response = Request::post(&self.url(session.model()))
            .json(&request)
            .map_err(|e| ScrollframeError::Chat(e.to_string()))?
            .send()
            .await
            .map_err(|e| ScrollframeError::Chat(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ScrollframeError::Chat(e.to_string()))?;
        if !response.ok() {
            return Err(ScrollframeError::Chat(format!(
                "model returned HTTP {status}: {body}"
            )));
        }
        GenerateContentResponse::from_json(&body)?.text()
    }
}

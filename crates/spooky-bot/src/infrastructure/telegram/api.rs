//! The reqwest-backed Bot API client.
//!
//! One HTTPS endpoint per concern: `getUpdates` (long poll), `sendMessage`,
//! and `answerInlineQuery`. All three share the envelope-checking `call`
//! helper. The client keeps the long-poll offset so every update is consumed
//! exactly once.
//!
//! The API token is part of the request URL, so `TelegramApi` deliberately
//! does not derive `Debug` and never logs its base URL.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::dispatch::BotTransport;
use crate::domain::events::{InboundEvent, OutboundAction};
use crate::domain::settings::BotCredentials;
use crate::infrastructure::telegram::wire::{
    update_to_event, AnswerInlineQueryRequest, ApiResponse, GetUpdatesRequest,
    SendMessageRequest, Update,
};

/// Extra slack on top of the long-poll timeout before the HTTP layer gives up.
const HTTP_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

/// A connected Bot API client.
pub struct TelegramApi {
    http: reqwest::Client,
    base_url: String,
    bot_name: String,
    poll_timeout: Duration,
    /// Next `getUpdates` offset; one past the last update seen.
    offset: i64,
}

impl TelegramApi {
    /// Builds a client for the bot identified by `credentials`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(credentials: &BotCredentials, poll_timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(poll_timeout + HTTP_TIMEOUT_MARGIN)
            .build()
            .context("failed to build the Bot API HTTP client")?;

        Ok(Self {
            http,
            base_url: format!("https://api.telegram.org/bot{}", credentials.token),
            bot_name: credentials.name.clone(),
            poll_timeout,
            offset: 0,
        })
    }

    /// Posts one Bot API method call and unwraps the response envelope.
    async fn call<Req, Resp>(&self, method: &str, body: &Req) -> Result<Resp, String>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .json(body)
            .send()
            .await
            .map_err(|e| format!("{method} request failed: {e}"))?;

        let envelope: ApiResponse<Resp> = response
            .json()
            .await
            .map_err(|e| format!("{method} response was not valid JSON: {e}"))?;

        if !envelope.ok {
            return Err(format!(
                "{method} rejected: {}",
                envelope.description.unwrap_or_else(|| "no description".to_string())
            ));
        }
        envelope
            .result
            .ok_or_else(|| format!("{method} returned ok without a result"))
    }

    /// Advances the long-poll offset past every update in `updates`.
    fn advance_offset(offset: i64, updates: &[Update]) -> i64 {
        updates
            .iter()
            .map(|u| u.update_id + 1)
            .fold(offset, i64::max)
    }
}

#[async_trait]
impl BotTransport for TelegramApi {
    async fn poll_events(&mut self) -> Result<Vec<InboundEvent>, String> {
        let request = GetUpdatesRequest {
            offset: self.offset,
            timeout: self.poll_timeout.as_secs(),
        };
        let updates: Vec<Update> = self.call("getUpdates", &request).await?;

        self.offset = Self::advance_offset(self.offset, &updates);
        Ok(updates
            .into_iter()
            .filter_map(|update| update_to_event(update, &self.bot_name))
            .collect())
    }

    async fn deliver(&self, action: OutboundAction) -> Result<(), String> {
        match action {
            OutboundAction::AnswerInlineQuery { query_id, answer } => {
                let request = AnswerInlineQueryRequest::single_article(&query_id, &answer);
                let _: serde_json::Value = self.call("answerInlineQuery", &request).await?;
            }
            OutboundAction::SendMessage { chat_id, text } => {
                let request = SendMessageRequest {
                    chat_id,
                    text: &text,
                };
                let _: serde_json::Value = self.call("sendMessage", &request).await?;
            }
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

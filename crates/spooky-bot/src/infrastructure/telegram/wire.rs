//! Serde types for the Bot API subset the bot consumes, plus the translation
//! into domain events.
//!
//! Telegram wraps every response in an envelope `{"ok": bool, "result": ...}`
//! and delivers updates as objects carrying exactly one payload field
//! (`message`, `inline_query`, ...). Fields the bot does not act on are
//! simply not modeled; serde ignores unknown fields by default.

use serde::{Deserialize, Serialize};

use crate::domain::events::{InboundEvent, InlineAnswer};

// ── Incoming types ────────────────────────────────────────────────────────────

/// Standard Bot API response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One long-poll update. Exactly one of the payload fields is set.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub inline_query: Option<InlineQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub from: Option<User>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// `"private"`, `"group"`, `"supergroup"`, or `"channel"`.
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    #[serde(default)]
    pub query: String,
}

// ── Outgoing types ────────────────────────────────────────────────────────────

/// Request body for `getUpdates`.
#[derive(Debug, Serialize)]
pub struct GetUpdatesRequest {
    pub offset: i64,
    /// Long-poll timeout in seconds.
    pub timeout: u64,
}

/// Request body for `sendMessage`.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
}

/// Request body for `answerInlineQuery`.
#[derive(Debug, Serialize)]
pub struct AnswerInlineQueryRequest<'a> {
    pub inline_query_id: &'a str,
    pub results: Vec<InlineQueryResultArticle<'a>>,
}

/// The single article result the bot offers per inline query.
#[derive(Debug, Serialize)]
pub struct InlineQueryResultArticle<'a> {
    /// Always `"article"`.
    #[serde(rename = "type")]
    pub result_type: &'static str,
    pub id: &'a str,
    pub title: &'a str,
    pub input_message_content: InputTextMessageContent<'a>,
}

#[derive(Debug, Serialize)]
pub struct InputTextMessageContent<'a> {
    pub message_text: &'a str,
}

impl<'a> AnswerInlineQueryRequest<'a> {
    /// Builds the one-article answer payload from a domain-level answer.
    pub fn single_article(query_id: &'a str, answer: &'a InlineAnswer) -> Self {
        Self {
            inline_query_id: query_id,
            results: vec![InlineQueryResultArticle {
                result_type: "article",
                id: &answer.result_id,
                title: &answer.title,
                input_message_content: InputTextMessageContent {
                    message_text: &answer.message_content,
                },
            }],
        }
    }
}

// ── Update → event translation ────────────────────────────────────────────────

/// Reduces a raw update to the event shape the bot acts on.
///
/// Returns `None` for updates the bot has no use for (no payload field it
/// knows, messages without a sender or without text). The
/// direct-message/mention gate itself lives in the application layer; this
/// function only computes the flags it needs:
///
/// - direct message ⇔ the chat is a private chat,
/// - mention ⇔ the text contains `@<bot_name>` anywhere.
pub fn update_to_event(update: Update, bot_name: &str) -> Option<InboundEvent> {
    if let Some(query) = update.inline_query {
        return Some(InboundEvent::InlineQuery {
            query_id: query.id,
            from_user: query.from.id,
            text: query.query,
        });
    }

    if let Some(message) = update.message {
        let from = message.from?;
        let text = message.text?;
        let mention = format!("@{bot_name}");
        return Some(InboundEvent::Message {
            chat_id: message.chat.id,
            from_user: from.id,
            is_direct_message: message.chat.kind == "private",
            mentions_bot_name: text.contains(&mention),
            text,
        });
    }

    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────

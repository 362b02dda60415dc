//! Event boundary types between the core and the chat transport.
//!
//! Two distinct direction-specific types, so handing the transport a value it
//! cannot deliver is a compile-time error: [`InboundEvent`] is what the
//! transport produces from a platform update, [`OutboundAction`] is what the
//! update handler asks the transport to perform.

/// Fixed result id for inline answers — the bot always offers exactly one
/// article per query.
pub const INLINE_RESULT_ID: &str = "1";

/// An update received from the chat platform, reduced to the fields the bot
/// acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// The user is composing an inline query (`@bot some text`).
    InlineQuery {
        /// Platform-issued opaque id, echoed back when answering.
        query_id: String,
        /// Numeric id of the querying user.
        from_user: i64,
        /// The query text so far; may be empty.
        text: String,
    },
    /// A chat message that may carry a configuration command.
    Message {
        /// Chat to reply into.
        chat_id: i64,
        /// Numeric id of the sender.
        from_user: i64,
        /// Raw message text.
        text: String,
        /// `true` when the message arrived in a one-on-one chat with the bot.
        is_direct_message: bool,
        /// `true` when the text mentions the bot by `@name`.
        mentions_bot_name: bool,
    },
}

/// A single inline answer article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAnswer {
    /// Always [`INLINE_RESULT_ID`].
    pub result_id: String,
    /// Shown in the result popup; the transformed text.
    pub title: String,
    /// Inserted into the chat when the user picks the result; identical to
    /// the title.
    pub message_content: String,
}

impl InlineAnswer {
    /// Packages a transformed string as the single offered article.
    pub fn from_text(text: String) -> Self {
        Self {
            result_id: INLINE_RESULT_ID.to_string(),
            title: text.clone(),
            message_content: text,
        }
    }
}

/// An effect the update handler asks the transport to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundAction {
    /// Deliver an inline answer for a pending query.
    AnswerInlineQuery {
        query_id: String,
        answer: InlineAnswer,
    },
    /// Send a plain text message into a chat.
    SendMessage { chat_id: i64, text: String },
}

// ── Tests ─────────────────────────────────────────────────────────────────────

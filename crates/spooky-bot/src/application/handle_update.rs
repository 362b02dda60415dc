//! HandleUpdateUseCase: one inbound chat event in, at most one action out.
//!
//! Two event paths, mirroring the two things the bot can do:
//!
//! - **Inline query** → transform the query text (or a placeholder when the
//!   query is blank) with the user's current config and offer it as a single
//!   inline article. Never touches stored state.
//! - **Message** → if it is a direct message or mentions the bot, run it
//!   through the command interpreter; a recognized command replaces the
//!   user's stored config and produces a confirmation reply echoing every
//!   field of the new value. Everything else is silently ignored.

use std::sync::Arc;

use spooky_core::{apply_spooky, Command, RandomSource};

use crate::domain::events::{InboundEvent, InlineAnswer, OutboundAction};
use crate::infrastructure::storage::ConfigStore;

/// Transformed instead of the query text when an inline query is blank, so
/// the result popup always previews something.
pub const PLACEHOLDER_QUERY_TEXT: &str = "Some spooky text for Telegram";

/// The bot's single use case: resolve an inbound event against the config
/// store and the transformation engine.
pub struct HandleUpdateUseCase {
    store: Arc<ConfigStore>,
}

impl HandleUpdateUseCase {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    /// Resolves one event to at most one outbound action.
    ///
    /// Randomness is injected so tests can pin the engine's draws.
    pub async fn handle(
        &self,
        event: InboundEvent,
        rng: &mut dyn RandomSource,
    ) -> Option<OutboundAction> {
        match event {
            InboundEvent::InlineQuery {
                query_id,
                from_user,
                text,
            } => Some(self.handle_inline_query(query_id, from_user, &text, rng).await),
            InboundEvent::Message {
                chat_id,
                from_user,
                text,
                is_direct_message,
                mentions_bot_name,
            } => {
                if !is_direct_message && !mentions_bot_name {
                    return None;
                }
                self.handle_message(chat_id, from_user, &text).await
            }
        }
    }

    /// Transforms the query text under the user's current config.
    ///
    /// Unknown users get the default config; the lookup never persists it.
    async fn handle_inline_query(
        &self,
        query_id: String,
        from_user: i64,
        text: &str,
        rng: &mut dyn RandomSource,
    ) -> OutboundAction {
        let config = self.store.get(from_user).await;
        let input = if text.trim().is_empty() {
            PLACEHOLDER_QUERY_TEXT
        } else {
            text
        };
        let transformed = apply_spooky(
            input,
            &config.levels,
            config.effectiveness,
            config.keep_spooky_symbols,
            rng,
        );
        OutboundAction::AnswerInlineQuery {
            query_id,
            answer: InlineAnswer::from_text(transformed),
        }
    }

    /// Runs message text through the command interpreter.
    ///
    /// A recognized command replaces the stored config and yields a
    /// confirmation reply; anything else changes nothing and stays silent.
    async fn handle_message(
        &self,
        chat_id: i64,
        from_user: i64,
        text: &str,
    ) -> Option<OutboundAction> {
        let command = Command::parse(text)?;
        let current = self.store.get(from_user).await;
        let updated = command.apply(&current);
        self.store.put(from_user, updated.clone()).await;
        Some(OutboundAction::SendMessage {
            chat_id,
            text: format!("Config updated, current config: {updated}"),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

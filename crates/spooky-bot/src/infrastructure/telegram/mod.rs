//! Telegram Bot API transport.
//!
//! The platform is deliberately kept at arm's length: [`wire`] models the
//! small slice of the Bot API schema the bot consumes and translates it into
//! the domain's [`crate::domain::events::InboundEvent`], and [`api`] moves
//! JSON over HTTPS with `reqwest`, implementing the application layer's
//! `BotTransport` trait. Nothing outside this module knows what a Telegram
//! update looks like.

pub mod api;
pub mod wire;

pub use api::TelegramApi;

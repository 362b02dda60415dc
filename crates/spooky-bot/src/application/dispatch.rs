//! The inbound event dispatcher.
//!
//! One loop, one event at a time: poll the transport, hand each event to the
//! use case, deliver whatever action comes back. Config store access is
//! thereby serialized through a single task; only the snapshot ticker touches
//! the store concurrently, and that goes through the store's own mutex.
//!
//! Transport failures never stop the loop — a failed poll backs off briefly
//! and tries again, a failed delivery is logged and dropped. The bot has no
//! user-visible error surface.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use spooky_core::ThreadRandom;

use crate::application::handle_update::HandleUpdateUseCase;
use crate::domain::events::{InboundEvent, OutboundAction};

/// Pause before re-polling after a transport failure.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// The chat platform as the dispatcher sees it.
///
/// The infrastructure implementation long-polls the Telegram Bot API; test
/// implementations replay scripted events and record deliveries.
#[async_trait]
pub trait BotTransport: Send {
    /// Blocks until the platform produces a batch of events (possibly empty,
    /// e.g. on long-poll timeout).
    async fn poll_events(&mut self) -> Result<Vec<InboundEvent>, String>;

    /// Performs one outbound action.
    async fn deliver(&self, action: OutboundAction) -> Result<(), String>;
}

/// Runs the dispatch loop until `running` is cleared.
///
/// The flag is checked between polls; a long poll in flight when the flag
/// clears finishes normally first.
pub async fn run_dispatcher(
    transport: &mut dyn BotTransport,
    use_case: &HandleUpdateUseCase,
    running: Arc<AtomicBool>,
) {
    let mut rng = ThreadRandom;

    while running.load(Ordering::Relaxed) {
        let events = match transport.poll_events().await {
            Ok(events) => events,
            Err(e) => {
                warn!("polling for updates failed: {e}");
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };

        for event in events {
            debug!("dispatching {event:?}");
            if let Some(action) = use_case.handle(event, &mut rng).await {
                if let Err(e) = transport.deliver(action).await {
                    warn!("delivering action failed: {e}");
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

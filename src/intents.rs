//! Cross-thread intent queue.
//!
//! Uses an `embassy-sync` bounded MPMC channel to bridge producer threads
//! (console reader, radio bridge) with the single control loop that owns
//! the supervisor.  Producers never block; the control loop drains the
//! queue between ticks, so every intent and every tick is serialized.
//!
//! ```text
//! ┌──────────────┐   Intent   ┌──────────────┐
//! │   Producer   │───────────▶│ Control Loop │
//! │  (any thread)│            │   (owner)    │
//! └──────────────┘            └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use crate::app::commands::Intent;

/// Channel depth for pending intents.
pub const INTENT_DEPTH: usize = 16;

/// Bounded intent queue.  Usable from a `static`.
pub struct IntentQueue {
    channel: Channel<CriticalSectionRawMutex, Intent, INTENT_DEPTH>,
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Enqueue an intent without blocking.
    /// Returns `false` if the queue is full (intent dropped).
    pub fn push(&self, intent: Intent) -> bool {
        if self.channel.try_send(intent).is_err() {
            warn!("Intent queue full, dropping '{}'", intent);
            return false;
        }
        true
    }

    /// Pop the next intent, if any.
    pub fn pop(&self) -> Option<Intent> {
        self.channel.try_receive().ok()
    }

    /// Drain all pending intents into a callback, in FIFO order.
    pub fn drain(&self, mut handler: impl FnMut(Intent)) {
        while let Some(intent) = self.pop() {
            handler(intent);
        }
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

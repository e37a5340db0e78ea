//! # Notification Surface
//!
//! Ephemeral user-visible messages with timeout-based dismissal.
//!
//! ## Durations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Info   (add-to-cart confirmations)        dismissed after 3 s      │
//! │  Error  (checkout / bridge failures)       dismissed after 5 s      │
//! │                                                                     │
//! │  The two distinct durations are intentional and preserved.          │
//! │  Multiple concurrent notices coexist: no dedup, no queue limit.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dismissal timers run on the tokio runtime. Outside a runtime the
//! notice simply persists until read: the timer is presentation
//! convenience, not a correctness requirement.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::debug;

// =============================================================================
// Notice Types
// =============================================================================

/// Class of a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational confirmation (e.g. "added to cart").
    Info,
    /// Error-class message on the checkout/bridge path.
    Error,
}

impl NoticeKind {
    /// Fixed delay before automatic removal.
    pub const fn dismiss_after(&self) -> Duration {
        match self {
            NoticeKind::Info => Duration::from_secs(3),
            NoticeKind::Error => Duration::from_secs(5),
        }
    }
}

/// A transient display element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
}

// =============================================================================
// Notifier
// =============================================================================

/// The notification surface. Cloneable; clones share the notice list.
#[derive(Clone, Default)]
pub struct Notifier {
    notices: Arc<Mutex<Vec<Notice>>>,
    next_id: Arc<AtomicU64>,
}

impl Notifier {
    pub fn new() -> Self {
        Notifier::default()
    }

    /// Inserts a transient notice and schedules its removal.
    ///
    /// Returns the notice id (tests use it; the UI does not).
    pub fn notify(&self, message: impl Into<String>, kind: NoticeKind) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let message = message.into();
        debug!(id, ?kind, %message, "notice shown");

        self.notices
            .lock()
            .expect("notice list poisoned")
            .push(Notice { id, message, kind });

        // Schedule removal when a runtime is available; notices shown
        // outside one persist until read.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let surface = self.clone();
            handle.spawn(async move {
                tokio::time::sleep(kind.dismiss_after()).await;
                surface.dismiss(id);
            });
        } else {
            debug!(id, "no runtime; notice will not auto-dismiss");
        }

        id
    }

    /// Informational confirmation (3 s).
    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.notify(message, NoticeKind::Info)
    }

    /// Error-class message (5 s).
    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.notify(message, NoticeKind::Error)
    }

    /// Removes a notice. No-op when already dismissed.
    pub fn dismiss(&self, id: u64) {
        self.notices
            .lock()
            .expect("notice list poisoned")
            .retain(|n| n.id != id);
    }

    /// Currently visible notices, oldest first.
    pub fn active(&self) -> Vec<Notice> {
        self.notices.lock().expect("notice list poisoned").clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

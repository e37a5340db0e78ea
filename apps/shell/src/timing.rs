//! # Timing Utilities
//!
//! Debounce and throttle wrappers for high-frequency input handlers
//! (scroll, touch). Scheduling utilities, not correctness-critical.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  debounce(d, op):  call ──┐ call ──┐ call ──┐   (quiet ≥ d)         │
//! │                           x        x        └────────► op()  once   │
//! │                                                                     │
//! │  throttle(c, op):  call ────► op()   call call call   (within c)    │
//! │                                       x    x    x                   │
//! │                    (cooldown elapsed) call ────► op()               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

type Op = Arc<Mutex<Box<dyn FnMut() + Send>>>;

// =============================================================================
// Debounce
// =============================================================================

/// A debounced wrapper around an operation.
///
/// Each `call` supersedes any pending invocation; the wrapped operation
/// runs once the configured quiet period has elapsed since the last
/// call. Must be used from within a tokio runtime.
pub struct Debounced {
    delay: Duration,
    op: Op,
    generation: Arc<AtomicU64>,
}

/// Wraps `op` so it only runs after `delay` of quiet.
pub fn debounce(delay: Duration, op: impl FnMut() + Send + 'static) -> Debounced {
    Debounced {
        delay,
        op: Arc::new(Mutex::new(Box::new(op))),
        generation: Arc::new(AtomicU64::new(0)),
    }
}

impl Debounced {
    /// Requests an invocation, cancelling any pending one.
    pub fn call(&self) {
        // The generation counter is the cancellation token: a newer
        // call bumps it, and the sleeping task gives up on mismatch.
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let op = Arc::clone(&self.op);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == scheduled {
                (op.lock().expect("debounced op poisoned"))();
            }
        });
    }
}

// =============================================================================
// Throttle
// =============================================================================

/// A throttled wrapper around an operation.
///
/// The first `call` invokes the operation immediately; further calls
/// are suppressed until the cooldown elapses.
pub struct Throttled {
    cooldown: Duration,
    op: Op,
    ready_at: Arc<Mutex<Option<Instant>>>,
}

/// Wraps `op` with a cooldown between invocations.
pub fn throttle(cooldown: Duration, op: impl FnMut() + Send + 'static) -> Throttled {
    Throttled {
        cooldown,
        op: Arc::new(Mutex::new(Box::new(op))),
        ready_at: Arc::new(Mutex::new(None)),
    }
}

impl Throttled {
    /// Invokes the operation unless the cooldown is still running.
    pub fn call(&self) {
        let now = Instant::now();
        {
            let mut ready_at = self.ready_at.lock().expect("throttle state poisoned");
            if matches!(*ready_at, Some(t) if now < t) {
                return;
            }
            *ready_at = Some(now + self.cooldown);
        }
        (self.op.lock().expect("throttled op poisoned"))();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! Interruptible pauses between turns.
//!
//! The pause exists so people can follow a match; correctness never
//! depends on it. A `PacerHandle` wakes a pause early from another thread.

use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// How a pause ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pause {
    /// The delay was zero; nothing waited.
    Skipped,
    /// The full delay elapsed.
    Elapsed,
    /// A `PacerHandle` woke the pause early.
    Interrupted,
}

/// Cloneable handle that interrupts the current (or next) pause.
#[derive(Clone, Debug, Default)]
pub struct PacerHandle {
    signal: Arc<(Mutex<bool>, Condvar)>,
}

impl PacerHandle {
    /// Wake the pause in progress. If none is in progress, the next pause
    /// returns immediately.
    pub fn interrupt(&self) {
        let (lock, wakeup) = &*self.signal;
        let mut interrupted = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *interrupted = true;
        wakeup.notify_all();
    }
}

/// Blocks the match thread for the configured delay.
#[derive(Clone, Debug, Default)]
pub(crate) struct Pacer {
    handle: PacerHandle,
}

impl Pacer {
    pub fn handle(&self) -> PacerHandle {
        self.handle.clone()
    }

    pub fn pause(&self, delay: Duration) -> Pause {
        if delay.is_zero() {
            return Pause::Skipped;
        }

        let (lock, wakeup) = &*self.handle.signal;
        let guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let (mut interrupted, _) = wakeup
            .wait_timeout_while(guard, delay, |interrupted| !*interrupted)
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if *interrupted {
            *interrupted = false;
            Pause::Interrupted
        } else {
            Pause::Elapsed
        }
    }
}

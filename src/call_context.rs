use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Per-computation context: a name for log lines, a start time, and a
/// cancellation flag that long-running solves poll.
///
/// A named context logs on creation and logs the elapsed time when dropped.
/// The default context is anonymous and only forwards `log_message`.
pub struct CallContext {
    name: String,
    cancelled: Arc<AtomicBool>,
    start_time: Instant,
}

impl Default for CallContext {
    fn default() -> CallContext {
        CallContext {
            name: String::new(),
            cancelled: Arc::new(AtomicBool::new(false)),
            start_time: Instant::now(),
        }
    }
}

impl CallContext {
    pub fn new(name: &str) -> Self {
        let context = CallContext {
            name: name.to_string(),
            cancelled: Arc::new(AtomicBool::new(false)),
            start_time: Instant::now(),
        };
        log::info!("-> [{}]", context.name);
        context
    }

    /// Shares an existing flag, so another thread can cancel this computation.
    pub fn with_cancellation(mut self, cancelled: Arc<AtomicBool>) -> Self {
        self.cancelled = cancelled;
        self
    }

    pub fn cancellation_flag(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn log_message(&self, message: &str) {
        if self.name.is_empty() {
            log::debug!("{message}");
        } else {
            log::info!("   [{}] {message}", self.name);
        }
    }
}

impl Drop for CallContext {
    fn drop(&mut self) {
        if self.name.is_empty() {
            return;
        }
        let call_duration = self.start_time.elapsed().as_millis();
        log::info!("<- [{}] (took {} ms)", self.name, call_duration);
    }
}

impl Display for CallContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

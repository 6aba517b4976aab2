use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation handle for a timer owned by the mounted component.
///
/// The component never starts a timer on its own; a host that schedules
/// periodic work on its behalf hands the handle over with
/// [`App::attach_timer`](crate::ui::app::App::attach_timer) and the
/// component cancels it on unmount.
#[derive(Debug, Clone, Default)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

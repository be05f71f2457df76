use dioxus::prelude::*;
use uuid::Uuid;

use crate::config::ToastConfig;
use crate::shared::services::{Toast, ToastKind, ToastQueue};

/// Handle to the shell's toast queue
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    pub queue: Signal<ToastQueue>,
    pub duration_ms: u32,
}

impl Toasts {
    /// Show a toast that dismisses itself after the configured duration
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let id = self.queue.write().push(kind, message);
        schedule_dismiss(self.queue, id, self.duration_ms);
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.queue.write().dismiss(id);
    }

    pub fn visible(&self) -> Vec<Toast> {
        self.queue.read().iter().cloned().collect()
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(mut queue: Signal<ToastQueue>, id: Uuid, duration_ms: u32) {
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        queue.write().dismiss(id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_queue: Signal<ToastQueue>, _id: Uuid, _duration_ms: u32) {
    // No timers on server
}

/// Create the toast queue and expose it to descendants
pub fn use_toast_provider(config: ToastConfig) -> Toasts {
    let queue = use_signal(|| ToastQueue::new(config.max_visible));
    use_context_provider(|| Toasts {
        queue,
        duration_ms: config.duration_ms,
    })
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

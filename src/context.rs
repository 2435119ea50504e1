//! Application Context
//!
//! Toast notifications shared via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen.
const TOAST_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide toast signals provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    /// Currently visible toasts - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Currently visible toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    /// Next toast id - read
    next_id: ReadSignal<u32>,
    /// Next toast id - write
    set_next_id: WriteSignal<u32>,
}

impl ToastContext {
    pub fn new(
        toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>),
        next_id: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            toasts: toasts.0,
            set_toasts: toasts.1,
            next_id: next_id.0,
            set_next_id: next_id.1,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| list.retain(|toast| toast.id != id));
    }

    /// Show a toast and schedule its auto-dismissal.
    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.set_next_id.update(|next| *next += 1);
        self.set_toasts.update(|list| list.push(Toast { id, kind, message }));

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toasts.update(|list| list.retain(|toast| toast.id != id));
        });
    }
}

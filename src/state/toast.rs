//! Transient notification queue.
//!
//! A toast lives [`TOAST_DURATION_MS`], then spends [`TOAST_HIDE_MS`] in its
//! hiding phase (CSS exit animation) before it is removed. Closing by hand
//! jumps straight to the hiding phase.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const TOAST_DURATION_MS: u32 = 4000;
pub const TOAST_HIDE_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Warning => "toast-warning",
            Self::Info => "toast-info",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "\u{2714}",
            Self::Error => "\u{2716}",
            Self::Warning => "\u{26A0}",
            Self::Info => "\u{2139}",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub hiding: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into(), hiding: false });
        id
    }

    /// Enter the hiding phase. Returns `false` when the toast is gone or already hiding.
    pub fn begin_hide(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if !toast.hiding => {
                toast.hiding = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

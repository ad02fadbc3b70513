//! Props passed to a loaded toast component.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Callback invoked when the toast is dismissed.
pub type CloseCallback = Arc<dyn Fn() + Send + Sync>;

/// Default time a toast stays on screen.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

/// The fixed prop set a host hands to a remote toast:
/// `{message, type, isVisible, duration, onClose}`.
#[derive(Clone)]
pub struct ToastProps {
    pub message: String,
    pub kind: ToastKind,
    pub is_visible: bool,
    pub duration: Duration,
    pub on_close: Option<CloseCallback>,
}

impl ToastProps {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            is_visible: true,
            duration: DEFAULT_TOAST_DURATION,
            on_close: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_on_close<F>(mut self, on_close: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Some(Arc::new(on_close));
        self
    }

    /// Run the close callback, if any.
    pub fn close(&self) {
        if let Some(on_close) = &self.on_close {
            on_close();
        }
    }
}

impl fmt::Debug for ToastProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastProps")
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("is_visible", &self.is_visible)
            .field("duration", &self.duration)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

//! Terminal presentational shell.
//!
//! - `toast.rs` - Error / loading / loaded views for a `LoadState`
//! - `app.rs` - Host screen and event loop for `remote-toast show`
//! - `events.rs` - Terminal event reader
//! - `terminal_guard.rs` - Raw mode setup and restore
//! - `theme.rs` - Colors

pub mod app;
pub mod events;
pub mod terminal_guard;
pub mod theme;
pub mod toast;

pub use app::ToastApp;
pub use toast::{render_remote_toast, ToastOptions, ToastView};

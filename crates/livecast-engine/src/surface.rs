//! Host-facing collaborator seams.

/// Receives human-readable status text for display on the live view.
pub trait StatusSink: Send + Sync {
    /// Display `text`. Fire and forget.
    fn show_status(&self, text: &str);
}

/// Surfaces unrecoverable failures to the user.
pub trait Notifier: Send + Sync {
    /// Show a warning dialog with `title` and `message`.
    fn warn(&self, title: &str, message: &str);
}

/// Fixed indicator shown while the broadcast is on air.
pub const ON_AIR_STATUS_TEXT: &str = "● LIVE   ";

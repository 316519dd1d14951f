//! Formatting utilities used for CLI outputs.

use crate::models::status_kind::StatusKind;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Coloured status dot followed by the status label, as shown on the board
/// and in the per-client detail view.
pub fn status_dot(status: StatusKind) -> String {
    format!("{} {}", status.colour().paint("●"), status.as_str())
}

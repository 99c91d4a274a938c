//! Loading indicator shown while the single request is outstanding.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner that ticks on its own thread until dropped or finished.
pub fn analyzing_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("  {spinner:.magenta} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"]);
    pb.set_style(style);
    pb.set_message("Analyzing feedback...");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

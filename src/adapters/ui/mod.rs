pub mod banner;
pub mod card;
pub mod progress;
pub mod tui;

/// Prints the welcome banner and applies the theme for all subsequent inquire prompts.
/// Call once at startup (e.g. in main after tracing init), interactive mode only.
pub fn init_ui(provider: &str) {
    banner::print_welcome(provider);
    tui::apply_theme();
}

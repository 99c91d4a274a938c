//! Implements InputPort. Inquire-based interactive prompts, or a single pass over piped stdin.

use crate::adapters::ui::banner::{INDIGO, print_footer};
use crate::adapters::ui::card::{render_card, render_error};
use crate::adapters::ui::progress::analyzing_spinner;
use crate::domain::{DomainError, Session, View};
use crate::ports::InputPort;
use crate::usecases::AnalysisService;
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::Select;
use std::io::{BufRead, IsTerminal, Write};
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::debug;

const PLACEHOLDER: &str = "Paste customer feedback here... (e.g., 'The product quality is great, \
     but the shipping took way too long and customer service was unresponsive.')";

/// A line holding only this ends the feedback entry.
const END_OF_ENTRY: &str = ".";

const ANALYZE_ANOTHER: &str = "Analyze Another";
const QUIT: &str = "Quit";

/// Applies the indigo theme to all inquire prompts.
pub fn apply_theme() {
    let accent = Color::Rgb {
        r: INDIGO.0,
        g: INDIGO.1,
        b: INDIGO.2,
    };
    let mut cfg = RenderConfig::default_colored();
    cfg.prompt_prefix = Styled::new("›").with_fg(accent);
    cfg.answered_prompt_prefix = Styled::new("✔").with_fg(Color::LightGreen);
    cfg.highlighted_option_prefix = Styled::new("➤").with_fg(accent);
    cfg.placeholder = StyleSheet::new().with_fg(Color::DarkGrey);
    cfg.help_message = StyleSheet::new().with_fg(Color::DarkGrey);
    inquire::set_global_render_config(cfg);
}

/// Map inquire errors. Esc / Ctrl-C mean "quit", everything else is a UI failure.
fn prompt_result<T>(res: Result<Option<T>, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(v),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// Collect multi-line feedback until a line with only `.` or end of input (Ctrl-D).
///
/// Pasted text keeps its line breaks and blank lines. Returns `None` when input
/// ends before anything was entered, which means "quit".
pub fn read_feedback<R: BufRead>(reader: R) -> std::io::Result<Option<String>> {
    let mut lines = Vec::new();
    let mut terminated = false;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim_end() == END_OF_ENTRY {
            terminated = true;
            break;
        }
        lines.push(line.to_string());
    }
    if lines.is_empty() && !terminated {
        return Ok(None);
    }
    Ok(Some(lines.join("\n")))
}

/// TUI adapter.
pub struct TuiInputPort {
    service: Arc<AnalysisService>,
    interactive: bool,
}

impl TuiInputPort {
    /// `interactive = false` reads all of stdin once and prints a single card.
    pub fn new(service: Arc<AnalysisService>, interactive: bool) -> Self {
        Self {
            service,
            interactive,
        }
    }

    /// One request with the spinner visible while loading.
    async fn analyze_with_spinner(&self, session: &mut Session) {
        let spinner = analyzing_spinner();
        let res = self.service.analyze(session).await;
        spinner.finish_and_clear();
        if let Err(e) = res {
            debug!(error = %e, "analysis ended with error");
        }
    }

    async fn run_interactive(&self) -> Result<(), DomainError> {
        let mut session = Session::new();

        loop {
            match session.view() {
                View::Loading => {
                    // Only reachable if a previous request never finished.
                    return Err(DomainError::Busy);
                }
                View::Result(result) => {
                    print!("{}", render_card(result, true));
                    let choice = prompt_result(
                        Select::new("What next?", vec![ANALYZE_ANOTHER, QUIT]).prompt_skippable(),
                    )?;
                    match choice {
                        Some(ANALYZE_ANOTHER) => session.reset(),
                        _ => break,
                    }
                }
                View::Form { input, error } => {
                    if let Some(msg) = error {
                        print!("{}", render_error(msg, true));
                    }
                    let previous = input.to_string();
                    println!("{}", "Customer Feedback".bold());
                    if previous.trim().is_empty() {
                        println!("  {}", PLACEHOLDER.dark_grey());
                    } else {
                        println!("  {}", previous.as_str().dark_grey());
                        println!(
                            "  {}",
                            "(finish with an empty entry to resubmit the text above)".dark_grey()
                        );
                    }
                    println!(
                        "  {}",
                        "End with a line containing only '.' · Ctrl-D on an empty entry to quit"
                            .dark_grey()
                    );
                    let _ = std::io::stdout().flush();

                    let text = read_feedback(std::io::stdin().lock())
                        .map_err(|e| DomainError::Ui(format!("Failed to read input: {}", e)))?;
                    let Some(text) = text else { break };
                    let text = if text.trim().is_empty() && !previous.trim().is_empty() {
                        previous
                    } else {
                        text
                    };

                    session.set_input(text);
                    println!(
                        "  {}",
                        format!("{} characters", session.char_count()).dark_grey()
                    );

                    if !session.can_submit() {
                        // Sets the validation message; no request is made.
                        let _ = session.begin();
                        continue;
                    }
                    self.analyze_with_spinner(&mut session).await;
                }
            }
        }

        print_footer();
        Ok(())
    }

    async fn run_piped(&self) -> Result<(), DomainError> {
        let mut input = String::new();
        tokio::io::stdin()
            .read_to_string(&mut input)
            .await
            .map_err(|e| DomainError::Ui(format!("Failed to read stdin: {}", e)))?;

        let mut session = Session::new();
        session.set_input(input);
        let res = self.service.analyze(&mut session).await;

        match session.view() {
            View::Result(result) => {
                print!("{}", render_card(result, std::io::stdout().is_terminal()))
            }
            View::Form {
                error: Some(msg), ..
            } => eprint!("{}", render_error(msg, std::io::stderr().is_terminal())),
            _ => {}
        }
        res
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        if self.interactive {
            self.run_interactive().await
        } else {
            self.run_piped().await
        }
    }
}

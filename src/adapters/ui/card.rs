//! Result card and error box. Pure string rendering so it can be tested without a terminal.
//!
//! With `styled = false` no escape sequences are emitted (redirected output).

use crate::adapters::ui::banner::INDIGO;
use crate::domain::{Sentiment, SentimentAnalysis};
use crossterm::style::{Color, StyledContent, Stylize};
use std::fmt::Display;

/// Inner text width of the card.
const WIDTH: usize = 62;

/// Amber 500 (#f59e0b).
const AMBER: Color = Color::Rgb {
    r: 0xf5,
    g: 0x9e,
    b: 0x0b,
};

fn indigo() -> Color {
    Color::Rgb {
        r: INDIGO.0,
        g: INDIGO.1,
        b: INDIGO.2,
    }
}

fn paint<D: Display>(content: StyledContent<D>, styled: bool) -> String {
    if styled {
        content.to_string()
    } else {
        content.content().to_string()
    }
}

fn badge(sentiment: Sentiment) -> StyledContent<String> {
    match sentiment {
        Sentiment::Positive => format!(" ✔ {} ", sentiment).black().on_green().bold(),
        Sentiment::Negative => format!(" ! {} ", sentiment).white().on_red().bold(),
        Sentiment::Neutral => format!(" – {} ", sentiment).black().on_grey().bold(),
    }
}

/// Greedy word wrap to `width` characters.
///
/// Each `\n`-separated line is wrapped on its own; blank lines and inner runs of
/// spaces are kept. Only the spaces at a break point are dropped. Words longer
/// than `width` get their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let raw = raw.trim_end_matches('\r');
        if raw.chars().count() <= width {
            lines.push(raw.to_string());
            continue;
        }
        let mut current = String::new();
        for word in raw.split_inclusive(' ') {
            let needed = current.chars().count() + word.trim_end().chars().count();
            if needed > width && !current.trim().is_empty() {
                lines.push(current.trim_end().to_string());
                current.clear();
            }
            current.push_str(word);
        }
        if !current.trim().is_empty() {
            lines.push(current.trim_end().to_string());
        }
    }
    lines
}

fn rule() -> String {
    "─".repeat(WIDTH + 4)
}

struct Section<'a> {
    label: &'a str,
    color: Color,
    body: &'a str,
    dim: bool,
    italic: bool,
}

fn section(out: &mut String, s: Section<'_>, styled: bool) {
    out.push_str(&format!("  {}\n", paint(s.label.with(s.color).bold(), styled)));
    for line in wrap(s.body, WIDTH) {
        let text = if s.dim {
            line.dark_grey()
        } else if s.italic {
            line.italic()
        } else {
            line.bold()
        };
        out.push_str(&format!(
            "  {} {}\n",
            paint("│".with(s.color), styled),
            paint(text, styled)
        ));
    }
}

/// Render the analysis as a card. Field values appear verbatim.
pub fn render_card(result: &SentimentAnalysis, styled: bool) -> String {
    let mut out = String::new();
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!(
        "  {}{}{}\n",
        paint("Analysis Results".bold(), styled),
        " ".repeat(WIDTH.saturating_sub(16 + result.sentiment.as_str().len() + 4)),
        paint(badge(result.sentiment), styled)
    ));
    out.push_str(&format!(
        "  {}\n",
        paint("Insights extracted from customer feedback".dark_grey(), styled)
    ));
    out.push_str(&rule());
    out.push_str("\n\n");

    section(
        &mut out,
        Section {
            label: "▲ KEY PAIN POINT",
            color: AMBER,
            body: &result.pain_point,
            dim: !result.has_pain_point(),
            italic: false,
        },
        styled,
    );
    out.push('\n');
    let quote = format!("\"{}\"", result.positive_quote);
    section(
        &mut out,
        Section {
            label: "❝ TOP POSITIVE HIGHLIGHT",
            color: indigo(),
            body: &quote,
            dim: !result.has_positive_quote(),
            italic: true,
        },
        styled,
    );
    out.push('\n');
    out.push_str(&rule());
    out.push('\n');
    out
}

/// Red error box for the form.
pub fn render_error(message: &str, styled: bool) -> String {
    format!(
        "  {} {}\n",
        paint("✖".red().bold(), styled),
        paint(message.red(), styled)
    )
}

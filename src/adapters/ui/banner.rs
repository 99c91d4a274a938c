//! Header banner with an indigo → violet gradient (SentimentAI).

use chrono::Datelike;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor, Stylize};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

pub const APP_NAME: &str = "SentimentAI";

/// Indigo 600 (#4f46e5).
pub const INDIGO: (u8, u8, u8) = (0x4f, 0x46, 0xe5);
/// Violet 600 (#7c3aed).
pub const VIOLET: (u8, u8, u8) = (0x7c, 0x3a, 0xed);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

/// "SentimentAI" in figlet's standard font, or the plain name if the font fails to load.
fn title_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(APP_NAME).map(|fig| fig.to_string()))
        .unwrap_or_else(|| APP_NAME.to_string())
}

/// Prints the banner, the provider line and the headline.
pub fn print_welcome(provider: &str) {
    let mut out = stdout();
    let art = title_art();
    let lines: Vec<&str> = art.lines().filter(|l| !l.trim().is_empty()).collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let _ = out.execute(SetForegroundColor(rgb(lerp_rgb(INDIGO, VIOLET, t))));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let _ = out.execute(Print(
        format!(
            "v{} · Powered by Gemini 2.5 · provider: {}\r\n\r\n",
            env!("CARGO_PKG_VERSION"),
            provider
        )
        .dark_grey(),
    ));
    let _ = out.execute(Print("Turn Customer Feedback into ".bold()));
    let _ = out.execute(Print("Actionable Insights\r\n".with(rgb(VIOLET)).bold()));
    let _ = out.execute(Print(
        "Paste your reviews, emails, or survey responses below. We will identify the\r\n\
         sentiment, pinpoint the main problem, and highlight what's working.\r\n\r\n"
            .grey(),
    ));
    let _ = out.flush();
}

/// Footer line, printed on exit.
pub fn footer(year: i32) -> String {
    format!("© {} {}. Built with Gemini 2.5 Flash.", year, APP_NAME)
}

pub fn print_footer() {
    println!("\n{}", footer(chrono::Local::now().year()).dark_grey());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(INDIGO, VIOLET, 0.0), INDIGO);
        assert_eq!(lerp_rgb(INDIGO, VIOLET, 1.0), VIOLET);
    }

    #[test]
    fn test_footer() {
        assert_eq!(
            footer(2026),
            "© 2026 SentimentAI. Built with Gemini 2.5 Flash."
        );
    }

    #[test]
    fn test_title_art_not_empty() {
        assert!(!title_art().trim().is_empty());
    }
}

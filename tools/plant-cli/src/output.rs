//! Output formatting for the CLI, and the terminal side of the view ports.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use plant_views::{BusySignal, Navigator, Notifier, LOGIN_PATH};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(spinner_style);
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Notices from the controllers, printed as CLI messages.
pub struct ConsoleNotifier {
    output: Output,
}

impl ConsoleNotifier {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        self.output.success(message);
    }

    fn error(&self, message: &str) {
        self.output.error(message);
    }
}

/// Shows a spinner while a controller has a request in flight.
pub struct SpinnerBusy {
    output: Output,
    message: String,
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerBusy {
    pub fn new(output: Output, message: impl Into<String>) -> Self {
        Self {
            output,
            message: message.into(),
            bar: Mutex::new(None),
        }
    }
}

impl BusySignal for SpinnerBusy {
    fn set_busy(&self, busy: bool) {
        let mut bar = self.bar.lock().unwrap_or_else(|p| p.into_inner());
        if busy {
            if bar.is_none() {
                *bar = Some(self.output.spinner(&self.message));
            }
        } else if let Some(spinner) = bar.take() {
            spinner.finish_and_clear();
        }
    }
}

/// The terminal has no routes; a redirect to the login page becomes a hint.
pub struct LoginHint {
    output: Output,
}

impl LoginHint {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Navigator for LoginHint {
    fn navigate(&self, path: &str) {
        if path == LOGIN_PATH {
            self.output.info("Run `plant login <EMAIL>` to sign in.");
        } else {
            self.output.debug(&format!("navigate to {path}"));
        }
    }
}

/// Format a Unix timestamp for display.
pub fn format_timestamp(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Five-star rendering of a rating, e.g. `★★★★☆ 4.5`.
pub fn rating_stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {rating:.1}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Cut `text` to `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

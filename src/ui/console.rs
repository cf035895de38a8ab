use std::cell::RefCell;
use std::io::IsTerminal;
use std::time::Duration;

use colored::{Color, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

use super::Reporter;
use super::frame;
use crate::commands::Summary;
use crate::preset::Preset;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"];

/// Terminal reporter: a spinner per step, a header and a framed summary.
/// Without animation each finished step is printed as a single line.
pub struct ConsoleReporter {
    animate: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleReporter {
    /// Spinners need `progress` on and a terminal on stderr, where indicatif
    /// draws; otherwise they would be hidden and the steps lost.
    pub fn new(progress: bool) -> Self {
        ConsoleReporter {
            animate: should_animate(progress, std::io::stderr().is_terminal()),
            spinner: RefCell::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .tick_strings(TICKS)
            .template("  {spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Reporter for ConsoleReporter {
    fn begin(&self, preset: &Preset) {
        println!();
        println!("  {} {}", preset.icon, preset.prefix.bold());
        println!("  {}", "─────────────────────────".dimmed());
        println!();
    }

    fn step_started(&self, label: &str) {
        if !self.animate {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(format!("{label}..."));
        spinner.enable_steady_tick(Duration::from_millis(80));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn step_succeeded(&self, label: &str) {
        match self.spinner.borrow_mut().take() {
            Some(spinner) => spinner.finish_with_message(label.to_string()),
            None => println!("  {} {label}", "✔".green()),
        }
    }

    fn step_failed(&self, label: &str) {
        match self.spinner.borrow_mut().take() {
            Some(spinner) => spinner.abandon_with_message(format!("{} {label}", "✗".red())),
            None => eprintln!("  {} {label}", "✗".red()),
        }
    }

    fn success(&self, summary: &Summary) {
        let preset = summary.preset;
        let mut lines = vec![
            format!("{} {}", "✓".green(), preset.success.bold()),
            String::new(),
            labelled("Branch:  ", &summary.branch),
            labelled("Message: ", &summary.message),
        ];

        if let Some(url) = &summary.remote_url {
            lines.push(labelled("Remote:  ", url));
        }
        if !summary.pushed {
            lines.push("Not pushed (--no-push)".yellow().to_string());
        }

        println!();
        println!("{}", frame::render(&lines, Color::Green));
    }

    fn info(&self, title: &str, detail: &str) {
        let lines = [
            format!("{} {}", "ℹ".cyan(), title.bold()),
            String::new(),
            detail.dimmed().to_string(),
        ];

        println!();
        println!("{}", frame::render(&lines, Color::Cyan));
    }
}

fn should_animate(progress: bool, stderr_is_terminal: bool) -> bool {
    progress && stderr_is_terminal
}

fn labelled(label: &str, value: &str) -> String {
    format!("{}{value}", label.dimmed())
}

pub mod console;
pub mod frame;

use crate::commands::Summary;
use crate::preset::Preset;
use std::io::IsTerminal;

/// Everything the commit flows say to the user goes through here, so the
/// flows never touch the terminal directly.
pub trait Reporter {
    fn begin(&self, preset: &Preset);
    fn step_started(&self, label: &str);
    fn step_succeeded(&self, label: &str);
    fn step_failed(&self, label: &str);
    fn success(&self, summary: &Summary);
    fn info(&self, title: &str, detail: &str);
}

/// Respects NO_COLOR (https://no-color.org/) and TTY detection.
pub fn colors_enabled() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    std::io::stdout().is_terminal()
}

pub fn setup_colors() {
    if !colors_enabled() {
        colored::control::set_override(false);
    }
}

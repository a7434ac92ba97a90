//! Progress reporting for scaffolding runs.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Status sink for the orchestrator. Implementations decide how progress
/// is shown; the orchestrator itself never prints.
pub trait Reporter {
    /// Replace the current status line.
    fn update(&self, message: &str);
    /// Finish the run successfully.
    fn succeed(&self, message: &str);
    /// Finish the run with an error.
    fn fail(&self, message: &str);
    /// Print an informational line without disturbing the status.
    fn info(&self, message: &str);
    /// Print a warning line without disturbing the status.
    fn warn(&self, message: &str);
}

/// Console reporter: an `indicatif` spinner for the active step plus
/// colored lines for everything else.
pub struct ConsoleReporter {
    spinner: ProgressBar,
}

impl ConsoleReporter {
    pub fn new(initial: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(initial.to_string());
        ConsoleReporter { spinner }
    }
}

impl Reporter for ConsoleReporter {
    fn update(&self, message: &str) {
        self.spinner.set_message(message.to_string());
    }

    fn succeed(&self, message: &str) {
        self.spinner.finish_and_clear();
        println!("{} {}", "✓".green(), message.green());
    }

    fn fail(&self, message: &str) {
        self.spinner.finish_and_clear();
        eprintln!("{} {}", "✗".red(), message.red());
    }

    fn info(&self, message: &str) {
        self.spinner.println(format!("{} {}", "->".blue(), message));
    }

    fn warn(&self, message: &str) {
        self.spinner
            .println(format!("{} {}", "!".yellow(), message.yellow()));
    }
}

/// No-op reporter for tests and library embedding.
#[allow(dead_code)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn update(&self, _message: &str) {}
    fn succeed(&self, _message: &str) {}
    fn fail(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

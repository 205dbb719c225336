use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(100);

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so stdout stays clean for report and diff output.
/// Tasks show an indicatif spinner; in plain mode (CI) they are printed as
/// ordinary lines and nothing is colored.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
    plain: bool,
}

impl StderrProgressReporter {
    pub fn new(plain: bool) -> Self {
        Self {
            spinner: RefCell::new(None),
            plain,
        }
    }

    fn finish_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }

    fn start_task(&self, message: &str) {
        self.finish_spinner();
        if self.plain {
            eprintln!("{}", message);
            return;
        }

        let spinner = ProgressBar::new_spinner();
        // The template is a literal; fall back to the default style if it is ever rejected
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(SPINNER_TICK);
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn report_warning(&self, message: &str) {
        self.finish_spinner();
        if self.plain {
            eprintln!("{}", message);
        } else {
            eprintln!("{}", message.yellow());
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        if self.plain {
            eprintln!("{}", message);
        } else {
            eprintln!("{}", message.green());
        }
    }
}

impl Drop for StderrProgressReporter {
    fn drop(&mut self) {
        self.finish_spinner();
    }
}

use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing to stderr so
/// it never interferes with a template written to stdout. Debug messages
/// are dropped unless the reporter is verbose.
pub struct StderrProgressReporter {
    verbose: bool,
}

impl StderrProgressReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_debug(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message.dimmed());
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message.yellow());
    }

    fn report_completion(&self, message: &str) {
        eprintln!("{}", message.green());
    }
}

//! Progress spinner for CLI operations.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::time::Duration;

/// Spinner shown while an operation runs in a terminal.
///
/// Cleans itself up on drop so diagnostics and results print on a clean
/// line.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Starts a spinner with the given message.
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Checks if progress should be shown (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cleans_up_on_drop() {
        let progress = CliProgress::spinner("Working");
        drop(progress);
        // Nothing to assert beyond not panicking; the bar is cleared.
    }
}

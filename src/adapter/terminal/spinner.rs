//! Spinner Status Reporter
//!
//! StatusReporterの実装（indicatif のスピナー）

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

use crate::application::ports::StatusReporter;

/// スピナーで進捗を表示する
///
/// `start` のたびに前のスピナーを置き換える。確定時は記号付きの1行を残す
#[derive(Default)]
pub struct SpinnerReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// 表示中のスピナーを止めて1行を確定させる
    fn finish(&self, line: String) {
        let spinner = self
            .spinner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        match spinner {
            Some(spinner) => spinner.finish_with_message(line),
            None => eprintln!("{}", line),
        }
    }
}

impl StatusReporter for SpinnerReporter {
    fn start(&self, text: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(text.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));

        let previous = self
            .spinner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .replace(spinner);
        if let Some(previous) = previous {
            previous.finish_and_clear();
        }
    }

    fn succeed(&self, text: &str) {
        self.finish(format!("{} {}", style("✔").green(), text));
    }

    fn fail(&self, text: &str) {
        self.finish(format!("{} {}", style("✖").red(), text));
    }

    fn warn(&self, text: &str) {
        self.finish(format!("{} {}", style("⚠").yellow(), text));
    }

    fn clear(&self) {
        let _ = Term::stderr().clear_screen();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_then_succeed_releases_spinner() {
        let reporter = SpinnerReporter::new();
        reporter.start("Building");
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.succeed("Built");
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_start_replaces_previous_spinner() {
        let reporter = SpinnerReporter::new();
        reporter.start("one");
        reporter.start("two");

        let guard = reporter.spinner.lock().unwrap();
        assert_eq!(guard.as_ref().unwrap().message(), "two");
    }

    #[test]
    fn test_finish_without_spinner() {
        let reporter = SpinnerReporter::new();
        reporter.warn("No active games found");
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::core::constants::display;
use crate::core::types::ValidationResult;
use crate::reporting::ProgressObserver;

/// Live progress on stdout: one line, redrawn per completed URL.
pub struct ProgressReporter {
    url_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            url_progress: None,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn start_url_validation(&mut self, total_urls: usize) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::with_draw_target(Some(total_urls as u64), ProgressDrawTarget::stdout());
        pb.set_style(
            ProgressStyle::with_template("[{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        self.url_progress = Some(pb);
    }

    pub fn finish_url_validation(&self, success_count: usize, total_count: usize) {
        if let Some(ref pb) = self.url_progress {
            let message = if success_count == total_count {
                format!("{} All URLs validated successfully", display::SUCCESS_EMOJI)
            } else {
                format!("Validation complete ({success_count}/{total_count} successful)")
            };
            pb.finish_with_message(message);
        }
    }

    /// Create a simple spinner for indeterminate progress
    pub fn create_spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }

        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(120));
        Some(pb)
    }
}

impl ProgressObserver for ProgressReporter {
    fn on_result(&mut self, result: &ValidationResult, current: usize, _total: usize) {
        if let Some(ref pb) = self.url_progress {
            let status = if result.success {
                display::SUCCESS_EMOJI
            } else {
                display::ERROR_EMOJI
            };
            pb.set_message(format!("{status} {}", progress_label(&result.url)));
            pb.set_position(current as u64);
        }
    }
}

/// The URL as shown on the progress line, cut to a fixed width.
pub fn progress_label(url: &str) -> String {
    url.chars().take(display::PROGRESS_URL_WIDTH).collect()
}

//! Progress display for the anchor search

use crate::algorithm::assembly::AnchorAttempt;
use crate::io::configuration::PROGRESS_TEMPLATE;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over anchor attempts
///
/// The bar length is learned from the first attempt reported, so callers
/// do not need to know the anchor count up front.
pub struct SearchProgress {
    bar: ProgressBar,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create a progress bar drawn to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a progress bar that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show which stage of the solve is running
    pub fn stage(&self, message: &'static str) {
        self.bar.set_message(message);
    }

    /// Record an anchor attempt
    pub fn record(&self, attempt: &AnchorAttempt) {
        self.bar.set_length(attempt.total as u64);
        self.bar.set_position(attempt.number as u64);
        self.bar
            .set_message(format!("anchor {} {}", attempt.tile, attempt.orientation));
    }

    /// Current position (attempts recorded so far)
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

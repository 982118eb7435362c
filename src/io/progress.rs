//! Terminal progress for the solve and randomize stages

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SOLVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static PASS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} passes"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress line drawn on stderr
///
/// Solving is shown as a spinner, randomization as a bar over passes.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress display
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::new_spinner(),
        }
    }

    /// Show that the tile search is running
    pub fn start_solving(&self, side: usize, colors: usize) {
        self.bar.set_style(SOLVE_STYLE.clone());
        self.bar
            .set_message(format!("Solving {side}x{side} tile with {colors} colors"));
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    /// Switch to the pass bar for a `side x side` grid
    pub fn start_randomizing(&self, side: usize, passes: usize) {
        self.bar.disable_steady_tick();
        self.bar.set_style(PASS_STYLE.clone());
        self.bar.set_length(passes as u64);
        self.bar.set_position(0);
        self.bar.set_message(format!("Randomizing {side}x{side}"));
    }

    /// Record a finished pass
    pub fn complete_pass(&self) {
        self.bar.inc(1);
    }

    /// Passes recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the progress line
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

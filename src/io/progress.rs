//! Tick progress display for simulation runs

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static TICK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} ticks {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking ticks of one simulation run
///
/// A hidden bar is used when progress output is disabled, so callers can
/// report unconditionally.
pub struct TickProgress {
    bar: ProgressBar,
}

impl TickProgress {
    /// Create a bar for a run of at most `max_ticks` ticks
    pub fn new(name: &str, max_ticks: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(max_ticks as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(TICK_STYLE.clone());
        bar.set_prefix(name.to_string());
        Self { bar }
    }

    /// Report the tick just completed and the bombs still armed
    pub fn update(&self, tick: usize, armed_bombs: usize) {
        self.bar.set_position(tick as u64);
        self.bar.set_message(format!("{armed_bombs} armed"));
    }

    /// Finish the bar, leaving a summary line
    pub fn finish(&self, ticks: usize) {
        self.bar.set_position(ticks as u64);
        self.bar.finish_with_message("done");
    }

    /// Whether anything is drawn to the terminal
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}

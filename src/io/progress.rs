//! Progress display for document loading and per-document cloud rendering

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MIN_ITEMS};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks progress through one stage of a run
///
/// Stages with fewer than [`PROGRESS_MIN_ITEMS`] items, or a disabled
/// tracker, draw nothing.
pub struct StageProgress {
    bar: ProgressBar,
}

impl StageProgress {
    /// Start a stage over `items` units of work
    pub fn start(stage: &str, items: usize, enabled: bool) -> Self {
        let bar = ProgressBar::new(items as u64);
        if enabled && items >= PROGRESS_MIN_ITEMS {
            bar.set_style(STAGE_STYLE.clone());
            bar.set_prefix(stage.to_string());
        } else {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        Self { bar }
    }

    /// Mark one item as done
    pub fn advance(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
        self.bar.inc(1);
    }

    /// Number of items completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

//! Terminal progress for multi-image analysis and batch stylization

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a list of image files
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Bar labelled `label` expecting `file_count` files
    pub fn new(label: &str, file_count: usize) -> Self {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(FILE_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Show which file is being worked on
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count one file as done
    pub fn complete_file(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

//! Per-file stage display for batch runs, falling back to a single counter for large batches

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

/// Processing steps reported for each file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Reading the CSV input
    Loading,
    /// Detecting missing data patterns
    Detecting,
    /// Writing plot and summary outputs
    Rendering,
    /// All outputs written
    Done,
}

impl Stage {
    /// Number of steps before a file is done
    pub const COUNT: usize = 3;

    /// Position of the stage in the processing order
    pub const fn index(self) -> usize {
        match self {
            Self::Loading => 0,
            Self::Detecting => 1,
            Self::Rendering => 2,
            Self::Done => 3,
        }
    }

    /// Short description shown next to the progress bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Detecting => "detecting",
            Self::Rendering => "rendering",
            Self::Done => "done",
        }
    }
}

#[derive(Debug, Clone)]
struct FileSlot {
    name: String,
    stage: Stage,
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>9} [{bar:12.green/white}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] CSV files: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Stage bars for the most recent files plus a batch counter for large runs
///
/// Only the last few started files get a visible bar. Once more files are
/// queued than bars are available, a batch counter is added on top.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    stage_bars: Vec<ProgressBar>,
    slots: BTreeMap<usize, FileSlot>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            stage_bars: Vec::new(),
            slots: BTreeMap::new(),
        }
    }

    /// Create the bars for a run over `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let bar = ProgressBar::new(file_count as u64).with_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(bar));
        }

        self.stage_bars = (0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS))
            .map(|_| {
                let bar = ProgressBar::new(Stage::COUNT as u64).with_style(STAGE_STYLE.clone());
                self.multi_progress.add(bar)
            })
            .collect();
    }

    /// Register a file and show it at the loading stage
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.slots.insert(
            index,
            FileSlot {
                name,
                stage: Stage::Loading,
            },
        );
        self.refresh();
    }

    /// Report the current processing stage of a started file
    pub fn update_stage(&mut self, index: usize, stage: Stage) {
        if let Some(slot) = self.slots.get_mut(&index) {
            slot.stage = stage;
        }
        self.refresh();
    }

    /// Mark a file as done and advance the batch counter
    pub fn complete_file(&mut self, index: usize) {
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
        self.update_stage(index, Stage::Done);
    }

    /// Current stage of a file, if it has been started
    pub fn stage(&self, index: usize) -> Option<Stage> {
        self.slots.get(&index).map(|slot| slot.stage)
    }

    /// Remove all bars from the terminal
    pub fn finish(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.finish_with_message("all files processed");
        }
        if let Err(error) = self.multi_progress.clear() {
            tracing::debug!(%error, "could not clear progress bars");
        }
    }

    // Shows the most recently started files, oldest first
    fn refresh(&self) {
        let skip = self.slots.len().saturating_sub(self.stage_bars.len());
        let mut visible = self.slots.values().skip(skip);

        for bar in &self.stage_bars {
            match visible.next() {
                Some(slot) => {
                    let prefix = if slot.stage == Stage::Done {
                        format!("✓ {}", slot.name)
                    } else {
                        slot.name.clone()
                    };
                    bar.set_position(slot.stage.index() as u64);
                    bar.set_message(slot.stage.label());
                    bar.set_prefix(prefix);
                }
                None => {
                    bar.set_position(0);
                    bar.set_message("");
                    bar.set_prefix("");
                }
            }
        }
    }
}

use std::num::NonZeroU64;

/// Default number of search steps between progress notifications.
pub const DEFAULT_PROGRESS_THRESHOLD: NonZeroU64 = NonZeroU64::new(10).unwrap();

/// Default maximum number of assignments reported per run.
pub const DEFAULT_MAX_OUTPUT: NonZeroU64 = NonZeroU64::new(200).unwrap();

/// Tuning knobs of a search, fixed for the lifetime of a searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of search steps between progress notifications.
    pub progress_threshold: NonZeroU64,
    /// Maximum number of complete assignments reported before the search stops.
    pub max_output: NonZeroU64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            progress_threshold: DEFAULT_PROGRESS_THRESHOLD,
            max_output: DEFAULT_MAX_OUTPUT,
        }
    }
}

impl SearchConfig {
    /// Creates a configuration.
    #[must_use]
    pub const fn new(progress_threshold: NonZeroU64, max_output: NonZeroU64) -> Self {
        Self {
            progress_threshold,
            max_output,
        }
    }

    /// Returns a copy with a different progress threshold.
    #[must_use]
    pub const fn with_progress_threshold(mut self, progress_threshold: NonZeroU64) -> Self {
        self.progress_threshold = progress_threshold;
        self
    }

    /// Returns a copy with a different output cap.
    #[must_use]
    pub const fn with_max_output(mut self, max_output: NonZeroU64) -> Self {
        self.max_output = max_output;
        self
    }
}

use mnemonic_solver::{SearchError, SearchStats};

/// Terminal status of one `process` call.
///
/// Exactly one completion is delivered per call, whatever ended the run.
///
/// - `success` is `true` if at least one assignment was found, even when the
///   run was later cancelled or failed.
/// - `cancelled` is `true` if cancellation was requested before the run
///   ended, regardless of `success` or `capped`.
/// - `capped` is `true` if the output cap stopped the search, meaning more
///   assignments may exist. Exhaustion and the cap share the same
///   `success`/`cancelled` signature; only this flag tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// At least one complete assignment was found.
    pub success: bool,
    /// Description of the failure, if the run failed.
    pub error_message: Option<String>,
    /// Cancellation was requested before the run ended.
    pub cancelled: bool,
    /// The output cap stopped the search early.
    pub capped: bool,
}

/// How a completion should be presented, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// The run failed with an error message.
    Error,
    /// At least one assignment was written.
    Success,
    /// The run was cancelled before finding anything.
    Cancelled,
    /// The search finished without finding any assignment.
    NoAssignment,
}

impl Completion {
    pub(crate) fn from_stats(stats: &SearchStats, cancelled: bool) -> Self {
        Self {
            success: stats.has_solution(),
            error_message: None,
            cancelled: cancelled || stats.cancelled(),
            capped: stats.capped(),
        }
    }

    pub(crate) fn failed(message: impl Into<String>, cancelled: bool) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
            cancelled,
            capped: false,
        }
    }

    pub(crate) fn from_error(err: &SearchError, cancelled: bool) -> Self {
        Self {
            success: err.found() > 0,
            ..Self::failed(err.to_string(), cancelled)
        }
    }

    /// Classifies the completion; an error wins over success, which wins
    /// over cancellation.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.error_message.as_deref().is_some_and(|m| !m.is_empty()) {
            Outcome::Error
        } else if self.success {
            Outcome::Success
        } else if self.cancelled {
            Outcome::Cancelled
        } else {
            Outcome::NoAssignment
        }
    }
}

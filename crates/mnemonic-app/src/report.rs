//! Terminal rendering of run progress and completion.

use std::{
    path::Path,
    time::{Duration, Instant},
};

use mnemonic_solver::ProgressEvent;

use crate::{Completion, Outcome};

/// Minimum delay between two progress lines.
pub(crate) const PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

/// Drops progress events arriving faster than the display can follow.
#[derive(Debug)]
pub(crate) struct ProgressThrottle {
    interval: Duration,
    last_shown: Option<Instant>,
}

impl ProgressThrottle {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_shown: None,
        }
    }

    /// Returns the line to display for `event`, or `None` if the previous
    /// line was shown less than one interval before `now`.
    pub(crate) fn update(&mut self, event: ProgressEvent, now: Instant) -> Option<String> {
        if self
            .last_shown
            .is_some_and(|last| now.duration_since(last) < self.interval)
        {
            return None;
        }
        self.last_shown = Some(now);
        Some(progress_line(event))
    }
}

pub(crate) fn progress_line(event: ProgressEvent) -> String {
    format!(
        "Progress: {} iterations",
        format_count(event.approximate_steps())
    )
}

/// Formats `n` with `,` between groups of three digits.
pub(crate) fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub(crate) fn completion_message(completion: &Completion, output: &Path) -> String {
    match completion.outcome() {
        Outcome::Error => format!(
            "Error: {}",
            completion.error_message.as_deref().unwrap_or_default()
        ),
        Outcome::Success => {
            let mut message = format!(
                "Identifiers assigned successfully. Results were written to {}",
                output.display()
            );
            if completion.capped {
                message.push_str(" (output limit reached; more assignments may exist)");
            }
            if completion.cancelled {
                message.push_str(" (cancelled; the results are partial)");
            }
            message
        }
        Outcome::Cancelled => "Cancelled by user.".to_owned(),
        Outcome::NoAssignment => "Failed to assign identifiers.".to_owned(),
    }
}

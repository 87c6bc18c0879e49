use std::{num::NonZeroU64, sync::Arc, thread::JoinHandle};

use mnemonic_core::{IgnoreSet, Item};
use mnemonic_solver::{AssignmentSink, CancelToken, SearchConfig, SearchProblem};

use crate::{AssignerObserver, Completion, NoopObserver, worker::SearchJob};

/// Entry point for mnemonic assignment runs.
///
/// Each [`process`](Self::process) call validates its input on the calling
/// thread and then searches on a background thread. The observer receives the
/// run's progress notifications followed by exactly one [`Completion`].
///
/// One run at a time: starting a new run while the previous one is still
/// going is not supported. Cancel the previous run and [`join`](RunHandle::join)
/// its handle first.
pub struct MnemonicAssigner {
    config: SearchConfig,
    observer: Arc<dyn AssignerObserver>,
    cancel: CancelToken,
}

impl Default for MnemonicAssigner {
    fn default() -> Self {
        Self::new(SearchConfig::default(), NoopObserver)
    }
}

impl std::fmt::Debug for MnemonicAssigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MnemonicAssigner")
            .field("config", &self.config)
            .field("cancel", &self.cancel)
            .finish_non_exhaustive()
    }
}

impl MnemonicAssigner {
    /// Creates an assigner reporting to `observer`.
    #[must_use]
    pub fn new<O>(config: SearchConfig, observer: O) -> Self
    where
        O: AssignerObserver + 'static,
    {
        Self {
            config,
            observer: Arc::new(observer),
            cancel: CancelToken::new(),
        }
    }

    /// Returns the search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns how many search steps separate two progress notifications.
    #[must_use]
    pub fn progress_threshold(&self) -> NonZeroU64 {
        self.config.progress_threshold
    }

    /// Requests cancellation of the current run.
    ///
    /// Idempotent, and harmless when nothing is running.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Starts a run assigning identifiers to `items` and writing every
    /// assignment found to `sink`.
    ///
    /// If `items` is empty or there are fewer usable characters than items,
    /// nothing is searched, the sink is left untouched, and the failure completion is delivered
    /// before this method returns. Otherwise the sink is reset and the search
    /// runs on a background thread.
    pub fn process<S>(
        &mut self,
        items: Vec<Item>,
        sink: S,
        letters_to_ignore: &IgnoreSet,
    ) -> RunHandle
    where
        S: AssignmentSink + Send + 'static,
    {
        self.cancel = CancelToken::new();
        let cancel = self.cancel.clone();

        let problem = match SearchProblem::from_items(items, letters_to_ignore) {
            Ok(problem) => problem,
            Err(err) => {
                log::warn!("rejected run: {err}");
                return self.finish_now(Completion::from_error(&err, false), cancel);
            }
        };
        log::info!(
            "starting search: {} items over {} characters",
            problem.items().len(),
            problem.alphabet().len()
        );

        let job = SearchJob {
            problem,
            sink,
            config: self.config,
            observer: Arc::clone(&self.observer),
            cancel: cancel.clone(),
        };
        match job.spawn() {
            Ok(handle) => RunHandle {
                state: RunState::Running(handle),
                cancel,
            },
            Err(err) => {
                log::error!("failed to start search thread: {err}");
                let completion =
                    Completion::failed(format!("failed to start search thread: {err}"), false);
                self.finish_now(completion, cancel)
            }
        }
    }

    fn finish_now(&self, completion: Completion, cancel: CancelToken) -> RunHandle {
        self.observer.on_completed(&completion);
        RunHandle {
            state: RunState::Finished(completion),
            cancel,
        }
    }
}

/// Handle to one run started by [`MnemonicAssigner::process`].
#[derive(Debug)]
pub struct RunHandle {
    state: RunState,
    cancel: CancelToken,
}

#[derive(Debug)]
enum RunState {
    Finished(Completion),
    Running(JoinHandle<Completion>),
}

impl RunHandle {
    /// Returns the cancellation token of this run.
    #[must_use]
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Requests cancellation of this run.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once the run no longer executes.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        match &self.state {
            RunState::Finished(_) => true,
            RunState::Running(handle) => handle.is_finished(),
        }
    }

    /// Waits for the run to end and returns its completion.
    ///
    /// The returned value equals the completion delivered to the observer.
    #[must_use = "the completion describes how the run ended"]
    pub fn join(self) -> Completion {
        match self.state {
            RunState::Finished(completion) => completion,
            RunState::Running(handle) => {
                let cancelled = self.cancel.is_cancelled();
                handle.join().unwrap_or_else(|_| {
                    Completion::failed("search thread terminated abnormally", cancelled)
                })
            }
        }
    }
}

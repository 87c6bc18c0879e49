//! Background execution of one search run.

use std::{
    any::Any,
    io,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
    thread::{self, JoinHandle},
};

use mnemonic_solver::{
    AssignmentSink, BacktrackSearch, CancelToken, ProgressEvent, SearchConfig, SearchError,
    SearchProblem, SearchStats,
};

use crate::{AssignerObserver, Completion};

const WORKER_NAME: &str = "mnemonic-search";

/// Everything a background run needs, moved onto the worker thread.
pub(crate) struct SearchJob<S> {
    pub(crate) problem: SearchProblem,
    pub(crate) sink: S,
    pub(crate) config: SearchConfig,
    pub(crate) observer: Arc<dyn AssignerObserver>,
    pub(crate) cancel: CancelToken,
}

impl<S> SearchJob<S>
where
    S: AssignmentSink + Send + 'static,
{
    /// Starts the job on a dedicated thread.
    pub(crate) fn spawn(self) -> io::Result<JoinHandle<Completion>> {
        thread::Builder::new()
            .name(WORKER_NAME.to_owned())
            .spawn(move || self.run())
    }

    /// Resets the sink, runs the search, and reports the completion.
    ///
    /// Never panics: a panic inside the search becomes an error completion.
    pub(crate) fn run(self) -> Completion {
        let Self {
            problem,
            mut sink,
            config,
            observer,
            cancel,
        } = self;

        let search = || -> Result<SearchStats, SearchError> {
            sink.reset().map_err(|source| SearchError::Sink { source, found: 0 })?;
            let mut progress = |event: ProgressEvent| observer.on_progress(event);
            BacktrackSearch::new(config).run(&problem, &mut sink, &mut progress, &cancel)
        };
        let result = panic::catch_unwind(AssertUnwindSafe(search));

        let cancelled = cancel.is_cancelled();
        let completion = match result {
            Ok(Ok(stats)) => Completion::from_stats(&stats, cancelled),
            Ok(Err(err)) => {
                log::error!("search failed: {err}");
                Completion::from_error(&err, cancelled)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::error!("search panicked: {message}");
                Completion::failed(format!("internal error: {message}"), cancelled)
            }
        };

        log::debug!("run completed: {completion:?}");
        observer.on_completed(&completion);
        completion
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

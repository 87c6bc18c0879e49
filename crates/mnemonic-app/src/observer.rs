use std::sync::mpsc;

use mnemonic_solver::ProgressEvent;

use crate::Completion;

/// Receives notifications from a run.
///
/// Both methods are called on the background search thread, never on the
/// thread that called `process` (except for a precondition failure, which is
/// reported before `process` returns). Implementations that need to touch
/// thread-bound state must forward the notification themselves, for example
/// with [`ChannelObserver`].
pub trait AssignerObserver: Send + Sync {
    /// Called every time the search step counter reaches the threshold.
    fn on_progress(&self, event: ProgressEvent) {
        let _ = event;
    }

    /// Called exactly once per `process` call, after the last progress
    /// notification and after every output write.
    fn on_completed(&self, completion: &Completion) {
        let _ = completion;
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl AssignerObserver for NoopObserver {}

/// A notification forwarded by [`ChannelObserver`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum AssignerEvent {
    /// Progress notification.
    Progress(ProgressEvent),
    /// Terminal notification; no further events follow for the run.
    Completed(Completion),
}

/// Observer forwarding notifications to a channel.
///
/// Events arrive on the receiver in the order they were emitted. Sending
/// never blocks the search; a dropped receiver is ignored.
#[derive(Debug)]
pub struct ChannelObserver {
    sender: mpsc::Sender<AssignerEvent>,
}

impl ChannelObserver {
    /// Creates an observer and the receiver its events are delivered to.
    #[must_use]
    pub fn new() -> (Self, mpsc::Receiver<AssignerEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl AssignerObserver for ChannelObserver {
    fn on_progress(&self, event: ProgressEvent) {
        let _ = self.sender.send(AssignerEvent::Progress(event));
    }

    fn on_completed(&self, completion: &Completion) {
        let _ = self.sender.send(AssignerEvent::Completed(completion.clone()));
    }
}

//! Asynchronous mnemonic assignment runner and command-line front end.
//!
//! [`MnemonicAssigner`] validates input on the caller's thread, then runs the
//! backtracking search on a dedicated background thread. Progress and the
//! final [`Completion`] are reported through an [`AssignerObserver`], which is
//! invoked on the background thread; [`ChannelObserver`] forwards them over a
//! channel so a caller can handle them on its own thread.
//!
//! # Examples
//!
//! ```no_run
//! use mnemonic_app::{AssignerEvent, ChannelObserver, MnemonicAssigner};
//! use mnemonic_core::{IgnoreSet, items_from};
//! use mnemonic_solver::{FileSink, SearchConfig};
//!
//! let (observer, events) = ChannelObserver::new();
//! let mut assigner = MnemonicAssigner::new(SearchConfig::default(), observer);
//!
//! let items = items_from(["File", "Edit", "View"])?;
//! let handle = assigner.process(items, FileSink::new("mnemonics.txt"), &IgnoreSet::new());
//!
//! for event in events {
//!     match event {
//!         AssignerEvent::Progress(progress) => {
//!             println!("{} iterations", progress.approximate_steps());
//!         }
//!         AssignerEvent::Completed(completion) => {
//!             println!("{completion:?}");
//!             break;
//!         }
//!     }
//! }
//! let _ = handle.join();
//! # Ok::<(), mnemonic_core::InputError>(())
//! ```

pub use self::{assigner::*, completion::*, error::*, observer::*};

mod assigner;
pub mod cli;
mod completion;
mod error;
mod observer;
mod report;
pub mod version;
mod worker;

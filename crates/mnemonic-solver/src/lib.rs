//! Backtracking enumeration of mnemonic identifier assignments.
//!
//! Given a list of [`Item`]s and a candidate [`Alphabet`], the search binds each
//! item to a distinct character that occurs in the item's text, and reports
//! every complete assignment it finds to an [`AssignmentSink`], up to a cap.
//!
//! The search is synchronous and single-threaded. It observes a
//! [`CancelToken`] at every step so a caller running it on another thread can
//! stop it cooperatively.
//!
//! # Examples
//!
//! ```
//! use mnemonic_core::items_from;
//! use mnemonic_solver::{
//!     BacktrackSearch, CancelToken, MemorySink, ProgressEvent, SearchConfig, SearchProblem,
//! };
//!
//! let items = items_from(["ab", "b"])?;
//! let problem = SearchProblem::from_items(items, &Default::default())?;
//! let search = BacktrackSearch::new(SearchConfig::default());
//! let mut sink = MemorySink::new();
//!
//! let stats = search.run(&problem, &mut sink, &mut |_: ProgressEvent| {}, &CancelToken::new())?;
//! assert_eq!(stats.written(), 1);
//! assert_eq!(sink.assignments()[0].identifier_of("ab"), Some('a'));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Item`]: mnemonic_core::Item
//! [`Alphabet`]: mnemonic_core::Alphabet

pub use self::{
    arena::*, assignment::*, cancel::*, config::*, error::*, format::*, search::*, sink::*,
};

mod arena;
mod assignment;
mod cancel;
mod config;
mod error;
mod format;
mod search;
mod sink;

#[cfg(test)]
mod testing;

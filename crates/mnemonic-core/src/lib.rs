//! Core data types for mnemonic identifier assignment.
//!
//! This crate prepares the input of a search run:
//!
//! - [`Item`] - a non-empty string that needs a single-character identifier
//! - [`Alphabet`] - the distinct candidate characters, in discovery order
//! - [`IgnoreSet`] - characters excluded from candidacy
//!
//! Free text coming from a user (one item per line, a comma-separated list of
//! characters to ignore) is turned into these types by [`parse_items`] and
//! [`IgnoreSet::parse`].
//!
//! # Examples
//!
//! ```
//! use mnemonic_core::{Alphabet, IgnoreSet, parse_items};
//!
//! let items = parse_items("cat\ndog\n")?;
//! let ignore = IgnoreSet::parse("o, g");
//!
//! let alphabet = Alphabet::from_items(&items).without(&ignore);
//! assert_eq!(alphabet.chars(), &['c', 'a', 't', 'd']);
//! # Ok::<(), mnemonic_core::InputError>(())
//! ```

pub use self::{alphabet::*, error::*, ignore_set::*, input::*, item::*};

mod alphabet;
mod error;
mod ignore_set;
mod input;
mod item;

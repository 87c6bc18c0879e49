use std::fmt::{self, Display};

use mnemonic_core::Item;

/// One item bound to its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The item.
    pub item: Item,
    /// The identifier chosen for the item.
    pub identifier: char,
}

/// A complete assignment: every item bound to a distinct identifier.
///
/// The sequence number is the 1-based position of the assignment among all
/// assignments reported during a run. Bindings are ordered as the search
/// bound them (shortest item first).
///
/// `Display` renders the block written to output sinks:
///
/// ```
/// use mnemonic_core::Item;
/// use mnemonic_solver::{Assignment, Binding};
///
/// let assignment = Assignment::new(
///     3,
///     vec![
///         Binding { item: Item::new("cat")?, identifier: 'c' },
///         Binding { item: Item::new("dog")?, identifier: 'o' },
///     ],
/// );
/// assert_eq!(
///     assignment.to_string(),
///     "----------------------3----------------------\n\
///      cat , Identifier: c\n\
///      dog , Identifier: o\n"
/// );
/// # Ok::<(), mnemonic_core::InputError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    sequence: u64,
    bindings: Vec<Binding>,
}

impl Assignment {
    /// Creates an assignment from its sequence number and bindings.
    #[must_use]
    pub fn new(sequence: u64, bindings: Vec<Binding>) -> Self {
        Self { sequence, bindings }
    }

    /// Returns the 1-based sequence number.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the bindings in binding order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Returns the identifier bound to the item with text `item`.
    #[must_use]
    pub fn identifier_of(&self, item: &str) -> Option<char> {
        self.bindings
            .iter()
            .find(|binding| binding.item.as_str() == item)
            .map(|binding| binding.identifier)
    }

    /// Returns the identifiers in binding order.
    pub fn identifiers(&self) -> impl Iterator<Item = char> + '_ {
        self.bindings.iter().map(|binding| binding.identifier)
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::write_block(f, self)
    }
}

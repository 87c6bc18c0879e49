//! Text format of reported assignments.
//!
//! Each assignment is one block:
//!
//! ```text
//! ----------------------<N>----------------------
//! <item_1> , Identifier: <char_1>
//! <item_2> , Identifier: <char_2>
//! ```
//!
//! [`read_assignments`] parses a sequence of blocks back, which is how
//! callers inspect a finished output file.

use std::fmt;

use mnemonic_core::Item;

use crate::{Assignment, Binding};

/// Dashes surrounding the sequence number of a block header.
pub const BLOCK_SEPARATOR: &str = "----------------------";

/// Text between an item and its identifier on a binding line.
pub const IDENTIFIER_LABEL: &str = " , Identifier: ";

pub(crate) fn write_block(f: &mut impl fmt::Write, assignment: &Assignment) -> fmt::Result {
    writeln!(
        f,
        "{BLOCK_SEPARATOR}{}{BLOCK_SEPARATOR}",
        assignment.sequence()
    )?;
    for binding in assignment.bindings() {
        writeln!(f, "{}{IDENTIFIER_LABEL}{}", binding.item, binding.identifier)?;
    }
    Ok(())
}

/// Errors raised while reading assignment blocks back.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FormatError {
    /// A binding line appeared before any block header.
    #[display("line {line}: binding outside of an assignment block")]
    OrphanBinding {
        /// 1-based line number.
        line: usize,
    },
    /// A block header did not hold a sequence number.
    #[display("line {line}: invalid block header")]
    InvalidHeader {
        /// 1-based line number.
        line: usize,
    },
    /// A binding line was not `<item> , Identifier: <char>`.
    #[display("line {line}: invalid binding line")]
    InvalidBinding {
        /// 1-based line number.
        line: usize,
    },
}

/// Parses every assignment block in `text`.
///
/// # Errors
///
/// Returns a [`FormatError`] naming the first malformed line.
///
/// # Examples
///
/// ```
/// use mnemonic_solver::read_assignments;
///
/// let text = "----------------------1----------------------\n\
///             b , Identifier: b\n\
///             ab , Identifier: a\n";
/// let assignments = read_assignments(text)?;
/// assert_eq!(assignments.len(), 1);
/// assert_eq!(assignments[0].identifier_of("ab"), Some('a'));
/// # Ok::<(), mnemonic_solver::FormatError>(())
/// ```
pub fn read_assignments(text: &str) -> Result<Vec<Assignment>, FormatError> {
    let mut blocks: Vec<(u64, Vec<Binding>)> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.is_empty() {
            continue;
        }
        if let Some(sequence) = parse_header(line) {
            let sequence = sequence.ok_or(FormatError::InvalidHeader { line: line_no })?;
            blocks.push((sequence, Vec::new()));
            continue;
        }
        let Some((_, bindings)) = blocks.last_mut() else {
            return Err(FormatError::OrphanBinding { line: line_no });
        };
        let binding = parse_binding(line).ok_or(FormatError::InvalidBinding { line: line_no })?;
        bindings.push(binding);
    }

    Ok(blocks
        .into_iter()
        .map(|(sequence, bindings)| Assignment::new(sequence, bindings))
        .collect())
}

// Outer `None`: not a header line. Inner `None`: header with a bad number.
fn parse_header(line: &str) -> Option<Option<u64>> {
    let inner = line
        .strip_prefix(BLOCK_SEPARATOR)?
        .strip_suffix(BLOCK_SEPARATOR)?;
    Some(inner.parse().ok())
}

fn parse_binding(line: &str) -> Option<Binding> {
    let (item, identifier) = line.rsplit_once(IDENTIFIER_LABEL)?;
    let mut chars = identifier.chars();
    let identifier = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let item = Item::new(item).ok()?;
    Some(Binding { item, identifier })
}

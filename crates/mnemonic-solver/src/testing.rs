//! Test harness for search runs.
//!
//! [`SearchTester`] builds a problem from string literals, runs a search into
//! a [`MemorySink`], and offers chained assertions over the result.
//!
//! ```ignore
//! SearchTester::new(&["cat", "dog"])
//!     .ignore("c")
//!     .run()
//!     .assert_written(6)
//!     .assert_all_valid();
//! ```

use std::{collections::HashSet, num::NonZeroU64};

use mnemonic_core::{IgnoreSet, Item, items_from};

use crate::{
    Assignment, BacktrackSearch, CancelToken, MemorySink, ProgressEvent, SearchConfig,
    SearchProblem, SearchStats,
};

/// Runs a search over literal items and checks what it wrote.
///
/// All assertion methods panic with a descriptive message and report the
/// caller's location.
#[derive(Debug)]
pub struct SearchTester {
    items: Vec<Item>,
    ignore: IgnoreSet,
    config: SearchConfig,
    stats: Option<SearchStats>,
    assignments: Vec<Assignment>,
}

impl SearchTester {
    /// Creates a tester for the given items.
    pub fn new(items: &[&str]) -> Self {
        Self {
            items: items_from(items).unwrap(),
            ignore: IgnoreSet::new(),
            config: SearchConfig::default(),
            stats: None,
            assignments: Vec::new(),
        }
    }

    /// Excludes the characters listed in `chars` (comma-separated).
    pub fn ignore(mut self, chars: &str) -> Self {
        self.ignore = IgnoreSet::parse(chars);
        self
    }

    /// Sets the output cap.
    pub fn max_output(mut self, max_output: u64) -> Self {
        self.config.max_output = NonZeroU64::new(max_output).unwrap();
        self
    }

    /// Runs the search to completion.
    #[track_caller]
    pub fn run(mut self) -> Self {
        let problem = SearchProblem::from_items(self.items.clone(), &self.ignore).unwrap();
        let mut sink = MemorySink::new();
        let stats = BacktrackSearch::new(self.config)
            .run(&problem, &mut sink, &mut |_: ProgressEvent| {}, &CancelToken::new())
            .unwrap();
        self.stats = Some(stats);
        self.assignments = sink.into_assignments();
        self
    }

    /// Returns the assignments written by the last run.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    #[track_caller]
    fn stats(&self) -> &SearchStats {
        self.stats.as_ref().expect("call run() before asserting")
    }

    /// Asserts the number of assignments written.
    #[track_caller]
    pub fn assert_written(self, expected: u64) -> Self {
        assert_eq!(
            self.stats().written(),
            expected,
            "unexpected number of written assignments: {:#?}",
            self.assignments
        );
        assert_eq!(self.assignments.len() as u64, expected);
        self
    }

    /// Asserts the number of assignments discovered.
    #[track_caller]
    pub fn assert_found(self, expected: u64) -> Self {
        assert_eq!(self.stats().found(), expected);
        self
    }

    /// Asserts that the output cap stopped the search.
    #[track_caller]
    pub fn assert_capped(self) -> Self {
        assert!(self.stats().capped(), "expected the output cap to be hit");
        self
    }

    /// Asserts that the search ran to exhaustion.
    #[track_caller]
    pub fn assert_not_capped(self) -> Self {
        assert!(!self.stats().capped(), "unexpected output cap hit");
        self
    }

    /// Asserts that every assignment binds each item exactly once, to a
    /// distinct non-ignored character that occurs in the item.
    #[track_caller]
    pub fn assert_all_valid(self) -> Self {
        for assignment in &self.assignments {
            assert_valid(assignment, &self.items, &self.ignore);
        }
        self
    }

    /// Asserts that no two assignments are identical.
    #[track_caller]
    pub fn assert_distinct(self) -> Self {
        let mut seen = HashSet::new();
        for assignment in &self.assignments {
            let key: Vec<_> = assignment
                .bindings()
                .iter()
                .map(|b| (b.item.clone(), b.identifier))
                .collect();
            assert!(seen.insert(key), "duplicate assignment: {assignment}");
        }
        self
    }

    /// Asserts that sequence numbers run 1, 2, 3, ...
    #[track_caller]
    pub fn assert_sequences_in_order(self) -> Self {
        for (i, assignment) in self.assignments.iter().enumerate() {
            assert_eq!(assignment.sequence(), i as u64 + 1);
        }
        self
    }

    /// Asserts the identifier of `item` in the assignment at `index`.
    #[track_caller]
    pub fn assert_identifier(self, index: usize, item: &str, expected: char) -> Self {
        let assignment = &self.assignments[index];
        assert_eq!(
            assignment.identifier_of(item),
            Some(expected),
            "in assignment {assignment}"
        );
        self
    }

    /// Asserts that `c` is never used as an identifier.
    #[track_caller]
    pub fn assert_never_uses(self, c: char) -> Self {
        for assignment in &self.assignments {
            assert!(
                assignment.identifiers().all(|id| id != c),
                "{c:?} used in {assignment}"
            );
        }
        self
    }
}

/// Checks the validity invariant of a single assignment.
#[track_caller]
pub fn assert_valid(assignment: &Assignment, items: &[Item], ignore: &IgnoreSet) {
    assert_eq!(
        assignment.bindings().len(),
        items.len(),
        "wrong number of bindings in {assignment}"
    );

    let mut identifiers = HashSet::new();
    for binding in assignment.bindings() {
        assert!(
            binding.item.contains(binding.identifier),
            "{:?} does not occur in {:?}",
            binding.identifier,
            binding.item
        );
        assert!(
            !ignore.contains(binding.identifier),
            "ignored {:?} used",
            binding.identifier
        );
        assert!(
            identifiers.insert(binding.identifier),
            "{:?} used twice in {assignment}",
            binding.identifier
        );
    }

    let mut expected: Vec<_> = items.iter().map(Item::as_str).collect();
    let mut actual: Vec<_> = assignment
        .bindings()
        .iter()
        .map(|b| b.item.as_str())
        .collect();
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(actual, expected, "items differ in {assignment}");
}

//! Depth-first backtracking search over injective item-to-character bindings.

use mnemonic_core::{Alphabet, IgnoreSet, Item};

use crate::{
    Assignment, AssignmentArena, AssignmentSink, Binding, CancelToken, NodeId, SearchConfig,
    SearchError,
};

/// Progress notification emitted every time the step counter reaches the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    /// How many times the threshold has been reached during this run.
    pub threshold_reached_count: u64,
    /// Number of steps between two notifications.
    pub threshold: u64,
}

impl ProgressEvent {
    /// Approximates the number of search steps taken so far.
    #[must_use]
    pub fn approximate_steps(&self) -> u64 {
        self.threshold_reached_count.saturating_mul(self.threshold)
    }
}

/// Receives progress notifications from a running search.
///
/// Notifications are delivered synchronously on the thread running the
/// search. Any closure taking a [`ProgressEvent`] is an observer.
pub trait SearchObserver {
    /// Called each time the step counter reaches the progress threshold.
    fn on_progress(&mut self, event: ProgressEvent);
}

impl<F> SearchObserver for F
where
    F: FnMut(ProgressEvent),
{
    fn on_progress(&mut self, event: ProgressEvent) {
        self(event);
    }
}

/// Validated search input.
///
/// Items are stored shortest first (stable on ties), so the most constrained
/// items are bound first.
#[derive(Debug, Clone)]
pub struct SearchProblem {
    items: Vec<Item>,
    alphabet: Alphabet,
}

impl SearchProblem {
    /// Creates a problem from items and an already filtered alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoItems`] if `items` is empty, or
    /// [`SearchError::NotEnoughCharacters`] if there are more items than
    /// candidate characters.
    pub fn new(mut items: Vec<Item>, alphabet: Alphabet) -> Result<Self, SearchError> {
        if items.is_empty() {
            return Err(SearchError::NoItems);
        }
        if items.len() > alphabet.len() {
            return Err(SearchError::NotEnoughCharacters {
                items: items.len(),
                characters: alphabet.len(),
            });
        }
        items.sort_by_key(Item::char_len);
        Ok(Self { items, alphabet })
    }

    /// Derives the alphabet from `items`, removes `ignore`, and validates.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoItems`] if `items` is empty, or
    /// [`SearchError::NotEnoughCharacters`] if there are more items than
    /// remaining candidate characters.
    pub fn from_items(items: Vec<Item>, ignore: &IgnoreSet) -> Result<Self, SearchError> {
        let alphabet = Alphabet::from_items(&items).without(ignore);
        Self::new(items, alphabet)
    }

    /// Returns the items in binding order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the candidate alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

/// Statistics of one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    steps: u64,
    threshold_reached_count: u64,
    found: u64,
    written: u64,
    capped: bool,
    cancelled: bool,
}

impl SearchStats {
    /// Returns the exact number of search steps taken.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns how many progress notifications were emitted.
    #[must_use]
    pub fn threshold_reached_count(&self) -> u64 {
        self.threshold_reached_count
    }

    /// Returns how many complete assignments were discovered.
    ///
    /// When the output cap stops the search this is one more than
    /// [`written`](Self::written).
    #[must_use]
    pub fn found(&self) -> u64 {
        self.found
    }

    /// Returns how many assignments were written to the sink.
    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Returns `true` if at least one assignment was found.
    #[must_use]
    pub fn has_solution(&self) -> bool {
        self.found > 0
    }

    /// Returns `true` if the output cap stopped the search.
    #[must_use]
    pub fn capped(&self) -> bool {
        self.capped
    }

    /// Returns `true` if the search observed a cancellation request.
    #[must_use]
    pub fn cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Enumerates every complete assignment of a [`SearchProblem`].
///
/// Each recursion level binds the next item to one of the unused candidate
/// characters occurring in it, trying candidates in alphabet order. A branch
/// that runs out of characters is abandoned. The search ends when the state
/// space is exhausted, when the token is cancelled, or when one more
/// assignment than the output cap has been discovered.
#[derive(Debug, Clone, Default)]
pub struct BacktrackSearch {
    config: SearchConfig,
}

impl BacktrackSearch {
    /// Creates a searcher with the given configuration.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Runs the search to completion, cancellation, or the output cap.
    ///
    /// Assignments are appended to `sink` as they are found; the sink is not
    /// reset here.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Sink`] if an assignment cannot be written. The
    /// search stops at the first failed write.
    pub fn run<S, O>(
        &self,
        problem: &SearchProblem,
        sink: &mut S,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> Result<SearchStats, SearchError>
    where
        S: AssignmentSink + ?Sized,
        O: SearchObserver + ?Sized,
    {
        log::debug!(
            "search started: {} items, {} candidate characters",
            problem.items.len(),
            problem.alphabet.len()
        );

        let mut run = SearchRun {
            problem,
            config: &self.config,
            sink,
            observer,
            cancel,
            arena: AssignmentArena::with_capacity(problem.items.len() + 1),
            used: vec![false; problem.alphabet.len()],
            iteration_count: 0,
            stopped: false,
            stats: SearchStats::default(),
        };
        run.assign(0, NodeId::ROOT)?;

        let stats = run.stats;
        log::debug!(
            "search finished: steps={}, found={}, written={}, capped={}, cancelled={}",
            stats.steps,
            stats.found,
            stats.written,
            stats.capped,
            stats.cancelled
        );
        Ok(stats)
    }
}

struct SearchRun<'a, S: ?Sized, O: ?Sized> {
    problem: &'a SearchProblem,
    config: &'a SearchConfig,
    sink: &'a mut S,
    observer: &'a mut O,
    cancel: &'a CancelToken,
    arena: AssignmentArena,
    // Alphabet positions already bound on the current path.
    used: Vec<bool>,
    iteration_count: u64,
    stopped: bool,
    stats: SearchStats,
}

impl<S, O> SearchRun<'_, S, O>
where
    S: AssignmentSink + ?Sized,
    O: SearchObserver + ?Sized,
{
    fn is_cancelled(&mut self) -> bool {
        if self.cancel.is_cancelled() {
            self.stats.cancelled = true;
            return true;
        }
        false
    }

    /// `depth` items are bound on the chain ending at `parent`.
    fn assign(&mut self, depth: usize, parent: NodeId) -> Result<(), SearchError> {
        if self.is_cancelled() || self.stopped {
            return Ok(());
        }

        self.stats.steps += 1;
        self.iteration_count += 1;
        if self.iteration_count == self.config.progress_threshold.get() {
            self.iteration_count = 0;
            self.stats.threshold_reached_count += 1;
            let event = ProgressEvent {
                threshold_reached_count: self.stats.threshold_reached_count,
                threshold: self.config.progress_threshold.get(),
            };
            log::trace!("progress: {} steps", event.approximate_steps());
            self.observer.on_progress(event);
        }

        if depth == self.problem.items.len() {
            self.complete(parent)
        } else if depth < self.problem.alphabet.len() {
            self.branch(depth, parent)
        } else {
            Ok(())
        }
    }

    fn branch(&mut self, depth: usize, parent: NodeId) -> Result<(), SearchError> {
        let problem = self.problem;
        let item = &problem.items[depth];

        for (i, c) in problem.alphabet.iter().enumerate() {
            if self.is_cancelled() || self.stopped {
                break;
            }
            if self.used[i] || !item.contains(c) {
                continue;
            }

            self.used[i] = true;
            let node = self.arena.push(parent, depth, c);
            let result = self.assign(depth + 1, node);
            self.arena.truncate(node);
            self.used[i] = false;
            result?;
        }
        Ok(())
    }

    fn complete(&mut self, last: NodeId) -> Result<(), SearchError> {
        self.stats.found += 1;
        if self.stats.found > self.config.max_output.get() {
            log::debug!(
                "output cap of {} reached, stopping search",
                self.config.max_output
            );
            self.stopped = true;
            self.stats.capped = true;
            return Ok(());
        }

        let bindings = self
            .arena
            .path(last)
            .into_iter()
            .map(|(item, identifier)| Binding {
                item: self.problem.items[item].clone(),
                identifier,
            })
            .collect();
        let assignment = Assignment::new(self.stats.found, bindings);
        let found = self.stats.found;
        self.sink
            .append(&assignment)
            .map_err(|source| SearchError::Sink { source, found })?;
        self.stats.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU64;

    use mnemonic_core::items_from;

    use super::*;
    use crate::{MemorySink, testing::SearchTester};

    fn nz(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    #[test]
    fn test_not_enough_characters() {
        let items = items_from(["ab", "cd", "ef"]).unwrap();
        let err = SearchProblem::from_items(items, &IgnoreSet::parse("c,d,e,f")).unwrap_err();
        assert!(matches!(
            err,
            SearchError::NotEnoughCharacters {
                items: 3,
                characters: 2
            }
        ));
        let message = err.to_string();
        assert!(message.contains('3'));
        assert!(message.contains('2'));
    }

    #[test]
    fn test_empty_item_list_is_rejected() {
        let err = SearchProblem::from_items(Vec::new(), &IgnoreSet::new()).unwrap_err();
        assert!(err.is_no_items());
        assert_eq!(err.found(), 0);
    }

    #[test]
    fn test_problem_sorts_items_shortest_first() {
        let items = items_from(["three", "one", "fourteen", "two"]).unwrap();
        let problem = SearchProblem::from_items(items, &IgnoreSet::new()).unwrap();
        let texts: Vec<_> = problem.items().iter().map(Item::as_str).collect();
        assert_eq!(texts, ["one", "two", "three", "fourteen"]);
    }

    #[test]
    fn test_cat_dog_enumerates_all_pairs() {
        // Three choices each, no shared characters.
        SearchTester::new(&["cat", "dog"])
            .run()
            .assert_written(9)
            .assert_all_valid()
            .assert_distinct()
            .assert_sequences_in_order()
            .assert_not_capped();
    }

    #[test]
    fn test_enumeration_order_follows_alphabet() {
        let tester = SearchTester::new(&["cat", "dog"]).run();
        let first = &tester.assignments()[0];
        assert_eq!(first.identifier_of("cat"), Some('c'));
        assert_eq!(first.identifier_of("dog"), Some('d'));
        let last = tester.assignments().last().unwrap();
        assert_eq!(last.identifier_of("cat"), Some('t'));
        assert_eq!(last.identifier_of("dog"), Some('g'));
    }

    #[test]
    fn test_shared_characters_are_not_reused() {
        // "aa" can only take 'a', which leaves "ab" with 'b'.
        SearchTester::new(&["ab", "aa"])
            .run()
            .assert_written(1)
            .assert_all_valid()
            .assert_identifier(0, "aa", 'a')
            .assert_identifier(0, "ab", 'b');
    }

    #[test]
    fn test_dead_end_is_not_an_error() {
        // Three characters but "a" and "aa" both need 'a'.
        SearchTester::new(&["a", "aa", "bc"])
            .run()
            .assert_written(0)
            .assert_not_capped();
    }

    #[test]
    fn test_ignored_characters_are_never_used() {
        SearchTester::new(&["cat", "dog"])
            .ignore("c,o")
            .run()
            .assert_written(4)
            .assert_all_valid()
            .assert_never_uses('c')
            .assert_never_uses('o');
    }

    #[test]
    fn test_cap_writes_exactly_max_output() {
        SearchTester::new(&["cat", "dog"])
            .max_output(1)
            .run()
            .assert_written(1)
            .assert_found(2)
            .assert_capped();
    }

    #[test]
    fn test_cap_equal_to_total_is_not_reported_as_capped() {
        SearchTester::new(&["cat", "dog"])
            .max_output(9)
            .run()
            .assert_written(9)
            .assert_not_capped();
    }

    #[test]
    fn test_progress_counts_are_strictly_increasing() {
        let items = items_from(["abc", "bcd", "cde", "def"]).unwrap();
        let problem = SearchProblem::from_items(items, &IgnoreSet::new()).unwrap();
        let search = BacktrackSearch::new(SearchConfig::default().with_progress_threshold(nz(3)));
        let mut events = Vec::new();
        let stats = search
            .run(
                &problem,
                &mut MemorySink::new(),
                &mut |event: ProgressEvent| events.push(event),
                &CancelToken::new(),
            )
            .unwrap();

        assert!(!events.is_empty());
        assert_eq!(events.len() as u64, stats.threshold_reached_count());
        assert_eq!(stats.threshold_reached_count(), stats.steps() / 3);
        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.threshold_reached_count, i as u64 + 1);
            assert_eq!(event.threshold, 3);
        }
    }

    #[test]
    fn test_cancelled_before_start_does_nothing() {
        let items = items_from(["cat", "dog"]).unwrap();
        let problem = SearchProblem::from_items(items, &IgnoreSet::new()).unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();

        let mut sink = MemorySink::new();
        let stats = BacktrackSearch::default()
            .run(&problem, &mut sink, &mut |_: ProgressEvent| {}, &cancel)
            .unwrap();
        assert!(stats.cancelled());
        assert_eq!(stats.steps(), 0);
        assert!(sink.assignments().is_empty());
    }

    #[test]
    fn test_cancel_from_observer_stops_progress() {
        let items = items_from(["abcdefgh", "bcdefghi", "cdefghij", "defghijk", "efghijkl"])
            .unwrap();
        let problem = SearchProblem::from_items(items, &IgnoreSet::new()).unwrap();
        let search = BacktrackSearch::new(SearchConfig::new(nz(1), nz(u64::MAX)));
        let cancel = CancelToken::new();
        let mut events = 0;
        let stats = search
            .run(
                &problem,
                &mut MemorySink::new(),
                &mut |_: ProgressEvent| {
                    events += 1;
                    if events == 5 {
                        cancel.cancel();
                    }
                },
                &cancel,
            )
            .unwrap();

        assert!(stats.cancelled());
        assert_eq!(events, 5);
        assert_eq!(stats.steps(), 5);
    }

    #[test]
    fn test_sink_failure_is_reported() {
        struct FailingSink;

        impl AssignmentSink for FailingSink {
            fn reset(&mut self) -> std::io::Result<()> {
                Ok(())
            }

            fn append(&mut self, _: &Assignment) -> std::io::Result<()> {
                Err(std::io::Error::other("disk full"))
            }
        }

        let items = items_from(["cat", "dog"]).unwrap();
        let problem = SearchProblem::from_items(items, &IgnoreSet::new()).unwrap();
        let err = BacktrackSearch::default()
            .run(&problem, &mut FailingSink, &mut |_: ProgressEvent| {}, &CancelToken::new())
            .unwrap_err();
        assert!(err.is_sink());
        assert_eq!(err.found(), 1);
        assert!(err.to_string().contains("disk full"));
    }

    // Counts injective assignments by trying every combination.
    fn brute_force_count(items: &[Item], alphabet: &Alphabet, used: &mut Vec<char>) -> u64 {
        let Some((item, rest)) = items.split_first() else {
            return 1;
        };
        let mut count = 0;
        for c in alphabet.iter() {
            if item.contains(c) && !used.contains(&c) {
                used.push(c);
                count += brute_force_count(rest, alphabet, used);
                used.pop();
            }
        }
        count
    }

    proptest::proptest! {
        #[test]
        fn prop_enumerates_every_valid_assignment_once(
            texts in proptest::collection::vec("[a-e]{1,4}", 1..5),
            ignored in "[a-e]{0,2}",
        ) {
            let items = items_from(&texts).unwrap();
            let ignore = IgnoreSet::parse(&ignored);
            let Ok(problem) = SearchProblem::from_items(items.clone(), &ignore) else {
                return Ok(());
            };

            let mut sink = MemorySink::new();
            let stats = BacktrackSearch::new(SearchConfig::new(nz(1), nz(u64::MAX)))
                .run(&problem, &mut sink, &mut |_: ProgressEvent| {}, &CancelToken::new())
                .unwrap();

            let expected = brute_force_count(problem.items(), problem.alphabet(), &mut Vec::new());
            proptest::prop_assert_eq!(stats.written(), expected);
            proptest::prop_assert!(!stats.capped());

            let mut seen = std::collections::HashSet::new();
            for assignment in sink.assignments() {
                crate::testing::assert_valid(assignment, &items, &ignore);
                let identifiers: Vec<_> = assignment.identifiers().collect();
                proptest::prop_assert!(seen.insert(identifiers));
            }
        }
    }
}

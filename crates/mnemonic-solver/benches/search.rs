//! Benchmarks for the backtracking search.
//!
//! # Benchmarks
//!
//! - **`search_menu`**: Enumerates identifiers for a typical menu (File, Edit,
//!   View, ...) with the default output cap of 200.
//! - **`search_exhaustive`**: Enumerates every assignment of a small
//!   overlapping item set without a cap, measuring the full state space walk.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::{hint, num::NonZeroU64};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use mnemonic_core::{IgnoreSet, items_from};
use mnemonic_solver::{
    BacktrackSearch, CancelToken, MemorySink, ProgressEvent, SearchConfig, SearchProblem,
};

const MENU: [&str; 8] = [
    "File", "Edit", "View", "Insert", "Format", "Tools", "Window", "Help",
];

const OVERLAPPING: [&str; 6] = ["abcd", "bcde", "cdef", "defa", "efab", "fabc"];

fn problem(texts: &[&str]) -> SearchProblem {
    let items = items_from(texts).unwrap();
    SearchProblem::from_items(items, &IgnoreSet::new()).unwrap()
}

fn bench_menu(c: &mut Criterion) {
    let problem = problem(&MENU);
    let search = BacktrackSearch::new(SearchConfig::default());

    let id = BenchmarkId::new("search_menu", "default_cap");
    c.bench_with_input(id, &problem, |b, problem| {
        b.iter_batched(
            MemorySink::new,
            |mut sink| {
                search
                    .run(
                        hint::black_box(problem),
                        &mut sink,
                        &mut |_: ProgressEvent| {},
                        &CancelToken::new(),
                    )
                    .unwrap()
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_exhaustive(c: &mut Criterion) {
    let problem = problem(&OVERLAPPING);
    let config = SearchConfig::default().with_max_output(NonZeroU64::MAX);
    let search = BacktrackSearch::new(config);

    let id = BenchmarkId::new("search_exhaustive", "overlapping");
    c.bench_with_input(id, &problem, |b, problem| {
        b.iter_batched(
            MemorySink::new,
            |mut sink| {
                search
                    .run(
                        hint::black_box(problem),
                        &mut sink,
                        &mut |_: ProgressEvent| {},
                        &CancelToken::new(),
                    )
                    .unwrap()
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_menu, bench_exhaustive);
criterion_main!(benches);

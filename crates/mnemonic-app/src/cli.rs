//! The `mnemonic` command-line front end.
//!
//! Reads one item per line, assigns identifiers in the background, and writes
//! every assignment found to the output file. Progress goes to standard error.
//! On an interactive terminal, pressing Enter cancels the run.

use std::{
    fs,
    io::{self, IsTerminal as _, Read as _},
    num::NonZeroU64,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::mpsc::{Receiver, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};

use clap::Parser;
use mnemonic_core::{Alphabet, IgnoreSet, parse_items};
use mnemonic_solver::{CancelToken, FileSink, SearchConfig};

use crate::{
    AppError, AssignerEvent, ChannelObserver, MnemonicAssigner, Outcome,
    report::{self, PROGRESS_INTERVAL, ProgressThrottle},
};

/// Exit code reported when the run was cancelled before finding anything.
pub const EXIT_CANCELLED: u8 = 130;

/// Command-line arguments of `mnemonic`.
#[derive(Debug, Parser)]
#[command(name = "mnemonic", author, version, about)]
pub struct Args {
    /// File listing one item per line. Reads standard input if omitted.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// File receiving the assignments. Truncated when the run starts.
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Characters never used as identifiers, e.g. "a, b, c".
    #[arg(long, value_name = "CHARS")]
    pub ignore: Option<String>,

    /// Search steps between two progress notifications.
    #[arg(
        long,
        value_name = "STEPS",
        env = "MNEMONIC_PROGRESS_THRESHOLD",
        default_value_t = mnemonic_solver::DEFAULT_PROGRESS_THRESHOLD
    )]
    pub progress_threshold: NonZeroU64,

    /// Maximum number of assignments written to the output.
    #[arg(
        long,
        value_name = "COUNT",
        env = "MNEMONIC_MAX_OUTPUT",
        default_value_t = mnemonic_solver::DEFAULT_MAX_OUTPUT
    )]
    pub max_output: NonZeroU64,

    /// Cancel the run after this many seconds.
    #[arg(long, value_name = "SECS")]
    pub time_limit: Option<u64>,
}

impl Args {
    /// Builds the search configuration from the arguments.
    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(self.progress_threshold, self.max_output)
    }

    fn ignore_set(&self) -> IgnoreSet {
        self.ignore
            .as_deref()
            .map(IgnoreSet::parse)
            .unwrap_or_default()
    }
}

/// Runs the command and returns the process exit code.
///
/// # Errors
///
/// Returns an error if the input cannot be read or contains no item. Failures
/// of the run itself are reported on the terminal and through the exit code.
pub fn run(args: &Args) -> Result<ExitCode, AppError> {
    let text = read_input(args.input.as_deref())?;
    let items = parse_items(&text)?;
    let ignore = args.ignore_set();

    println!("Distinct characters: {}", Alphabet::from_items(&items));
    if !ignore.is_empty() {
        let ignored = ignore.iter().map(String::from).collect::<Vec<_>>();
        println!("Ignored characters: {}", ignored.join(", "));
    }

    let config = args.search_config();
    eprintln!(
        "Progress is reported every {} iterations.",
        config.progress_threshold
    );

    let (observer, events) = ChannelObserver::new();
    let mut assigner = MnemonicAssigner::new(config, observer);
    let handle = assigner.process(items, FileSink::new(&args.output), &ignore);

    if !handle.is_finished() && args.input.is_some() && io::stdin().is_terminal() {
        eprintln!("Press Enter to cancel.");
        spawn_cancel_on_enter(handle.cancel_token().clone());
    }

    let deadline = args
        .time_limit
        .map(|secs| Instant::now() + Duration::from_secs(secs));
    show_progress(&events, handle.cancel_token(), deadline);

    let completion = handle.join();
    let message = report::completion_message(&completion, &args.output);
    let code = match completion.outcome() {
        Outcome::Success => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Outcome::Cancelled => {
            eprintln!("{message}");
            ExitCode::from(EXIT_CANCELLED)
        }
        Outcome::Error | Outcome::NoAssignment => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    };
    Ok(code)
}

fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| AppError::ReadInput {
            path: path.to_owned(),
            source,
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| AppError::ReadStdin { source })?;
            Ok(text)
        }
    }
}

fn spawn_cancel_on_enter(cancel: CancelToken) {
    let spawned = thread::Builder::new()
        .name("mnemonic-cancel".to_owned())
        .spawn(move || {
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_ok() {
                log::debug!("cancel requested from terminal");
                cancel.cancel();
            }
        });
    if let Err(err) = spawned {
        log::warn!("interactive cancellation unavailable: {err}");
    }
}

/// Prints progress lines until the completion notification arrives.
fn show_progress(
    events: &Receiver<AssignerEvent>,
    cancel: &CancelToken,
    mut deadline: Option<Instant>,
) {
    let mut throttle = ProgressThrottle::new(PROGRESS_INTERVAL);
    loop {
        let now = Instant::now();
        let event = match deadline {
            Some(at) if at <= now => {
                log::info!("time limit reached, cancelling");
                cancel.cancel();
                deadline = None;
                continue;
            }
            Some(at) => match events.recv_timeout(at - now) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return,
            },
            None => match events.recv() {
                Ok(event) => event,
                Err(_) => return,
            },
        };

        match event {
            AssignerEvent::Progress(progress) => {
                log::trace!("progress: {progress:?}");
                if let Some(line) = throttle.update(progress, Instant::now()) {
                    eprintln!("{line}");
                }
            }
            AssignerEvent::Completed(_) => return,
        }
    }
}

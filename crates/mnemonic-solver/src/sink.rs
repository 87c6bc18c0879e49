//! Destinations for reported assignments.

use std::{
    fs::{File, OpenOptions},
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use crate::Assignment;

/// An append-only destination for assignments.
///
/// The runner calls [`reset`](Self::reset) once before a run starts. The
/// search then calls [`append`](Self::append) for each assignment as soon as
/// it is found.
pub trait AssignmentSink {
    /// Discards everything previously written.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be cleared.
    fn reset(&mut self) -> io::Result<()>;

    /// Appends one assignment block.
    ///
    /// # Errors
    ///
    /// Returns an error if the block cannot be written.
    fn append(&mut self, assignment: &Assignment) -> io::Result<()>;
}

impl<S> AssignmentSink for &mut S
where
    S: AssignmentSink + ?Sized,
{
    fn reset(&mut self) -> io::Result<()> {
        (**self).reset()
    }

    fn append(&mut self, assignment: &Assignment) -> io::Result<()> {
        (**self).append(assignment)
    }
}

impl<S> AssignmentSink for Box<S>
where
    S: AssignmentSink + ?Sized,
{
    fn reset(&mut self) -> io::Result<()> {
        (**self).reset()
    }

    fn append(&mut self, assignment: &Assignment) -> io::Result<()> {
        (**self).append(assignment)
    }
}

/// Writes assignment blocks to a text file.
///
/// Resetting truncates the file, creating it if needed. Every block is
/// appended and flushed before the search continues, so the file reflects
/// all assignments found so far even if the run is cancelled.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Creates a sink writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AssignmentSink for FileSink {
    fn reset(&mut self) -> io::Result<()> {
        File::create(&self.path)?;
        Ok(())
    }

    fn append(&mut self, assignment: &Assignment) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(assignment.to_string().as_bytes())?;
        file.flush()
    }
}

/// Keeps assignments in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    assignments: Vec<Assignment>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the assignments appended since the last reset.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Consumes the sink, returning its assignments.
    #[must_use]
    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }

    /// Renders the content as it would appear in a file.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.assignments.iter().map(ToString::to_string).collect()
    }
}

impl AssignmentSink for MemorySink {
    fn reset(&mut self) -> io::Result<()> {
        self.assignments.clear();
        Ok(())
    }

    fn append(&mut self, assignment: &Assignment) -> io::Result<()> {
        self.assignments.push(assignment.clone());
        Ok(())
    }
}

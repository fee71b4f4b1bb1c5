//! # Parsing Context for Include Expansion
//!
//! Include resolution communicates with the surrounding parse entirely
//! through registration: each discovered source becomes one
//! [`SourceUnit`] handed to a [`SourceSink`], in resolution order. The
//! concrete [`IncludeContext`] pairs that sink with the one piece of
//! state resolution needs from the reader, the file currently being
//! parsed.

use std::path::{Path, PathBuf};

/// One unit of resolved DSL source: the file it came from, if any, and
/// its lines in original order.
///
/// Remote content carries the identity of the file whose include fetched
/// it, so `origin` can repeat across units and can be `None` when no
/// file-backed source was open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub origin: Option<PathBuf>,
    pub lines: Vec<String>,
}

/// Receives resolved source units in resolution order.
///
/// Registration is append-only; implementors must preserve call order,
/// which is the externally observable contract of include expansion.
pub trait SourceSink {
    fn add_file(&mut self, origin: Option<PathBuf>, lines: Vec<String>);
}

/// Context for one include expansion: the file currently being parsed
/// and the sources discovered so far.
#[derive(Debug, Clone, Default)]
pub struct IncludeContext {
    parent_file: Option<PathBuf>,
    files: Vec<SourceUnit>,
}

impl IncludeContext {
    pub fn new(parent_file: Option<PathBuf>) -> Self {
        Self {
            parent_file,
            files: Vec::new(),
        }
    }

    /// The file whose parse triggered the include, if any.
    pub fn parent_file(&self) -> Option<&Path> {
        self.parent_file.as_deref()
    }

    /// Resolved units in registration order.
    pub fn files(&self) -> &[SourceUnit] {
        &self.files
    }

    pub fn into_files(self) -> Vec<SourceUnit> {
        self.files
    }
}

impl SourceSink for IncludeContext {
    fn add_file(&mut self, origin: Option<PathBuf>, lines: Vec<String>) {
        self.files.push(SourceUnit { origin, lines });
    }
}

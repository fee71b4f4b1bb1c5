//! # Include Expansion
//!
//! The `!include` directive splices another source into the definition
//! being parsed. Its single argument names a local file, a local
//! directory, or a remote `https://` resource:
//!
//! ```text
//! !include <file|directory|url>
//! ```
//!
//! ## Resolution
//!
//! Local targets are resolved against the parent directory of the file
//! currently being parsed. A file contributes its lines as one source
//! unit; a directory is expanded depth-first with its children visited
//! in sorted order, so the resulting registration sequence is
//! deterministic regardless of filesystem listing order. A remote target
//! is fetched in full, split into lines, and attributed to the file that
//! contained the directive, not to a new origin.
//!
//! ## Error Handling
//!
//! Malformed directives fail with [`GrammarError`]; anything that goes
//! wrong while locating or reading a target fails with [`IncludeError`].
//! Both are fatal to the enclosing parse. The one degradation is a
//! directory whose children cannot be listed, which contributes no
//! sources instead of failing.
//!
//! ## Component Structure
//!
//! * [`fetch`]: Remote retrieval behind the [`fetch::RemoteFetcher`] seam
//! * `fs`: Directory listing and path normalization
//! * `lines`: Line-splitting for files and fetched bodies

pub mod fetch;
mod fs;
mod lines;

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::context::{IncludeContext, SourceSink};
use crate::error::DslResult;
use crate::tokens::Tokens;
use fetch::{FetchError, HttpsFetcher, RemoteFetcher};

/// Expected form of the include directive.
const GRAMMAR: &str = "!include <file|directory|url>";

/// Token index of the include target; index 0 is the directive keyword.
const SOURCE_INDEX: usize = 1;

/// Prefix that classifies a target as remote.
const REMOTE_PREFIX: &str = "https://";

/// Error for a malformed include directive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The directive has no target.
    #[error("Expected: {expected}")]
    MissingToken { expected: &'static str },
    /// The directive has more than one argument.
    #[error("Too many tokens, expected: {expected}")]
    TooManyTokens { expected: &'static str },
}

/// Error while resolving an include target into source lines.
#[derive(Error, Debug)]
pub enum IncludeError {
    /// The resolved local path does not exist.
    #[error("{path} could not be found")]
    NotFound { path: String },
    /// A local file existed but could not be read.
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },
    /// The remote fetch failed.
    #[error("Failed to fetch {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: FetchError,
    },
}

pub type IncludeResult<T> = Result<T, IncludeError>;

/// Parser for the `!include` directive.
///
/// Resolution is synchronous and single-pass. Discovered sources are
/// registered on the supplied sink in traversal order and the return
/// value only reports success or failure; the registration sequence is
/// the externally observable contract.
pub struct IncludeParser {
    fetcher: Box<dyn RemoteFetcher>,
}

impl IncludeParser {
    /// Creates a parser that fetches remote targets over HTTPS with the
    /// given fetch configuration.
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            fetcher: Box::new(HttpsFetcher::new(config.clone())),
        }
    }

    /// Creates a parser with a custom remote fetcher.
    pub fn with_fetcher(fetcher: Box<dyn RemoteFetcher>) -> Self {
        Self { fetcher }
    }

    /// Parses one include directive against the given context.
    pub fn parse(&self, context: &mut IncludeContext, tokens: &Tokens) -> DslResult<()> {
        let parent_file = context.parent_file().map(Path::to_path_buf);
        self.resolve(parent_file.as_deref(), tokens, context)
    }

    /// Resolves one include directive against an arbitrary sink.
    ///
    /// `parent_file` is the file currently being parsed. Local targets
    /// resolve against its parent directory and are a no-op when it is
    /// `None`; remote content registers under it verbatim.
    pub fn resolve(
        &self,
        parent_file: Option<&Path>,
        tokens: &Tokens,
        sink: &mut dyn SourceSink,
    ) -> DslResult<()> {
        if tokens.has_more_than(SOURCE_INDEX) {
            return Err(GrammarError::TooManyTokens { expected: GRAMMAR }.into());
        }
        let Some(source) = tokens.get(SOURCE_INDEX) else {
            return Err(GrammarError::MissingToken { expected: GRAMMAR }.into());
        };

        if source.starts_with(REMOTE_PREFIX) {
            debug!(url = source, "resolving remote include");
            let body = self.fetcher.fetch(source).map_err(|e| IncludeError::FetchFailed {
                url: source.to_owned(),
                source: e,
            })?;
            sink.add_file(parent_file.map(Path::to_path_buf), lines::split_body(&body));
        } else if let Some(parent) = parent_file {
            let path = parent.parent().unwrap_or_else(|| Path::new("")).join(source);
            if !path.exists() {
                return Err(IncludeError::NotFound {
                    path: fs::normalized_absolute(&path).display().to_string(),
                }
                .into());
            }
            self.read_files(&path, sink)?;
        }
        Ok(())
    }

    /// Depth-first expansion of a local target.
    ///
    /// Recursion depth is bounded only by the directory tree itself;
    /// symlink cycles are not detected.
    fn read_files(&self, path: &Path, sink: &mut dyn SourceSink) -> IncludeResult<()> {
        if path.is_dir() {
            let Some(children) = fs::list_children_sorted(path) else {
                warn!(path = %path.display(), "directory could not be listed, contributing no sources");
                return Ok(());
            };
            for child in children {
                self.read_files(&child, sink)?;
            }
        } else {
            debug!(path = %path.display(), "reading included file");
            let lines = lines::read_lines(path).map_err(|e| IncludeError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            sink.add_file(Some(path.to_path_buf()), lines);
        }
        Ok(())
    }
}

impl Default for IncludeParser {
    fn default() -> Self {
        Self::new(&FetchConfig::default())
    }
}

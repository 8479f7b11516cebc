//! Error types for the shell core.
//!
//! Filesystem and argument errors never escape a command handler as
//! failures: each handler turns them into a single-line message prefixed
//! with the command name, mirroring conventional shell phrasing.

use thiserror::Error;

/// Failure modes of a virtual filesystem lookup or a command argument.
///
/// The `Display` impl carries only the phrase; callers prepend the command
/// name and the offending path (`cat: foo.txt: No such file or directory`).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShellError {
    /// A path segment does not exist.
    #[error("No such file or directory")]
    NotFound,
    /// The final segment exists but is not a directory.
    #[error("Not a directory")]
    NotADirectory,
    /// The final segment exists but is not a plain file.
    #[error("Not a regular file")]
    NotAFile,
    /// The final segment exists but is not executable. Deliberately worded
    /// as a permission failure, like a real shell would.
    #[error("Permission denied")]
    NotExecutable,
    /// Missing or malformed command argument.
    #[error("{0}")]
    BadArgument(String),
}

/// Content provider fetch failures. Always recovered by falling back to the
/// built-in dataset; surfaced only as a console warning.
#[derive(Clone, Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("JSON parse error: {0}")]
    Json(String),
    #[error("request timed out")]
    Timeout,
}

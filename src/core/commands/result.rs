//! Outcome types returned by the command interpreter.

/// Deferred terminal sequences the session layer plays asynchronously.
/// While one is running the prompt stays suppressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Animation {
    /// Fake intrusion sequence (`hack`).
    Hack,
    /// Fake port scan against the given target (`nmap`).
    Scan(String),
}

/// What a successfully dispatched command produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Text to print, `\n` line endings. `None` prints nothing (e.g.
    /// `clear`, or a `cd` that succeeded).
    pub output: Option<String>,
    /// An animation to start after the output is printed.
    pub animation: Option<Animation>,
    /// Clear and repaint banner plus prompt for the current screen size
    /// (`reset`). Supersedes `output` and `animation`.
    pub refresh: bool,
}

impl CommandResult {
    pub fn text(output: impl Into<String>) -> Self {
        CommandResult {
            output: Some(output.into()),
            ..CommandResult::default()
        }
    }

    pub fn silent() -> Self {
        CommandResult::default()
    }

    pub fn animate(animation: Animation) -> Self {
        CommandResult {
            animation: Some(animation),
            ..CommandResult::default()
        }
    }

    pub fn refresh() -> Self {
        CommandResult {
            refresh: true,
            ..CommandResult::default()
        }
    }
}

/// Result of dispatching one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Ran(CommandResult),
    /// The head token named no command; carries the token for the
    /// "Command not found" message.
    Unknown(String),
}

//! Command grammar and dispatch.
//!
//! `Command` is the parsed form of one input line; `Shell` in [`execute`]
//! interprets it against the virtual filesystem.

mod execute;
mod result;

pub use execute::Shell;
pub use result::{Animation, CommandResult, Dispatch};

/// Registered command names, in registration order. Tab completion reports
/// matches in this order.
pub const NAMES: [&str; 26] = [
    "pwd",
    "ls",
    "cd",
    "cat",
    "exec",
    "whoami",
    "projects",
    "experience",
    "education",
    "certs",
    "contact",
    "matrix",
    "hack",
    "clear",
    "sudo",
    "nmap",
    "help",
    "browse",
    "open",
    "goto",
    "email",
    "gui",
    "github",
    "linkedin",
    "twitter",
    "reset",
];

/// One parsed input line. Path-taking commands keep their argument raw;
/// resolution happens at execution time against the current directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Pwd,
    Ls(Option<String>),
    Cd(Option<String>),
    Cat(Option<String>),
    Exec(Option<String>),
    Whoami,
    Projects,
    Experience,
    Education,
    Certs,
    Contact,
    Matrix,
    Hack,
    Clear,
    Sudo(Vec<String>),
    Nmap(Option<String>),
    Help,
    Browse,
    Open(Option<String>),
    Goto(Option<String>),
    Email,
    Gui,
    Github,
    Linkedin,
    Twitter,
    Reset,
    /// Head token matched nothing; extra arguments are discarded.
    Unknown(String),
}

impl Command {
    /// Parse a trimmed input line. Tokens are split on spaces, empty tokens
    /// dropped; command names are case-sensitive. A head token starting
    /// with `./` is shorthand for `exec`.
    pub fn parse(line: &str) -> Option<Command> {
        let mut tokens = line.split(' ').filter(|t| !t.is_empty());
        let head = tokens.next()?;
        let args: Vec<&str> = tokens.collect();
        let first = args.first().map(|s| s.to_string());

        if let Some(target) = head.strip_prefix("./") {
            return Some(Command::Exec(Some(target.to_string())));
        }

        Some(match head {
            "pwd" => Command::Pwd,
            "ls" => Command::Ls(first),
            "cd" => Command::Cd(first),
            "cat" => Command::Cat(first),
            "exec" => Command::Exec(first),
            "whoami" => Command::Whoami,
            "projects" => Command::Projects,
            "experience" => Command::Experience,
            "education" => Command::Education,
            "certs" => Command::Certs,
            "contact" => Command::Contact,
            "matrix" => Command::Matrix,
            "hack" => Command::Hack,
            "clear" => Command::Clear,
            "sudo" => Command::Sudo(args.iter().map(|s| s.to_string()).collect()),
            "nmap" => Command::Nmap(first),
            "help" => Command::Help,
            "browse" => Command::Browse,
            "open" => Command::Open(first),
            "goto" => Command::Goto(first),
            "email" => Command::Email,
            "gui" => Command::Gui,
            "github" => Command::Github,
            "linkedin" => Command::Linkedin,
            "twitter" => Command::Twitter,
            "reset" => Command::Reset,
            other => Command::Unknown(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(Command::parse("pwd"), Some(Command::Pwd));
        assert_eq!(
            Command::parse("ls /bin"),
            Some(Command::Ls(Some("/bin".to_string())))
        );
        assert_eq!(Command::parse("cd"), Some(Command::Cd(None)));
    }

    #[test]
    fn test_parse_collapses_spaces() {
        assert_eq!(
            Command::parse("cat   about.txt"),
            Some(Command::Cat(Some("about.txt".to_string())))
        );
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn test_parse_exec_shorthand() {
        assert_eq!(
            Command::parse("./bin/hack"),
            Some(Command::Exec(Some("bin/hack".to_string())))
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            Command::parse("PWD"),
            Some(Command::Unknown("PWD".to_string()))
        );
    }

    #[test]
    fn test_parse_sudo_keeps_args() {
        assert_eq!(
            Command::parse("sudo su now"),
            Some(Command::Sudo(vec!["su".to_string(), "now".to_string()]))
        );
    }
}

//! Tab completion over command names and virtual filesystem paths.
//!
//! Candidates are whole replacement lines (`"cd /projects/"`), so applying
//! a completion is always `set_line`. Matching is case-sensitive.

use crate::core::commands::NAMES;
use crate::core::filesystem::Vfs;
use crate::core::path;

/// Commands whose first argument is a path.
const PATH_COMMANDS: [&str; 5] = ["cd", "ls", "cat", "open", "exec"];

/// Compute completion candidates for the current buffer.
///
/// Without a space the buffer is treated as a command-name prefix; with one,
/// the tail is completed as a path argument for path-taking commands (any
/// other command completes to nothing). Directories get a trailing `/` so a
/// follow-up Tab descends into them.
pub fn complete(buffer: &str, current_path: &str, vfs: &Vfs) -> Vec<String> {
    if buffer.is_empty() {
        return Vec::new();
    }

    let Some((cmd, arg)) = buffer.split_once(' ') else {
        return NAMES
            .iter()
            .filter(|name| name.starts_with(buffer))
            .map(|name| name.to_string())
            .collect();
    };

    if !PATH_COMMANDS.contains(&cmd) {
        return Vec::new();
    }
    let arg = arg.trim();

    // Split the argument at the last slash into the directory to search and
    // the name prefix to match.
    let (dir_path, prefix) = match arg.rfind('/') {
        None => (current_path.to_string(), arg),
        Some(0) => ("/".to_string(), &arg[1..]),
        Some(idx) => (
            path::normalize(&path::resolve(&arg[..idx], current_path)),
            &arg[idx + 1..],
        ),
    };

    let Ok(children) = vfs.dir_children(&dir_path) else {
        return Vec::new();
    };

    children
        .iter()
        .filter(|(name, _)| name.starts_with(prefix))
        .map(|(name, node)| {
            let full = if dir_path == "/" {
                format!("/{name}")
            } else {
                format!("{dir_path}/{name}")
            };
            let suffix = if node.is_directory() { "/" } else { "" };
            format!("{cmd} {full}{suffix}")
        })
        .collect()
}

/// Longest common prefix of the candidates, matched character by character.
pub fn common_prefix(candidates: &[String]) -> String {
    let Some(first) = candidates.first() else {
        return String::new();
    };
    let mut prefix: &str = first;
    for candidate in &candidates[1..] {
        let shared = prefix
            .char_indices()
            .zip(candidate.chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((i, a), _)| i + a.len_utf8());
        prefix = &prefix[..shared];
    }
    prefix.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::mock::MockHost;
    use crate::core::host::HostEffects;
    use crate::models::PortfolioData;
    use std::rc::Rc;

    fn vfs() -> Vfs {
        let json = r#"{
            "bio": {"name": "Jane", "title": "t", "description": "d", "skills": []},
            "projects": [{"name": "alpha", "description": "", "technologies": [], "githubLink": ""}],
            "certifications": [],
            "contact": {"email": "a@b.c", "uiportfilio": "", "github": "", "linkedin": "", "twitter": ""},
            "experiences": [],
            "education": []
        }"#;
        let data: Rc<PortfolioData> = Rc::new(serde_json::from_str(json).unwrap());
        let fx: Rc<dyn HostEffects> = Rc::new(MockHost::default());
        crate::core::content::portfolio_tree(&data, &fx)
    }

    #[test]
    fn test_command_completion_in_registration_order() {
        assert_eq!(complete("c", "/", &vfs()), vec!["cd", "cat", "certs", "contact", "clear"]);
        assert_eq!(complete("pw", "/", &vfs()), vec!["pwd"]);
        assert!(complete("zz", "/", &vfs()).is_empty());
    }

    #[test]
    fn test_empty_buffer_completes_nothing() {
        assert!(complete("", "/", &vfs()).is_empty());
    }

    #[test]
    fn test_path_completion_absolute() {
        assert_eq!(complete("ls /pro", "/", &vfs()), vec!["ls /projects/"]);
        assert_eq!(
            complete("cat /projects/al", "/", &vfs()),
            vec!["cat /projects/alpha"]
        );
    }

    #[test]
    fn test_path_completion_relative_to_current() {
        assert_eq!(complete("cat ab", "/", &vfs()), vec!["cat /about.txt"]);
        assert_eq!(
            complete("cat di", "/education", &vfs()),
            vec!["cat /education/diplomas.txt"]
        );
    }

    #[test]
    fn test_path_completion_invalid_directory() {
        assert!(complete("ls /nope/x", "/", &vfs()).is_empty());
    }

    #[test]
    fn test_non_path_command_gets_no_argument_completion() {
        assert!(complete("sudo s", "/", &vfs()).is_empty());
    }

    #[test]
    fn test_case_sensitive_matching() {
        assert!(complete("cat READ", "/", &vfs()).iter().any(|c| c.ends_with("README.md")));
        assert!(complete("cat read", "/", &vfs()).is_empty());
    }

    #[test]
    fn test_common_prefix() {
        let candidates = vec!["cat /contact.txt".to_string(), "cat /certifications/".to_string()];
        assert_eq!(common_prefix(&candidates), "cat /c");
        assert_eq!(common_prefix(&[]), "");
        assert_eq!(common_prefix(&["only".to_string()]), "only");
    }
}

//! In-memory virtual filesystem.
//!
//! The tree is immutable after construction. Directory children keep
//! insertion order, which is also the order `ls` prints them in. File and
//! executable leaves hold closures so content can be generated lazily from
//! the portfolio dataset.

use std::fmt;
use std::rc::Rc;

use crate::core::error::ShellError;
use crate::core::path;

/// A node in the virtual filesystem tree.
#[derive(Clone)]
pub enum FsNode {
    /// Named children in insertion order.
    Directory { children: Vec<(String, FsNode)> },
    /// A readable file; content is produced on every read.
    File { content: Rc<dyn Fn() -> String> },
    /// An executable; running it may produce output and/or side effects.
    Executable { action: Rc<dyn Fn() -> Option<String>> },
}

impl FsNode {
    pub fn dir(children: Vec<(String, FsNode)>) -> Self {
        FsNode::Directory { children }
    }

    pub fn file(content: impl Fn() -> String + 'static) -> Self {
        FsNode::File {
            content: Rc::new(content),
        }
    }

    pub fn executable(action: impl Fn() -> Option<String> + 'static) -> Self {
        FsNode::Executable {
            action: Rc::new(action),
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    pub fn is_executable(&self) -> bool {
        matches!(self, FsNode::Executable { .. })
    }
}

/// The content closures have no useful representation; print the variant
/// and, for directories, the child names.
impl fmt::Debug for FsNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsNode::Directory { children } => {
                let names: Vec<&str> = children.iter().map(|(name, _)| name.as_str()).collect();
                f.debug_tuple("Directory").field(&names).finish()
            }
            FsNode::File { .. } => f.write_str("File"),
            FsNode::Executable { .. } => f.write_str("Executable"),
        }
    }
}

/// The virtual filesystem: a root directory plus canonical-path lookup.
#[derive(Clone)]
pub struct Vfs {
    root: FsNode,
}

impl Vfs {
    /// `root` must be a directory node.
    pub fn new(root: FsNode) -> Self {
        debug_assert!(root.is_directory());
        Vfs { root }
    }

    /// Look up a canonical absolute path. The caller is expected to have
    /// run user input through `path::resolve` / `path::normalize` first;
    /// leftover `.` / `..` segments simply fail the walk.
    pub fn node(&self, canonical: &str) -> Result<&FsNode, ShellError> {
        let mut node = &self.root;
        for segment in path::segments(canonical) {
            match node {
                FsNode::Directory { children } => {
                    node = children
                        .iter()
                        .find(|(name, _)| name == segment)
                        .map(|(_, child)| child)
                        .ok_or(ShellError::NotFound)?;
                }
                _ => return Err(ShellError::NotFound),
            }
        }
        Ok(node)
    }

    /// Children of a directory, in insertion order.
    pub fn dir_children(&self, canonical: &str) -> Result<&[(String, FsNode)], ShellError> {
        match self.node(canonical)? {
            FsNode::Directory { children } => Ok(children),
            _ => Err(ShellError::NotADirectory),
        }
    }

    /// Content of a plain file.
    pub fn file_content(&self, canonical: &str) -> Result<String, ShellError> {
        match self.node(canonical)? {
            FsNode::File { content } => Ok(content()),
            _ => Err(ShellError::NotAFile),
        }
    }

    /// Run an executable node, returning whatever output it produces.
    pub fn run_executable(&self, canonical: &str) -> Result<Option<String>, ShellError> {
        match self.node(canonical)? {
            FsNode::Executable { action } => Ok(action()),
            _ => Err(ShellError::NotExecutable),
        }
    }

    pub fn is_directory(&self, canonical: &str) -> bool {
        self.node(canonical).is_ok_and(FsNode::is_directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vfs {
        Vfs::new(FsNode::dir(vec![
            (
                "about.txt".to_string(),
                FsNode::file(|| "hello".to_string()),
            ),
            (
                "projects".to_string(),
                FsNode::dir(vec![(
                    "p1".to_string(),
                    FsNode::dir(vec![(
                        "info.txt".to_string(),
                        FsNode::file(|| "p1 info".to_string()),
                    )]),
                )]),
            ),
            (
                "bin".to_string(),
                FsNode::dir(vec![(
                    "hack".to_string(),
                    FsNode::executable(|| Some("ran".to_string())),
                )]),
            ),
        ]))
    }

    #[test]
    fn test_lookup_nested() {
        let vfs = sample();
        assert_eq!(
            vfs.file_content("/projects/p1/info.txt").unwrap(),
            "p1 info"
        );
        assert!(vfs.is_directory("/projects/p1"));
        assert!(!vfs.is_directory("/about.txt"));
    }

    #[test]
    fn test_root_lists_in_insertion_order() {
        let vfs = sample();
        let names: Vec<&str> = vfs
            .dir_children("/")
            .unwrap()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["about.txt", "projects", "bin"]);
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let vfs = sample();
        assert_eq!(vfs.node("/nope").unwrap_err(), ShellError::NotFound);
        assert_eq!(
            vfs.node("/about.txt/deeper").unwrap_err(),
            ShellError::NotFound
        );
    }

    #[test]
    fn test_kind_mismatches() {
        let vfs = sample();
        assert_eq!(
            vfs.dir_children("/about.txt").unwrap_err(),
            ShellError::NotADirectory
        );
        assert_eq!(
            vfs.file_content("/projects").unwrap_err(),
            ShellError::NotAFile
        );
        assert_eq!(
            vfs.run_executable("/about.txt").unwrap_err(),
            ShellError::NotExecutable
        );
    }

    #[test]
    fn test_debug_names_variant_not_closure() {
        let vfs = sample();
        assert_eq!(format!("{:?}", vfs.node("/about.txt").unwrap()), "File");
        assert_eq!(format!("{:?}", vfs.node("/bin/hack").unwrap()), "Executable");
        assert_eq!(
            format!("{:?}", vfs.node("/projects/p1").unwrap()),
            "Directory([\"info.txt\"])"
        );
    }

    #[test]
    fn test_run_executable() {
        let vfs = sample();
        assert_eq!(
            vfs.run_executable("/bin/hack").unwrap(),
            Some("ran".to_string())
        );
    }
}

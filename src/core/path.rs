//! Path resolution for the virtual filesystem.
//!
//! All canonical paths are absolute: single-slash separated, starting with
//! `/`, no trailing slash except for the root itself. Resolution never
//! fails; whether the resulting path exists is decided later by VFS lookup.

/// Resolve a user-typed path against the current directory.
///
/// Absolute paths pass through untouched (consumers normalize them before
/// lookup). Relative paths are merged segment by segment: `.` is dropped,
/// `..` pops the working segment list (a pop at root is a no-op), anything
/// else is appended.
pub fn resolve(path: &str, current: &str) -> String {
    if path.starts_with('/') {
        return path.to_string();
    }

    let mut segments: Vec<&str> = current.split('/').filter(|s| !s.is_empty()).collect();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(part),
        }
    }

    join(&segments)
}

/// Normalize an absolute path: collapse repeated slashes and strip a single
/// trailing slash (root excepted). `.` / `..` segments are left alone; an
/// absolute path containing them simply fails the later lookup.
pub fn normalize(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    join(&segments)
}

/// Parent of a canonical absolute path (`/` is its own parent).
pub fn parent(path: &str) -> String {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    segments.pop();
    join(&segments)
}

fn join(segments: &[&str]) -> String {
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Split a canonical absolute path into its segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

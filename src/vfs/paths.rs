/*!
 * Virtual Path Resolution
 * String-based canonicalization against a current working directory
 */

/// Path separator for the virtual filesystem
pub const SEPARATOR: char = '/';

/// Root directory, always present
pub const ROOT: &str = "/";

/// Scratch directory expected by the engine (TMPDIR)
pub const TMP: &str = "/tmp";

/// Working directory for merge inputs and outputs
pub const WORK: &str = "/work";

/// Directories pre-created at filesystem construction
pub fn standard_directories() -> Vec<&'static str> {
    vec![TMP, WORK]
}

/// Resolve a path against a working directory into canonical absolute form.
///
/// Leading `/` marks the path absolute; anything else is joined to `cwd`.
/// Empty and `.` segments are dropped, `..` pops the last retained segment.
/// Popping at the root is a silent no-op, matching the host environment the
/// engine was built against; do not turn it into an error.
///
/// Pure function, idempotent on already-canonical input.
pub fn resolve(path: &str, cwd: &str) -> String {
    let joined = if path.starts_with(SEPARATOR) {
        path.to_string()
    } else {
        format!("{}/{}", cwd, path)
    };

    let mut parts: Vec<&str> = Vec::new();
    for part in joined.split(SEPARATOR) {
        match part {
            "" | "." => continue,
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    format!("/{}", parts.join("/"))
}

/// Parent of a canonical path (`/` is its own parent's root case: `None`)
pub fn parent(path: &str) -> Option<String> {
    if path == ROOT {
        return None;
    }
    match path.rfind(SEPARATOR) {
        Some(0) => Some(ROOT.to_string()),
        Some(idx) => Some(path[..idx].to_string()),
        None => None,
    }
}

/// Final component of a canonical path
pub fn file_name(path: &str) -> Option<&str> {
    if path == ROOT {
        return None;
    }
    path.rsplit(SEPARATOR).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute() {
        assert_eq!(resolve("/a/b", "/ignored"), "/a/b");
        assert_eq!(resolve("/a//b/", "/"), "/a/b");
        assert_eq!(resolve("/", "/"), "/");
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(resolve("x", "/a"), "/a/x");
        assert_eq!(resolve("x/../y", "/a"), "/a/y");
        assert_eq!(resolve("./x/.", "/a/b"), "/a/b/x");
    }

    #[test]
    fn test_resolve_parent_segments() {
        assert_eq!(resolve("..", "/a/b"), "/a");
        assert_eq!(resolve("../..", "/a/b"), "/");
    }

    #[test]
    fn test_resolve_pop_past_root_is_noop() {
        assert_eq!(resolve("..", "/"), "/");
        assert_eq!(resolve("../../../etc", "/"), "/etc");
    }

    #[test]
    fn test_resolve_idempotent() {
        for (p, cwd) in [("x/../y", "/a"), ("/a/./b//c", "/"), ("..", "/a/b")] {
            let once = resolve(p, cwd);
            assert_eq!(resolve(&once, cwd), once);
        }
    }

    #[test]
    fn test_parent_and_file_name() {
        assert_eq!(parent("/a/b"), Some("/a".to_string()));
        assert_eq!(parent("/a"), Some("/".to_string()));
        assert_eq!(parent("/"), None);
        assert_eq!(file_name("/a/b"), Some("b"));
        assert_eq!(file_name("/"), None);
    }
}

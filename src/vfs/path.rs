//! Path Normalization
//!
//! Pure string-level path handling: joining a path expression onto the
//! current directory and collapsing `.`/`..` segments. Lookup against the
//! tree lives in `node.rs`; nothing here touches nodes.

/// Split a path into its non-empty segments, discarding `.`.
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}

/// Resolve a path expression against the current directory.
///
/// An expression starting with `/` is absolute; anything else is joined
/// onto `current`. The result is normalized: `.` segments dropped, `..`
/// segments pop the preceding one (popping past the root is a no-op).
pub fn resolve(current: &str, expr: &str) -> String {
    let joined = if expr.starts_with('/') {
        expr.to_string()
    } else {
        format!("{}/{}", current, expr)
    };

    let mut stack: Vec<&str> = Vec::new();
    for segment in split_segments(&joined) {
        if segment == ".." {
            stack.pop();
        } else {
            stack.push(segment);
        }
    }

    if stack.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", stack.join("/"))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute() {
        assert_eq!(resolve("/docs", "/etc/conf"), "/etc/conf");
        assert_eq!(resolve("/docs", "/"), "/");
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(resolve("/", "docs"), "/docs");
        assert_eq!(resolve("/docs", "a/b"), "/docs/a/b");
    }

    #[test]
    fn test_resolve_dot() {
        assert_eq!(resolve("/docs", "."), "/docs");
        assert_eq!(resolve("/", "."), "/");
        assert_eq!(resolve("/docs", "./a/./b"), "/docs/a/b");
    }

    #[test]
    fn test_resolve_dotdot() {
        assert_eq!(resolve("/docs/a", ".."), "/docs");
        assert_eq!(resolve("/docs", "../etc"), "/etc");
        assert_eq!(resolve("/docs", "a/../b"), "/docs/b");
    }

    #[test]
    fn test_dotdot_past_root_is_noop() {
        assert_eq!(resolve("/", ".."), "/");
        assert_eq!(resolve("/", "../../.."), "/");
        assert_eq!(resolve("/docs", "../../../etc"), "/etc");
    }

    #[test]
    fn test_resolve_idempotent() {
        for p in ["/", "/docs", "/docs/a/b"] {
            assert_eq!(resolve("/", p), p);
            assert_eq!(resolve(p, "."), p);
        }
    }

    #[test]
    fn test_empty_segments_collapse() {
        assert_eq!(resolve("/", "docs//a///b"), "/docs/a/b");
        assert_eq!(resolve("/docs/", "a"), "/docs/a");
    }
}

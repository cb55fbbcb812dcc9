use std::path::PathBuf;

/// Turn a request path into a relative path under the serving root.
/// Empty and `.` segments are dropped; any `..` segment rejects the whole
/// path. Segments are taken literally, with no percent-decoding.
pub fn sanitize(path: &str) -> Option<PathBuf> {
    let mut rel = PathBuf::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            segment if segment.contains('\\') => return None,
            segment => rel.push(segment),
        }
    }
    Some(rel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_empty_and_dot_segments() {
        assert_eq!(sanitize("/"), Some(PathBuf::new()));
        assert_eq!(sanitize("/a/b.css"), Some(PathBuf::from("a/b.css")));
        assert_eq!(sanitize("//a///b"), Some(PathBuf::from("a/b")));
        assert_eq!(sanitize("/./a/."), Some(PathBuf::from("a")));
        assert_eq!(sanitize("/sub/"), Some(PathBuf::from("sub")));
    }

    #[test]
    fn rejects_parent_traversal() {
        assert_eq!(sanitize("/../etc/passwd"), None);
        assert_eq!(sanitize("/a/../b"), None);
        assert_eq!(sanitize("/.."), None);
        assert_eq!(sanitize("/a\\..\\b"), None);
    }

    #[test]
    fn keeps_encoded_sequences_literal() {
        // `%2e%2e` stays a literal file name, which simply won't exist.
        assert_eq!(
            sanitize("/%2e%2e/secret"),
            Some(PathBuf::from("%2e%2e/secret"))
        );
    }
}

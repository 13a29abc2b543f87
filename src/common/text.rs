//! Text manipulation utilities shared by the analyzers

use std::path::Path;

/// Splits on `'\n'` exactly, so `""` yields one empty line and a trailing
/// newline yields a trailing empty line. Line-ratio heuristics depend on it.
pub fn split_lines(code: &str) -> Vec<&str> {
    code.split('\n').collect()
}

/// True for a trimmed line that opens an `import x` or `from x import y` statement.
pub fn is_import_line(trimmed: &str) -> bool {
    trimmed.starts_with("import ") || trimmed.starts_with("from ")
}

/// Trimmed import lines of a file, in source order.
pub fn import_lines(code: &str) -> Vec<&str> {
    code.split('\n')
        .map(str::trim)
        .filter(|line| is_import_line(line))
        .collect()
}

/// Number of keywords that occur at least once in `haystack`.
pub fn count_present(haystack: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| haystack.contains(*k)).count()
}

pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Lowercase-ness with the semantics of Python's `str.islower`: at least one
/// cased character and no uppercase characters.
pub fn is_all_lowercase(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    cased
}

/// File name without directory or final extension, e.g. `src/user_service.go` -> `user_service`.
pub fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_keeps_empty_segments() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_import_lines_are_trimmed() {
        let code = "import os\n    from typing import List\nx = 1\nimported = 2";
        assert_eq!(import_lines(code), vec!["import os", "from typing import List"]);
    }

    #[test]
    fn test_count_present_counts_distinct_keywords() {
        let text = "the repository uses a repo and a dao";
        assert_eq!(count_present(text, &["repository", "repo", "dao", "data_access"]), 3);
    }

    #[test]
    fn test_is_all_lowercase() {
        assert!(is_all_lowercase("get_user"));
        assert!(is_all_lowercase("get_2"));
        assert!(!is_all_lowercase("get_User"));
        assert!(!is_all_lowercase("_"));
        assert!(!is_all_lowercase("__"));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("src/services/user_service.go"), "user_service");
        assert_eq!(file_stem("Makefile"), "Makefile");
        assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
        assert_eq!(file_stem(""), "");
    }
}

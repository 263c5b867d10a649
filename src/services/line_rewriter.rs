use std::borrow::Cow;
use std::fs;
use std::path::Path;
use crate::models::UpdateReport;
use crate::utils::error::{ReleaseError, Result};
use crate::utils::fs_utils::write_atomically;

/// A single-pass, line-oriented text transformation.
///
/// Implementors carry whatever small state they need between lines. Each
/// line is handed over with its terminator attached so untouched lines can be
/// returned borrowed and re-emitted byte for byte.
pub trait LineRewriter {
    fn rewrite_line<'a>(&mut self, line: &'a str) -> Cow<'a, str>;
}

/// Result of running a [`LineRewriter`] over a whole text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub contents: String,
    pub lines_rewritten: usize,
}

/// Fold a rewriter over every line of `contents`
pub fn rewrite_lines<R: LineRewriter>(contents: &str, mut rewriter: R) -> Rewritten {
    let mut output = String::with_capacity(contents.len());
    let mut lines_rewritten = 0;

    for line in contents.split_inclusive('\n') {
        let new_line = rewriter.rewrite_line(line);
        if new_line != line {
            lines_rewritten += 1;
        }
        output.push_str(&new_line);
    }

    Rewritten {
        contents: output,
        lines_rewritten,
    }
}

/// Read `path`, rewrite it and atomically replace it when the text changed
pub fn rewrite_file<R: LineRewriter>(path: &Path, rewriter: R) -> Result<UpdateReport> {
    let original = fs::read_to_string(path).map_err(|e| ReleaseError::file_access(path, e))?;
    let rewritten = rewrite_lines(&original, rewriter);

    let changed = rewritten.contents != original;
    if changed {
        write_atomically(path, rewritten.contents.as_bytes())?;
    }

    Ok(UpdateReport {
        path: path.to_path_buf(),
        lines_rewritten: rewritten.lines_rewritten,
        changed,
    })
}

/// Split a line into its text and its terminator (`\n`, `\r\n` or nothing)
pub fn split_terminator(line: &str) -> (&str, &str) {
    let body = line.strip_suffix('\n').map_or(line, |l| l.strip_suffix('\r').unwrap_or(l));
    line.split_at(body.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Shout;

    impl LineRewriter for Shout {
        fn rewrite_line<'a>(&mut self, line: &'a str) -> Cow<'a, str> {
            if line.starts_with('!') {
                Cow::Owned(line.to_uppercase())
            } else {
                Cow::Borrowed(line)
            }
        }
    }

    #[test]
    fn test_rewrite_lines_keeps_terminators() {
        let input = "keep\r\n!loud\nkeep\n!tail";
        let rewritten = rewrite_lines(input, Shout);
        assert_eq!(rewritten.contents, "keep\r\n!LOUD\nkeep\n!TAIL");
        assert_eq!(rewritten.lines_rewritten, 2);
    }

    #[test]
    fn test_rewrite_lines_empty_input() {
        let rewritten = rewrite_lines("", Shout);
        assert_eq!(rewritten.contents, "");
        assert_eq!(rewritten.lines_rewritten, 0);
    }

    #[test]
    fn test_split_terminator() {
        assert_eq!(split_terminator("abc\n"), ("abc", "\n"));
        assert_eq!(split_terminator("abc\r\n"), ("abc", "\r\n"));
        assert_eq!(split_terminator("abc"), ("abc", ""));
        assert_eq!(split_terminator("\n"), ("", "\n"));
    }

    #[test]
    fn test_rewrite_file_unchanged_is_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quiet.txt");
        fs::write(&path, "nothing here\n").unwrap();

        let report = rewrite_file(&path, Shout).unwrap();
        assert!(!report.changed);
        assert_eq!(report.lines_rewritten, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "nothing here\n");
    }

    #[test]
    fn test_rewrite_file_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.txt");

        let err = rewrite_file(&path, Shout).unwrap_err();
        assert!(matches!(err, ReleaseError::FileAccess { path: ref p, .. } if p == &path));
    }
}

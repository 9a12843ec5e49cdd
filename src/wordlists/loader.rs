//! Word list loading utilities
//!
//! Lists are read as raw lines; length and alphabet filtering happens when the
//! dictionary is built.

use anyhow::{Context, Result, ensure};
use std::fs;
use std::path::Path;

/// Load a word list from a file, one word per line
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no words. An empty
/// list would otherwise read as universe mode.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    let words = words_from_text(&content);
    ensure!(!words.is_empty(), "word list {} has no words", path.display());
    Ok(words)
}

/// Split text into trimmed, lowercased, non-empty lines
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_text_trims_and_skips_blank_lines() {
        let words = words_from_text("crane\n  Slate \n\nirate\r\n");
        assert_eq!(words, ["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_text_keeps_other_lengths() {
        let words = words_from_text("crane\ntoolong\nabc\n");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn words_from_text_empty() {
        assert!(words_from_text("").is_empty());
    }

    fn temp_list(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("wordle_engine_{}_{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_list("words.txt", "crane\nSlate\n");
        assert_eq!(load_from_file(&path).unwrap(), ["crane", "slate"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn load_from_blank_file_fails() {
        for (name, content) in [("empty.txt", ""), ("blank.txt", "\n  \n\r\n")] {
            let path = temp_list(name, content);
            let err = load_from_file(&path).unwrap_err();
            assert!(err.to_string().contains("has no words"), "{err}");
            fs::remove_file(path).unwrap();
        }
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("/nonexistent/words.txt").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}

//! Reading the arrow function fragment handed to a command.

use miette::{IntoDiagnostic, Result};
use std::io::Read;
use std::path::Path;

/// Read the source fragment from `--text`, a file, or stdin.
///
/// A file argument of `-` means stdin.
pub fn read_source(file: Option<&Path>, text: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    match file {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading fragment from file");
            std::fs::read_to_string(path)
                .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))
        }
        _ => {
            tracing::debug!("reading fragment from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).into_diagnostic()?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_text_takes_precedence() {
        let source = read_source(Some(Path::new("/does/not/exist")), Some("x => (x)")).unwrap();
        assert_eq!(source, "x => (x)");
    }

    #[test]
    fn test_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fn.js");
        std::fs::write(&path, "(x) => (\n  x\n)\n").unwrap();

        assert_eq!(read_source(Some(&path), None).unwrap(), "(x) => (\n  x\n)\n");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = read_source(Some(&dir.path().join("missing.js")), None).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}

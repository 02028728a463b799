//! Reading payloads from a file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Reads the whole payload. `None` or `-` means stdin.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"errors":[]}"#).unwrap();

        let bytes = read_input(Some(file.path())).unwrap();
        assert_eq!(bytes, br#"{"errors":[]}"#);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let err = read_input(Some(&missing)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}

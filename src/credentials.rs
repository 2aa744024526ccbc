use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const TOKEN_FILE_NAME: &str = "access_token";

/// Value sent when no credential is stored. The request still goes out with
/// `Authorization: Bearer null`; rejecting it is the server's job.
pub const MISSING_TOKEN: &str = "null";

fn token_file() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "reelboard", "reelboard")
        .map(|dirs| dirs.config_dir().join(TOKEN_FILE_NAME))
}

fn read_token_from(path: &Path) -> Option<String> {
    let raw = fs::read_to_string(path).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn write_token_to(path: &Path, token: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, token.trim())
}

/// Stored credential, if any. Read at call time, never cached.
pub fn load_token() -> Option<String> {
    token_file().and_then(|path| read_token_from(&path))
}

/// Credential for the Authorization header: the stored token, or the
/// literal `"null"` when nothing is stored.
pub fn bearer_token() -> String {
    load_token().unwrap_or_else(|| MISSING_TOKEN.to_string())
}

/// Persist the credential string. No validation; the server decides whether
/// it is any good.
pub fn store_token(token: &str) -> io::Result<()> {
    let path = token_file().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
    })?;
    write_token_to(&path, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("access_token");
        assert!(read_token_from(&path).is_none());
    }

    #[test]
    fn test_read_empty_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("access_token");
        std::fs::write(&path, "  \n").unwrap();
        assert!(read_token_from(&path).is_none());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("access_token");
        write_token_to(&path, "  eyJhbGciOi.example.token \n").unwrap();
        assert_eq!(
            read_token_from(&path).as_deref(),
            Some("eyJhbGciOi.example.token")
        );
    }

    #[test]
    fn test_missing_token_is_literal_null() {
        // A request with no stored credential carries `Bearer null`.
        assert_eq!(MISSING_TOKEN, "null");
    }
}

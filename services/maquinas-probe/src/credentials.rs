use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use svckit::diagnostics::{CredentialStore, MemoryCredentialStore};
use svckit::FrotaError;

/// A JSON object of key/value pairs, as exported from the browser's
/// localStorage. A missing file means nothing is stored.
#[derive(Debug, Clone)]
pub struct StorageFile {
    path: PathBuf,
}

impl StorageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for StorageFile {
    fn read_token(&self, key: &str) -> Result<Option<String>, FrotaError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(FrotaError::Storage(format!("{}: {}", self.path.display(), e)));
            }
        };

        let entries: HashMap<String, String> = serde_json::from_str(&contents)
            .map_err(|e| FrotaError::Storage(format!("{}: {}", self.path.display(), e)))?;

        Ok(entries.get(key).cloned())
    }
}

/// Where the probe takes its token from. An explicit token wins over the
/// storage file.
#[derive(Debug, Clone)]
pub enum TokenSource {
    Inline(MemoryCredentialStore),
    File(StorageFile),
}

impl TokenSource {
    pub fn resolve(token: Option<String>, token_key: &str, storage_file: impl Into<PathBuf>) -> Self {
        match token {
            Some(token) => TokenSource::Inline(MemoryCredentialStore::with_token(token_key, &token)),
            None => TokenSource::File(StorageFile::new(storage_file)),
        }
    }
}

impl CredentialStore for TokenSource {
    fn read_token(&self, key: &str) -> Result<Option<String>, FrotaError> {
        match self {
            TokenSource::Inline(store) => store.read_token(key),
            TokenSource::File(store) => store.read_token(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("maquinas-probe-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_storage_file_is_empty() {
        let store = StorageFile::new(temp_path("absent"));
        assert_eq!(store.read_token("accessToken").unwrap(), None);
    }

    #[test]
    fn test_reads_token_from_storage_file() {
        let path = temp_path("present");
        fs::write(&path, r#"{"accessToken":"abc123","theme":"dark"}"#).unwrap();

        let token = StorageFile::new(&path).read_token("accessToken").unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_malformed_storage_file_is_an_error() {
        let path = temp_path("malformed");
        fs::write(&path, "not json").unwrap();

        let result = StorageFile::new(&path).read_token("accessToken");
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(FrotaError::Storage(_))));
    }

    #[test]
    fn test_inline_token_wins() {
        let source = TokenSource::resolve(Some("inline".to_string()), "accessToken", temp_path("unused"));
        assert_eq!(source.read_token("accessToken").unwrap().as_deref(), Some("inline"));
    }
}

//! Token persistence — `TokenStore` trait plus file and in-memory backends.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::auth::CachedToken;

/// Durable storage for the single cached token record.
///
/// `load` is infallible by design: any read or parse failure is a cache
/// miss, not an error, so a corrupt file can never wedge the SDK.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<CachedToken>;
    fn save(&self, token: &CachedToken) -> io::Result<()>;
}

/// File-backed store: one JSON object, overwritten wholesale on refresh.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<CachedToken> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read token cache");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Malformed token cache, refreshing");
                None
            }
        }
    }

    fn save(&self, token: &CachedToken) -> io::Result<()> {
        let json = serde_json::to_vec(token)?;
        std::fs::write(&self.path, json)
    }
}

/// In-memory store for tests and ephemeral processes.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<CachedToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the store with a record.
    pub fn with_token(token: CachedToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<CachedToken> {
        self.token.lock().ok()?.clone()
    }

    fn save(&self, token: &CachedToken) -> io::Result<()> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> CachedToken {
        CachedToken {
            token: "tok".to_string(),
            expires_at: Utc::now(),
        }
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token.json"));
        assert!(store.load().is_none());

        let token = sample();
        store.save(&token).unwrap();
        assert_eq!(store.load(), Some(token));
    }

    #[test]
    fn file_store_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token.json"));
        store.save(&sample()).unwrap();

        let newer = CachedToken {
            token: "newer".to_string(),
            expires_at: Utc::now(),
        };
        store.save(&newer).unwrap();
        assert_eq!(store.load().unwrap().token, "newer");
    }

    #[test]
    fn malformed_file_is_a_cache_miss() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, b"{ not json").unwrap();
        assert!(FileTokenStore::new(&path).load().is_none());
    }

    #[test]
    fn missing_fields_are_a_cache_miss() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, br#"{"token": "only-a-token"}"#).unwrap();
        assert!(FileTokenStore::new(&path).load().is_none());
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());
        let token = sample();
        store.save(&token).unwrap();
        assert_eq!(store.load(), Some(token));
    }
}

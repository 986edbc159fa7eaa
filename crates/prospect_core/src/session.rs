//! Session identity and its durable store.
//!
//! The remote service mints the session id once per conversation; we only
//! keep it on disk so a restarted client resumes the same conversation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Opaque conversation identifier assigned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize)]
struct StoredSession {
    session_id: String,
}

/// Best-effort durable storage for the session id (a small JSON file).
/// A missing or unreadable file means first use, never an error.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.prospect/session.json`.
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Session("could not resolve home directory".to_string()))?;
        Ok(Self::new(home.join(".prospect").join("session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load a previously stored session id, if any.
    pub fn load(&self) -> Option<SessionId> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let stored: StoredSession = serde_json::from_str(&raw).ok()?;
        if stored.session_id.is_empty() {
            return None;
        }
        Some(SessionId(stored.session_id))
    }

    pub fn save(&self, id: &SessionId) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let stored = StoredSession {
            session_id: id.0.clone(),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }

    /// Remove the stored id. Clearing an absent file is not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new("abc-123");
        assert_eq!(format!("{}", id), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&SessionId::new("abc-123")).unwrap();
        assert_eq!(store.load(), Some(SessionId::new("abc-123")));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));
        store.save(&SessionId::new("abc")).unwrap();
        assert!(store.load().is_some());
    }

    #[test]
    fn test_clear_removes_stored_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&SessionId::new("abc")).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_absent_file_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).clear().is_ok());
    }

    #[test]
    fn test_load_corrupt_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "not json").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_load_empty_id_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{"session_id":""}"#).unwrap();
        assert!(store.load().is_none());
    }
}

// food-client/src/session/storage.rs
// Session storage - JSON file

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the session inside the session directory
pub const SESSION_FILE: &str = "session.json";

/// Everything the client needs to resume a browser-like session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Backend the cookies belong to
    pub base_url: String,
    #[serde(default)]
    pub cookies: BTreeMap<String, String>,
    #[serde(default)]
    pub csrf_token: Option<String>,
}

impl SessionState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty() && self.csrf_token.is_none()
    }

    /// A session is only reused against the backend it was created for.
    pub fn belongs_to(&self, base_url: &str) -> bool {
        self.base_url.trim_end_matches('/') == base_url.trim_end_matches('/')
    }
}

/// Session storage
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(SESSION_FILE),
        }
    }

    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn save(&self, state: &SessionState) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)
    }

    /// Stored session, `None` when missing or unreadable
    pub fn load(&self) -> Option<SessionState> {
        if !self.path.exists() {
            return None;
        }
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read session file");
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring corrupt session file");
                None
            }
        }
    }

    /// Stored session for `base_url`, ignoring one left by another backend
    pub fn load_for(&self, base_url: &str) -> Option<SessionState> {
        let state = self.load()?;
        if state.belongs_to(base_url) {
            Some(state)
        } else {
            tracing::debug!(stored = %state.base_url, base_url, "Stored session belongs to another backend");
            None
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_delete() {
        let dir = TempDir::new().unwrap();
        let storage = SessionStorage::new(dir.path().join("nested"));
        assert!(!storage.exists());
        assert!(storage.load().is_none());

        let mut state = SessionState::new("http://localhost:8081");
        state.cookies.insert("session".into(), "abc".into());
        state.csrf_token = Some("tok".into());

        storage.save(&state).unwrap();
        assert!(storage.exists());
        assert_eq!(storage.path(), dir.path().join("nested").join(SESSION_FILE));
        assert_eq!(storage.load(), Some(state.clone()));

        storage.delete().unwrap();
        assert!(!storage.exists());
        // Deleting twice is fine
        storage.delete().unwrap();
    }

    #[test]
    fn test_session_of_other_backend_is_ignored() {
        let dir = TempDir::new().unwrap();
        let storage = SessionStorage::new(dir.path());
        storage.save(&SessionState::new("http://a.local/")).unwrap();

        assert!(storage.load_for("http://a.local").is_some());
        assert!(storage.load_for("http://b.local").is_none());
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        let storage = SessionStorage::new(dir.path());
        std::fs::write(storage.path(), "{not json").unwrap();
        assert!(storage.load().is_none());
    }
}

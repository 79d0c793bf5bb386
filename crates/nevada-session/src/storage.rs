//! Persisted session storage.
//!
//! The token lives in `session_token` as a bare string and the profile in
//! `session_user.json`; the two files mirror the two local-storage keys the
//! browser console used. Both are written with 600 permissions on Unix.

use crate::paths::NevadaPaths;
use nevada_core::auth::User;
use nevada_core::Result;
use std::fs;
use std::path::PathBuf;

/// File-backed storage for the bearer token and user profile.
pub struct SessionStorage {
    token_path: PathBuf,
    user_path: PathBuf,
}

impl SessionStorage {
    /// Creates storage at the default Nevada config location.
    pub fn new() -> Result<Self> {
        Ok(Self {
            token_path: NevadaPaths::token_file()?,
            user_path: NevadaPaths::user_file()?,
        })
    }

    /// Creates storage rooted at a custom directory (for testing).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            token_path: dir.join("session_token"),
            user_path: dir.join("session_user.json"),
        }
    }

    /// Loads the persisted token and user, if both survive on disk.
    ///
    /// A missing or unreadable pair is reported as `None` rather than an
    /// error; a stale half-pair (one file without the other) also counts as
    /// no session.
    pub fn load(&self) -> Option<(String, User)> {
        let token = fs::read_to_string(&self.token_path).ok()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return None;
        }
        let user_json = fs::read_to_string(&self.user_path).ok()?;
        let user = serde_json::from_str(&user_json).ok()?;
        Some((token, user))
    }

    /// Persists both halves of the session.
    pub fn save(&self, token: &str, user: &User) -> Result<()> {
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.token_path, token)?;
        fs::write(&self.user_path, serde_json::to_string_pretty(user)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            for path in [&self.token_path, &self.user_path] {
                fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
            }
        }

        Ok(())
    }

    /// Removes both files. Missing files are not an error.
    pub fn clear(&self) -> Result<()> {
        for path in [&self.token_path, &self.user_path] {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Path to the token file.
    pub fn token_path(&self) -> &PathBuf {
        &self.token_path
    }

    /// Path to the user profile file.
    pub fn user_path(&self) -> &PathBuf {
        &self.user_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_user() -> User {
        User {
            id: "u1".into(),
            email: Some("owner@warung.id".into()),
            name: Some("Owner".into()),
            role: Some("owner".into()),
            umkm_id: Some("m1".into()),
            umkm_name: Some("Warung Nevada".into()),
        }
    }

    #[test]
    fn test_load_without_files_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SessionStorage::with_dir(temp_dir.path());
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SessionStorage::with_dir(temp_dir.path());

        storage.save("tok-abc", &sample_user()).unwrap();
        let (token, user) = storage.load().unwrap();
        assert_eq!(token, "tok-abc");
        assert_eq!(user, sample_user());
    }

    #[test]
    fn test_clear_removes_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SessionStorage::with_dir(temp_dir.path());

        storage.save("tok", &sample_user()).unwrap();
        storage.clear().unwrap();
        assert!(!storage.token_path().exists());
        assert!(!storage.user_path().exists());
        assert!(storage.load().is_none());

        // Clearing an already-empty store is fine.
        storage.clear().unwrap();
    }

    #[test]
    fn test_half_pair_counts_as_no_session() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SessionStorage::with_dir(temp_dir.path());

        fs::write(storage.token_path(), "tok").unwrap();
        assert!(storage.load().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_files_are_user_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let storage = SessionStorage::with_dir(temp_dir.path());
        storage.save("tok", &sample_user()).unwrap();

        let mode = fs::metadata(storage.token_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

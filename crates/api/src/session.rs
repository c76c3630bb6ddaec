//! The signed-in identity and its persisted cache.
//!
//! The store owns exactly one session record: in memory for the process
//! lifetime, mirrored to a single JSON file so a restart resumes the same
//! identity. It is constructed once at startup (`load`) and torn down by
//! `sign_out` — no ambient global.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use telas_data::models::UserAccount;

/// Holds the signed-in user's identity.
pub struct SessionStore {
    cache_path: PathBuf,
    current: RwLock<Option<UserAccount>>,
}

impl SessionStore {
    /// Initialize the store from the cache file.
    ///
    /// A missing file means "logged out". A file that fails to parse is
    /// discarded and likewise means "logged out" — never an error.
    pub fn load(cache_path: PathBuf) -> Self {
        let current = match fs::read_to_string(&cache_path) {
            Ok(json) => match serde_json::from_str::<UserAccount>(&json) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(path = %cache_path.display(), error = %e, "discarding malformed session cache");
                    let _ = fs::remove_file(&cache_path);
                    None
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %cache_path.display(), error = %e, "could not read session cache");
                None
            }
        };

        Self {
            cache_path,
            current: RwLock::new(current),
        }
    }

    /// The signed-in user, if any.
    pub fn current(&self) -> Option<UserAccount> {
        self.current
            .read()
            .expect("session lock never poisoned")
            .clone()
    }

    /// Record a successful login: in memory and in the cache file.
    pub fn sign_in(&self, user: UserAccount) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&user)?;
        fs::write(&self.cache_path, json)?;
        *self.current.write().expect("session lock never poisoned") = Some(user);
        Ok(())
    }

    /// Clear the session and remove the cache file.
    pub fn sign_out(&self) {
        *self.current.write().expect("session lock never poisoned") = None;
        match fs::remove_file(&self.cache_path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.cache_path.display(), error = %e, "could not remove session cache");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use telas_core::role::Role;

    use super::*;

    fn account() -> UserAccount {
        UserAccount {
            id: uuid::Uuid::new_v4(),
            nome: "Ana Souza".into(),
            login: "ana".into(),
            perfil: Role::Tecnico,
            ativo: true,
            meta_semanal: Some(5),
        }
    }

    #[test]
    fn starts_logged_out_without_cache_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = SessionStore::load(dir.path().join("session.json"));
        assert!(store.current().is_none());
    }

    #[test]
    fn sign_in_round_trips_through_the_cache_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let user = account();

        let store = SessionStore::load(path.clone());
        store.sign_in(user.clone()).unwrap();
        assert_eq!(store.current(), Some(user.clone()));

        // A fresh store (new process) resumes the same identity.
        let resumed = SessionStore::load(path);
        assert_eq!(resumed.current(), Some(user));
    }

    #[test]
    fn corrupted_cache_means_logged_out_and_is_discarded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SessionStore::load(path.clone());
        assert!(store.current().is_none());
        assert!(!path.exists(), "malformed cache file must be removed");
    }

    #[test]
    fn sign_out_clears_memory_and_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(path.clone());
        store.sign_in(account()).unwrap();
        assert!(path.exists());

        store.sign_out();
        assert!(store.current().is_none());
        assert!(!path.exists());

        // Signing out twice is harmless.
        store.sign_out();
    }
}

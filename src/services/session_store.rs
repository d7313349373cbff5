//! Client-local session persistence.
//!
//! A session is the stored credential plus the role label last resolved from
//! it, kept under two fixed keys. Backends only provide key/value primitives;
//! the session operations on top are shared.

use dashmap::DashMap;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

use crate::constants::{ROLE_KEY, TOKEN_KEY};
use crate::models::Role;

/// Persistent string storage holding the session.
///
/// Operations are synchronous and infallible from the caller's point of view:
/// a storage failure is logged and otherwise behaves like a missing key.
pub trait SessionStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);

    /// Persist the credential and its role, overwriting any previous session.
    fn save(&self, credential: &str, role: Role) {
        self.set_item(TOKEN_KEY, credential);
        self.set_item(ROLE_KEY, role.as_str());
    }

    /// The stored credential, if a session exists.
    fn read(&self) -> Option<String> {
        self.get_item(TOKEN_KEY)
    }

    /// The stored role label, `Unknown` when absent.
    fn stored_role(&self) -> Role {
        self.get_item(ROLE_KEY)
            .map(|label| Role::from_label(&label))
            .unwrap_or_default()
    }

    /// Remove both session keys.
    fn clear(&self) {
        self.remove_item(TOKEN_KEY);
        self.remove_item(ROLE_KEY);
    }
}

/// In-memory session storage. Lives as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: DashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).map(|v| v.value().clone())
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.remove(key);
    }
}

/// Session storage backed by a JSON object file, so a session survives
/// between runs of the command-line client.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!("Failed to read session file {}: {}", self.path.display(), e);
                return BTreeMap::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring malformed session file {}: {}", self.path.display(), e);
            BTreeMap::new()
        })
    }

    /// Write the whole map through a temporary file and rename it into place.
    fn store(&self, items: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create session directory {}: {}", parent.display(), e);
                return;
            }
        }

        let tmp = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        let result = serde_json::to_vec_pretty(items)
            .map_err(std::io::Error::from)
            .and_then(|bytes| fs::write(&tmp, bytes))
            .and_then(|_| fs::rename(&tmp, &self.path));

        match result {
            Ok(()) => debug!("Session file {} updated", self.path.display()),
            Err(e) => {
                warn!("Failed to write session file {}: {}", self.path.display(), e);
                let _ = fs::remove_file(&tmp);
            }
        }
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut items = self.load();
        f(&mut items);
        self.store(&items);
    }
}

impl SessionStore for FileSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        });
    }

    fn remove_item(&self, key: &str) {
        self.update(|items| {
            items.remove(key);
        });
    }
}

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::logging;

pub const THEME_KEY: &str = "navhub.theme";
pub const LOCALE_KEY: &str = "navhub.locale";

/// Durable key-value preferences, the crate's localStorage analogue.
/// Injected into the theme and locale controllers so tests run in memory.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Flat JSON object file persisted on every write. Read errors fall back to
/// an empty store; write errors are logged and swallowed so a broken prefs
/// file never takes the app down.
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: &Path) -> Self {
        let entries = std::fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let encoded = match serde_json::to_string_pretty(&self.entries) {
            Ok(encoded) => encoded,
            Err(error) => {
                logging::error(&format!("failed to encode preferences: {error}"));
                return;
            }
        };
        if let Err(error) = std::fs::write(&self.path, encoded) {
            logging::warn(&format!(
                "failed to persist preferences to {}: {error}",
                self.path.display()
            ));
        }
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }
}

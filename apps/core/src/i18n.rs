use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::model::Locale;
use crate::storage::{KvStore, LOCALE_KEY};

#[derive(Debug)]
pub enum LocaleError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, String),
}

impl Display for LocaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, error) => write!(f, "failed to read {}: {error}", path.display()),
            Self::Parse(path, error) => write!(f, "failed to parse {}: {error}", path.display()),
        }
    }
}

impl std::error::Error for LocaleError {}

/// A nested message tree; leaves are strings, branches are named groups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Group(BTreeMap<String, Message>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageBundle {
    messages: BTreeMap<String, Message>,
}

impl MessageBundle {
    /// Dotted-path lookup, e.g. `nav.search.placeholder`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut parts = key.split('.');
        let first = parts.next()?;
        let mut current = self.messages.get(first)?;

        for part in parts {
            match current {
                Message::Group(group) => current = group.get(part)?,
                Message::Text(_) => return None,
            }
        }

        match current {
            Message::Text(text) => Some(text),
            Message::Group(_) => None,
        }
    }
}

/// All locale bundles found in the locales directory (`<locale>.json5`).
#[derive(Debug)]
pub struct LocalePack {
    bundles: BTreeMap<String, MessageBundle>,
}

impl LocalePack {
    pub fn load(dir: &Path) -> Result<Self, LocaleError> {
        if !dir.is_dir() {
            return Err(LocaleError::Io(
                dir.to_path_buf(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "locales directory missing"),
            ));
        }

        let mut bundles = BTreeMap::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json5") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let raw = std::fs::read_to_string(path)
                .map_err(|error| LocaleError::Io(path.to_path_buf(), error))?;
            let messages: BTreeMap<String, Message> = json5::from_str(&raw)
                .map_err(|error| LocaleError::Parse(path.to_path_buf(), error.to_string()))?;

            bundles.insert(stem.to_string(), MessageBundle { messages });
        }

        Ok(Self { bundles })
    }

    pub fn locales(&self) -> Vec<&str> {
        self.bundles.keys().map(String::as_str).collect()
    }

    pub fn bundle(&self, locale: Locale) -> Option<&MessageBundle> {
        self.bundles.get(locale.as_str())
    }

    /// Resolves a message for a locale, falling back to the other locale and
    /// finally to the key itself so the UI never renders a hole.
    pub fn message<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.bundle(locale)
            .and_then(|bundle| bundle.lookup(key))
            .or_else(|| {
                self.bundle(locale.toggled())
                    .and_then(|bundle| bundle.lookup(key))
            })
            .unwrap_or(key)
    }
}

/// Persists the last-selected locale through the injected store.
pub struct LocaleController {
    store: Box<dyn KvStore>,
    locale: Locale,
}

impl LocaleController {
    pub fn new(store: Box<dyn KvStore>, default_locale: Locale) -> Self {
        let locale = store
            .get(LOCALE_KEY)
            .and_then(|raw| Locale::parse(&raw))
            .unwrap_or(default_locale);
        Self { store, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.store.set(LOCALE_KEY, locale.as_str());
    }

    pub fn toggle(&mut self) {
        self.set_locale(self.locale.toggled());
    }
}

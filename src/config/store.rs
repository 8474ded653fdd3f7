//! Two-layer configuration store
//!
//! Resolves the bundled defaults and the user override file into one
//! immutable [`Snapshot`], cached until [`ConfigStore::invalidate`] is called.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::error::ConfigError;
use super::properties;

/// Where the two configuration layers come from
#[derive(Debug, Clone)]
pub struct ConfigSources {
    /// Bundled default text; `None` when the build ships no defaults
    pub bundled: Option<Cow<'static, str>>,
    /// User override file, bootstrapped from the bundled text when absent
    pub override_path: PathBuf,
}

impl ConfigSources {
    pub fn new(bundled: Option<Cow<'static, str>>, override_path: impl Into<PathBuf>) -> Self {
        Self {
            bundled,
            override_path: override_path.into(),
        }
    }

    /// Embedded defaults plus `config/config.properties` under the working directory
    pub fn standard() -> Self {
        Self::with_override_path(
            Path::new(crate::constants::config::DIR).join(crate::constants::config::FILENAME),
        )
    }

    /// Embedded defaults with a custom override location
    pub fn with_override_path(path: impl Into<PathBuf>) -> Self {
        Self::new(
            Some(Cow::Borrowed(crate::constants::config::BUNDLED_DEFAULTS)),
            path,
        )
    }
}

/// Which layer a snapshot was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    /// Neither layer was usable
    #[default]
    Empty,
    Bundled,
    Override,
}

/// One resolved configuration: key → raw (unparsed) value
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entries: HashMap<String, String>,
    origin: Origin,
}

impl Snapshot {
    pub fn new(entries: HashMap<String, String>, origin: Origin) -> Self {
        Self { entries, origin }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Keys in sorted order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Render as configuration text (sorted keys)
    pub fn to_properties(&self) -> String {
        properties::to_string(&self.entries)
    }
}

/// Configuration service
///
/// Construct once at startup and share as `Arc<ConfigStore>`. The
/// load-and-cache transition runs under a mutex, so concurrent first
/// callers trigger a single load and all observe the same snapshot.
#[derive(Debug)]
pub struct ConfigStore {
    sources: ConfigSources,
    cached: Mutex<Option<Arc<Snapshot>>>,
}

impl ConfigStore {
    pub fn new(sources: ConfigSources) -> Self {
        Self {
            sources,
            cached: Mutex::new(None),
        }
    }

    /// Store over the embedded defaults and the standard override path
    pub fn with_defaults() -> Self {
        Self::new(ConfigSources::standard())
    }

    pub fn sources(&self) -> &ConfigSources {
        &self.sources
    }

    /// Return the cached snapshot, loading it first if needed.
    /// Load failures are not cached; the next call tries again.
    pub fn resolve(&self) -> Result<Arc<Snapshot>, ConfigError> {
        let mut cached = self.cached.lock();
        if let Some(snapshot) = cached.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let snapshot = Arc::new(self.load()?);
        info!(
            entries = snapshot.len(),
            origin = ?snapshot.origin(),
            "Resolved configuration"
        );
        *cached = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drop the cached snapshot; the next access reloads from disk.
    /// Snapshots already handed out stay valid.
    pub fn invalidate(&self) {
        if self.cached.lock().take().is_some() {
            debug!("Configuration cache invalidated");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.lock().is_some()
    }

    fn load(&self) -> Result<Snapshot, ConfigError> {
        debug!("Loading default config first");
        let bundled = self.parse_bundled();

        let path = &self.sources.override_path;
        if path.exists() {
            info!(path = ?path, "Found custom config file, loading it");
            let bytes = fs::read(path).map_err(|source| ConfigError::Load {
                path: path.clone(),
                source,
            })?;
            let entries = properties::parse(&properties::decode(&bytes)).map_err(|source| {
                ConfigError::Syntax {
                    path: path.clone(),
                    source,
                }
            })?;
            // The override replaces the bundled layer wholesale
            return Ok(Snapshot::new(entries, Origin::Override));
        }

        self.bootstrap_override();

        Ok(match bundled {
            Some(entries) => Snapshot::new(entries, Origin::Bundled),
            None => Snapshot::default(),
        })
    }

    fn parse_bundled(&self) -> Option<HashMap<String, String>> {
        let text = self.sources.bundled.as_deref()?;
        match properties::parse(text) {
            Ok(entries) => Some(entries),
            Err(e) => {
                warn!(
                    resource = crate::constants::config::BUNDLED_PATH,
                    error = %e,
                    "Bundled default config is unusable, ignoring it"
                );
                None
            }
        }
    }

    /// Copy the bundled defaults to the override path so the user has a file to edit.
    /// Failures only cost the user-editable copy, never the session.
    fn bootstrap_override(&self) {
        let path = &self.sources.override_path;

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty())
            && !dir.exists()
            && let Err(e) = fs::create_dir_all(dir)
        {
            warn!(dir = ?dir, error = %e, "Cannot create config directory, skipping override bootstrap");
            return;
        }

        let Some(text) = self.sources.bundled.as_deref() else {
            return;
        };

        match fs::write(path, text) {
            Ok(()) => info!(path = ?path, "Created user config from bundled defaults"),
            Err(e) => warn!(path = ?path, error = %e, "Failed to create user config file"),
        }
    }
}

//! Appearance settings.
//!
//! The stored preference is an explicit light/dark choice; when none
//! has been saved the effective theme follows the system color
//! scheme. Updates go through one function that persists the choice
//! and notifies subscribers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }
}

/// Persisted appearance state. `theme: None` means "follow the
/// system".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    pub theme: Option<ThemeChoice>,
}

impl AppearanceSettings {
    /// The theme actually shown, given the system scheme.
    pub fn effective_theme(&self, system: ThemeChoice) -> ThemeChoice {
        self.theme.unwrap_or(system)
    }
}

/// Where appearance settings are saved between sessions.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> AppearanceSettings;
    fn save(&self, settings: &AppearanceSettings);
}

/// Keeps settings for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: Mutex<AppearanceSettings>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> AppearanceSettings {
        *self.settings.lock().unwrap()
    }

    fn save(&self, settings: &AppearanceSettings) {
        *self.settings.lock().unwrap() = *settings;
    }
}

/// JSON file on disk. Unreadable or missing files fall back to the
/// defaults; failed writes are logged and dropped.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> AppearanceSettings {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable settings file");
                AppearanceSettings::default()
            }),
            Err(_) => AppearanceSettings::default(),
        }
    }

    fn save(&self, settings: &AppearanceSettings) {
        let raw = match serde_json::to_string_pretty(settings) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "could not serialize settings");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, raw) {
            warn!(path = %self.path.display(), error = %e, "could not persist settings");
        }
    }
}

type ThemeSubscriber = Box<dyn Fn(ThemeChoice) + Send + Sync>;

/// Owns the current settings and fans out theme changes.
pub struct AppearanceManager<S: PreferenceStore> {
    store: S,
    settings: AppearanceSettings,
    system: ThemeChoice,
    subscribers: Vec<ThemeSubscriber>,
}

impl<S: PreferenceStore> AppearanceManager<S> {
    pub fn new(store: S, system: ThemeChoice) -> Self {
        let settings = store.load();
        Self {
            store,
            settings,
            system,
            subscribers: Vec::new(),
        }
    }

    pub fn settings(&self) -> AppearanceSettings {
        self.settings
    }

    pub fn effective_theme(&self) -> ThemeChoice {
        self.settings.effective_theme(self.system)
    }

    pub fn subscribe(&mut self, subscriber: ThemeSubscriber) {
        self.subscribers.push(subscriber);
    }

    /// Set an explicit theme, persist it and notify subscribers.
    pub fn set_theme(&mut self, theme: ThemeChoice) {
        self.update(AppearanceSettings { theme: Some(theme) });
    }

    /// Flip the effective theme. The result is always an explicit
    /// choice, even when the previous state was "follow the system".
    pub fn toggle_theme(&mut self) {
        let next = self.effective_theme().toggled();
        self.set_theme(next);
    }

    /// Drop the explicit choice and follow the system again.
    pub fn follow_system(&mut self) {
        self.update(AppearanceSettings { theme: None });
    }

    fn update(&mut self, settings: AppearanceSettings) {
        self.settings = settings;
        self.store.save(&settings);
        let effective = self.effective_theme();
        debug!(?effective, "appearance updated");
        for subscriber in &self.subscribers {
            subscriber(effective);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[test]
    fn defaults_follow_the_system_scheme() {
        let manager = AppearanceManager::new(MemoryStore::default(), ThemeChoice::Dark);
        assert_eq!(manager.settings().theme, None);
        assert_eq!(manager.effective_theme(), ThemeChoice::Dark);
    }

    #[test]
    fn double_toggle_returns_to_the_starting_theme_but_stays_explicit() {
        let mut manager = AppearanceManager::new(MemoryStore::default(), ThemeChoice::Light);

        manager.toggle_theme();
        assert_eq!(manager.effective_theme(), ThemeChoice::Dark);

        manager.toggle_theme();
        assert_eq!(manager.effective_theme(), ThemeChoice::Light);
        // The preference is now pinned, not "follow the system".
        assert_eq!(manager.settings().theme, Some(ThemeChoice::Light));
    }

    #[test]
    fn updates_notify_subscribers_and_persist() {
        let store = MemoryStore::default();
        let mut manager = AppearanceManager::new(store, ThemeChoice::Light);

        let seen: Arc<Mutex<Vec<ThemeChoice>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        manager.subscribe(Box::new(move |theme| sink.lock().unwrap().push(theme)));

        manager.set_theme(ThemeChoice::Dark);
        manager.follow_system();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![ThemeChoice::Dark, ThemeChoice::Light]
        );
    }

    #[test]
    fn file_store_round_trips_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appearance.json");

        {
            let store = FileStore::new(&path);
            store.save(&AppearanceSettings {
                theme: Some(ThemeChoice::Dark),
            });
        }

        let store = FileStore::new(&path);
        assert_eq!(store.load().theme, Some(ThemeChoice::Dark));
    }

    #[test]
    fn file_store_tolerates_a_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appearance.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.load(), AppearanceSettings::default());
    }
}

//! Settings and seed-data locations.

use std::path::PathBuf;

use anyhow::Context;
use mailview_core::MessageStore;
use serde::{Deserialize, Serialize};

use crate::style::palette::ThemeMode;

/// Environment variable naming a JSON seed file.
pub const SEED_ENV: &str = "MAILVIEW_SEED";

/// Application settings that persist across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Current theme mode.
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailview")
}

impl AppSettings {
    /// Loads settings, falling back to defaults when no file exists.
    pub async fn load() -> Result<Self, String> {
        Self::load_from(config_dir()).await
    }

    /// Saves settings to the config directory.
    pub async fn save(self) -> Result<(), String> {
        self.save_to(config_dir()).await
    }

    async fn load_from(dir: PathBuf) -> Result<Self, String> {
        let path = dir.join("settings.json");
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;

        serde_json::from_str(&contents).map_err(|e| e.to_string())
    }

    async fn save_to(self, dir: PathBuf) -> Result<(), String> {
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| e.to_string())?;

        let path = dir.join("settings.json");
        let contents = serde_json::to_string_pretty(&self).map_err(|e| e.to_string())?;

        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| e.to_string())?;

        tracing::info!("Settings saved to {:?}", path);
        Ok(())
    }
}

/// Where the startup message set comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// A JSON seed file.
    File(PathBuf),
    /// The built-in sample messages.
    Sample,
}

impl SeedSource {
    /// Resolves the seed source: `$MAILVIEW_SEED`, then
    /// `<config>/mailview/messages.json`, then the built-in sample.
    #[must_use]
    pub fn resolve() -> Self {
        Self::resolve_from(std::env::var_os(SEED_ENV).map(PathBuf::from), config_dir())
    }

    fn resolve_from(env_path: Option<PathBuf>, config_dir: PathBuf) -> Self {
        if let Some(path) = env_path {
            return Self::File(path);
        }
        let default_path = config_dir.join("messages.json");
        if default_path.exists() {
            Self::File(default_path)
        } else {
            Self::Sample
        }
    }

    /// Loads the message store from this source.
    pub async fn load(self) -> Result<MessageStore, String> {
        match self {
            Self::Sample => Ok(MessageStore::sample()),
            Self::File(path) => read_seed(path).await.map_err(|e| format!("{e:#}")),
        }
    }

    /// Short label for the header.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Sample => "Sample data".to_string(),
            Self::File(path) => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
        }
    }
}

/// Unwraps a loaded store, or falls back to the built-in sample.
///
/// The flag is `true` when the fallback was taken.
#[must_use]
pub fn store_or_sample(result: Result<MessageStore, String>) -> (MessageStore, bool) {
    match result {
        Ok(store) => (store, false),
        Err(e) => {
            tracing::warn!("Failed to load messages, using sample data: {e}");
            (MessageStore::sample(), true)
        }
    }
}

async fn read_seed(path: PathBuf) -> anyhow::Result<MessageStore> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    MessageStore::from_json(&contents)
        .with_context(|| format!("parsing seed file {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use mailview_core::MessageId;

    /// Fresh scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mailview-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    const SEED: &str = r#"[
        {"id": 21, "sender": "Ops", "subject": "Disk alert", "preview": "Disk at 91%",
         "folder": "inbox", "date": "2025-12-01"},
        {"id": 22, "sender": "Ops", "subject": "Disk ok", "preview": "Back to normal",
         "folder": "trash", "unread": false, "date": "2025-12-02"}
    ]"#;

    #[test]
    fn test_env_path_wins() {
        let source = SeedSource::resolve_from(
            Some(PathBuf::from("/tmp/seed.json")),
            PathBuf::from("/nonexistent"),
        );
        assert_eq!(source, SeedSource::File(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn test_falls_back_to_sample() {
        let source = SeedSource::resolve_from(None, PathBuf::from("/nonexistent/mailview"));
        assert_eq!(source, SeedSource::Sample);
        assert_eq!(source.label(), "Sample data");
    }

    #[test]
    fn test_config_dir_seed_is_used() {
        let dir = scratch_dir("resolve");
        std::fs::write(dir.join("messages.json"), SEED).unwrap();

        let source = SeedSource::resolve_from(None, dir.clone());
        assert_eq!(source, SeedSource::File(dir.join("messages.json")));
        assert_eq!(source.label(), "messages.json");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_file_source_loads_store() {
        let dir = scratch_dir("load");
        let path = dir.join("messages.json");
        std::fs::write(&path, SEED).unwrap();

        let store = SeedSource::File(path).load().await.unwrap();
        let ids: Vec<MessageId> = store.all().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MessageId(21), MessageId(22)]);
        assert!(!store.get(MessageId(22)).unwrap().is_unread());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_seed_falls_back_to_sample() {
        let dir = scratch_dir("missing");
        let result = SeedSource::File(dir.join("absent.json")).load().await;
        assert!(result.as_ref().unwrap_err().contains("reading seed file"));

        let (store, fell_back) = store_or_sample(result);
        assert!(fell_back);
        assert_eq!(store.len(), MessageStore::sample().len());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_malformed_seed_falls_back_to_sample() {
        let dir = scratch_dir("malformed");
        let path = dir.join("messages.json");
        std::fs::write(&path, r#"[{"id": 1, "folder": "outbox"}]"#).unwrap();

        let result = SeedSource::File(path).load().await;
        assert!(result.as_ref().unwrap_err().contains("parsing seed file"));

        let (store, fell_back) = store_or_sample(result);
        assert!(fell_back);
        assert!(store.get(MessageId(4)).is_some());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_loaded_store_is_kept() {
        let store = MessageStore::from_json(SEED).unwrap();
        let (store, fell_back) = store_or_sample(Ok(store));
        assert!(!fell_back);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_settings_default_theme() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Light);

        let settings: AppSettings = serde_json::from_str(r#"{"theme_mode": "dark"}"#).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_settings_save_then_load() {
        let dir = scratch_dir("settings").join("nested");

        // Nothing saved yet
        assert_eq!(AppSettings::load_from(dir.clone()).await.unwrap(), AppSettings::default());

        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
        };
        settings.save_to(dir.clone()).await.unwrap();
        assert_eq!(AppSettings::load_from(dir.clone()).await.unwrap(), settings);

        std::fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }
}

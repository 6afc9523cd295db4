//! Startup configuration.
//!
//! Two required values: the Supabase project URL and the anon key.
//! Environment variables win; an optional `~/.todolist/config.toml` file
//! fills in whatever the environment leaves unset. Missing either value is
//! a startup error — the server refuses to start without a reachable store.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Result, TodoError};

pub const ENV_URL: &str = "SUPABASE_URL";
pub const ENV_ANON_KEY: &str = "SUPABASE_ANON_KEY";

/// Resolved store settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Supabase project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Anon (public) API key, sent as `apikey` + bearer token
    pub anon_key: String,
}

/// On-disk settings file (all fields optional; env vars take precedence)
#[derive(Debug, Clone, Deserialize, Default)]
struct SettingsFile {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    anon_key: Option<String>,
}

/// Path of the optional settings file: ~/.todolist/config.toml
pub fn settings_file_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".todolist")
        .join("config.toml")
}

impl Settings {
    /// Load from environment, falling back to the settings file.
    pub fn load() -> Result<Self> {
        Self::load_from(std::env::var(ENV_URL).ok(), std::env::var(ENV_ANON_KEY).ok())
    }

    fn load_from(env_url: Option<String>, env_key: Option<String>) -> Result<Self> {
        let file = match std::fs::read_to_string(settings_file_path()) {
            Ok(content) => toml::from_str::<SettingsFile>(&content)?,
            Err(_) => SettingsFile::default(),
        };

        Self::resolve(env_url, env_key, file)
    }

    fn resolve(
        env_url: Option<String>,
        env_key: Option<String>,
        file: SettingsFile,
    ) -> Result<Self> {
        let url = env_url.or(file.url).filter(|s| !s.is_empty());
        let anon_key = env_key.or(file.anon_key).filter(|s| !s.is_empty());

        match (url, anon_key) {
            (Some(url), Some(anon_key)) => Ok(Settings {
                // PostgREST paths are appended with a leading slash
                url: url.trim_end_matches('/').to_string(),
                anon_key,
            }),
            (url, key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(ENV_URL);
                }
                if key.is_none() {
                    missing.push(ENV_ANON_KEY);
                }
                Err(TodoError::config(format!(
                    "{} must be set in the environment or in {}",
                    missing.join(" and "),
                    settings_file_path().display()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_values_used() {
        let settings = Settings::resolve(
            Some("https://proj.supabase.co".to_string()),
            Some("anon-key".to_string()),
            SettingsFile::default(),
        )
        .unwrap();
        assert_eq!(settings.url, "https://proj.supabase.co");
        assert_eq!(settings.anon_key, "anon-key");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let settings = Settings::resolve(
            Some("https://proj.supabase.co/".to_string()),
            Some("k".to_string()),
            SettingsFile::default(),
        )
        .unwrap();
        assert_eq!(settings.url, "https://proj.supabase.co");
    }

    #[test]
    fn test_file_fills_missing_env() {
        let file: SettingsFile =
            toml::from_str("url = \"https://file.supabase.co\"\nanon_key = \"file-key\"").unwrap();
        let settings = Settings::resolve(None, Some("env-key".to_string()), file).unwrap();
        // Env wins for the key, file fills the url
        assert_eq!(settings.url, "https://file.supabase.co");
        assert_eq!(settings.anon_key, "env-key");
    }

    #[test]
    fn test_missing_values_fail_fast() {
        let err = Settings::resolve(None, None, SettingsFile::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(ENV_URL));
        assert!(msg.contains(ENV_ANON_KEY));
    }

    #[test]
    fn test_empty_env_value_counts_as_missing() {
        let err = Settings::resolve(
            Some(String::new()),
            Some("k".to_string()),
            SettingsFile::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains(ENV_URL));
    }

    #[test]
    fn test_settings_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "url = \"https://x.supabase.co\"\nanon_key = \"abc\"").unwrap();
        let file: SettingsFile =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(file.url.as_deref(), Some("https://x.supabase.co"));
        assert_eq!(file.anon_key.as_deref(), Some("abc"));
    }
}

//! Secret configuration file storage.
//!
//! Provides loading of secret configuration from ~/.config/haisha/secret.json.

use crate::config::SecretConfig;
use crate::error::{HaishaError, Result};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "haisha";
const SECRET_FILE: &str = "secret.json";

/// Storage for secret configuration file (secret.json).
///
/// Responsibilities:
/// - Load secret.json from ~/.config/haisha/
/// - Parse JSON into SecretConfig
///
/// Does NOT:
/// - Write or modify secret files (read-only)
/// - Validate API keys or credentials
///
/// # Security Note
///
/// This storage reads plaintext JSON files. The secret.json file should have
/// appropriate file permissions (e.g., 600) to prevent unauthorized access.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Creates a new SecretStorage with the default path (~/.config/haisha/secret.json).
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| HaishaError::config("Could not determine home directory"))?;
        Ok(Self {
            path: home.join(".config").join(APP_DIR).join(SECRET_FILE),
        })
    }

    /// Creates a new SecretStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the secret configuration from the JSON file.
    ///
    /// # Returns
    ///
    /// - `Ok(SecretConfig)`: Successfully loaded and parsed
    /// - `Err(HaishaError::NotFound)`: File doesn't exist
    /// - `Err(HaishaError::Io)`: Failed to read file
    /// - `Err(HaishaError::Serialization)`: Invalid JSON format
    pub fn load(&self) -> Result<SecretConfig> {
        if !self.path.exists() {
            return Err(HaishaError::not_found(
                "secret file",
                self.path.display().to_string(),
            ));
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Loads the config, treating a missing file as an empty config.
    pub fn load_or_default(&self) -> Result<SecretConfig> {
        match self.load() {
            Err(err) if err.is_not_found() => {
                tracing::debug!("No secret file at {}", self.path.display());
                Ok(SecretConfig::default())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");
        let storage = SecretStorage::with_path(file_path);

        let result = storage.load();
        assert!(matches!(result, Err(ref e) if e.is_not_found()));

        let config = storage.load_or_default().unwrap();
        assert!(config.openai.is_none());
    }

    #[test]
    fn test_load_valid_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");

        let json_content = r#"{
            "openai": {
                "api_key": "test-key-123",
                "model_name": "gpt-4o-mini"
            }
        }"#;

        fs::write(&file_path, json_content).unwrap();

        let storage = SecretStorage::with_path(file_path);
        let config = storage.load().unwrap();

        assert_eq!(config.openai_api_key(), Some("test-key-123"));
        assert_eq!(config.openai_model(), Some("gpt-4o-mini"));
    }

    #[test]
    fn test_load_empty_config() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");

        fs::write(&file_path, "{}").unwrap();

        let storage = SecretStorage::with_path(file_path);
        let config = storage.load().unwrap();

        assert!(config.openai.is_none());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");

        fs::write(&file_path, r#"{ invalid json"#).unwrap();

        let storage = SecretStorage::with_path(file_path);
        let result = storage.load_or_default();

        assert!(matches!(result, Err(ref e) if e.is_serialization()));
    }
}

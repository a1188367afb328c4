use serde::{Deserialize, Serialize};

/// Default model for the delegated path.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Root structure of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    #[serde(default)]
    pub openai: Option<OpenAIConfig>,
}

/// OpenAI API configuration.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl SecretConfig {
    /// Returns the configured API key, treating blank keys as absent.
    pub fn openai_api_key(&self) -> Option<&str> {
        self.openai
            .as_ref()
            .map(|c| c.api_key.trim())
            .filter(|key| !key.is_empty())
    }

    pub fn openai_model(&self) -> Option<&str> {
        self.openai.as_ref().and_then(|c| c.model_name.as_deref())
    }
}

/// Normalizes a user-provided credential. Blank input means no credential.
pub fn normalize_credential(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

//! The seam between the resolver and a text-completion service.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a completion agent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgentError {
    /// The request was made but produced nothing usable.
    #[error("{0}")]
    ExecutionFailed(String),

    /// Transport or HTTP-level failure.
    #[error("{message}")]
    ProcessError {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    /// Anything else, e.g. an unparseable response body.
    #[error("{0}")]
    Other(String),
}

impl AgentError {
    /// HTTP status code, when the failure came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ProcessError { status_code, .. } => *status_code,
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ProcessError {
                is_retryable: true,
                ..
            }
        )
    }
}

/// Role tag of a chat message sent to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// A role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// A text-completion service.
#[async_trait]
pub trait CompletionAgent: Send + Sync {
    /// Sends the messages and returns the reply text.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, AgentError>;
}

/// Builds a completion agent for a given credential.
pub trait AgentProvider: Send + Sync {
    fn agent_for(&self, credential: &str) -> Arc<dyn CompletionAgent>;
}

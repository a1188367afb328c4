//! Turns an instruction plus the current tables into a reply string.

use crate::agent::{AgentProvider, ChatMessage};
use crate::mock_reply::render_mock_reply;
use haisha_core::fixture::{SiteTable, StaffTable};
use haisha_core::prompt::build_system_prompt;
use std::sync::Arc;
use std::time::Duration;

/// Prefix of every reply produced from a failed delegated call.
pub const ERROR_PREFIX: &str = "エラーが発生しました: ";

/// Sampling temperature for the delegated path.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Artificial thinking time on the mock path.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub mock_delay: Duration,
    pub temperature: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mock_delay: DEFAULT_MOCK_DELAY,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Chooses between the mock reply and a delegated completion.
///
/// Never fails: delegated errors come back as a string starting with
/// [`ERROR_PREFIX`].
#[derive(Clone)]
pub struct ResponseResolver {
    provider: Arc<dyn AgentProvider>,
    config: ResolverConfig,
}

impl ResponseResolver {
    pub fn new(provider: Arc<dyn AgentProvider>, config: ResolverConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves one instruction. A blank or absent credential selects the
    /// mock path.
    pub async fn resolve(
        &self,
        instruction: &str,
        staff: &StaffTable,
        sites: &SiteTable,
        credential: Option<&str>,
    ) -> String {
        let system_prompt = build_system_prompt(staff, sites);

        let credential = credential.map(str::trim).filter(|key| !key.is_empty());
        let Some(credential) = credential else {
            tracing::debug!("No credential, answering from the mock template");
            if !self.config.mock_delay.is_zero() {
                tokio::time::sleep(self.config.mock_delay).await;
            }
            return render_mock_reply(instruction);
        };

        let messages = [ChatMessage::system(system_prompt), ChatMessage::user(instruction)];
        let agent = self.provider.agent_for(credential);

        match agent.complete(&messages, self.config.temperature).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(status = ?err.status_code(), "Delegated completion failed: {}", err);
                format!("{ERROR_PREFIX}{err}")
            }
        }
    }
}

pub mod agent;
pub mod command;
pub mod mock_reply;
pub mod openai_api_agent;
pub mod resolver;

use haisha_core::config::normalize_credential;
use haisha_core::prompt::{build_system_prompt, context_summary};
use haisha_core::quick_action::QuickActionConfig;
use haisha_core::session::{MessageRole, SessionContext};
use std::fmt::Write;

pub use agent::{AgentError, AgentProvider, ChatMessage, ChatRole, CompletionAgent};
pub use command::{COMMAND_NAMES, UserInput};
pub use openai_api_agent::{OpenAIApiAgent, OpenAIProvider};
pub use resolver::{ERROR_PREFIX, ResolverConfig, ResponseResolver};

/// Result of handling one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionResult {
    /// Nothing to show.
    NoOp,
    /// An assistant reply that was appended to the transcript.
    NewMessage(String),
    /// Display-only output; the transcript is unchanged.
    Info(String),
    /// The fixture tables were replaced.
    TablesRegenerated,
    /// The user asked to leave.
    Quit,
}

/// Drives one dispatch session.
///
/// Owns the session context and the credential, and is the only place that
/// appends to the transcript: one user entry and one assistant entry per
/// instruction.
pub struct InteractionManager {
    context: SessionContext,
    resolver: ResponseResolver,
    quick_actions: QuickActionConfig,
    credential: Option<String>,
}

impl InteractionManager {
    pub fn new(
        context: SessionContext,
        resolver: ResponseResolver,
        credential: Option<String>,
    ) -> Self {
        Self {
            context,
            resolver,
            quick_actions: QuickActionConfig::default(),
            credential: normalize_credential(credential.as_deref()),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn quick_actions(&self) -> &QuickActionConfig {
        &self.quick_actions
    }

    /// True when no credential is set and replies come from the mock template.
    pub fn is_mock_mode(&self) -> bool {
        self.credential.is_none()
    }

    /// The instruction `line` would send, resolving quick-action shortcuts.
    /// `None` for commands that do not start an interaction.
    pub fn instruction_for(&self, line: &str) -> Option<String> {
        match UserInput::parse(line) {
            UserInput::Instruction(text) => Some(text),
            UserInput::QuickAction(slot_id) => self
                .quick_actions
                .get_slot(&slot_id)
                .map(|slot| slot.instruction.clone()),
            _ => None,
        }
    }

    pub fn set_credential(&mut self, credential: Option<&str>) {
        self.credential = normalize_credential(credential);
    }

    /// Handles one raw input line.
    pub async fn handle_input(&mut self, line: &str) -> InteractionResult {
        match UserInput::parse(line) {
            UserInput::Empty => InteractionResult::NoOp,
            UserInput::Quit => InteractionResult::Quit,
            UserInput::Instruction(text) => self.interact(&text).await,
            UserInput::QuickAction(slot_id) => {
                match self.quick_actions.get_slot(&slot_id) {
                    Some(slot) => {
                        let instruction = slot.instruction.clone();
                        self.interact(&instruction).await
                    }
                    None => InteractionResult::Info(format!("Unknown quick action: {slot_id}")),
                }
            }
            UserInput::ListQuickActions => InteractionResult::Info(self.render_quick_actions()),
            UserInput::Regenerate => {
                self.context.regenerate();
                InteractionResult::TablesRegenerated
            }
            UserInput::ShowStaff => InteractionResult::Info(self.render_staff()),
            UserInput::ShowSites => InteractionResult::Info(self.render_sites()),
            UserInput::ShowHistory => InteractionResult::Info(self.render_history()),
            UserInput::ShowContext => InteractionResult::Info(
                self.context
                    .last_prompt_context()
                    .unwrap_or("No instruction has been sent with the current tables yet.")
                    .to_string(),
            ),
            UserInput::ShowPrompt => InteractionResult::Info(build_system_prompt(
                self.context.staff(),
                self.context.sites(),
            )),
            UserInput::SetCredential(credential) => {
                self.set_credential(credential.as_deref());
                InteractionResult::Info(self.render_mode())
            }
            UserInput::ShowMode => InteractionResult::Info(self.render_mode()),
            UserInput::Help => InteractionResult::Info(help_text()),
            UserInput::Unknown(_) => InteractionResult::NoOp,
        }
    }

    /// Runs one instruction through the resolver and records both sides.
    pub async fn interact(&mut self, instruction: &str) -> InteractionResult {
        self.context.transcript_mut().push_user(instruction);

        let reply = self
            .resolver
            .resolve(
                instruction,
                self.context.staff(),
                self.context.sites(),
                self.credential.as_deref(),
            )
            .await;

        let summary = context_summary(instruction, self.context.staff(), self.context.sites());
        self.context.set_last_prompt_context(summary);
        self.context.transcript_mut().push_assistant(reply.clone());

        InteractionResult::NewMessage(reply)
    }

    fn render_mode(&self) -> String {
        if self.is_mock_mode() {
            "Mode: mock (no API key set)".to_string()
        } else {
            "Mode: delegated (API key set)".to_string()
        }
    }

    fn render_quick_actions(&self) -> String {
        let mut out = String::from("Quick actions:");
        for slot in &self.quick_actions.slots {
            let _ = write!(out, "\n  /{}  {}: {}", slot.slot_id, slot.label, slot.instruction);
        }
        out
    }

    fn render_staff(&self) -> String {
        let mut out = String::from("現在の要員リスト");
        for s in self.context.staff().records() {
            let _ = write!(
                out,
                "\n  {} | {} | {} | 苦手: {} | 希望: {}",
                s.name, s.skill, s.personality, s.weakness, s.preference
            );
        }
        out
    }

    fn render_sites(&self) -> String {
        let mut out = String::from("今日の現場リスト");
        for s in self.context.sites().records() {
            let _ = write!(
                out,
                "\n  {} | 難易度: {} | 対人ストレス: {} | {}分",
                s.name, s.difficulty, s.stress, s.duration_minutes
            );
        }
        out
    }

    fn render_history(&self) -> String {
        let mut out = String::new();
        for message in self.context.transcript().messages() {
            let who = match message.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
            };
            let _ = writeln!(out, "[{who}] {}", message.content);
        }
        out.trim_end().to_string()
    }
}

fn help_text() -> String {
    [
        "Type an instruction to get a dispatch proposal.",
        "  /1 /2 /3          run a quick action (/quick lists them)",
        "  /regenerate       regenerate staff and site tables",
        "  /staff /sites     show the tables",
        "  /history          show the conversation",
        "  /context          show what the model saw last time",
        "  /prompt           show the full system prompt",
        "  /key [secret]     set or clear the API key",
        "  /mode             show mock or delegated mode",
        "  /quit             leave (plain quit or exit also works at the prompt)",
    ]
    .join("\n")
}

use super::message::{ConversationMessage, MessageRole};

/// Assistant message every transcript starts with.
pub const GREETING: &str = "おはようございます。本日の配置はどうしますか？「田中さんは今日メンタル不調なので優しめで」のように指示してください。";

/// Append-only log of user/assistant exchanges.
///
/// There is no way to remove or edit entries; a fresh transcript only comes
/// from a fresh session.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ConversationMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            messages: vec![ConversationMessage::assistant(GREETING)],
        }
    }
}

impl Transcript {
    /// Creates a transcript holding only the greeting.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ConversationMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ConversationMessage::assistant(content));
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the greeting is never removed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    /// Number of messages with the given role.
    pub fn count_role(&self, role: MessageRole) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_has_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        let first = &transcript.messages()[0];
        assert_eq!(first.role, MessageRole::Assistant);
        assert_eq!(first.content, GREETING);
    }

    #[test]
    fn test_push_keeps_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("question");
        transcript.push_assistant("answer");

        let roles: Vec<MessageRole> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::Assistant, MessageRole::User, MessageRole::Assistant]
        );
        assert_eq!(transcript.last().unwrap().content, "answer");
        assert_eq!(transcript.count_role(MessageRole::User), 1);
    }
}

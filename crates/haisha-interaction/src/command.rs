//! Slash commands understood by the interaction manager.

/// Command names offered for completion, without arguments.
pub const COMMAND_NAMES: [&str; 14] = [
    "/1",
    "/2",
    "/3",
    "/quick",
    "/regenerate",
    "/staff",
    "/sites",
    "/history",
    "/context",
    "/prompt",
    "/key",
    "/mode",
    "/help",
    "/quit",
];

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// Free-text instruction.
    Instruction(String),
    /// Run the quick action in the given slot.
    QuickAction(String),
    /// List quick actions.
    ListQuickActions,
    Regenerate,
    ShowStaff,
    ShowSites,
    ShowHistory,
    ShowContext,
    ShowPrompt,
    /// Set (`Some`) or clear (`None`) the credential.
    SetCredential(Option<String>),
    ShowMode,
    Help,
    Quit,
    /// Empty line.
    Empty,
    /// Unrecognized slash command.
    Unknown(String),
}

impl UserInput {
    /// Parses one input line. Anything not starting with `/` is an
    /// instruction, kept exactly as typed.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Self::Instruction(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "quick" if arg.is_empty() => Self::ListQuickActions,
            "quick" => Self::QuickAction(arg.to_string()),
            "regenerate" => Self::Regenerate,
            "staff" => Self::ShowStaff,
            "sites" => Self::ShowSites,
            "history" => Self::ShowHistory,
            "context" => Self::ShowContext,
            "prompt" => Self::ShowPrompt,
            "key" if arg.is_empty() => Self::SetCredential(None),
            "key" => Self::SetCredential(Some(arg.to_string())),
            "mode" => Self::ShowMode,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            digits if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
                Self::QuickAction(digits.to_string())
            }
            _ => Self::Unknown(trimmed.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_instruction_as_typed() {
        assert_eq!(
            UserInput::parse("  田中さんは休み  "),
            UserInput::Instruction("  田中さんは休み  ".to_string())
        );
        assert_eq!(UserInput::parse("exit"), UserInput::Instruction("exit".to_string()));
        assert_eq!(UserInput::parse("quit"), UserInput::Instruction("quit".to_string()));
    }

    #[test]
    fn test_quick_action_forms() {
        assert_eq!(UserInput::parse("/2"), UserInput::QuickAction("2".to_string()));
        assert_eq!(UserInput::parse("/quick 3"), UserInput::QuickAction("3".to_string()));
        assert_eq!(UserInput::parse("/quick"), UserInput::ListQuickActions);
    }

    #[test]
    fn test_key_with_and_without_argument() {
        assert_eq!(
            UserInput::parse("/key sk-abc"),
            UserInput::SetCredential(Some("sk-abc".to_string()))
        );
        assert_eq!(UserInput::parse("/key"), UserInput::SetCredential(None));
    }

    #[test]
    fn test_misc() {
        assert_eq!(UserInput::parse(""), UserInput::Empty);
        assert_eq!(UserInput::parse("/exit"), UserInput::Quit);
        assert_eq!(UserInput::parse("  /quit "), UserInput::Quit);
        assert_eq!(UserInput::parse("/regenerate"), UserInput::Regenerate);
        assert_eq!(UserInput::parse("/bogus"), UserInput::Unknown("/bogus".to_string()));
    }
}

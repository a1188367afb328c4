//! Session state: tables plus the conversation transcript.

pub mod context;
pub mod message;
pub mod transcript;

pub use context::SessionContext;
pub use message::{ConversationMessage, MessageRole};
pub use transcript::{GREETING, Transcript};

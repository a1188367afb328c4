//! Core domain of the dispatch assistant: fixture tables, prompt text,
//! quick actions and per-session state.

pub mod config;
pub mod error;
pub mod fixture;
pub mod prompt;
pub mod quick_action;
pub mod session;
pub mod storage;

// Re-export common error type
pub use error::HaishaError;

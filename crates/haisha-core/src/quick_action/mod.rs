//! Quick actions: canned instructions invokable in one step.

pub mod model;

pub use model::{QuickActionConfig, QuickActionSlot};

// Discord layer - commands and event handlers.

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "chat/mod.rs"]
pub mod chat;

// Re-export command types for convenience
pub use commands::faq::{Context, Data, Error};

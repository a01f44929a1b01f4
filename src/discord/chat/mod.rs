// Discord chat module
//
// Answers questions asked outside slash commands (mentions and DMs) and
// holds the formatting shared with the /ask command.

#[path = "mention_handler.rs"]
pub mod mention_handler;

#[path = "reply_format.rs"]
pub mod reply_format;

pub use mention_handler::handle_message;
pub use reply_format::{build_reply_embed, chunk_lines, fit_fields, truncate, DESCRIPTION_LIMIT};

// This module handles bot presence and lifecycle events.
//
// Discord-layer glue only: we work with Discord SDK types (Context,
// ActivityData, OnlineStatus) and keep the logic short.

use poise::serenity_prelude as serenity;

/// Show how many answers the bot has loaded.
pub fn on_ready(ctx: &serenity::Context, entry_count: usize) {
    let activity = serenity::ActivityData::listening(status_text(entry_count));
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}

fn status_text(entry_count: usize) -> String {
    match entry_count {
        0 => "questions (no answers loaded)".to_string(),
        1 => "questions (1 answer ready)".to_string(),
        n => format!("questions ({} answers ready)", n),
    }
}

// Formatting helpers that turn FAQ replies into Discord messages.
//
// Discord rejects embeds over its size limits, so everything built here is
// truncated or capped to fit them.

use crate::core::faq::FaqReply;
use poise::serenity_prelude as serenity;

// Discord embed limits (in characters)
const TITLE_LIMIT: usize = 256;
pub const DESCRIPTION_LIMIT: usize = 4096;
const FIELD_NAME_LIMIT: usize = 256;
const FIELD_VALUE_LIMIT: usize = 1024;
const MAX_FIELDS: usize = 25;
const EMBED_TOTAL_LIMIT: usize = 6000;

/// Room left per field value when chunking lines.
const FIELD_BUDGET: usize = 1000;

const ANSWER_COLOR: u32 = 0x5865F2; // Blurple
const FALLBACK_COLOR: u32 = 0xFFA500; // Orange

/// Embed for a reply: the matched question as title, or a nudge towards
/// `/faq` when we fell back.
pub fn build_reply_embed(reply: &FaqReply) -> serenity::CreateEmbed {
    let embed =
        serenity::CreateEmbed::new().description(truncate(reply.text(), DESCRIPTION_LIMIT));

    match reply {
        FaqReply::Answer { question, .. } => embed
            .title(truncate(question, TITLE_LIMIT))
            .color(ANSWER_COLOR),
        FaqReply::Fallback { .. } => embed.color(FALLBACK_COLOR).footer(
            serenity::CreateEmbedFooter::new("Use /faq to see the topics I know about."),
        ),
    }
}

/// Cut `text` to at most `limit` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(limit.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Trim field names and values to Discord's limits and drop whatever no
/// longer fits: at most 25 fields, and `already_used` characters (title,
/// description, footer) plus the fields stay within the 6000 total.
pub fn fit_fields(fields: Vec<(String, String)>, already_used: usize) -> Vec<(String, String)> {
    let mut used = already_used;
    let mut fitted = Vec::new();

    for (name, value) in fields {
        if fitted.len() >= MAX_FIELDS {
            break;
        }

        let name = truncate(&name, FIELD_NAME_LIMIT);
        let value = truncate(&value, FIELD_VALUE_LIMIT);
        let size = name.chars().count() + value.chars().count();
        if used + size > EMBED_TOTAL_LIMIT {
            break;
        }

        used += size;
        fitted.push((name, value));
    }

    fitted
}

/// Remove `<@id>` and `<@!id>` mentions of the bot and trim what is left.
pub fn strip_mentions(content: &str, bot_id: u64) -> String {
    content
        .replace(&format!("<@{}>", bot_id), " ")
        .replace(&format!("<@!{}>", bot_id), " ")
        .trim()
        .to_string()
}

/// Split lines into groups that each fit in one embed field.
pub fn chunk_lines(lines: &[String]) -> Vec<Vec<String>> {
    let mut chunks = Vec::new();
    let mut current_chunk = Vec::new();
    let mut current_length = 0;

    for line in lines {
        let line_len = line.len();
        if !current_chunk.is_empty() && current_length + line_len + 1 > FIELD_BUDGET {
            chunks.push(current_chunk);
            current_chunk = Vec::new();
            current_length = 0;
        }

        current_chunk.push(line.clone());
        current_length += line_len + 1; // +1 for newline
    }

    if !current_chunk.is_empty() {
        chunks.push(current_chunk);
    }

    chunks
}

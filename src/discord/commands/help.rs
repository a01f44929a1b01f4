use crate::discord::chat::{chunk_lines, fit_fields};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;
use std::collections::HashMap;

// Category definitions in display order
const CATEGORY_ORDER: &[&str] = &["Questions", "Utilities"];

fn get_category_emoji(category: &str) -> &'static str {
    match category {
        "Questions" => "❓",
        "Utilities" => "🧰",
        _ => "•",
    }
}

struct CommandMetadata {
    category: &'static str,
    priority: i32,
    description: Option<&'static str>,
    note: Option<&'static str>,
}

fn get_command_metadata(name: &str) -> CommandMetadata {
    match name {
        "ask" => CommandMetadata {
            category: "Questions",
            priority: 100,
            description: Some("Ask a question and get the best answer from the knowledge base."),
            note: Some("Start typing for suggested questions."),
        },
        "faq" => CommandMetadata {
            category: "Questions",
            priority: 90,
            description: Some("List every question the bot can answer, grouped by topic."),
            note: None,
        },
        _ => CommandMetadata {
            category: "Utilities",
            priority: 0,
            description: None,
            note: None,
        },
    }
}

const HELP_TITLE: &str = "FAQ Bot Command Guide";
const HELP_DESCRIPTION: &str = "Use slash commands with `/`, or just mention me with your question. \
     I also answer questions sent by DM.";
const HELP_FOOTER: &str = "Can't find your answer? Ask a moderator.";

/// Show a categorized list of commands.
#[poise::command(slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let mut categories: HashMap<&str, Vec<(i32, String)>> = HashMap::new();

    for command in &ctx.framework().options().commands {
        if command.hide_in_help || command.name == "help" {
            continue;
        }

        let metadata = get_command_metadata(&command.name);
        let description = metadata
            .description
            .or(command.description.as_deref())
            .unwrap_or("No description provided.");

        let mut entry = format!("• **/{0}** — {1}", command.name, description);
        if let Some(note) = metadata.note {
            entry.push_str(&format!("\n  ⤷ {}", note));
        }

        categories
            .entry(metadata.category)
            .or_default()
            .push((metadata.priority, entry));
    }

    let mut embed = serenity::CreateEmbed::new()
        .title(HELP_TITLE)
        .description(HELP_DESCRIPTION)
        .color(serenity::Colour::from_rgb(88, 101, 242))
        .timestamp(serenity::Timestamp::now());

    if let Ok(user) = ctx.framework().bot_id.to_user(&ctx).await {
        embed = embed.thumbnail(user.face());
    }

    // Sort categories based on defined order, then alphabetically for others
    let mut sorted_categories: Vec<_> = categories.keys().cloned().collect();
    sorted_categories.sort_by(|a, b| {
        let pos_a = CATEGORY_ORDER.iter().position(|&x| x == *a).unwrap_or(999);
        let pos_b = CATEGORY_ORDER.iter().position(|&x| x == *b).unwrap_or(999);
        pos_a.cmp(&pos_b).then(a.cmp(b))
    });

    let mut fields = Vec::new();
    for category in sorted_categories {
        if let Some(entries) = categories.get_mut(category) {
            // Sort by priority (descending), then name (ascending)
            entries.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

            let title = format!("{} {}", get_category_emoji(category), category);
            let formatted_entries: Vec<String> = entries.iter().map(|(_, s)| s.clone()).collect();

            for (i, chunk) in chunk_lines(&formatted_entries).iter().enumerate() {
                let field_name = if i == 0 {
                    title.clone()
                } else {
                    format!("{} (cont.)", title)
                };

                fields.push((field_name, chunk.join("\n")));
            }
        }
    }

    let used = HELP_TITLE.chars().count()
        + HELP_DESCRIPTION.chars().count()
        + HELP_FOOTER.chars().count();
    for (name, value) in fit_fields(fields, used) {
        embed = embed.field(name, value, false);
    }

    embed = embed.footer(serenity::CreateEmbedFooter::new(HELP_FOOTER));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

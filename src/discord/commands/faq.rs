// Discord commands for the FAQ bot.
//
// **Notice the pattern:**
// 1. Extract primitive data from Discord types
// 2. Call core service
// 3. Format the response based on the result
//
// This layer is THIN - no matching logic, just translation.

use crate::core::faq::FaqService;
use crate::discord::chat::{build_reply_embed, chunk_lines, fit_fields, truncate, DESCRIPTION_LIMIT};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use std::time::Duration;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Shared state handed to every command and event.
pub struct Data {
    pub faq: Arc<FaqService>,
    /// Pause before answering so the reply feels less abrupt.
    pub reply_delay: Duration,
}

/// Ask a question and get the best answer from the knowledge base.
#[poise::command(slash_command)]
pub async fn ask(
    ctx: Context<'_>,
    #[description = "What would you like to know?"]
    #[autocomplete = "autocomplete_question"]
    question: String,
) -> Result<(), Error> {
    // Shows "thinking..." while we wait out the reply delay
    ctx.defer().await?;
    tokio::time::sleep(ctx.data().reply_delay).await;

    let reply = ctx.data().faq.reply(&question);
    ctx.send(poise::CreateReply::default().embed(build_reply_embed(&reply)))
        .await?;
    Ok(())
}

const FAQ_TITLE: &str = "📚 Frequently Asked Questions";
const FAQ_FOOTER: &str = "Ask with /ask or mention me with your question.";

/// List every question the bot knows how to answer.
#[poise::command(slash_command)]
pub async fn faq(ctx: Context<'_>) -> Result<(), Error> {
    let service = &ctx.data().faq;
    let greeting = truncate(&service.greeting(), DESCRIPTION_LIMIT);

    let used = FAQ_TITLE.chars().count() + greeting.chars().count() + FAQ_FOOTER.chars().count();
    let fields = fit_fields(topic_fields(service.topics()), used);

    let mut embed = serenity::CreateEmbed::new()
        .title(FAQ_TITLE)
        .description(greeting)
        .color(0x5865F2); // Blurple

    for (name, value) in fields {
        embed = embed.field(name, value, false);
    }

    embed = embed.footer(serenity::CreateEmbedFooter::new(FAQ_FOOTER));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// One field per category, split into "(cont.)" fields when a category
/// has too many questions for one.
fn topic_fields(topics: Vec<(String, Vec<String>)>) -> Vec<(String, String)> {
    let mut fields = Vec::new();

    for (category, questions) in topics {
        let lines: Vec<String> = questions.iter().map(|q| format!("• {}", q)).collect();

        for (i, chunk) in chunk_lines(&lines).iter().enumerate() {
            let field_name = if i == 0 {
                capitalize(&category)
            } else {
                format!("{} (cont.)", capitalize(&category))
            };
            fields.push((field_name, chunk.join("\n")));
        }
    }

    fields
}

/// Autocomplete for /ask, offering matching question labels
async fn autocomplete_question<'a>(
    ctx: Context<'_>,
    partial: &'a str,
) -> impl Iterator<Item = String> + 'a {
    ctx.data().faq.suggest(partial).into_iter()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

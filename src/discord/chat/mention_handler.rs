// Answers questions sent as plain messages.
//
// A message is treated as a question when it mentions the bot or arrives in
// a DM. The typing indicator runs for the configured reply delay before the
// answer goes out; the delay never changes which answer is picked.

use super::reply_format::{build_reply_embed, strip_mentions};
use crate::discord::{Data, Error};
use poise::serenity_prelude as serenity;

pub async fn handle_message(
    ctx: &serenity::Context,
    message: &serenity::Message,
    data: &Data,
) -> Result<(), Error> {
    // Ignore bot messages (including our own)
    if message.author.bot {
        return Ok(());
    }

    let bot_id = ctx.cache.current_user().id;
    let is_dm = message.guild_id.is_none();
    let mentioned = message.mentions.iter().any(|u| u.id == bot_id);
    if !is_dm && !mentioned {
        return Ok(());
    }

    let question = strip_mentions(&message.content, bot_id.get());
    if question.is_empty() {
        message.reply(&ctx.http, data.faq.greeting()).await?;
        return Ok(());
    }

    let _ = message.channel_id.broadcast_typing(&ctx.http).await;
    tokio::time::sleep(data.reply_delay).await;

    let reply = data.faq.reply(&question);
    tracing::info!(
        user_id = message.author.id.get(),
        fallback = reply.is_fallback(),
        "Answered question"
    );

    message
        .channel_id
        .send_message(
            &ctx.http,
            serenity::CreateMessage::new()
                .embed(build_reply_embed(&reply))
                .reference_message(message),
        )
        .await?;

    Ok(())
}

// This is the entry point of the FAQ bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (knowledge store, matcher, FAQ service)
// - `infra/` = Implementations of core traits (JSON knowledge base)
// - `discord/` = Discord-specific adapters (commands, events)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and event handlers

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with several mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::faq::faq_models::DEFAULT_SUGGESTION_LIMIT;
use crate::core::faq::{FaqConfig, FaqService, KnowledgeStore};
use crate::discord::commands::presence;
use crate::discord::{Data, Error};
use crate::infra::knowledge_base::JsonKnowledgeSource;
use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// Read an environment variable and parse it, ignoring unset or bad values.
fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid value {:?} for {}", raw, key);
            None
        }
    }
}

/// Event handler for non-command Discord events.
/// Plain messages that mention the bot (or DMs) are answered here.
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        if let Err(e) = discord::chat::handle_message(ctx, new_message, data).await {
            tracing::error!("Failed to answer message: {}", e);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let token = std::env::var("DISCORD_TOKEN").context(
        "Missing DISCORD_TOKEN environment variable! Create a .env file with your bot token.",
    )?;

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // This is the "composition root" where we wire everything together.

    let source = match std::env::var("FAQ_KNOWLEDGE_BASE_FILE") {
        Ok(path) => JsonKnowledgeSource::from_path(path),
        Err(_) => JsonKnowledgeSource::bundled(),
    };
    let store = KnowledgeStore::load(&source)
        .await
        .with_context(|| format!("Failed to load knowledge base from {}", source))?;
    tracing::info!(entries = store.len(), source = %source, "Knowledge base loaded");

    let faq_config = FaqConfig {
        suggestion_limit: env_parse("FAQ_SUGGESTION_LIMIT").unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        ..Default::default()
    };
    let reply_delay =
        Duration::from_millis(env_parse("FAQ_REPLY_DELAY_MS").unwrap_or(DEFAULT_REPLY_DELAY_MS));

    let faq_service = Arc::new(FaqService::new_with_config(store, faq_config));

    // Create the data structure that will be shared across all commands
    let data = Data {
        faq: Arc::clone(&faq_service),
        reply_delay,
    };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read message content
        | serenity::GatewayIntents::GUILDS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                discord::commands::faq::ask(),
                discord::commands::faq::faq(),
                discord::commands::help::help(),
            ],
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                tracing::info!("Bot is starting up...");

                // Global registration can take a while to propagate
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                presence::on_ready(ctx, data.faq.store().len());
                tracing::info!("Commands registered, bot is ready");

                Ok(data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;

    Ok(())
}

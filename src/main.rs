use std::sync::Arc;

use poise::serenity_prelude::GatewayIntents;
use poise::{FrameworkError, FrameworkOptions, PrefixFrameworkOptions};
use serenity::client::Client;
use tracing::{error, info};

use event_roster_bot::bot::Handler;
use event_roster_bot::commands::event::{new_event, EventRegistry};
use event_roster_bot::commands::help::help;
use event_roster_bot::commands::UserData;
use event_roster_bot::config::Config;
use event_roster_bot::error::Error;

async fn on_error(error: FrameworkError<'_, UserData, Error>) {
    match error {
        FrameworkError::Command { error, ctx, .. } => {
            error!("Command '{}' failed: {}", ctx.command().qualified_name, error);
            if let Err(err) = ctx.say(format!("❌ {}", error)).await {
                error!("Can't report the command error: {}", err);
            }
        }
        other => {
            if let Err(err) = poise::builtins::on_error(other).await {
                error!("Error while handling an error: {}", err);
            }
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return;
        }
    };
    let registry = Arc::new(EventRegistry::new());

    let user_data = UserData {
        registry: registry.clone(),
        config: config.clone(),
    };
    let framework = poise::Framework::<UserData, Error>::builder()
        .options(FrameworkOptions {
            commands: vec![new_event(), help()],
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(config.prefix.clone()),
                ..Default::default()
            },
            pre_command: |ctx| {
                Box::pin(async move {
                    info!(
                        "Got command '{}' by user '{}'",
                        ctx.command().qualified_name,
                        ctx.author().name
                    );
                })
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|_ctx, _ready, _framework| Box::pin(async move { Ok(user_data) }))
        .build();

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;
    let mut client = match Client::builder(&config.token, intents)
        .event_handler(Handler::new(registry, config.warning_lifetime))
        .framework(framework)
        .await
    {
        Ok(client) => client,
        Err(why) => {
            error!("Cannot create a Discord client: {:?}", why);
            return;
        }
    };

    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }
}

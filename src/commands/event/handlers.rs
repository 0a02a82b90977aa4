use chrono::Local;
use poise::CreateReply;
use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Mentionable, ReactionType, Timestamp};
use tracing::{info, warn};

use crate::commands::context::Context;
use crate::commands::event::formatters::{DefaultEventFormatter, EventFormatter, PARTICIPANTS_FIELD};
use crate::commands::event::models::{Event, Participant, Role};
use crate::commands::event::parser::parse_arguments;
use crate::error::Result;

const EVENT_COLOUR: Colour = Colour::new(0x2ECC71);

/// Announce a new event and collect role sign-ups via reactions
///
/// Usage: `!new_event DD-MM-YYYY HH:MM "Event name"`
#[poise::command(prefix_command, guild_only, category = "Events")]
pub async fn new_event(
    ctx: Context<'_>,
    #[rest]
    #[description = "Date, time and name of the event"]
    arguments: Option<String>,
) -> Result<()> {
    let now = Local::now().naive_local();
    let draft = match parse_arguments(arguments.as_deref().unwrap_or(""), now) {
        Ok(draft) => draft,
        Err(err) => {
            warn!("Rejected new event from '{}': {:?}", ctx.author().name, err);
            ctx.say(format!("{} {}", ctx.author().mention(), err)).await?;
            return Ok(());
        }
    };

    let formatter = DefaultEventFormatter::new();
    let organizer = Participant::from(ctx.author());
    let avatar_url = ctx.author().face();
    let guild_icon = ctx.guild().and_then(|guild| guild.icon_url());

    let mut embed = CreateEmbed::new()
        .title(formatter.title(&draft))
        .colour(EVENT_COLOUR)
        .timestamp(Timestamp::now())
        .field(PARTICIPANTS_FIELD, formatter.participants(0), false)
        .author(
            CreateEmbedAuthor::new(formatter.author(&organizer.get_username()))
                .icon_url(&avatar_url),
        )
        .description(formatter.description(&draft, now))
        .footer(CreateEmbedFooter::new(formatter.footer(&draft)).icon_url(&avatar_url));
    if let Some(icon_url) = guild_icon {
        embed = embed.image(icon_url);
    }

    let reply = ctx.send(CreateReply::default().embed(embed)).await?;
    let message = reply.message().await?;

    for role in Role::REACTION_ORDER {
        message
            .react(ctx.http(), ReactionType::Unicode(role.symbol().to_string()))
            .await?;
    }

    let event = Event::new(message.id.get(), organizer, &draft);
    info!("Posted event '{}' in channel {}", event.name(), message.channel_id);
    ctx.data().registry.open_event(event);

    Ok(())
}

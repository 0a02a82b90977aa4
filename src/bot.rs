use std::sync::Arc;
use std::time::Duration;

use crossbeam::atomic::AtomicCell;
use serenity::all::{ChannelId, CreateEmbed, EditMessage, Embed, Reaction, UserId};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use tracing::{debug, error, info};

use crate::commands::event::adapter::{
    handle_reaction, Effect, EventMessage, ReactionKind, ReactionNotification,
};
use crate::commands::event::formatters::{DefaultEventFormatter, EventFormatter, PARTICIPANTS_FIELD};
use crate::commands::event::registry::EventRegistry;

pub struct Handler {
    registry: Arc<EventRegistry>,
    warning_lifetime: Duration,
    // Known after the `ready` event.
    bot_id: AtomicCell<Option<UserId>>,
}

impl Handler {
    pub fn new(registry: Arc<EventRegistry>, warning_lifetime: Duration) -> Self {
        Handler {
            registry,
            warning_lifetime,
            bot_id: AtomicCell::new(None),
        }
    }

    async fn dispatch(&self, ctx: &Context, reaction: &Reaction, kind: ReactionKind) {
        let user_id = match reaction.user_id {
            Some(user_id) => user_id,
            None => return,
        };
        let bot_id = self.bot_id.load();

        let mut message = match reaction.message(&ctx.http).await {
            Ok(message) => message,
            Err(err) => {
                error!("Can't fetch the reacted message {}: {}", reaction.message_id, err);
                return;
            }
        };

        let event_message = EventMessage {
            authored_by_bot: bot_id == Some(message.author.id),
            description: message
                .embeds
                .first()
                .and_then(|embed| embed.description.clone()),
        };
        let notification = ReactionNotification {
            kind,
            event_id: reaction.message_id.get(),
            participant_id: user_id.get(),
            symbol: reaction.emoji.to_string(),
            actor_is_bot: bot_id == Some(user_id),
        };

        for effect in handle_reaction(&self.registry, &event_message, &notification) {
            match effect {
                Effect::StripReaction => {
                    if let Err(err) = reaction.delete(&ctx.http).await {
                        error!("Can't remove the reaction of user {}: {}", user_id, err);
                    }
                }
                Effect::Warn(text) => self.warn(ctx, reaction.channel_id, &text).await,
                Effect::RefreshParticipants(count) => {
                    self.refresh_participants(ctx, &mut message, count).await
                }
            }
        }
    }

    // Sends a warning that is deleted after the configured lifetime.
    async fn warn(&self, ctx: &Context, channel_id: ChannelId, text: &str) {
        let warning = match channel_id.say(&ctx.http, text).await {
            Ok(warning) => warning,
            Err(err) => {
                error!("Can't send the warning to channel {}: {}", channel_id, err);
                return;
            }
        };

        let http = ctx.http.clone();
        let lifetime = self.warning_lifetime;
        tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            if let Err(err) = warning.delete(&http).await {
                error!("Can't delete the warning {}: {}", warning.id, err);
            }
        });
    }

    async fn refresh_participants(&self, ctx: &Context, message: &mut Message, count: usize) {
        let mut embed = match message.embeds.first() {
            Some(embed) => embed.clone(),
            None => return,
        };

        let formatter = DefaultEventFormatter::new();
        if !rewrite_participants(&mut embed, &formatter.participants(count)) {
            debug!("Event message {} has no participants field", message.id);
            return;
        }

        let builder = EditMessage::new().embed(CreateEmbed::from(embed));
        if let Err(err) = message.edit(&ctx.http, builder).await {
            error!("Can't update the participants of event {}: {}", message.id, err);
        }
    }
}

// Replaces the value of the participants field. Returns false when the
// embed has no such field.
fn rewrite_participants(embed: &mut Embed, value: &str) -> bool {
    match embed
        .fields
        .iter_mut()
        .find(|field| field.name == PARTICIPANTS_FIELD)
    {
        Some(field) => {
            field.value = value.to_string();
            true
        }
        None => false,
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        self.bot_id.store(Some(ready.user.id));
        info!("{} is connected!", ready.user.name);
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        self.dispatch(&ctx, &reaction, ReactionKind::Added).await;
    }

    async fn reaction_remove(&self, ctx: Context, reaction: Reaction) {
        self.dispatch(&ctx, &reaction, ReactionKind::Removed).await;
    }
}

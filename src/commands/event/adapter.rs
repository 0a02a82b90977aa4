use tracing::debug;

use crate::commands::event::formatters::REACTION_MARKER;
use crate::commands::event::models::{EventId, ParticipantId, Role};
use crate::commands::event::registry::EventRegistry;
use crate::error::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReactionKind {
    Added,
    Removed,
}

// A reaction change as delivered by Discord, reduced to what matters here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReactionNotification {
    pub kind: ReactionKind,
    pub event_id: EventId,
    pub participant_id: ParticipantId,
    pub symbol: String,
    pub actor_is_bot: bool,
}

// The reacted message, as far as event recognition needs it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EventMessage {
    pub authored_by_bot: bool,
    pub description: Option<String>,
}

impl EventMessage {
    pub fn is_event(&self) -> bool {
        self.authored_by_bot
            && self
                .description
                .as_deref()
                .map(|description| description.contains(REACTION_MARKER))
                .unwrap_or(false)
    }
}

// Side effects that the Discord binding has to perform.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Effect {
    // Remove the triggering reaction of the user.
    StripReaction,
    // Post a short-lived message in the channel.
    Warn(String),
    // Rewrite the participants field of the event embed.
    RefreshParticipants(usize),
}

pub fn handle_reaction(
    registry: &EventRegistry,
    message: &EventMessage,
    notification: &ReactionNotification,
) -> Vec<Effect> {
    if notification.actor_is_bot || !message.is_event() {
        return vec![];
    }

    match notification.kind {
        ReactionKind::Added => on_reaction_added(registry, notification),
        ReactionKind::Removed => on_reaction_removed(registry, notification),
    }
}

fn on_reaction_added(registry: &EventRegistry, notification: &ReactionNotification) -> Vec<Effect> {
    let mention = format!("<@{}>", notification.participant_id);

    match registry.try_register(
        notification.event_id,
        notification.participant_id,
        &notification.symbol,
    ) {
        Ok(count) => vec![Effect::RefreshParticipants(count)],
        Err(Error::InvalidRole(_)) => vec![
            Effect::StripReaction,
            Effect::Warn(format!("{} Only allowed: {}", mention, Role::symbols_list())),
        ],
        Err(err) => {
            debug!(
                "Rejected reaction {} of {} on event {}: {}",
                notification.symbol, notification.participant_id, notification.event_id, err
            );
            vec![
                Effect::StripReaction,
                Effect::Warn(format!("{} {}", mention, err)),
            ]
        }
    }
}

fn on_reaction_removed(registry: &EventRegistry, notification: &ReactionNotification) -> Vec<Effect> {
    let (removed, count) = registry.withdraw(
        notification.event_id,
        notification.participant_id,
        &notification.symbol,
    );

    match removed {
        true => vec![Effect::RefreshParticipants(count)],
        false => vec![],
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::event::adapter::{
        handle_reaction, Effect, EventMessage, ReactionKind, ReactionNotification,
    };
    use crate::commands::event::registry::EventRegistry;

    fn get_event_message() -> EventMessage {
        EventMessage {
            authored_by_bot: true,
            description: Some("**Days remaining:** 3\n**React to participate:**\n🛡️ - Tank".to_string()),
        }
    }

    fn get_notification(kind: ReactionKind, participant_id: u64, symbol: &str) -> ReactionNotification {
        ReactionNotification {
            kind,
            event_id: 1,
            participant_id,
            symbol: symbol.to_string(),
            actor_is_bot: false,
        }
    }

    #[test]
    fn test_recognize_event_message() {
        assert_eq!(get_event_message().is_event(), true);

        let foreign = EventMessage {
            authored_by_bot: false,
            ..get_event_message()
        };
        assert_eq!(foreign.is_event(), false);

        let plain = EventMessage {
            authored_by_bot: true,
            description: Some("Just a message".to_string()),
        };
        assert_eq!(plain.is_event(), false);
        assert_eq!(EventMessage::default().is_event(), false);
    }

    #[test]
    fn test_ignore_bot_reactions() {
        let registry = EventRegistry::new();
        let mut notification = get_notification(ReactionKind::Added, 99, "🛡️");
        notification.actor_is_bot = true;

        let effects = handle_reaction(&registry, &get_event_message(), &notification);
        assert_eq!(effects.is_empty(), true);
        assert_eq!(registry.participant_count(1), 0);
    }

    #[test]
    fn test_ignore_reactions_on_other_messages() {
        let registry = EventRegistry::new();
        let notification = get_notification(ReactionKind::Added, 10, "👍");

        let effects = handle_reaction(&registry, &EventMessage::default(), &notification);
        assert_eq!(effects.is_empty(), true);
    }

    #[test]
    fn test_accept_role_reaction() {
        let registry = EventRegistry::new();
        let notification = get_notification(ReactionKind::Added, 10, "🔥");

        let effects = handle_reaction(&registry, &get_event_message(), &notification);
        assert_eq!(effects, vec![Effect::RefreshParticipants(1)]);
    }

    #[test]
    fn test_strip_disallowed_reaction() {
        let registry = EventRegistry::new();
        let notification = get_notification(ReactionKind::Added, 10, "👍");

        let effects = handle_reaction(&registry, &get_event_message(), &notification);
        assert_eq!(
            effects,
            vec![
                Effect::StripReaction,
                Effect::Warn("<@10> Only allowed: 🛡️, 🍃, 🔥".to_string()),
            ]
        );
        assert_eq!(registry.participant_count(1), 0);
    }

    #[test]
    fn test_strip_second_role_reaction() {
        let registry = EventRegistry::new();
        let message = get_event_message();
        handle_reaction(&registry, &message, &get_notification(ReactionKind::Added, 10, "🛡️"));

        let effects = handle_reaction(&registry, &message, &get_notification(ReactionKind::Added, 10, "🍃"));
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], Effect::StripReaction);
        match &effects[1] {
            Effect::Warn(text) => assert_eq!(text.starts_with("<@10> You have already reacted"), true),
            other => panic!("Unexpected effect: {:?}", other),
        }
        assert_eq!(registry.participant_count(1), 1);
    }

    #[test]
    fn test_removing_stripped_reaction_keeps_registration() {
        let registry = EventRegistry::new();
        let message = get_event_message();
        handle_reaction(&registry, &message, &get_notification(ReactionKind::Added, 10, "🛡️"));
        handle_reaction(&registry, &message, &get_notification(ReactionKind::Added, 10, "🍃"));

        // Discord reports the stripped reaction as removed by the user.
        let effects = handle_reaction(&registry, &message, &get_notification(ReactionKind::Removed, 10, "🍃"));
        assert_eq!(effects.is_empty(), true);
        assert_eq!(registry.participant_count(1), 1);
    }

    #[test]
    fn test_remove_role_reaction() {
        let registry = EventRegistry::new();
        let message = get_event_message();
        handle_reaction(&registry, &message, &get_notification(ReactionKind::Added, 10, "🛡️"));
        handle_reaction(&registry, &message, &get_notification(ReactionKind::Added, 11, "🔥"));

        let effects = handle_reaction(&registry, &message, &get_notification(ReactionKind::Removed, 10, "🛡"));
        assert_eq!(effects, vec![Effect::RefreshParticipants(1)]);

        let effects = handle_reaction(&registry, &message, &get_notification(ReactionKind::Removed, 10, "🛡️"));
        assert_eq!(effects.is_empty(), true);
    }

    #[test]
    fn test_ignore_removal_of_disallowed_reaction() {
        let registry = EventRegistry::new();
        let message = get_event_message();
        handle_reaction(&registry, &message, &get_notification(ReactionKind::Added, 10, "🛡️"));

        let effects = handle_reaction(&registry, &message, &get_notification(ReactionKind::Removed, 10, "👍"));
        assert_eq!(effects.is_empty(), true);
        assert_eq!(registry.participant_count(1), 1);
    }
}

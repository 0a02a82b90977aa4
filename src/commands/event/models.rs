use std::fmt;

use chrono::{Local, NaiveDateTime};
use serenity::model::user::User as DiscordUser;

use crate::commands::event::parser::EventDraft;

pub type EventId = u64;
pub type ParticipantId = u64;

// Emoji presentation selector, which Discord may or may not keep on reactions.
const VARIATION_SELECTOR: char = '\u{fe0f}';

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    Tank,
    Healer,
    Shooter,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Tank, Role::Healer, Role::Shooter];
    // Order of the reactions the bot puts under a new event.
    pub const REACTION_ORDER: [Role; 3] = [Role::Tank, Role::Shooter, Role::Healer];

    // Reaction symbol used for signing up under this role.
    pub fn symbol(&self) -> &'static str {
        match self {
            Role::Tank => "🛡️",
            Role::Healer => "🍃",
            Role::Shooter => "🔥",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Healer => "Healer",
            Role::Shooter => "Shooter",
        }
    }

    // Maps a reaction symbol onto the role. The variation selector is
    // ignored on both sides, so "🛡" and "🛡️" are the same role.
    pub fn from_symbol(symbol: &str) -> Option<Role> {
        let normalized = symbol.trim_matches(VARIATION_SELECTOR);
        Role::ALL
            .into_iter()
            .find(|role| role.symbol().trim_matches(VARIATION_SELECTOR) == normalized)
    }

    // Comma-separated list of all role symbols, e.g. for warnings.
    pub fn symbols_list() -> String {
        Role::ALL
            .iter()
            .map(|role| role.symbol())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Participant {
    user_id: ParticipantId,
    username: String,
}

impl Participant {
    pub fn new(user_id: ParticipantId, username: &str) -> Self {
        Participant {
            user_id,
            username: username.to_string(),
        }
    }

    // Returns a unique identifier in Discord
    pub fn get_user_id(&self) -> ParticipantId {
        self.user_id
    }

    // Returns a display name of the user
    pub fn get_username(&self) -> String {
        self.username.clone()
    }
}

impl From<&DiscordUser> for Participant {
    fn from(discord_user: &DiscordUser) -> Self {
        Participant {
            user_id: discord_user.id.get(),
            username: discord_user
                .global_name
                .clone()
                .unwrap_or_else(|| discord_user.name.clone()),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    // Identifier of the announcement message in Discord.
    id: EventId,
    // Text shown in the embed title.
    name: String,
    // The moment the event takes place (local time).
    scheduled_at: NaiveDateTime,
    // Who issued the `new_event` command.
    organizer: Participant,
    // When the announcement was posted.
    created_at: NaiveDateTime,
}

impl Event {
    pub fn new(id: EventId, organizer: Participant, draft: &EventDraft) -> Self {
        Event {
            id,
            name: draft.name.clone(),
            scheduled_at: draft.scheduled_at,
            organizer,
            created_at: Local::now().naive_local(),
        }
    }

    #[cfg(test)]
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_at
    }

    pub fn organizer(&self) -> &Participant {
        &self.organizer
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

use std::collections::HashMap;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::commands::event::models::{Event, EventId, ParticipantId, Role};
use crate::error::{Error, Result};

#[derive(Debug, Default)]
struct EventRoster {
    // Metadata of the announcement. Missing for events posted before the
    // last restart, which are still accepted.
    event: Option<Event>,
    registrations: HashMap<ParticipantId, Role>,
}

// In-memory registrations per event. A DashMap entry holds the shard lock
// for the whole check-and-mutate, so updates of one event never interleave.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct EventRegistry {
    events: DashMap<EventId, EventRoster>,
}

impl EventRegistry {
    pub fn new() -> Self {
        EventRegistry {
            events: DashMap::new(),
        }
    }

    // Remembers a freshly posted event. Existing registrations are kept.
    pub fn open_event(&self, event: Event) {
        info!(
            "Opened event '{}' ({}) by '{}' (id {}), scheduled at {}, created at {}",
            event.name(),
            event.id(),
            event.organizer().get_username(),
            event.organizer().get_user_id(),
            event.scheduled_at(),
            event.created_at(),
        );
        let mut roster = self.events.entry(event.id()).or_default();
        roster.event = Some(event);
    }

    // Registers the participant under the role of the given reaction symbol.
    // Returns the new amount of participants.
    pub fn try_register(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
        symbol: &str,
    ) -> Result<usize> {
        let role = match Role::from_symbol(symbol) {
            Some(role) => role,
            None => return Err(Error::InvalidRole(symbol.to_string())),
        };

        let mut roster = self.events.entry(event_id).or_default();
        if let Some(existing) = roster.registrations.get(&participant_id) {
            return Err(Error::AlreadyRegistered(*existing));
        }

        roster.registrations.insert(participant_id, role);
        debug!(
            "Participant {} joined event {} ({}) as {}",
            participant_id,
            event_id,
            roster.event.as_ref().map(|event| event.name()).unwrap_or("unknown"),
            role
        );
        Ok(roster.registrations.len())
    }

    // Drops the registration of the participant, whatever role it was.
    // Returns whether something was removed and the amount of participants.
    pub fn unregister(&self, event_id: EventId, participant_id: ParticipantId) -> (bool, usize) {
        match self.events.get_mut(&event_id) {
            Some(mut roster) => {
                let removed = roster.registrations.remove(&participant_id).is_some();
                (removed, roster.registrations.len())
            }
            None => (false, 0),
        }
    }

    // Drops the registration only when it was made with the role of the
    // removed reaction symbol. Removing any other reaction is a no-op.
    pub fn withdraw(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
        symbol: &str,
    ) -> (bool, usize) {
        let mut roster = match self.events.get_mut(&event_id) {
            Some(roster) => roster,
            None => return (false, 0),
        };

        let holds_role = match Role::from_symbol(symbol) {
            Some(role) => roster.registrations.get(&participant_id) == Some(&role),
            None => false,
        };
        if holds_role {
            roster.registrations.remove(&participant_id);
            debug!("Participant {} left event {}", participant_id, event_id);
        }

        (holds_role, roster.registrations.len())
    }

    pub fn participant_count(&self, event_id: EventId) -> usize {
        self.events
            .get(&event_id)
            .map(|roster| roster.registrations.len())
            .unwrap_or(0)
    }
}

// Text pieces of the event announcement embed
use chrono::{Local, NaiveDateTime, TimeZone};

use crate::commands::event::formatters::base::EventFormatter;
use crate::commands::event::models::Role;
use crate::commands::event::parser::{EventDraft, DATE_FORMAT, TIME_FORMAT};

pub const REACTION_MARKER: &str = "React to participate:";
pub const PARTICIPANTS_FIELD: &str = "Participants";

pub struct DefaultEventFormatter;

impl DefaultEventFormatter {
    pub fn new() -> Self {
        DefaultEventFormatter {}
    }

    // Unix timestamp of the local date/time, used by Discord `<t:...>` tags.
    fn unix_timestamp(&self, at: NaiveDateTime) -> i64 {
        match Local.from_local_datetime(&at).earliest() {
            Some(local) => local.timestamp(),
            // Skipped by a DST transition
            None => at.and_utc().timestamp(),
        }
    }
}

impl EventFormatter for DefaultEventFormatter {
    fn title(&self, draft: &EventDraft) -> String {
        format!("📅 {}", draft.name.to_uppercase())
    }

    fn description(&self, draft: &EventDraft, now: NaiveDateTime) -> String {
        let days_remaining = (draft.scheduled_at - now).num_days();
        let timestamp = self.unix_timestamp(draft.scheduled_at);
        let roles = Role::ALL
            .iter()
            .map(|role| format!("{} - {}", role.symbol(), role.as_str()))
            .collect::<Vec<String>>()
            .join("\n");

        format!(
            "**Days remaining:** {}\n\
            **Exact time:** <t:{}:t>\n\
            **Full date:** <t:{}:F>\n\
            **{}**\n{}",
            days_remaining, timestamp, timestamp, REACTION_MARKER, roles,
        )
    }

    fn author(&self, organizer_name: &str) -> String {
        format!("Organized by {}", organizer_name)
    }

    fn footer(&self, draft: &EventDraft) -> String {
        format!(
            "Event scheduled for {} on {}",
            draft.scheduled_at.format(TIME_FORMAT),
            draft.scheduled_at.format(DATE_FORMAT),
        )
    }

    fn participants(&self, count: usize) -> String {
        format!("{} 👤", count)
    }
}

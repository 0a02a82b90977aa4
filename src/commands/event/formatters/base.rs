use chrono::NaiveDateTime;

use crate::commands::event::parser::EventDraft;

pub trait EventFormatter {
    // Headline of the announcement embed.
    fn title(&self, draft: &EventDraft) -> String;
    // Countdown, Discord timestamps and the reaction instructions. Must
    // contain the marker phrase, otherwise reactions on the message are
    // not recognized.
    fn description(&self, draft: &EventDraft, now: NaiveDateTime) -> String;
    fn author(&self, organizer_name: &str) -> String;
    fn footer(&self, draft: &EventDraft) -> String;
    // Value of the participants field for the given amount.
    fn participants(&self, count: usize) -> String;
}

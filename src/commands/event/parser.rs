use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

pub const DATE_FORMAT: &str = "%d-%m-%Y";
pub const TIME_FORMAT: &str = "%H:%M";

lazy_static! {
    // A double-quoted group of words or a single bare word.
    static ref ARGUMENT_REGEX: Regex = Regex::new(r#""(?P<quoted>[^"]*)"?|(?P<bare>\S+)"#).unwrap();
}

#[readonly::make]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub scheduled_at: NaiveDateTime,
}

// Splits the raw command input into arguments. Double quotes group several
// words into one argument; an unterminated quote runs to the end of input.
pub fn split_arguments(text: &str) -> Vec<String> {
    ARGUMENT_REGEX
        .captures_iter(text)
        .filter_map(|captures| {
            captures
                .name("quoted")
                .or_else(|| captures.name("bare"))
                .map(|value| value.as_str().to_string())
        })
        .collect()
}

// Validates `new_event` arguments (`DD-MM-YYYY HH:MM "Name"`) against
// the given current time.
pub fn parse_arguments(text: &str, now: NaiveDateTime) -> Result<EventDraft> {
    let arguments = split_arguments(text);
    if arguments.len() < 3 {
        return Err(Error::MissingParameters);
    }

    let date = NaiveDate::parse_from_str(&arguments[0], DATE_FORMAT)
        .map_err(|_| Error::InvalidDate)?;
    let time = NaiveTime::parse_from_str(&arguments[1], TIME_FORMAT)
        .map_err(|_| Error::InvalidTime)?;

    let name = arguments[2..].join(" ").trim().to_string();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }

    let scheduled_at = date.and_time(time);
    if scheduled_at <= now {
        return Err(Error::PastDateTime);
    }

    Ok(EventDraft { name, scheduled_at })
}

pub mod base;
pub mod event;

pub use crate::commands::event::formatters::base::EventFormatter;
pub use crate::commands::event::formatters::event::{
    DefaultEventFormatter, PARTICIPANTS_FIELD, REACTION_MARKER,
};

pub mod adapter;
pub mod formatters;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod registry;

pub use crate::commands::event::handlers::new_event;
pub use crate::commands::event::registry::EventRegistry;

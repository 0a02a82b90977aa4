use std::sync::Arc;

use poise::Context as PoiseContext;

use crate::commands::event::registry::EventRegistry;
use crate::config::Config;

// User data, which is stored and accessible in all command invocations
pub struct UserData {
    pub registry: Arc<EventRegistry>,
    pub config: Config,
}

// Generic context available across Poise commands
pub type Context<'a> = PoiseContext<'a, UserData, crate::error::Error>;

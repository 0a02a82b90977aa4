pub mod context;
pub mod event;
pub mod help;

pub use crate::commands::context::{Context, UserData};

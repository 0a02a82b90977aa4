pub mod bot;
pub mod commands;
pub mod config;
pub mod error;

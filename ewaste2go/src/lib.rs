mod app;
pub mod app_core;
mod background;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod i18n;
pub mod input;
pub mod links;
pub mod logging;
pub mod state;
pub mod tracking;
pub mod ui;

pub use app::App;

// Always expose testing module (integration tests need it)
pub mod testing;

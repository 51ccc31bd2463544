pub mod api;
pub mod auth;
pub mod config;
pub mod dictionary;
pub mod loader;
pub mod output;
pub mod ui;

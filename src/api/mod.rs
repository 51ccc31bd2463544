//! Tableau Server REST API client
//!
//! Sign-in, datasource listing and datasource download. The dictionary
//! builder never talks to the server; it only reads what this module writes.

pub mod auth;
pub mod client;
pub mod constants;
pub mod datasources;
pub mod models;

pub use auth::SIGN_IN_FAILED;
pub use client::TableauClient;
pub use datasources::filename_from_disposition;
pub use models::{DatasourceSummary, Session};

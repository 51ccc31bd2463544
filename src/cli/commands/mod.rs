pub mod build;
pub mod download;
pub mod settings;

pub use build::{BuildCommands, build_command};
pub use download::{DownloadCommands, download_command};
pub use settings::{SettingsCommands, settings_command};

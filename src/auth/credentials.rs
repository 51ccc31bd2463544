use anyhow::Result;
use log::info;
use std::path::Path;

pub const SERVER_VAR: &str = "TABLEAU_SERVER";
pub const USERNAME_VAR: &str = "TABLEAU_USERNAME";
pub const PASSWORD_VAR: &str = "TABLEAU_PASSWORD";

/// Tableau Server sign-in details
#[derive(Clone)]
pub struct Credentials {
    pub server: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn from_env() -> Result<Credentials> {
        info!("Importing from environment variables");

        let server = std::env::var(SERVER_VAR)
            .map_err(|_| anyhow::anyhow!("{} environment variable not set", SERVER_VAR))?;
        let username = std::env::var(USERNAME_VAR)
            .map_err(|_| anyhow::anyhow!("{} environment variable not set", USERNAME_VAR))?;
        let password = std::env::var(PASSWORD_VAR)
            .map_err(|_| anyhow::anyhow!("{} environment variable not set", PASSWORD_VAR))?;

        println!("✓ Imported credentials from environment variables");

        Ok(Credentials {
            server,
            username,
            password,
        })
    }

    pub fn from_env_file(path: &Path) -> Result<Credentials> {
        info!("Importing from .env file: {}", path.display());

        if !path.exists() {
            anyhow::bail!("Environment file not found: {}", path.display());
        }

        let mut server = None;
        let mut username = None;
        let mut password = None;
        for item in dotenvy::from_path_iter(path).map_err(|e| {
            anyhow::anyhow!("Failed to load .env file '{}': {}", path.display(), e)
        })? {
            let (key, value) = item.map_err(|e| {
                anyhow::anyhow!("Failed to parse .env file '{}': {}", path.display(), e)
            })?;
            match key.as_str() {
                SERVER_VAR => server = Some(value),
                USERNAME_VAR => username = Some(value),
                PASSWORD_VAR => password = Some(value),
                _ => {}
            }
        }

        let missing = |var: &str| anyhow::anyhow!("{} not found in .env file: {}", var, path.display());
        let credentials = Credentials {
            server: server.ok_or_else(|| missing(SERVER_VAR))?,
            username: username.ok_or_else(|| missing(USERNAME_VAR))?,
            password: password.ok_or_else(|| missing(PASSWORD_VAR))?,
        };

        println!("✓ Imported credentials from .env file: {}", path.display());
        Ok(credentials)
    }

    pub fn from_command_line(server: String, username: String, password: String) -> Credentials {
        info!("Using command line parameters");

        Credentials {
            server: server.trim_end_matches('/').to_string(),
            username,
            password,
        }
    }
}

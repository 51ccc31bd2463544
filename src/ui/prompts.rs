use crate::auth::credentials::Credentials;
use anyhow::Result;
use dialoguer::{Input, Password};

/// Ask for whatever sign-in details were not supplied
pub fn prompt_credentials(
    server: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> Result<Credentials> {
    let server_val = if let Some(s) = server {
        s
    } else {
        Input::<String>::new()
            .with_prompt("Server URL (e.g., https://tableau.example.com)")
            .interact()?
    };

    let username_val = if let Some(u) = username {
        u
    } else {
        Input::<String>::new()
            .with_prompt("Username")
            .interact()?
    };

    let password_val = if let Some(p) = password {
        p
    } else {
        Password::new()
            .with_prompt("Password")
            .interact()?
    };

    Ok(Credentials::from_command_line(server_val, username_val, password_val))
}

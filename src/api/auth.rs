use super::client::TableauClient;
use super::constants::AUTH_HEADER;
use super::models::{Session, SignInCredentials, SignInRequest, SignInResponse, SiteRef};
use crate::auth::Credentials;
use anyhow::{Context, Result};
use log::{debug, info};

/// Message shown for any sign-in failure
pub const SIGN_IN_FAILED: &str = "Invalid login credentials and/or Tableau Server URL";

impl TableauClient {
    /// Sign in to `site` (content URL, empty for the default site)
    pub async fn sign_in(&self, credentials: &Credentials, site: &str) -> Result<Session> {
        info!(
            "Signing in to {} as {} (site '{}')",
            self.server_url(),
            credentials.username,
            site
        );

        let request = SignInRequest {
            credentials: SignInCredentials {
                name: &credentials.username,
                password: &credentials.password,
                site: SiteRef { content_url: site },
            },
        };

        let response = self
            .http()
            .post(self.api_url("auth/signin"))
            .json(&request)
            .send()
            .await
            .context(SIGN_IN_FAILED)?;

        debug!("Sign-in request status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("HTTP {}: {}", status, error_text).context(SIGN_IN_FAILED));
        }

        let body: SignInResponse = response
            .json()
            .await
            .context("Failed to decode sign-in response")
            .context(SIGN_IN_FAILED)?;

        let session = Session::from_response(body);
        info!("Signed in, site id {}", session.site_id);
        Ok(session)
    }

    /// End the session; the token is invalid afterwards
    pub async fn sign_out(&self, session: &Session) -> Result<()> {
        let response = self
            .http()
            .post(self.api_url("auth/signout"))
            .header(AUTH_HEADER, &session.token)
            .send()
            .await
            .context("Sign-out request failed")?;

        debug!("Sign-out request status: {}", response.status());

        if !response.status().is_success() {
            anyhow::bail!("Sign-out failed with HTTP {}", response.status());
        }
        Ok(())
    }
}

//! Request and response models of the Tableau Server REST API

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct SignInRequest<'a> {
    pub credentials: SignInCredentials<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignInCredentials<'a> {
    pub name: &'a str,
    pub password: &'a str,
    pub site: SiteRef<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SiteRef<'a> {
    pub content_url: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignInResponse {
    pub credentials: SignedInCredentials,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignedInCredentials {
    pub token: String,
    pub site: SiteInfo,
    pub user: UserInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SiteInfo {
    pub id: String,
    #[serde(default)]
    pub content_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserInfo {
    pub id: String,
}

/// An authenticated session on one site
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub site_id: String,
    pub site_content_url: String,
    pub user_id: String,
}

impl Session {
    pub(crate) fn from_response(response: SignInResponse) -> Self {
        let credentials = response.credentials;
        Self {
            token: credentials.token,
            site_id: credentials.site.id,
            site_content_url: credentials.site.content_url,
            user_id: credentials.user.id,
        }
    }
}

/// A published datasource as listed by the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(rename = "type", default)]
    pub datasource_type: Option<String>,
}

/// One page of `GET /sites/{site}/datasources`
#[derive(Debug, Deserialize)]
pub(crate) struct DatasourcePage {
    pub pagination: Pagination,
    #[serde(default)]
    pub datasources: DatasourceList,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DatasourceList {
    #[serde(default)]
    pub datasource: Vec<DatasourceSummary>,
}

/// Pagination block; the server sends the numbers as strings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Pagination {
    pub page_number: String,
    pub page_size: String,
    pub total_available: String,
}

impl Pagination {
    /// Whether pages after this one exist
    pub fn has_more(&self) -> Result<bool> {
        let page_number: u64 = self
            .page_number
            .parse()
            .with_context(|| format!("Invalid pageNumber: {}", self.page_number))?;
        let page_size: u64 = self
            .page_size
            .parse()
            .with_context(|| format!("Invalid pageSize: {}", self.page_size))?;
        let total_available: u64 = self
            .total_available
            .parse()
            .with_context(|| format!("Invalid totalAvailable: {}", self.total_available))?;

        Ok(page_number * page_size < total_available)
    }
}

use super::client::TableauClient;
use super::constants::{AUTH_HEADER, XML_CONTENT_TYPE};
use super::models::{DatasourcePage, DatasourceSummary, Session};
use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use std::fs;
use std::path::{Path, PathBuf};

impl TableauClient {
    /// Every datasource the signed-in user can see, across all pages
    pub async fn list_datasources(&self, session: &Session) -> Result<Vec<DatasourceSummary>> {
        let url = self.api_url(&format!("sites/{}/datasources", session.site_id));
        let mut datasources = Vec::new();
        let mut page_number: u32 = 1;

        loop {
            debug!("Fetching datasource page {}", page_number);
            let response = self
                .http()
                .get(&url)
                .header(AUTH_HEADER, &session.token)
                .query(&[
                    ("pageSize", self.page_size().to_string()),
                    ("pageNumber", page_number.to_string()),
                ])
                .send()
                .await
                .with_context(|| format!("Failed to list datasources (page {})", page_number))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                anyhow::bail!("Listing datasources failed with HTTP {}: {}", status, error_text);
            }

            let page: DatasourcePage = response
                .json()
                .await
                .context("Failed to decode datasource list")?;

            let count = page.datasources.datasource.len();
            datasources.extend(page.datasources.datasource);

            if count == 0 || !page.pagination.has_more()? {
                break;
            }
            page_number += 1;
        }

        info!("Found {} datasources", datasources.len());
        Ok(datasources)
    }

    /// Download a datasource definition (without extract) into `dir`,
    /// returning the written path
    pub async fn download_datasource(
        &self,
        session: &Session,
        datasource: &DatasourceSummary,
        dir: &Path,
    ) -> Result<PathBuf> {
        let url = self.api_url(&format!(
            "sites/{}/datasources/{}/content",
            session.site_id, datasource.id
        ));

        let response = self
            .http()
            .get(&url)
            .header(AUTH_HEADER, &session.token)
            .query(&[("includeExtract", "false")])
            .send()
            .await
            .with_context(|| format!("Failed to download datasource '{}'", datasource.name))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Downloading datasource '{}' failed with HTTP {}",
                datasource.name,
                response.status()
            );
        }

        let headers = response.headers();
        let file_name = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| {
                let is_xml = headers
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v.starts_with(XML_CONTENT_TYPE));
                fallback_file_name(&datasource.name, is_xml)
            });

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read content of '{}'", datasource.name))?;

        let path = dir.join(file_name);
        fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}

/// File name from a `Content-Disposition` header, reduced to its last path
/// component
pub fn filename_from_disposition(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|value| value.trim_matches('"'))
        .and_then(|value| Path::new(value).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}

fn fallback_file_name(name: &str, is_xml: bool) -> String {
    let stem: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect();
    let extension = if is_xml { "tds" } else { "tdsx" };
    format!("{}.{}", stem, extension)
}

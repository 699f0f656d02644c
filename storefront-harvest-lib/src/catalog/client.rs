use super::{CatalogDocument, SteamApp};
use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, app_err, bail};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

const LOG_TARGET: &str = "   catalog";

#[derive(Debug, Deserialize)]
struct AppListResponse {
    applist: AppList,
}

#[derive(Debug, Deserialize)]
struct AppList {
    apps: Vec<SteamApp>,
}

/// HTTP access to the remote catalog sources.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    raw_base_url: Url,
    app_list_url: Url,
}

impl CatalogClient {
    /// Create a client for catalog files under `raw_base_url` and the app list at `app_list_url`.
    pub fn new(raw_base_url: Url, app_list_url: Url, request_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("storefront-harvest")
            .timeout(request_timeout)
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self {
            client,
            raw_base_url,
            app_list_url,
        })
    }

    fn file_url(&self, path: &str) -> Result<Url> {
        let mut url = self.raw_base_url.clone();
        let _ = url
            .path_segments_mut()
            .map_err(|()| app_err!("raw-file URL '{}' cannot be used as a base", self.raw_base_url))?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }

    /// Whether a catalog file exists on the raw-file host.
    ///
    /// Only a `200 OK` answer to a `HEAD` request counts; any other status or a transport
    /// failure means the file is treated as absent.
    pub async fn exists(&self, path: &str) -> bool {
        let url = match self.file_url(path) {
            Ok(url) => url,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Skipping '{path}': {e:#}");
                return false;
            }
        };

        log::debug!(target: LOG_TARGET, "HEAD {url}");
        match self.client.head(url.clone()).send().await {
            Ok(resp) => resp.status() == StatusCode::OK,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Could not probe '{url}': {e:#}");
                false
            }
        }
    }

    /// Download and parse a catalog file from the raw-file host.
    pub async fn download(&self, path: &str) -> Result<CatalogDocument> {
        let url = self.file_url(path)?;
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .into_app_err_with(|| format!("unable to reach '{url}'"))?;

        let status = resp.status();
        if status != StatusCode::OK {
            bail!("HTTP {status} from '{url}'");
        }

        let value: serde_json::Value = resp
            .json()
            .await
            .into_app_err_with(|| format!("unable to decode JSON from '{url}'"))?;

        CatalogDocument::from_json(value)
    }

    /// Fetch the public list of every app id and name.
    pub async fn app_list(&self) -> Result<Vec<SteamApp>> {
        let url = &self.app_list_url;
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .into_app_err_with(|| format!("unable to reach '{url}'"))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("HTTP {status} from '{url}'");
        }

        let list: AppListResponse = resp
            .json()
            .await
            .into_app_err_with(|| format!("unexpected app list format from '{url}'"))?;

        Ok(list.applist.apps)
    }
}

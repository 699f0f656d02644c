//! JSON gateway client for a marketplace's public catalog.

use super::{AppDetail, AppSummary, Collection, DataSafety, Marketplace, Permission, Review, ReviewSort};
use crate::Result;
use crate::harvest::ItemId;
use core::time::Duration;
use ohno::{IntoAppError, app_err, bail};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

const LOG_TARGET: &str = "    market";

/// Language and country sent with every localized request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub lang: String,
    pub country: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            lang: "ko".to_string(),
            country: "kr".to_string(),
        }
    }
}

/// A page of reviews as returned by the gateway.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewsPage {
    #[serde(default)]
    data: Vec<Review>,
}

/// [`Marketplace`] implementation over a JSON HTTP gateway.
#[derive(Debug, Clone)]
pub struct HttpMarketplace {
    client: reqwest::Client,
    base_url: Url,
    locale: Locale,
}

impl HttpMarketplace {
    /// Create a new client for the gateway rooted at `base_url`.
    pub fn new(base_url: Url, locale: Locale, request_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("storefront-harvest")
            .timeout(request_timeout)
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self { client, base_url, locale })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        let _ = url
            .path_segments_mut()
            .map_err(|()| app_err!("gateway URL '{}' cannot be used as a base", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn localized(&self, segments: &[&str], extra: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.endpoint(segments)?;
        let _ = url
            .query_pairs_mut()
            .extend_pairs(extra)
            .append_pair("lang", &self.locale.lang)
            .append_pair("country", &self.locale.country);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .into_app_err_with(|| format!("unable to reach '{url}'"))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            bail!("'{url}' was not found");
        }

        if !status.is_success() {
            bail!("HTTP {status} from '{url}'");
        }

        resp.json::<T>()
            .await
            .into_app_err_with(|| format!("unable to decode response from '{url}'"))
    }
}

impl Marketplace for HttpMarketplace {
    async fn search(&self, term: &str, num: usize) -> Result<Vec<AppSummary>> {
        let num = num.to_string();
        let url = self.localized(&["search"], &[("term", term), ("num", &num)])?;
        self.get_json(url).await
    }

    async fn list(&self, category: &str, collection: Collection, num: usize) -> Result<Vec<AppSummary>> {
        let num = num.to_string();
        let collection = collection.to_string();
        let url = self.localized(&["list"], &[("category", category), ("collection", &collection), ("num", &num)])?;
        self.get_json(url).await
    }

    async fn app(&self, id: &ItemId) -> Result<AppDetail> {
        let url = self.localized(&["apps", id.as_str()], &[])?;
        self.get_json(url).await
    }

    async fn reviews(&self, id: &ItemId, sort: ReviewSort, num: usize) -> Result<Vec<Review>> {
        let num = num.to_string();
        let sort = sort.to_string();
        let url = self.localized(&["apps", id.as_str(), "reviews"], &[("sort", &sort), ("num", &num)])?;
        let page: ReviewsPage = self.get_json(url).await?;
        Ok(page.data)
    }

    async fn similar(&self, id: &ItemId) -> Result<Vec<AppSummary>> {
        let url = self.localized(&["apps", id.as_str(), "similar"], &[])?;
        self.get_json(url).await
    }

    async fn permissions(&self, id: &ItemId) -> Result<Vec<Permission>> {
        let url = self.localized(&["apps", id.as_str(), "permissions"], &[])?;
        self.get_json(url).await
    }

    async fn data_safety(&self, id: &ItemId) -> Result<DataSafety> {
        let mut url = self.endpoint(&["apps", id.as_str(), "datasafety"])?;
        let _ = url.query_pairs_mut().append_pair("lang", &self.locale.lang);
        self.get_json(url).await
    }

    async fn developer(&self, developer_id: &str) -> Result<Vec<AppSummary>> {
        let url = self.localized(&["developers", developer_id], &[])?;
        self.get_json(url).await
    }

    async fn categories(&self) -> Result<Vec<String>> {
        let url = self.endpoint(&["categories"])?;
        self.get_json(url).await
    }

    async fn suggest(&self, term: &str) -> Result<Vec<String>> {
        let mut url = self.endpoint(&["suggest"])?;
        let _ = url.query_pairs_mut().append_pair("term", term);
        self.get_json(url).await
    }
}

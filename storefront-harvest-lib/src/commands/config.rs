use crate::Result;
use crate::catalog::LoaderPaths;
use crate::harvest::marketplace::{Collection, Locale, ReviewSort};
use crate::harvest::{FacetPlan, FullPlan, Pacing, QuickPlan, Seeds};
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly
pub const CONFIG_FILE_NAME: &str = "harvest.toml";

const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:3000/";
const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com/vintagedon/steam-dataset-2025/main/";
const DEFAULT_APP_LIST_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v2/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory that receives the output documents
    #[serde(default = "default_output_dir")]
    pub output_dir: Utf8PathBuf,

    /// Timeout applied to every outbound HTTP request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Pause after each seed request
    #[serde(default = "default_seed_delay", with = "humantime_serde")]
    pub seed_delay: Duration,

    /// Pause after each per-item request
    #[serde(default = "default_facet_delay", with = "humantime_serde")]
    pub facet_delay: Duration,

    /// Pause after each item
    #[serde(default = "default_item_delay", with = "humantime_serde")]
    pub item_delay: Duration,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub full: FullConfig,

    #[serde(default)]
    pub quick: QuickConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

fn default_output_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("data")
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_seed_delay() -> Duration {
    Pacing::default().seed_delay
}

fn default_facet_delay() -> Duration {
    Pacing::default().facet_delay
}

fn default_item_delay() -> Duration {
    Pacing::default().item_delay
}

/// Where the marketplace gateway lives and which locale to ask it for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    pub url: String,
    pub lang: String,
    pub country: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        let locale = Locale::default();
        Self {
            url: DEFAULT_GATEWAY_URL.to_string(),
            lang: locale.lang,
            country: locale.country,
        }
    }
}

/// Settings of the `collect` command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FullConfig {
    pub queries: Vec<String>,
    pub query_limit: usize,
    pub categories: Vec<String>,
    pub category_limit: usize,
    pub collection: Collection,
    pub max_items: usize,
    pub reviews_limit: usize,
    pub review_sort: ReviewSort,
    pub developer_top_apps: usize,
    pub suggestion_terms: Vec<String>,
}

impl Default for FullConfig {
    fn default() -> Self {
        let plan = FullPlan::default();
        Self {
            queries: plan.seeds.queries,
            query_limit: plan.seeds.query_limit,
            categories: plan.seeds.categories,
            category_limit: plan.seeds.category_limit,
            collection: plan.seeds.collection,
            max_items: plan.cap,
            reviews_limit: plan.facets.reviews_limit,
            review_sort: plan.facets.review_sort,
            developer_top_apps: plan.facets.developer_top_apps,
            suggestion_terms: plan.suggestion_terms,
        }
    }
}

/// Settings of the `quick` command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuickConfig {
    pub queries: Vec<String>,
    pub query_limit: usize,
    pub categories: Vec<String>,
    pub category_limit: usize,
    pub collection: Collection,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl Default for QuickConfig {
    fn default() -> Self {
        let plan = QuickPlan::default();
        Self {
            queries: plan.seeds.queries,
            query_limit: plan.seeds.query_limit,
            categories: plan.seeds.categories,
            category_limit: plan.seeds.category_limit,
            collection: plan.seeds.collection,
            max_items: plan.cap,
        }
    }
}

/// Settings of the `catalog` command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub base_dir: Utf8PathBuf,
    pub local_files: Vec<String>,
    pub raw_base_url: String,
    pub remote_files: Vec<String>,
    pub app_list_url: String,
    pub top_games: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let paths = LoaderPaths::default();
        Self {
            base_dir: Utf8PathBuf::from("."),
            local_files: paths.local_files,
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            remote_files: paths.remote_files,
            app_list_url: DEFAULT_APP_LIST_URL.to_string(),
            top_games: 100,
        }
    }
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a URL is malformed or a limit is zero
    pub fn validate(&self) -> Result<()> {
        let _ = self.gateway_url()?;
        let _ = self.raw_base_url()?;
        let _ = self.app_list_url()?;

        if self.gateway.lang.is_empty() || self.gateway.country.is_empty() {
            return Err(app_err!("gateway.lang and gateway.country must not be empty"));
        }

        let limits = [
            ("full.query_limit", self.full.query_limit),
            ("full.category_limit", self.full.category_limit),
            ("full.max_items", self.full.max_items),
            ("full.reviews_limit", self.full.reviews_limit),
            ("quick.query_limit", self.quick.query_limit),
            ("quick.category_limit", self.quick.category_limit),
            ("quick.max_items", self.quick.max_items.unwrap_or(1)),
            ("catalog.top_games", self.catalog.top_games),
        ];

        for (name, value) in limits {
            if value == 0 {
                return Err(app_err!("{name} must be greater than 0"));
            }
        }

        if self.full.queries.is_empty() && self.full.categories.is_empty() {
            return Err(app_err!("full.queries and full.categories cannot both be empty"));
        }

        if self.quick.queries.is_empty() && self.quick.categories.is_empty() {
            return Err(app_err!("quick.queries and quick.categories cannot both be empty"));
        }

        Ok(())
    }

    pub fn gateway_url(&self) -> Result<Url> {
        parse_http_url("gateway.url", &self.gateway.url)
    }

    pub fn raw_base_url(&self) -> Result<Url> {
        parse_http_url("catalog.raw_base_url", &self.catalog.raw_base_url)
    }

    pub fn app_list_url(&self) -> Result<Url> {
        parse_http_url("catalog.app_list_url", &self.catalog.app_list_url)
    }

    #[must_use]
    pub const fn pacing(&self) -> Pacing {
        Pacing {
            seed_delay: self.seed_delay,
            facet_delay: self.facet_delay,
            item_delay: self.item_delay,
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale {
            lang: self.gateway.lang.clone(),
            country: self.gateway.country.clone(),
        }
    }

    #[must_use]
    pub fn full_plan(&self) -> FullPlan {
        let full = &self.full;
        FullPlan {
            seeds: Seeds {
                queries: full.queries.clone(),
                query_limit: full.query_limit,
                categories: full.categories.clone(),
                category_limit: full.category_limit,
                collection: full.collection,
            },
            cap: full.max_items,
            facets: FacetPlan {
                reviews_limit: full.reviews_limit,
                review_sort: full.review_sort,
                developer_top_apps: full.developer_top_apps,
            },
            suggestion_terms: full.suggestion_terms.clone(),
        }
    }

    #[must_use]
    pub fn quick_plan(&self) -> QuickPlan {
        let quick = &self.quick;
        QuickPlan {
            seeds: Seeds {
                queries: quick.queries.clone(),
                query_limit: quick.query_limit,
                categories: quick.categories.clone(),
                category_limit: quick.category_limit,
                collection: quick.collection,
            },
            cap: quick.max_items,
        }
    }

    #[must_use]
    pub fn loader_paths(&self) -> LoaderPaths {
        LoaderPaths {
            local_files: self.catalog.local_files.clone(),
            remote_files: self.catalog.remote_files.clone(),
        }
    }
}

fn parse_http_url(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value).into_app_err_with(|| format!("{name} is not a valid URL: '{value}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(app_err!("{name} must be an http or https URL, got '{value}'"));
    }
    if url.cannot_be_a_base() {
        return Err(app_err!("{name} cannot be used as a base URL: '{value}'"));
    }
    Ok(url)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            request_timeout: default_request_timeout(),
            seed_delay: default_seed_delay(),
            facet_delay: default_facet_delay(),
            item_delay: default_item_delay(),
            gateway: GatewayConfig::default(),
            full: FullConfig::default(),
            quick: QuickConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

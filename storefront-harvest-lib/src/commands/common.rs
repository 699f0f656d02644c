//! Setup shared by every command that talks to the network.

use super::config::Config;
use crate::Result;
use crate::catalog::{CatalogClient, Loader};
use crate::harvest::marketplace::HttpMarketplace;
use crate::harvest::{Collector, Fetcher};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared by the `collect`, `quick`, and `catalog` commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file (default is `harvest.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Directory that receives the output document (overrides the configuration)
    #[arg(long, value_name = "PATH")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

#[derive(Debug)]
pub struct Common {
    pub config: Config,
    output_dir: Utf8PathBuf,
}

impl Common {
    /// Initialize logging and load the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn new(args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
        let output_dir = args.output_dir.clone().unwrap_or_else(|| config.output_dir.clone());

        Ok(Self { config, output_dir })
    }

    #[must_use]
    pub fn output_path(&self, file_name: &str) -> Utf8PathBuf {
        self.output_dir.join(file_name)
    }

    /// Build a collector talking to the configured gateway.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway URL is invalid or the HTTP client cannot be created
    pub fn collector(&self) -> Result<Collector<HttpMarketplace>> {
        let marketplace = HttpMarketplace::new(self.config.gateway_url()?, self.config.locale(), self.config.request_timeout)?;

        Ok(Collector::new(Fetcher::new(marketplace, self.config.pacing()))
            .with_full_plan(self.config.full_plan())
            .with_quick_plan(self.config.quick_plan()))
    }

    /// Build a catalog loader rooted at `base_dir`, or at the configured directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog URL is invalid or the HTTP client cannot be created
    pub fn loader(&self, base_dir: Option<&Utf8Path>) -> Result<Loader> {
        let catalog = &self.config.catalog;
        let client = CatalogClient::new(self.config.raw_base_url()?, self.config.app_list_url()?, self.config.request_timeout)?;

        Ok(Loader::new(base_dir.unwrap_or(catalog.base_dir.as_path()), client)
            .with_paths(self.config.loader_paths())
            .with_top_games(catalog.top_games))
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when commands run more than once in-process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

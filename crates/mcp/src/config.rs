use anyhow::{bail, Context, Result};
use clap::builder::BoolishValueParser;
use clap::Parser;
use quran_sdk::config::{DEFAULT_BASE_URL, DEFAULT_CACHE_TTL, DEFAULT_TIMEOUT};
use quran_sdk::QuranClient;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug, Default)]
#[command(name = "quran-mcp")]
#[command(about = "MCP server for the Quran.com API", long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "QURAN_MCP_CONFIG", default_value = "quran-mcp.toml")]
    pub config: PathBuf,

    /// Base URL of the Quran.com API
    #[arg(long, env = "API_BASE_URL")]
    pub base_url: Option<String>,

    /// API key sent as x-api-key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log every request, response and cache decision
    #[arg(
        short,
        long,
        env = "VERBOSE_MODE",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub verbose: Option<bool>,

    /// Cache entry lifetime in milliseconds
    #[arg(long, env = "CACHE_DURATION_MS")]
    pub cache_duration_ms: Option<u64>,

    /// Per-attempt request timeout in milliseconds
    #[arg(long, env = "REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,
}

/// Contents of the optional TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub verbose: Option<bool>,

    #[serde(default)]
    pub cache_duration_ms: Option<u64>,

    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

impl FileConfig {
    /// Read `path`. `None` when it does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&content)
            .map(Some)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }
}

/// Effective settings: command line and environment, then file, then defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub base_url: String,
    pub api_key: String,
    pub verbose: bool,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
    /// File the settings were read from, if one existed
    pub config_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            verbose: false,
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: DEFAULT_TIMEOUT,
            config_file: None,
        }
    }
}

impl ServerConfig {
    /// Resolve the settings. Runs before logging is installed, so it does not
    /// log; callers report `config_file` afterwards.
    pub fn load(args: &Args) -> Result<Self> {
        let file = FileConfig::load(&args.config)?;
        let config_file = file.as_ref().map(|_| args.config.clone());
        let mut config = Self::merge(args, file.unwrap_or_default())?;
        config.config_file = config_file;
        Ok(config)
    }

    fn merge(args: &Args, file: FileConfig) -> Result<Self> {
        let defaults = Self::default();

        let request_timeout = match args.request_timeout_ms.or(file.request_timeout_ms) {
            Some(0) => bail!("request timeout must be greater than zero"),
            Some(ms) => Duration::from_millis(ms),
            None => defaults.request_timeout,
        };

        Ok(Self {
            base_url: args
                .base_url
                .clone()
                .or(file.base_url)
                .unwrap_or(defaults.base_url),
            api_key: args
                .api_key
                .clone()
                .or(file.api_key)
                .unwrap_or(defaults.api_key),
            verbose: args.verbose.or(file.verbose).unwrap_or(defaults.verbose),
            cache_ttl: args
                .cache_duration_ms
                .or(file.cache_duration_ms)
                .map(Duration::from_millis)
                .unwrap_or(defaults.cache_ttl),
            request_timeout,
            config_file: None,
        })
    }

    /// Filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "info,quran_core=debug,quran_sdk=debug,quran_mcp=debug"
        } else {
            "info"
        }
    }

    pub fn build_client(&self) -> Result<QuranClient> {
        QuranClient::builder()
            .base_url(self.base_url.as_str())
            .api_key(self.api_key.as_str())
            .cache_ttl(self.cache_ttl)
            .timeout(self.request_timeout)
            .build()
            .context("Failed to create Quran.com client")
    }
}

//! Configuration management for vdocs.
//!
//! Parses `vdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `site.base_url`
//! - `site.og_image`
//!
//! ## Example
//!
//! ```toml
//! [server]
//! host = "${VDOCS_HOST:-127.0.0.1}"
//! port = 7979
//!
//! [docs]
//! source_dir = "src/content"
//!
//! [site]
//! base_url = "https://vadli-docs.onecat.dev"
//!
//! [sitemap]
//! output = "public/sitemap.xml"
//! changefreq = "weekly"
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override public base URL.
    pub base_url: Option<String>,
    /// Override sitemap output file.
    pub sitemap_output: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "vdocs.toml";

/// Default content directory, relative to the config file.
const DEFAULT_SOURCE_DIR: &str = "content";

/// Default sitemap file, relative to the config file.
const DEFAULT_SITEMAP_OUTPUT: &str = "public/sitemap.xml";

/// Values accepted by `sitemap.changefreq`.
const CHANGE_FREQUENCIES: [&str; 7] = [
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

/// Values accepted by `site.twitter_card`.
const TWITTER_CARDS: [&str; 2] = ["summary", "summary_large_image"];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Content configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Site identity and SEO defaults.
    pub site: SiteConfig,
    /// Sitemap configuration (paths are relative strings from TOML).
    sitemap: SitemapConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved sitemap configuration (set after loading).
    #[serde(skip)]
    pub sitemap_resolved: SitemapConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Root directory of markdown content (`docs/`, `api/`, `codelabs/`).
    pub source_dir: PathBuf,
}

/// Site identity and default SEO metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public base URL (e.g., `https://vadli-docs.onecat.dev`).
    pub base_url: String,
    /// Site name appended to page titles.
    pub name: String,
    /// Default page title.
    pub title: String,
    /// Default page description.
    pub description: String,
    /// Default keywords.
    pub keywords: String,
    /// Author and publishing organization.
    pub author: String,
    /// Open Graph image URL. Defaults to `{base_url}/og-image.png`.
    pub og_image: Option<String>,
    /// Twitter card type.
    pub twitter_card: String,
    /// Robots directive.
    pub robots: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://vadli-docs.onecat.dev".to_owned(),
            name: "Vadli Documentation".to_owned(),
            title: "Vadli Documentation - Cross-Platform App Development Framework".to_owned(),
            description: "Comprehensive documentation for Vadli, a powerful framework for \
                          building cross-platform applications. Learn core concepts, API \
                          references, and step-by-step tutorials."
                .to_owned(),
            keywords: "Vadli, cross-platform, mobile development, native integration, app \
                       framework, documentation, API reference"
                .to_owned(),
            author: "Vadli".to_owned(),
            og_image: None,
            twitter_card: "summary_large_image".to_owned(),
            robots: "index, follow".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Open Graph image URL, derived from the base URL when not configured.
    #[must_use]
    pub fn og_image(&self) -> String {
        self.og_image.clone().unwrap_or_else(|| {
            format!("{}/og-image.png", self.base_url.trim_end_matches('/'))
        })
    }
}

/// Raw sitemap configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SitemapConfigRaw {
    output: Option<String>,
    changefreq: Option<String>,
}

/// Resolved sitemap configuration.
#[derive(Debug)]
pub struct SitemapConfig {
    /// Output file.
    pub output: PathBuf,
    /// Change frequency written for every URL.
    pub changefreq: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_SITEMAP_OUTPUT),
            changefreq: "weekly".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a field to hold one of the allowed values.
fn require_one_of(value: &str, allowed: &[&str], field: &str) -> Result<(), ConfigError> {
    if !allowed.contains(&value) {
        return Err(ConfigError::Validation(format!(
            "{field} must be one of: {}",
            allowed.join(", ")
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `vdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated again after overrides.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// a value is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url.clone_from(base_url);
        }
        if let Some(output) = &settings.sitemap_output {
            self.sitemap_resolved.output.clone_from(output);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            docs: DocsConfigRaw::default(),
            site: SiteConfig::default(),
            sitemap: SitemapConfigRaw::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join(DEFAULT_SOURCE_DIR),
            },
            sitemap_resolved: SitemapConfig {
                output: base.join(DEFAULT_SITEMAP_OUTPUT),
                ..SitemapConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_site()?;
        self.validate_sitemap()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate site identity.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.base_url, "site.base_url")?;
        require_http_url(&self.site.base_url, "site.base_url")?;
        require_non_empty(&self.site.name, "site.name")?;
        if let Some(og_image) = &self.site.og_image {
            require_http_url(og_image, "site.og_image")?;
        }
        require_one_of(&self.site.twitter_card, &TWITTER_CARDS, "site.twitter_card")?;
        Ok(())
    }

    /// Validate sitemap configuration.
    fn validate_sitemap(&self) -> Result<(), ConfigError> {
        require_one_of(
            &self.sitemap_resolved.changefreq,
            &CHANGE_FREQUENCIES,
            "sitemap.changefreq",
        )
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;

        if let Some(ref og_image) = self.site.og_image {
            self.site.og_image = Some(expand::expand_env(og_image, "site.og_image")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), DEFAULT_SOURCE_DIR),
        };

        self.sitemap_resolved = SitemapConfig {
            output: resolve(self.sitemap.output.as_deref(), DEFAULT_SITEMAP_OUTPUT),
            changefreq: self
                .sitemap
                .changefreq
                .clone()
                .unwrap_or_else(|| SitemapConfig::default().changefreq),
        };
    }
}

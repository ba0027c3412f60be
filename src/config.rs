use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::options::default_enforced_defaults;

pub const CONFIG_FILE_NAME: &str = ".apiconsolerc.json";

/// Framework selector value meaning "use the custom URL field".
pub const CUSTOM_FRAMEWORK: &str = "custom";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Framework {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenerConfig {
    #[serde(default = "default_shortener_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub api_key: String,
    /// Request URLs at or above this length are not sent.
    #[serde(default = "default_max_url_length")]
    pub max_url_length: usize,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_shortener_endpoint(),
            login: String::new(),
            api_key: String::new(),
            max_url_length: default_max_url_length(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Selectable frameworks; the first one is the default.
    #[serde(default = "default_frameworks")]
    pub frameworks: Vec<Framework>,
    #[serde(default = "default_enforced_defaults")]
    pub enforced_defaults: BTreeMap<String, bool>,
    /// API key sent with every non-custom framework run.
    #[serde(default)]
    pub connect_api_key: String,
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default = "default_yql_endpoint")]
    pub yql_endpoint: String,
    #[serde(default = "default_examples_root")]
    pub examples_root: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Page URL that share links are built on.
    #[serde(default = "default_console_url")]
    pub console_url: String,
}

fn default_frameworks() -> Vec<Framework> {
    [
        ("Production", "http://platform.linkedin.com/in.js"),
        ("Debug", "http://platform.linkedin.com/in.js?debug=true"),
    ]
    .into_iter()
    .map(|(label, url)| Framework {
        label: label.to_string(),
        url: url.to_string(),
    })
    .collect()
}

fn default_shortener_endpoint() -> String {
    "http://api.bit.ly/v3/shorten".to_string()
}

fn default_max_url_length() -> usize {
    2048
}

fn default_yql_endpoint() -> String {
    "http://query.yahooapis.com/v1/public/yql".to_string()
}

fn default_examples_root() -> String {
    "./examples".to_string()
}

fn default_console_url() -> String {
    "http://localhost/console/".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frameworks: default_frameworks(),
            enforced_defaults: default_enforced_defaults(),
            connect_api_key: String::new(),
            shortener: ShortenerConfig::default(),
            yql_endpoint: default_yql_endpoint(),
            examples_root: default_examples_root(),
            ignores: Vec::new(),
            console_url: default_console_url(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if there is no framework to fall back on, the URL
    /// limit is zero, or any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.frameworks.is_empty() {
            bail!("'frameworks' must list at least one framework");
        }

        if let Some(framework) = self
            .frameworks
            .iter()
            .find(|f| f.url == CUSTOM_FRAMEWORK)
        {
            bail!(
                "Framework '{}' cannot use the reserved url \"{}\"",
                framework.label,
                CUSTOM_FRAMEWORK
            );
        }

        if self.shortener.max_url_length == 0 {
            bail!("'shortener.maxUrlLength' must be greater than zero");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// URL of the default framework.
    pub fn default_framework_url(&self) -> &str {
        self.frameworks
            .first()
            .map(|f| f.url.as_str())
            .unwrap_or_default()
    }

    /// Find a framework by label (case-insensitive) or by url.
    pub fn find_framework(&self, name: &str) -> Option<&Framework> {
        self.frameworks
            .iter()
            .find(|f| f.label.eq_ignore_ascii_case(name) || f.url == name)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

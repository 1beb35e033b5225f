use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;
use std::{env, fs};
use url::Url;

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
use regex::{Captures, Regex};
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
use regex_lite::{Captures, Regex};

pub const DEFAULT_API_BASE: &str = "https://api.are.na/v2";
pub const DEFAULT_SITE_BASE: &str = "https://www.are.na";

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Where blocks are fetched from and where embed links point.
///
/// Every key is optional in the config file:
///
/// ```toml
/// api_base = "https://api.are.na/v2"
/// site_base = "https://www.are.na"
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct EmbedConfig {
    /// Base of the content-metadata endpoint, `<api_base>/blocks/<id>`
    pub api_base: Url,
    /// Base of canonical block and profile pages
    pub site_base: Url,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default api base is a valid url"),
            site_base: Url::parse(DEFAULT_SITE_BASE).expect("default site base is a valid url"),
        }
    }
}

impl EmbedConfig {
    /// Load from a TOML file, substituting `$VAR` with environment values first.
    pub fn load(config_file: impl AsRef<Path>) -> Result<EmbedConfig, ConfigError> {
        let path = config_file.as_ref();
        let config_string = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config_string = substitute_vars(&config_string, |name| env::var(name).ok());
        Self::from_toml_str(&config_string)
    }

    pub fn from_toml_str(s: &str) -> Result<EmbedConfig, ConfigError> {
        let config: EmbedConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_scheme("api_base", &self.api_base)?;
        check_scheme("site_base", &self.site_base)
    }

    /// `api_base` without a trailing slash.
    pub fn api_root(&self) -> &str {
        self.api_base.as_str().trim_end_matches('/')
    }

    /// `site_base` without a trailing slash.
    pub fn site_root(&self) -> &str {
        self.site_base.as_str().trim_end_matches('/')
    }
}

/// Replace each whole `$NAME` token with `lookup(NAME)`. Unknown names are
/// left as written.
pub fn substitute_vars<'a>(
    input: &'a str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Cow<'a, str> {
    ENV_VAR_RE.replace_all(input, |caps: &Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    })
}

fn check_scheme(key: &'static str, url: &Url) -> Result<(), ConfigError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::UnsupportedScheme {
            key,
            url: url.to_string(),
        }),
    }
}

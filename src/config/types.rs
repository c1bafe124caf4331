use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://www.fantrax.com";
pub const DEFAULT_COOKIE_ENV: &str = "FANTRAX_COOKIES";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub league: LeagueConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Which league to work on
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    /// Remote league identifier
    #[serde(rename = "league-id")]
    pub league_id: String,
}

/// Where the league setup pages live
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Scheme and host of the remote site
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,
}

/// HTTP client behavior
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(
        rename = "connect-timeout-secs",
        default = "default_connect_timeout_secs"
    )]
    pub connect_timeout_secs: u64,
}

/// Where the session cookie comes from
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Environment variable holding the `Cookie` header value
    #[serde(rename = "cookie-env", default = "default_cookie_env")]
    pub cookie_env: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_env: default_cookie_env(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_cookie_env() -> String {
    DEFAULT_COOKIE_ENV.to_string()
}

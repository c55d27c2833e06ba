use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5001;

/// Where the daemon listens and how the client identifies itself.
///
/// Immutable after construction; every operation borrows it. There is no
/// hidden global client: callers hold one config value (usually
/// `ClientConfig::default()`) and pass it to [`crate::CaskClient::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub user_agent: String,
}

impl ClientConfig {
    /// Config for a daemon at a specific host and port, with the default
    /// user agent.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

fn default_user_agent() -> String {
    format!("cask-client/{}", env!("CARGO_PKG_VERSION"))
}

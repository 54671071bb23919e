//! Chia Connection Configuration
//!
//! Configuration types for reaching the RPC services of a Chia
//! installation: per-service ports, TLS certificate locations under the
//! Chia root directory, and request timeouts.
//!
//! Configuration is plain data. It is immutable once handed to a client,
//! cheap to clone, and safe to share across concurrent calls. No file I/O
//! happens here; certificate material is only read when a client is built
//! from the config.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable overriding the Chia root directory.
pub const CHIA_ROOT_ENV: &str = "CHIA_ROOT";

/// Root directory of a default mainnet installation, relative to `$HOME`.
pub const DEFAULT_ROOT_SUFFIX: &str = ".chia/mainnet";

/// Default RPC host for a locally running installation.
pub const DEFAULT_RPC_HOST: &str = "localhost";

/// Default RPC ports, one per service daemon.
pub const DEFAULT_FULL_NODE_RPC_PORT: u16 = 8555;
pub const DEFAULT_WALLET_RPC_PORT: u16 = 9256;
pub const DEFAULT_FARMER_RPC_PORT: u16 = 8559;
pub const DEFAULT_HARVESTER_RPC_PORT: u16 = 8560;
pub const DEFAULT_CRAWLER_RPC_PORT: u16 = 8561;
pub const DEFAULT_DATA_LAYER_RPC_PORT: u16 = 8562;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while assembling connection configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The host/port pair does not form a valid URL.
    #[error("invalid RPC endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        /// The endpoint string that failed to parse.
        endpoint: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },
}

/// A Chia service daemon exposing an RPC interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    FullNode,
    Wallet,
    Farmer,
    Harvester,
    Crawler,
    DataLayer,
}

impl Service {
    /// The RPC port the service listens on in a default installation.
    pub fn default_rpc_port(&self) -> u16 {
        match self {
            Service::FullNode => DEFAULT_FULL_NODE_RPC_PORT,
            Service::Wallet => DEFAULT_WALLET_RPC_PORT,
            Service::Farmer => DEFAULT_FARMER_RPC_PORT,
            Service::Harvester => DEFAULT_HARVESTER_RPC_PORT,
            Service::Crawler => DEFAULT_CRAWLER_RPC_PORT,
            Service::DataLayer => DEFAULT_DATA_LAYER_RPC_PORT,
        }
    }

    /// Directory name of the service under `<root>/config/ssl/`.
    ///
    /// The crawler runs inside the full node process and shares its
    /// certificate pair.
    pub fn ssl_dir_name(&self) -> &'static str {
        match self {
            Service::FullNode | Service::Crawler => "full_node",
            Service::Wallet => "wallet",
            Service::Farmer => "farmer",
            Service::Harvester => "harvester",
            Service::DataLayer => "data_layer",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::FullNode => write!(f, "full_node"),
            Service::Wallet => write!(f, "wallet"),
            Service::Farmer => write!(f, "farmer"),
            Service::Harvester => write!(f, "harvester"),
            Service::Crawler => write!(f, "crawler"),
            Service::DataLayer => write!(f, "data_layer"),
        }
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full_node" | "fullnode" | "node" => Ok(Service::FullNode),
            "wallet" => Ok(Service::Wallet),
            "farmer" => Ok(Service::Farmer),
            "harvester" => Ok(Service::Harvester),
            "crawler" => Ok(Service::Crawler),
            "data_layer" | "datalayer" => Ok(Service::DataLayer),
            _ => Err(format!("Unknown Chia service: {}", s)),
        }
    }
}

/// Resolves the Chia root directory.
///
/// `$CHIA_ROOT` wins when set; otherwise the default mainnet root under the
/// user's home directory is used.
pub fn chia_root() -> PathBuf {
    resolve_root(env::var_os(CHIA_ROOT_ENV).map(PathBuf::from), dirs::home_dir())
}

fn resolve_root(env_root: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(root) = env_root {
        return root;
    }
    match home {
        Some(home) => home.join(DEFAULT_ROOT_SUFFIX),
        None => PathBuf::from(DEFAULT_ROOT_SUFFIX),
    }
}

/// Paths to the client certificate pair presented to a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslConfig {
    /// PEM certificate file.
    pub cert_path: PathBuf,
    /// PEM private key file.
    pub key_path: PathBuf,
}

impl SslConfig {
    /// Creates an SSL config from explicit certificate and key paths.
    pub fn new(cert_path: impl Into<PathBuf>, key_path: impl Into<PathBuf>) -> Self {
        Self {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
        }
    }

    /// The standard private certificate pair for a service under a Chia
    /// root, e.g. `<root>/config/ssl/wallet/private_wallet.{crt,key}`.
    pub fn for_service(root: &Path, service: Service) -> Self {
        let dir = root.join("config").join("ssl").join(service.ssl_dir_name());
        let stem = format!("private_{}", service.ssl_dir_name());
        Self {
            cert_path: dir.join(format!("{stem}.crt")),
            key_path: dir.join(format!("{stem}.key")),
        }
    }
}

/// Connection configuration for one RPC client.
///
/// Owned by exactly one client; immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Host name or address of the service.
    pub host: String,
    /// RPC port of the service.
    pub port: u16,
    /// Client certificate material; `None` disables the client identity.
    pub ssl: Option<SslConfig>,
    /// Bound on one request/response round trip.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Defaults for a service of a local installation: its standard port
    /// and the private certificate pair under the resolved Chia root.
    pub fn for_service(service: Service) -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: service.default_rpc_port(),
            ssl: Some(SslConfig::for_service(&chia_root(), service)),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Replaces the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Replaces the client certificate material.
    pub fn with_ssl(mut self, ssl: SslConfig) -> Self {
        self.ssl = Some(ssl);
        self
    }

    /// Drops the client certificate material.
    pub fn without_ssl(mut self) -> Self {
        self.ssl = None;
        self
    }

    /// Replaces the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The service base URL, always with a trailing slash so method names
    /// join as path segments.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let endpoint = format!("https://{}:{}/", self.host, self.port);
        Url::parse(&endpoint).map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })
    }
}

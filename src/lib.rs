//! Client for the [Dropbox REST API](https://www.dropbox.com/developers).
//!
//! Every operation is a single OAuth1-signed request against either the
//! metadata host or the content host. The client holds no mutable state:
//! hosts, access level and credentials are fixed at construction.

use std::borrow::Cow;

pub mod account;
pub mod builder;
pub mod credentials;
mod date;
pub mod entry;
pub mod error;
pub mod fileops;
pub mod files;
mod oauth;
mod request;

pub use builder::ClientBuilder;
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use tokio_util::sync::CancellationToken;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Base URL for the metadata operations (account info, fileops)
pub const API_BASE_URL: &str = "https://api.dropbox.com/1";
/// Base URL for the content operations (upload, download)
pub const CONTENT_BASE_URL: &str = "https://api-content.dropbox.com/1";

/// Scope granted to the client when the application was registered.
///
/// It decides which root segment gets injected into every request:
/// `dropbox` for full access, `sandbox` for an application folder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessLevel {
    Full,
    AppFolder,
}

impl Default for AccessLevel {
    fn default() -> Self {
        Self::Full
    }
}

impl AccessLevel {
    pub(crate) fn root(self) -> &'static str {
        match self {
            Self::Full => "dropbox",
            Self::AppFolder => "sandbox",
        }
    }

    /// Reads the access level from the `DROPBOX_ACCESS_LEVEL` environment
    /// variable (`app-folder` or `sandbox`), defaulting to full access.
    pub fn from_env() -> Self {
        match std::env::var("DROPBOX_ACCESS_LEVEL").ok().as_deref() {
            Some("app-folder") | Some("sandbox") => Self::AppFolder,
            _ => Self::default(),
        }
    }
}

/// Client for the Dropbox REST API
///
/// ```rust,no_run
/// use dropbox::{AccessLevel, Client, Credentials};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("key", "secret", "token", "token-secret");
/// let client = Client::new(credentials, AccessLevel::Full)?;
/// let profile = client.get_profile().await?;
/// println!("quota: {}", profile.quota_info.quota);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) inner: reqwest::Client,
    pub(crate) api_base_url: Cow<'static, str>,
    pub(crate) content_base_url: Cow<'static, str>,
    pub(crate) credentials: Credentials,
    pub(crate) access_level: AccessLevel,
    pub(crate) locale: Option<String>,
    pub(crate) cancel: CancellationToken,
}

impl Client {
    /// Creates a client against the default hosts.
    pub fn new(
        credentials: Credentials,
        access_level: AccessLevel,
    ) -> Result<Self, builder::Error> {
        ClientBuilder::default()
            .with_credentials(credentials)
            .with_access_level(access_level)
            .build()
    }

    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    /// Handle that aborts every request issued through this client.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Derives a client whose requests race against the given token.
    ///
    /// The configuration and the underlying connection pool are shared, so
    /// this is cheap enough to call per operation.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        let mut client = self.clone();
        client.cancel = token;
        client
    }
}

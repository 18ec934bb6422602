use std::borrow::Cow;

use tokio_util::sync::CancellationToken;

use crate::{AccessLevel, Credentials};

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no credentials were provided.
    #[error("no credentials provided")]
    MissingCredentials,
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// This allows specifying the hosts, the access level, the credentials, an
/// optional locale and optionally customizing the inner `reqwest::ClientBuilder`.
#[derive(Debug)]
pub struct ClientBuilder {
    api_base_url: Cow<'static, str>,
    content_base_url: Cow<'static, str>,
    credentials: Option<Credentials>,
    access_level: AccessLevel,
    locale: Option<String>,
    client_builder: Option<reqwest::ClientBuilder>,
    cancellation_token: Option<CancellationToken>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - Both hosts are set to the public Dropbox endpoints.
    /// - Full access level.
    /// - No credentials, no locale, no custom `reqwest::ClientBuilder`.
    fn default() -> Self {
        Self {
            api_base_url: Cow::Borrowed(crate::API_BASE_URL),
            content_base_url: Cow::Borrowed(crate::CONTENT_BASE_URL),
            credentials: None,
            access_level: AccessLevel::default(),
            locale: None,
            client_builder: None,
            cancellation_token: None,
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `DROPBOX_CONSUMER_KEY`, `DROPBOX_CONSUMER_SECRET`,
    ///   `DROPBOX_ACCESS_TOKEN` and `DROPBOX_ACCESS_TOKEN_SECRET` for the
    ///   credentials.
    /// - Uses `DROPBOX_ACCESS_LEVEL` for the access level.
    /// - Uses `DROPBOX_LOCALE` for the optional locale.
    pub fn from_env() -> Self {
        Self {
            credentials: Credentials::from_env(),
            access_level: AccessLevel::from_env(),
            locale: std::env::var("DROPBOX_LOCALE").ok(),
            ..Self::default()
        }
    }
}

impl ClientBuilder {
    /// Sets the base URL for the metadata operations.
    pub fn set_api_base_url(&mut self, value: impl Into<Cow<'static, str>>) {
        self.api_base_url = value.into();
    }

    /// Sets the base URL for the metadata operations and returns the modified builder.
    pub fn with_api_base_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_api_base_url(value);
        self
    }

    /// Sets the base URL for the content operations.
    pub fn set_content_base_url(&mut self, value: impl Into<Cow<'static, str>>) {
        self.content_base_url = value.into();
    }

    /// Sets the base URL for the content operations and returns the modified builder.
    pub fn with_content_base_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_content_base_url(value);
        self
    }

    /// Sets the credentials for API authentication.
    pub fn set_credentials(&mut self, value: Credentials) {
        self.credentials = Some(value);
    }

    /// Sets the credentials and returns the modified builder.
    pub fn with_credentials(mut self, value: Credentials) -> Self {
        self.set_credentials(value);
        self
    }

    /// Sets the application access level.
    pub fn set_access_level(&mut self, value: AccessLevel) {
        self.access_level = value;
    }

    /// Sets the application access level and returns the modified builder.
    pub fn with_access_level(mut self, value: AccessLevel) -> Self {
        self.set_access_level(value);
        self
    }

    /// Sets the locale sent along with every metadata operation.
    pub fn set_locale(&mut self, value: impl Into<String>) {
        self.locale = Some(value.into());
    }

    /// Sets the locale and returns the modified builder.
    pub fn with_locale(mut self, value: impl Into<String>) -> Self {
        self.set_locale(value);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, value: reqwest::ClientBuilder) {
        self.client_builder = Some(value);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, value: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(value);
        self
    }

    /// Sets the cancellation token the requests will race against.
    pub fn set_cancellation_token(&mut self, value: CancellationToken) {
        self.cancellation_token = Some(value);
    }

    /// Sets the cancellation token and returns the modified builder.
    pub fn with_cancellation_token(mut self, value: CancellationToken) -> Self {
        self.set_cancellation_token(value);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if no credentials were set.
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        Ok(crate::Client {
            inner: builder.build()?,
            api_base_url: self.api_base_url,
            content_base_url: self.content_base_url,
            credentials: self.credentials.ok_or(Error::MissingCredentials)?,
            access_level: self.access_level,
            locale: self.locale,
            cancel: self.cancellation_token.unwrap_or_default(),
        })
    }
}

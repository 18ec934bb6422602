//! The OAuth1 credential set required to sign requests, as issued when
//! registering the application and linking the user account.

/// Consumer key/secret plus access token/secret.
///
/// The values are only ever read by the signing layer; nothing else in the
/// crate inspects them.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub(crate) consumer_key: String,
    pub(crate) consumer_secret: String,
    pub(crate) access_token: String,
    pub(crate) access_token_secret: String,
}

impl Credentials {
    pub fn new<CK, CS, AT, AS>(
        consumer_key: CK,
        consumer_secret: CS,
        access_token: AT,
        access_token_secret: AS,
    ) -> Self
    where
        CK: Into<String>,
        CS: Into<String>,
        AT: Into<String>,
        AS: Into<String>,
    {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Creates the credentials from the environment variables
    ///
    /// Expects `DROPBOX_CONSUMER_KEY`, `DROPBOX_CONSUMER_SECRET`,
    /// `DROPBOX_ACCESS_TOKEN` and `DROPBOX_ACCESS_TOKEN_SECRET` to be set,
    /// otherwise returns `None`.
    pub fn from_env() -> Option<Self> {
        match (
            std::env::var("DROPBOX_CONSUMER_KEY"),
            std::env::var("DROPBOX_CONSUMER_SECRET"),
            std::env::var("DROPBOX_ACCESS_TOKEN"),
            std::env::var("DROPBOX_ACCESS_TOKEN_SECRET"),
        ) {
            (Ok(consumer_key), Ok(consumer_secret), Ok(access_token), Ok(access_token_secret)) => {
                Some(Self {
                    consumer_key,
                    consumer_secret,
                    access_token,
                    access_token_secret,
                })
            }
            _ => None,
        }
    }
}

//! The errors returned by the client

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service answered with a non success status code
    #[error("api error with status {status}: {message}")]
    Api { status: u16, message: String },
    /// Transport or protocol level failure from the http client
    #[error("transport error")]
    Transport(#[from] reqwest::Error),
    /// Unable to parse a JSON response
    #[error("unable to parse the response")]
    Json(#[from] serde_json::Error),
    /// The request was aborted through the cancellation token
    #[error("request cancelled")]
    Cancelled,
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Builds an api error from a raw response body, extracting the
    /// `{"error": ...}` payload when the service provides one.
    pub(crate) fn api(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorPayload>(body)
            .map(|payload| payload.message())
            .unwrap_or_else(|_| body.to_string());
        Self::Api { status, message }
    }
}

#[derive(serde::Deserialize)]
struct ErrorPayload {
    error: serde_json::Value,
}

impl ErrorPayload {
    fn message(self) -> String {
        match self.error {
            serde_json::Value::String(value) => value,
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn extracts_string_error_payload() {
        let err = Error::api(404, r#"{"error": "File not found"}"#);
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "File not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn keeps_raw_body_when_not_json() {
        let err = Error::api(502, "bad gateway");
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

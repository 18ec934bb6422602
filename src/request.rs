//! Request construction and dispatch shared by every operation.
//!
//! Query and form parameters are kept as ordered sequences of pairs from
//! the moment they are built until they hit the wire, so the resulting URL
//! or body is fully determined by the operation and its inputs.

use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::error::Error;

/// RFC 3986 unreserved characters, the set OAuth1 mandates for both the
/// signature material and the encoded parameters.
static STRICT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Same as [`STRICT_ENCODE_SET`] but keeps `/`, for remote paths embedded
/// in the URL path of the content operations.
static PATH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

pub(crate) fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, &STRICT_ENCODE_SET).to_string()
}

fn percent_encode_path(path: &str) -> String {
    utf8_percent_encode(path, &PATH_ENCODE_SET).to_string()
}

/// Encodes the pairs as `key=value` joined by `&`, keeping insertion order.
pub(crate) fn encode_pairs(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends the query string to the URL, or returns it untouched when there
/// is no parameter.
pub(crate) fn with_query(mut url: String, params: &[(&str, String)]) -> String {
    if !params.is_empty() {
        url.push('?');
        url.push_str(&encode_pairs(params));
    }
    url
}

impl crate::Client {
    pub(crate) fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_base_url, endpoint)
    }

    /// URL on the content host: the access level root and the remote path
    /// become path segments, with the leading `/` of the path stripped.
    fn content_url(&self, endpoint: &str, path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.content_base_url,
            endpoint,
            self.access_level.root(),
            percent_encode_path(path.trim_start_matches('/'))
        )
    }

    pub(crate) fn upload_url(
        &self,
        path: &str,
        overwrite: bool,
        parent_rev: Option<&str>,
    ) -> (String, Vec<(&'static str, String)>) {
        let mut params = Vec::new();
        self.push_locale(&mut params);
        // the service defaults to overwriting, so only the opt-out is sent
        if !overwrite {
            params.push(("overwrite", "false".to_string()));
        }
        if let Some(rev) = parent_rev.filter(|rev| !rev.is_empty()) {
            params.push(("parent_rev", rev.to_string()));
        }
        (self.content_url("files_put", path), params)
    }

    pub(crate) fn download_url(
        &self,
        path: &str,
        rev: Option<&str>,
    ) -> (String, Vec<(&'static str, String)>) {
        let mut params = Vec::new();
        if let Some(rev) = rev.filter(|rev| !rev.is_empty()) {
            params.push(("rev", rev.to_string()));
        }
        (self.content_url("files", path), params)
    }

    pub(crate) fn push_locale(&self, params: &mut Vec<(&'static str, String)>) {
        if let Some(ref locale) = self.locale {
            params.push(("locale", locale.clone()));
        }
    }

    /// Runs the whole request/response exchange while racing the
    /// cancellation token. Once a result has been produced, cancelling the
    /// token has no effect on it.
    async fn run_cancellable<T>(
        &self,
        exchange: impl std::future::Future<Output = crate::Result<T>>,
    ) -> crate::Result<T> {
        match self.cancel.run_until_cancelled(exchange).await {
            Some(result) => result,
            None => Err(Error::Cancelled),
        }
    }

    #[tracing::instrument(name = "get", skip(self, params))]
    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        params: Vec<(&'static str, String)>,
    ) -> crate::Result<T> {
        let authorization =
            crate::oauth::authorization_header(&self.credentials, "GET", &url, &params);
        let request = self
            .inner
            .get(with_query(url, &params))
            .header(AUTHORIZATION, authorization);
        self.run_cancellable(async move { read_json(request.send().await?).await })
            .await
    }

    #[tracing::instrument(name = "post", skip(self, params))]
    pub(crate) async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        params: Vec<(&'static str, String)>,
    ) -> crate::Result<T> {
        let authorization =
            crate::oauth::authorization_header(&self.credentials, "POST", &url, &params);
        let request = self
            .inner
            .post(url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(encode_pairs(&params));
        self.run_cancellable(async move { read_json(request.send().await?).await })
            .await
    }

    #[tracing::instrument(name = "put", skip(self, params, payload))]
    pub(crate) async fn put_data<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        params: Vec<(&'static str, String)>,
        payload: Vec<u8>,
    ) -> crate::Result<T> {
        let authorization =
            crate::oauth::authorization_header(&self.credentials, "PUT", &url, &params);
        let request = self
            .inner
            .put(with_query(url, &params))
            .header(AUTHORIZATION, authorization)
            .body(payload);
        self.run_cancellable(async move { read_json(request.send().await?).await })
            .await
    }

    #[tracing::instrument(name = "get", skip(self, params))]
    pub(crate) async fn get_data(
        &self,
        url: String,
        params: Vec<(&'static str, String)>,
    ) -> crate::Result<Bytes> {
        let authorization =
            crate::oauth::authorization_header(&self.credentials, "GET", &url, &params);
        let request = self
            .inner
            .get(with_query(url, &params))
            .header(AUTHORIZATION, authorization);
        self.run_cancellable(async move {
            let response = request.send().await?;
            let status = response.status();
            tracing::debug!("responded with status {status:?}");
            if status.is_success() {
                response.bytes().await.map_err(Error::from)
            } else {
                let body = response.text().await.unwrap_or_default();
                Err(Error::api(status.as_u16(), &body))
            }
        })
        .await
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> crate::Result<T> {
    let status = response.status();
    tracing::debug!("responded with status {status:?}");
    if status.is_success() {
        response.json::<T>().await.map_err(Error::from)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(Error::api(status.as_u16(), &body))
    }
}

#[cfg(test)]
mod tests {
    use super::{encode_pairs, with_query};
    use crate::{AccessLevel, Client, ClientBuilder, Credentials};

    fn client(access_level: AccessLevel) -> Client {
        ClientBuilder::default()
            .with_credentials(Credentials::new("key", "secret", "token", "token-secret"))
            .with_access_level(access_level)
            .build()
            .unwrap()
    }

    #[test]
    fn root_segment_follows_access_level() {
        let (url, _) = client(AccessLevel::Full).upload_url("/foo.txt", true, None);
        assert_eq!(url, "https://api-content.dropbox.com/1/files_put/dropbox/foo.txt");
        let (url, _) = client(AccessLevel::AppFolder).upload_url("/foo.txt", true, None);
        assert_eq!(url, "https://api-content.dropbox.com/1/files_put/sandbox/foo.txt");
    }

    #[test]
    fn upload_url_with_defaults_has_no_query() {
        let (url, params) = client(AccessLevel::Full).upload_url("/foo.txt", true, None);
        assert_eq!(
            with_query(url, &params),
            "https://api-content.dropbox.com/1/files_put/dropbox/foo.txt"
        );
    }

    #[test]
    fn upload_url_with_overwrite_false_and_parent_rev() {
        let (url, params) = client(AccessLevel::Full).upload_url("/foo.txt", false, Some("abc"));
        assert_eq!(
            with_query(url, &params),
            "https://api-content.dropbox.com/1/files_put/dropbox/foo.txt?overwrite=false&parent_rev=abc"
        );
    }

    #[test]
    fn upload_url_ignores_empty_parent_rev() {
        let (_, params) = client(AccessLevel::Full).upload_url("/foo.txt", true, Some(""));
        assert!(params.is_empty());
    }

    #[test]
    fn download_url_with_and_without_revision() {
        let api = client(AccessLevel::Full);
        let (url, params) = api.download_url("/foo.txt", None);
        assert_eq!(
            with_query(url, &params),
            "https://api-content.dropbox.com/1/files/dropbox/foo.txt"
        );
        let (url, params) = api.download_url("/foo.txt", Some("7"));
        assert_eq!(
            with_query(url, &params),
            "https://api-content.dropbox.com/1/files/dropbox/foo.txt?rev=7"
        );
    }

    #[test]
    fn path_keeps_slashes_and_encodes_the_rest() {
        let (url, _) = client(AccessLevel::Full).upload_url("/my docs/report&draft.txt", true, None);
        assert_eq!(
            url,
            "https://api-content.dropbox.com/1/files_put/dropbox/my%20docs/report%26draft.txt"
        );
    }

    #[test]
    fn pairs_keep_insertion_order() {
        let params = vec![
            ("root", "dropbox".to_string()),
            ("from_path", "/a".to_string()),
            ("to_path", "/b".to_string()),
        ];
        assert_eq!(encode_pairs(&params), "root=dropbox&from_path=%2Fa&to_path=%2Fb");
    }

    #[test]
    fn values_with_separators_round_trip() {
        let params = vec![("path", "/a&b=c".to_string())];
        let encoded = encode_pairs(&params);
        assert_eq!(encoded, "path=%2Fa%26b%3Dc");
        // parsing the pair back yields the original value
        let (key, value) = encoded.split_once('=').unwrap();
        assert_eq!(key, "path");
        assert_eq!(
            percent_encoding::percent_decode_str(value)
                .decode_utf8()
                .unwrap(),
            "/a&b=c"
        );
    }

    #[test]
    fn locale_is_appended_after_identifying_params() {
        let api = ClientBuilder::default()
            .with_credentials(Credentials::new("key", "secret", "token", "token-secret"))
            .with_locale("fr")
            .build()
            .unwrap();
        let mut params = vec![("root", "dropbox".to_string()), ("path", "/a".to_string())];
        api.push_locale(&mut params);
        assert_eq!(encode_pairs(&params), "root=dropbox&path=%2Fa&locale=fr");
    }
}

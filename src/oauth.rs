//! OAuth 1.0 request signing with the HMAC-SHA1 method.
//!
//! Dropbox expects every call to carry an `Authorization: OAuth ...` header
//! built from the consumer pair and the access token pair. The signature
//! base string covers the HTTP method, the request URL without its query
//! string, and every query or form parameter of the call.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;

use crate::credentials::Credentials;
use crate::request::percent_encode;

const NONCE_LENGTH: usize = 16;

/// Builds the `Authorization` header value for a request.
///
/// `params` must contain every query or form parameter the request will
/// carry, in any order; the raw body of an upload is not part of the
/// signature.
pub(crate) fn authorization_header(
    credentials: &Credentials,
    method: &str,
    url: &str,
    params: &[(&str, String)],
) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect();

    let mut oauth_params = vec![
        ("oauth_consumer_key", credentials.consumer_key.clone()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1".to_string()),
        ("oauth_timestamp", timestamp.to_string()),
        ("oauth_token", credentials.access_token.clone()),
        ("oauth_version", "1.0".to_string()),
    ];

    let base = signature_base_string(method, url, params, &oauth_params);
    let key = format!(
        "{}&{}",
        percent_encode(&credentials.consumer_secret),
        percent_encode(&credentials.access_token_secret)
    );
    oauth_params.push(("oauth_signature", sign(&key, &base)));
    oauth_params.sort();

    let rendered = oauth_params
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, percent_encode(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OAuth {}", rendered)
}

/// Normalized signature base string as defined in RFC 5849 section 3.4.1.
fn signature_base_string(
    method: &str,
    url: &str,
    params: &[(&str, String)],
    oauth_params: &[(&str, String)],
) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .chain(oauth_params.iter())
        .map(|(key, value)| (percent_encode(key), percent_encode(value)))
        .collect();
    pairs.sort();
    let normalized = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&normalized)
    )
}

fn sign(key: &str, base: &str) -> String {
    let mut mac =
        Hmac::<Sha1>::new_from_slice(key.as_bytes()).expect("hmac accepts keys of any size");
    mac.update(base.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

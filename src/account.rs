//! Account information endpoint.

/// Space usage, in bytes.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct QuotaInfo {
    /// Total allocated quota.
    pub quota: u64,
    /// Space used outside of shared folders.
    pub normal: u64,
    /// Space used inside shared folders.
    pub shared: u64,
}

/// Profile of the authenticated user.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Profile {
    pub uid: u64,
    pub display_name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub referral_link: Option<String>,
    pub quota_info: QuotaInfo,
}

impl crate::Client {
    /// Retrieves the profile of the authenticated user.
    #[tracing::instrument(skip(self))]
    pub async fn get_profile(&self) -> crate::Result<Profile> {
        let mut params = Vec::new();
        self.push_locale(&mut params);
        self.get_json(self.api_url("account/info"), params).await
    }
}

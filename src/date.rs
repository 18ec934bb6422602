// Dropbox is using RFC2822
// Sat, 21 Aug 2010 22:31:20 +0000

use chrono::{DateTime, Utc};
use serde::{self, Deserialize, Deserializer, Serializer};

/// Helpers for optional timestamp fields, the service omits them for
/// folders and deleted entries.
pub mod optional {
    use super::*;

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(value) => serializer.serialize_str(&value.to_rfc2822()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        value
            .map(|inner| {
                DateTime::parse_from_rfc2822(&inner)
                    .map(DateTime::<Utc>::from)
                    .map_err(serde::de::Error::custom)
            })
            .transpose()
    }
}

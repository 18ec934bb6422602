//! Metadata record returned by the file operations.

use chrono::{DateTime, Utc};

/// A file or folder as described by the service.
///
/// Entries are only ever produced by deserializing a response; the client
/// never builds one itself.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Entry {
    /// Path of the entry, relative to the access level root.
    pub path: String,
    /// Opaque revision identifier, used for `parent_rev`/`rev` parameters.
    #[serde(default)]
    pub rev: Option<String>,
    /// Deprecated numeric revision, still sent by the service.
    #[serde(default)]
    pub revision: Option<u64>,
    /// Size in bytes.
    #[serde(default)]
    pub bytes: u64,
    /// Human readable size.
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, with = "crate::date::optional")]
    pub modified: Option<DateTime<Utc>>,
    /// Modification time reported by the uploading client, when available.
    #[serde(default, with = "crate::date::optional")]
    pub client_mtime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Root the entry was resolved against, `dropbox` or `sandbox`.
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub thumb_exists: bool,
    /// Folder content hash, only present on folder listings.
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub contents: Option<Vec<Entry>>,
}

impl Entry {
    /// Last segment of the path.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(self.path.as_str())
    }

    pub fn is_file(&self) -> bool {
        !self.is_dir
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;

    #[test]
    fn deserializes_folder_metadata() {
        let entry: Entry = serde_json::from_str(
            r#"{
    "size": "0 bytes",
    "rev": "35e97029684fe",
    "thumb_exists": false,
    "bytes": 0,
    "modified": "Tue, 19 Jul 2011 21:55:38 +0000",
    "path": "/new_folder",
    "is_dir": true,
    "icon": "folder",
    "root": "dropbox",
    "revision": 5023410
}"#,
        )
        .unwrap();
        assert!(entry.is_dir);
        assert!(!entry.is_deleted);
        assert_eq!(entry.name(), "new_folder");
        assert_eq!(entry.rev.as_deref(), Some("35e97029684fe"));
        assert_eq!(entry.revision, Some(5023410));
        assert!(entry.modified.is_some());
    }

    #[test]
    fn deserializes_file_metadata() {
        let entry: Entry = serde_json::from_str(
            r#"{
    "size": "225.4KB",
    "rev": "35e97029684fe",
    "thumb_exists": false,
    "bytes": 230783,
    "modified": "Tue, 19 Jul 2011 21:55:38 +0000",
    "client_mtime": "Mon, 18 Jul 2011 18:04:35 +0000",
    "path": "/Getting_Started.pdf",
    "is_dir": false,
    "icon": "page_white_acrobat",
    "root": "dropbox",
    "mime_type": "application/pdf",
    "revision": 220823
}"#,
        )
        .unwrap();
        assert!(entry.is_file());
        assert_eq!(entry.bytes, 230783);
        assert_eq!(entry.name(), "Getting_Started.pdf");
        assert_eq!(entry.mime_type.as_deref(), Some("application/pdf"));
        assert!(entry.client_mtime.is_some());
    }
}

//! Resources needed to upload a file

use crate::entry::Entry;

/// Optional parameters for an upload.
#[derive(Clone, Debug)]
pub struct Params {
    overwrite: bool,
    parent_rev: Option<String>,
}

impl Default for Params {
    /// Overwrite enabled, no parent revision, mirroring the service
    /// defaults so nothing gets added to the query string.
    fn default() -> Self {
        Self {
            overwrite: true,
            parent_rev: None,
        }
    }
}

impl Params {
    /// When disabled, a conflicting upload is renamed by the service
    /// instead of replacing the existing file.
    pub fn overwrite(mut self, value: bool) -> Self {
        self.overwrite = value;
        self
    }

    /// Revision of the file being edited, for conflict detection.
    pub fn parent_rev(mut self, value: impl Into<String>) -> Self {
        self.parent_rev = Some(value.into());
        self
    }
}

impl crate::Client {
    /// Uploads a file with the default parameters.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to write to, relative to the access level root.
    ///   This should not point to a folder.
    /// * `content` - The raw bytes of the file.
    ///
    /// # Returns
    ///
    /// On success, returns the metadata [`Entry`] for the uploaded file.
    /// When the upload was renamed because of a conflict, the new name can
    /// be read from the returned metadata.
    pub async fn upload_file(
        &self,
        path: &str,
        content: impl Into<Vec<u8>>,
    ) -> crate::Result<Entry> {
        self.upload_file_with_params(path, content, &Params::default())
            .await
    }

    /// Uploads a file, controlling overwrite behavior and the parent
    /// revision.
    #[tracing::instrument(skip(self, content, params))]
    pub async fn upload_file_with_params(
        &self,
        path: &str,
        content: impl Into<Vec<u8>>,
        params: &Params,
    ) -> crate::Result<Entry> {
        let (url, query) = self.upload_url(path, params.overwrite, params.parent_rev.as_deref());
        self.put_data(url, query, content.into()).await
    }
}

#[cfg(test)]
mod tests {
    use super::Params;
    use crate::{ClientBuilder, Credentials};
    use mockito::Matcher;

    const METADATA: &str = r#"{
    "size": "225.4KB",
    "rev": "35e97029684fe",
    "thumb_exists": false,
    "bytes": 230783,
    "modified": "Tue, 19 Jul 2011 21:55:38 +0000",
    "path": "/Getting_Started.pdf",
    "is_dir": false,
    "icon": "page_white_acrobat",
    "root": "dropbox",
    "mime_type": "application/pdf",
    "revision": 220823
}"#;

    fn client(server: &mockito::Server) -> crate::Client {
        ClientBuilder::default()
            .with_content_base_url(server.url())
            .with_credentials(Credentials::new("key", "secret", "token", "token-secret"))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn success_with_defaults() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", "/files_put/dropbox/Getting_Started.pdf")
            .match_header("authorization", Matcher::Regex("^OAuth .*".to_string()))
            .match_body(Matcher::Exact("hello world".to_string()))
            .with_status(200)
            .with_body(METADATA)
            .create_async()
            .await;
        let entry = client(&server)
            .upload_file("/Getting_Started.pdf", "hello world".as_bytes())
            .await
            .unwrap();
        assert_eq!(entry.path, "/Getting_Started.pdf");
        assert_eq!(entry.bytes, 230783);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn overwrite_false_and_parent_rev_reach_the_query() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", "/files_put/dropbox/Getting_Started.pdf")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("overwrite".into(), "false".into()),
                Matcher::UrlEncoded("parent_rev".into(), "abc".into()),
            ]))
            .with_status(200)
            .with_body(METADATA)
            .create_async()
            .await;
        let params = Params::default().overwrite(false).parent_rev("abc");
        client(&server)
            .upload_file_with_params("/Getting_Started.pdf", vec![1u8, 2, 3], &params)
            .await
            .unwrap();
        m.assert_async().await;
    }
}

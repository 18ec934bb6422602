use bytes::Bytes;

impl crate::Client {
    /// Downloads the latest revision of a file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to retrieve, relative to the access
    ///   level root.
    pub async fn download_file(&self, path: &str) -> crate::Result<Bytes> {
        self.download(path, None).await
    }

    /// Downloads a specific revision of a file.
    pub async fn download_file_rev(&self, path: &str, rev: &str) -> crate::Result<Bytes> {
        self.download(path, Some(rev)).await
    }

    #[tracing::instrument(skip(self))]
    async fn download(&self, path: &str, rev: Option<&str>) -> crate::Result<Bytes> {
        let (url, query) = self.download_url(path, rev);
        self.get_data(url, query).await
    }
}

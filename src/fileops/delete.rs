use crate::entry::Entry;

impl crate::Client {
    /// Deletes a file or folder.
    ///
    /// Returns the metadata [`Entry`] for the deleted entry, flagged as
    /// deleted by the service.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> crate::Result<Entry> {
        let params = self.rooted_path_params(path);
        self.post_form(self.api_url("fileops/delete"), params).await
    }
}

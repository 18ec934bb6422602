use crate::entry::Entry;

impl crate::Client {
    /// Creates a folder.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the new folder to create, relative to the
    ///   access level root.
    ///
    /// # Returns
    ///
    /// On success, returns the metadata [`Entry`] for the new folder.
    #[tracing::instrument(skip(self))]
    pub async fn create_folder(&self, path: &str) -> crate::Result<Entry> {
        let params = self.rooted_path_params(path);
        self.post_form(self.api_url("fileops/create_folder"), params)
            .await
    }
}

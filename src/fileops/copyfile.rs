use crate::entry::Entry;

impl crate::Client {
    /// Copies a file or folder to a new location.
    ///
    /// # Arguments
    ///
    /// * `from_path` - The path to the entry to be copied, relative to the
    ///   access level root.
    /// * `to_path` - The destination path, including the new name.
    #[tracing::instrument(skip(self))]
    pub async fn copy_entry(&self, from_path: &str, to_path: &str) -> crate::Result<Entry> {
        let params = self.rooted_transfer_params(from_path, to_path);
        self.post_form(self.api_url("fileops/copy"), params).await
    }
}

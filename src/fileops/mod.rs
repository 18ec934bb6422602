//! File operations on the metadata host.
//!
//! These endpoints identify entries by path and answer with the resulting
//! [`Entry`](crate::entry::Entry) metadata. The `root` form parameter is
//! derived from the access level and always comes first.

pub mod copyfile;
pub mod create_folder;
pub mod delete;
pub mod movefile;

impl crate::Client {
    /// Form parameters shared by the single-path operations.
    pub(crate) fn rooted_path_params(&self, path: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("root", self.access_level.root().to_string()),
            ("path", path.to_string()),
        ];
        self.push_locale(&mut params);
        params
    }

    /// Form parameters shared by move and copy.
    pub(crate) fn rooted_transfer_params(
        &self,
        from_path: &str,
        to_path: &str,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("root", self.access_level.root().to_string()),
            ("from_path", from_path.to_string()),
            ("to_path", to_path.to_string()),
        ];
        self.push_locale(&mut params);
        params
    }
}

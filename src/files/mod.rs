//! Content host operations: raw file upload and download.
//!
//! Unlike the metadata operations, these embed the remote path directly in
//! the URL path, after the access level root segment.

pub mod download;
pub mod upload;

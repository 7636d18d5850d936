//! Streaming jar download.

use std::fs::File;
use std::path::Path;

use crate::error::{http_err, io_err, FetchError};

/// Sent on every outgoing request; the GitHub API rejects anonymous clients
/// without one.
pub(crate) const USER_AGENT: &str = concat!("javelin/", env!("CARGO_PKG_VERSION"));

/// Stream `url` into `dest`, creating parent directories as needed.
/// Returns the number of bytes written.
pub fn fetch_jar(url: &str, dest: &Path) -> Result<u64, FetchError> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let response = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| http_err(url, e))?;

    let mut reader = response.into_reader();
    let mut out = File::create(dest).map_err(|e| io_err(dest, e))?;
    std::io::copy(&mut reader, &mut out).map_err(|e| FetchError::Body {
        url: url.to_string(),
        source: e,
    })
}

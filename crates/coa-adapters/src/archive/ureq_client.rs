//! Blocking HTTP client for the template archive.

use std::io::Read;

use coa_core::{application::ApplicationError, application::ports::ArchiveClient, error::ScaffoldResult};
use tracing::{debug, instrument};

/// Production archive client: a plain GET with no authentication, no retry,
/// and no integrity check.
pub struct UreqArchiveClient {
    user_agent: String,
}

impl UreqArchiveClient {
    pub fn new() -> Self {
        Self {
            user_agent: format!("create-onchain-agent/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for UreqArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveClient for UreqArchiveClient {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> ScaffoldResult<Vec<u8>> {
        let response = ureq::get(url)
            .set("User-Agent", &self.user_agent)
            .call()
            .map_err(|e| ApplicationError::DownloadFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| ApplicationError::DownloadFailed {
                url: url.to_string(),
                reason: format!("reading response body: {e}"),
            })?;

        debug!(bytes = bytes.len(), "archive downloaded");
        Ok(bytes)
    }
}

//! Presence-based template cache.
//!
//! Guarantees a usable template directory exists locally, fetching the
//! remote archive once. The caching policy is exactly "the `templates`
//! subdirectory exists": no freshness check, no version pinning beyond
//! whatever the remote branch was at first run, and no automatic
//! invalidation. The download itself is unverified (no checksum or
//! signature) - a documented gap of the upstream distribution, not a
//! guarantee this adapter tries to paper over.
//!
//! Failure handling: the downloaded zip lands in a named temp file and the
//! extraction happens in a scratch directory, both inside the cache root.
//! Every failure path drops them, so a partial download can never satisfy
//! the presence check on the next run.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use coa_core::{
    application::{
        ApplicationError,
        ports::{ArchiveClient, TemplateSource},
    },
    error::ScaffoldResult,
};

/// Zip snapshot of the template repository's main branch.
pub const DEFAULT_ARCHIVE_URL: &str =
    "https://github.com/coinbase/agentkit/archive/refs/heads/main.zip";

/// Template directory inside the extracted archive tree.
pub const DEFAULT_ARCHIVE_SUBPATH: &str = "agentkit-main/python/create-onchain-agent/templates";

/// Where and what to fetch.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Remote archive URL.
    pub archive_url: String,
    /// Cache root; the stable template copy lives at `<root>/templates`.
    pub cache_root: PathBuf,
    /// Expected template subpath inside the extracted archive.
    pub archive_subpath: PathBuf,
}

impl FetcherConfig {
    /// Production configuration: fixed URL, OS-appropriate cache directory.
    pub fn default_locations() -> Self {
        let cache_root = directories::ProjectDirs::from("com", "coinbase", "create-onchain-agent")
            .map(|dirs| dirs.cache_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".create-onchain-agent-cache"));
        Self {
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            cache_root,
            archive_subpath: PathBuf::from(DEFAULT_ARCHIVE_SUBPATH),
        }
    }

    /// Path of the stable cached template directory.
    pub fn templates_dir(&self) -> PathBuf {
        self.cache_root.join("templates")
    }
}

/// [`TemplateSource`] backed by the on-disk cache and an [`ArchiveClient`].
pub struct CachedTemplateSource {
    client: Box<dyn ArchiveClient>,
    config: FetcherConfig,
}

impl CachedTemplateSource {
    pub fn new(client: Box<dyn ArchiveClient>, config: FetcherConfig) -> Self {
        Self { client, config }
    }

    fn fs_error(path: &Path, context: &str, e: std::io::Error) -> ApplicationError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("{context}: {e}"),
        }
    }

    /// Download, unpack, and move the template subtree into place.
    fn populate(&self, templates_dir: &Path) -> ScaffoldResult<()> {
        fs::create_dir_all(&self.config.cache_root)
            .map_err(|e| Self::fs_error(&self.config.cache_root, "create cache directory", e))?;

        info!(url = %self.config.archive_url, "downloading template archive");
        let bytes = self.client.fetch(&self.config.archive_url)?;

        // Temp file + scratch dir both live under the cache root so the
        // final move is a same-filesystem rename, and both are cleaned up
        // on drop when anything below fails.
        let mut zip_file = tempfile::NamedTempFile::new_in(&self.config.cache_root)
            .map_err(|e| Self::fs_error(&self.config.cache_root, "create temp file", e))?;
        zip_file
            .write_all(&bytes)
            .map_err(|e| Self::fs_error(zip_file.path(), "write archive", e))?;

        let scratch = tempfile::tempdir_in(&self.config.cache_root)
            .map_err(|e| Self::fs_error(&self.config.cache_root, "create scratch directory", e))?;

        let reader = zip_file
            .reopen()
            .map_err(|e| Self::fs_error(zip_file.path(), "reopen archive", e))?;
        let mut archive =
            zip::ZipArchive::new(reader).map_err(|e| ApplicationError::ExtractionFailed {
                reason: e.to_string(),
            })?;
        archive
            .extract(scratch.path())
            .map_err(|e| ApplicationError::ExtractionFailed {
                reason: e.to_string(),
            })?;
        debug!(entries = archive.len(), "archive extracted");

        let extracted = scratch.path().join(&self.config.archive_subpath);
        if !extracted.is_dir() {
            return Err(ApplicationError::TemplateMissing {
                subpath: self.config.archive_subpath.display().to_string(),
            }
            .into());
        }

        fs::rename(&extracted, templates_dir)
            .map_err(|e| Self::fs_error(templates_dir, "move templates into cache", e))?;

        Ok(())
    }
}

impl TemplateSource for CachedTemplateSource {
    #[instrument(skip(self))]
    fn ensure(&self) -> ScaffoldResult<PathBuf> {
        let templates_dir = self.config.templates_dir();

        // Presence check is the whole caching policy.
        if templates_dir.is_dir() {
            debug!(path = %templates_dir.display(), "template cache hit");
            return Ok(templates_dir);
        }

        self.populate(&templates_dir)?;
        info!(path = %templates_dir.display(), "template cache populated");
        Ok(templates_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_main_zip() {
        let config = FetcherConfig::default_locations();
        assert!(config.archive_url.ends_with("main.zip"));
        assert!(config.archive_subpath.ends_with("templates"));
    }

    #[test]
    fn templates_dir_is_under_cache_root() {
        let config = FetcherConfig {
            archive_url: "https://example.invalid/a.zip".into(),
            cache_root: PathBuf::from("/tmp/cache"),
            archive_subpath: PathBuf::from("repo/templates"),
        };
        assert_eq!(config.templates_dir(), PathBuf::from("/tmp/cache/templates"));
    }
}

//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `coa-adapters` implement the
//! driven ones; the CLI implements [`Prompter`].
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   infrastructure
//!   - `Filesystem`: destination checks
//!   - `ArchiveClient`: raw archive download
//!   - `TemplateSource`: "a usable template directory exists locally"
//!   - `TemplateRenderer`: materialize a template into a destination
//! - **Driving (Input) Ports**: implemented by whichever frontend runs the
//!   flow
//!   - `Prompter`: blocking question/answer primitives

use std::path::{Path, PathBuf};

use crate::error::ScaffoldResult;

/// Port for interactive question/answer primitives.
///
/// Implemented by:
/// - `coa_cli::prompter::DialoguerPrompter` (production)
/// - `coa_adapters::prompter::ScriptedPrompter` (testing)
///
/// Each call blocks until the user answers. Implementations signal an
/// operating-system interrupt or closed input stream as
/// `ApplicationError::Cancelled`.
pub trait Prompter {
    /// Free-text question. `default` pre-fills the answer when present.
    fn text(&mut self, message: &str, default: Option<&str>) -> ScaffoldResult<String>;

    /// Single-select over `choices` (arrow-key style); returns the chosen
    /// index. `default` is the pre-highlighted entry.
    fn select(&mut self, message: &str, choices: &[&str], default: usize) -> ScaffoldResult<usize>;
}

/// Port for destination checks.
///
/// Deliberately a single operation: the flow and the scaffold service only
/// ever ask "is this path taken?". Writes go through [`TemplateRenderer`],
/// which owns its staging and cleanup.
///
/// Implemented by:
/// - `coa_adapters::filesystem::LocalFilesystem` (production)
/// - `coa_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for downloading the raw template archive.
///
/// Narrow by design so tests can swap in a fake that counts requests.
pub trait ArchiveClient: Send + Sync {
    /// Fetch `url` fully into memory.
    fn fetch(&self, url: &str) -> ScaffoldResult<Vec<u8>>;
}

/// Port guaranteeing a usable template directory exists locally.
///
/// Implemented by `coa_adapters::CachedTemplateSource` (presence-based
/// cache, download on miss).
pub trait TemplateSource: Send + Sync {
    /// Return the path to the local template directory, fetching it first
    /// if necessary. Idempotent: a warm cache performs no network access.
    fn ensure(&self) -> ScaffoldResult<PathBuf>;
}

/// Port for template rendering.
///
/// The engine is a black box: it renders the template directory tree into
/// `dest`, substituting the four named variables, and fails if `dest`
/// exists or the template is malformed.
pub trait TemplateRenderer: Send + Sync {
    /// Render `template_dir` into `dest` (which must not yet exist).
    fn render(
        &self,
        template_dir: &Path,
        dest: &Path,
        vars: &crate::domain::RenderVars,
    ) -> ScaffoldResult<()>;
}

//! Infrastructure adapters for `create-onchain-agent`.
//!
//! This crate implements the ports defined in `coa_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod archive;
pub mod filesystem;
pub mod prompter;
pub mod renderer;
pub mod template_fetcher;

// Re-export commonly used adapters
pub use archive::UreqArchiveClient;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompter::ScriptedPrompter;
pub use renderer::TeraRenderer;
pub use template_fetcher::{CachedTemplateSource, FetcherConfig};

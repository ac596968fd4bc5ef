//! Application layer.
//!
//! This layer contains:
//! - **Prompt flow**: the typed question/answer sequence
//! - **ScaffoldService**: fetch-then-render orchestration
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod prompt_flow;
pub mod scaffold_service;

pub use error::ApplicationError;
pub use prompt_flow::{FlowDefaults, FlowOutcome, Notice, run_prompt_flow};
pub use scaffold_service::ScaffoldService;

// Re-export port traits (for adapter implementation)
pub use ports::{ArchiveClient, Filesystem, Prompter, TemplateRenderer, TemplateSource};

//! Core for `create-onchain-agent` - hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for the
//! onchain-agent scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            coa-cli (CLI)                │
//! │   (banner, prompts, console output)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Layer                │
//! │   (PromptFlow, ScaffoldService)         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Prompter, Filesystem, TemplateSource,  │
//! │   ArchiveClient, TemplateRenderer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     coa-adapters (Infrastructure)       │
//! │ (CachedTemplateSource, TeraRenderer,    │
//! │  UreqArchiveClient, LocalFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (ProjectAnswers, networks, validation)  │
//! │       No External Dependencies          │
//! └─────────────────────────────────────────┘
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FlowDefaults, FlowOutcome, Notice, ScaffoldService, run_prompt_flow,
        ports::{ArchiveClient, Filesystem, Prompter, TemplateRenderer, TemplateSource},
    };
    pub use crate::domain::{
        CDP_SUPPORTED_NETWORKS, NETWORK_CHOICES, NetworkChoice, ProjectAnswers, RenderVars,
        WalletProvider, default_network_index, derive_package_name, resolve_network,
        supports_custodial_wallet, validate_package_name, validate_project_name,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

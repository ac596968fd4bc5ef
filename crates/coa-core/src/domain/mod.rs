//! Domain layer - pure logic, no I/O.
//!
//! Everything the prompt flow validates or resolves lives here: package
//! identifier rules, the static network table, the custodial-support set,
//! and the `ProjectAnswers` value object the rest of the pipeline consumes.

pub mod answers;
pub mod error;
pub mod network;
pub mod package_name;

pub use answers::{ProjectAnswers, RenderVars, WalletProvider};
pub use error::{DomainError, ErrorCategory};
pub use network::{
    CDP_SUPPORTED_NETWORKS, DEFAULT_NETWORK_KEY, NETWORK_CHOICES, NetworkChoice,
    OTHER_NETWORK_KEY, default_network_index, resolve_network, supports_custodial_wallet,
};
pub use package_name::{derive_package_name, validate_package_name, validate_project_name};

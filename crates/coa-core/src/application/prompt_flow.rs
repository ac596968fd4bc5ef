//! Interactive prompt flow.
//!
//! An explicit finite sequence of typed steps with branch predicates,
//! independent of any terminal-UI library: the flow talks to a [`Prompter`]
//! port, so tests feed it a scripted list of answers instead of keyboard
//! input.
//!
//! Step order (branches in parentheses):
//! 1. project name (defaulted, trimmed, checked as a directory name)
//! 2. destination check - existing directory ends the flow before any write
//! 3. package name (re-prompt once only when the derived candidate is invalid)
//! 4. network single-select
//! 5. (network == "other") free-text EVM chain ID
//! 6. (network custodial-supported) wallet-provider single-select,
//!    otherwise forced to `eth` with a warning notice

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::ports::{Filesystem, Prompter},
    domain::{
        DomainError, NETWORK_CHOICES, OTHER_NETWORK_KEY, ProjectAnswers, WalletProvider,
        default_network_index, derive_package_name, resolve_network,
        supports_custodial_wallet, validate_package_name, validate_project_name,
    },
    error::{ScaffoldError, ScaffoldResult},
};

/// Defaults threaded in from configuration.
#[derive(Debug, Clone)]
pub struct FlowDefaults {
    /// Pre-filled project name.
    pub project_name: String,
}

impl Default for FlowDefaults {
    fn default() -> Self {
        Self {
            project_name: "onchain-agent".into(),
        }
    }
}

/// Side-channel messages the flow wants surfaced to the user.
///
/// Kept out of the `Prompter` port so "warning emitted exactly once" is a
/// property of the returned value, not of console I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The custodial provider is unavailable on the chosen network; the
    /// non-custodial provider was forced.
    CustodialUnsupported { network: String },
}

impl Notice {
    /// Human-readable warning line.
    pub fn message(&self) -> String {
        match self {
            Self::CustodialUnsupported { network } => format!(
                "CDP is not supported on {network}. Defaulting to Ethereum Account Wallet Provider."
            ),
        }
    }
}

/// Result of running the flow to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// All answers collected; nothing has been written yet.
    Ready {
        answers: ProjectAnswers,
        project_path: PathBuf,
        notices: Vec<Notice>,
    },
    /// The destination already exists; the run must end without side
    /// effects (and without an error exit).
    DestinationExists { project_path: PathBuf },
}

/// Run the full question/answer session.
///
/// Blocks on each prompt; an interrupt propagates as
/// `ApplicationError::Cancelled` before anything touches the destination.
#[instrument(skip_all)]
pub fn run_prompt_flow(
    prompter: &mut dyn Prompter,
    filesystem: &dyn Filesystem,
    cwd: &Path,
    defaults: &FlowDefaults,
) -> ScaffoldResult<FlowOutcome> {
    // 1. Project name
    let project_name = prompter
        .text("Enter your project name:", Some(&defaults.project_name))?
        .trim()
        .to_string();
    validate_project_name(&project_name)?;

    // 2. Destination check - before anything else can have side effects
    let project_path = cwd.join(&project_name);
    if filesystem.exists(&project_path) {
        debug!(path = %project_path.display(), "destination already exists");
        return Ok(FlowOutcome::DestinationExists { project_path });
    }

    // 3. Package name: derive, re-prompt once if the derivation is invalid.
    //    The re-prompted answer is accepted as-is.
    let candidate = derive_package_name(&project_name);
    let package_name = if validate_package_name(&candidate) {
        candidate
    } else {
        prompter
            .text(
                "Enter a valid package name (letters, numbers, underscores only):",
                None,
            )?
            .trim()
            .to_string()
    };

    // 4. Network selection. The prompt yields a display label; the label
    //    resolves back through the same table it was rendered from.
    let labels: Vec<&str> = NETWORK_CHOICES.iter().map(|c| c.label).collect();
    let picked = prompter.select("Choose a network:", &labels, default_network_index())?;
    let label = *labels.get(picked).ok_or_else(|| ScaffoldError::Internal {
        message: format!("network selection index {picked} out of range"),
    })?;
    let mut network = resolve_network(label)
        .ok_or_else(|| DomainError::UnknownNetwork {
            label: label.to_string(),
        })?
        .to_string();

    // 5. Custom chain ID for the "other" sentinel. The raw string becomes
    //    the network key; no numeric validation, but empty answers re-ask.
    if network == OTHER_NETWORK_KEY {
        network = loop {
            let chain_id = prompter
                .text("Enter the EVM Chain ID for your custom network:", None)?
                .trim()
                .to_string();
            if !chain_id.is_empty() {
                break chain_id;
            }
        };
    }

    // 6. Wallet provider: ask only where the custodial provider is
    //    available, otherwise force `eth` and record the warning.
    let mut notices = Vec::new();
    let wallet_provider = if supports_custodial_wallet(&network) {
        let providers = [WalletProvider::Cdp, WalletProvider::Eth];
        let provider_labels: Vec<String> = providers
            .iter()
            .map(|p| format!("{} - {}", p.label(), p.description()))
            .collect();
        let label_refs: Vec<&str> = provider_labels.iter().map(String::as_str).collect();
        let picked = prompter.select("Select a wallet provider:", &label_refs, 0)?;
        *providers.get(picked).ok_or_else(|| ScaffoldError::Internal {
            message: format!("wallet provider index {picked} out of range"),
        })?
    } else {
        notices.push(Notice::CustodialUnsupported {
            network: network.clone(),
        });
        WalletProvider::Eth
    };

    debug!(
        project = %project_name,
        package = %package_name,
        network = %network,
        provider = %wallet_provider,
        "answers collected"
    );

    Ok(FlowOutcome::Ready {
        answers: ProjectAnswers {
            project_name,
            package_name,
            network,
            wallet_provider,
        },
        project_path,
        notices,
    })
}

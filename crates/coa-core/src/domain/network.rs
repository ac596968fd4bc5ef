//! Static network table and custodial-wallet support set.
//!
//! The table is fixed at compile time; there is no dynamic registration.
//! Selection UIs render `label` and map the picked entry back to `key`.

/// One selectable network: a display label and its internal key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkChoice {
    pub label: &'static str,
    pub key: &'static str,
}

/// All networks offered by the selection prompt, in display order.
///
/// Exactly one entry carries the sentinel key [`OTHER_NETWORK_KEY`], which
/// triggers a follow-up free-text chain-ID prompt.
pub const NETWORK_CHOICES: [NetworkChoice; 11] = [
    NetworkChoice { label: "Ethereum Mainnet", key: "ethereum-mainnet" },
    NetworkChoice { label: "Ethereum Sepolia", key: "ethereum-sepolia" },
    NetworkChoice { label: "Polygon Mainnet", key: "polygon-mainnet" },
    NetworkChoice { label: "Polygon Mumbai", key: "polygon-mumbai" },
    NetworkChoice { label: "Base Mainnet", key: "base-mainnet" },
    NetworkChoice { label: "Base Sepolia (default)", key: "base-sepolia" },
    NetworkChoice { label: "Arbitrum Mainnet", key: "arbitrum-mainnet" },
    NetworkChoice { label: "Arbitrum Sepolia", key: "arbitrum-sepolia" },
    NetworkChoice { label: "Optimism Mainnet", key: "optimism-mainnet" },
    NetworkChoice { label: "Optimism Sepolia", key: "optimism-sepolia" },
    NetworkChoice { label: "Other (Enter EVM Chain ID)", key: "other" },
];

/// Networks on which the custodial (CDP) wallet provider is available.
pub const CDP_SUPPORTED_NETWORKS: [&str; 6] = [
    "base-mainnet",
    "base-sepolia",
    "ethereum-mainnet",
    "ethereum-sepolia",
    "polygon-mainnet",
    "polygon-mumbai",
];

/// Key of the entry pre-selected in the network prompt.
pub const DEFAULT_NETWORK_KEY: &str = "base-sepolia";

/// Sentinel key that routes to the free-text chain-ID prompt.
pub const OTHER_NETWORK_KEY: &str = "other";

/// Resolve a display label to its internal key.
///
/// Exact match only. Returns `None` for labels that are not in
/// [`NETWORK_CHOICES`]; callers that render choices from the same table
/// never hit that branch.
pub fn resolve_network(label: &str) -> Option<&'static str> {
    NETWORK_CHOICES
        .iter()
        .find(|choice| choice.label == label)
        .map(|choice| choice.key)
}

/// Whether the custodial wallet provider supports `network_key`.
///
/// Custom chain IDs entered via the "other" path are never in the set.
pub fn supports_custodial_wallet(network_key: &str) -> bool {
    CDP_SUPPORTED_NETWORKS.contains(&network_key)
}

/// Index of the default entry within [`NETWORK_CHOICES`].
pub fn default_network_index() -> usize {
    NETWORK_CHOICES
        .iter()
        .position(|choice| choice.key == DEFAULT_NETWORK_KEY)
        .unwrap_or(0)
}

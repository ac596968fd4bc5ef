//! Collected answers and their template-variable form.

use serde::{Deserialize, Serialize};

/// Wallet provider backing the generated agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    /// Coinbase Developer Platform managed wallet (custodial).
    Cdp,
    /// Client-side Ethereum account wallet.
    Eth,
}

impl WalletProvider {
    /// Internal key written into the template context.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cdp => "cdp",
            Self::Eth => "eth",
        }
    }

    /// Display label used by the selection prompt.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cdp => "CDP Wallet Provider",
            Self::Eth => "Ethereum Account Wallet Provider",
        }
    }

    /// One-line description shown beneath the selection prompt.
    pub fn description(self) -> &'static str {
        match self {
            Self::Cdp => "Uses Coinbase Developer Platform (CDP)'s managed wallet.",
            Self::Eth => "Client-side Ethereum wallet.",
        }
    }
}

impl std::fmt::Display for WalletProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the prompt flow collects, consumed once by the materializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAnswers {
    /// Project (and destination directory) name, trimmed.
    pub project_name: String,
    /// Valid package identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    pub package_name: String,
    /// Network key from the static table, or a raw chain-ID string when the
    /// "other" entry was chosen.
    pub network: String,
    /// Selected (or forced) wallet provider.
    pub wallet_provider: WalletProvider,
}

/// Flat variable mapping handed to the templating engine.
///
/// Exactly four keys; the engine sees nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderVars {
    pub project_name: String,
    pub package_name: String,
    pub network: String,
    pub wallet_provider: String,
}

impl RenderVars {
    /// Key/value view in the template's naming convention.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("_project_name", self.project_name.as_str()),
            ("_package_name", self.package_name.as_str()),
            ("_network", self.network.as_str()),
            ("_wallet_provider", self.wallet_provider.as_str()),
        ]
    }
}

impl From<&ProjectAnswers> for RenderVars {
    fn from(answers: &ProjectAnswers) -> Self {
        Self {
            project_name: answers.project_name.clone(),
            package_name: answers.package_name.clone(),
            network: answers.network.clone(),
            wallet_provider: answers.wallet_provider.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectAnswers {
        ProjectAnswers {
            project_name: "demo".into(),
            package_name: "demo".into(),
            network: "base-sepolia".into(),
            wallet_provider: WalletProvider::Cdp,
        }
    }

    #[test]
    fn wallet_provider_keys() {
        assert_eq!(WalletProvider::Cdp.as_str(), "cdp");
        assert_eq!(WalletProvider::Eth.as_str(), "eth");
    }

    #[test]
    fn render_vars_carry_exactly_four_keys() {
        let vars = RenderVars::from(&sample());
        let entries = vars.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], ("_project_name", "demo"));
        assert_eq!(entries[1], ("_package_name", "demo"));
        assert_eq!(entries[2], ("_network", "base-sepolia"));
        assert_eq!(entries[3], ("_wallet_provider", "cdp"));
    }

    #[test]
    fn answers_serialize_with_lowercase_provider() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"cdp\""));
    }
}

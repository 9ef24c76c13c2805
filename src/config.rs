use std::env;

/// Scaffold template passed to `create-react-native-app -t`
pub const DEFAULT_TEMPLATE: &str = "with-typescript";

/// Configuration for the external toolchain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// Command used to run Node package binaries
    pub npx: String,
    /// `create-react-native-app` template name
    pub template: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            npx: "npx".to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl ToolchainConfig {
    /// Load configuration, honouring `LZ_DAPP_NPX` and `LZ_DAPP_TEMPLATE`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            npx: non_empty_var("LZ_DAPP_NPX").unwrap_or(defaults.npx),
            template: non_empty_var("LZ_DAPP_TEMPLATE").unwrap_or(defaults.template),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ToolchainConfig::default();
        assert_eq!(config.npx, "npx");
        assert_eq!(config.template, "with-typescript");
    }
}

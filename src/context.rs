//! Creation parameters and the read-only context derived from them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::accounts::{self, TestAccount};
use crate::paths;

/// Values collected from the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationParams {
    pub name: String,
    pub uri_scheme: String,
}

/// Hardhat locations and the generated local-chain accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardhatOptions {
    pub hardhat: PathBuf,
    pub hardhat_config: PathBuf,
    pub hardhat_accounts: Vec<TestAccount>,
}

/// Everything the materialization steps need, computed once
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationContext {
    #[serde(flatten)]
    pub params: CreationParams,
    /// A `yarn.lock` was present when the context was derived
    pub yarn: bool,
    pub hardhat: HardhatOptions,
    pub project_dir: PathBuf,
    pub scripts_dir: PathBuf,
    pub tests_dir: PathBuf,
    pub src_dir: PathBuf,
}

impl CreationContext {
    /// Derive the context for a project created under `root`
    pub fn derive(root: &Path, params: CreationParams) -> Self {
        Self::with_accounts(root, params, accounts::generate())
    }

    /// Same as [`CreationContext::derive`] with caller-supplied accounts
    pub fn with_accounts(root: &Path, params: CreationParams, accounts: Vec<TestAccount>) -> Self {
        let project_dir = paths::project_dir(root, &params.name);
        Self {
            yarn: paths::yarn_lock(&project_dir).exists(),
            hardhat: HardhatOptions {
                hardhat: paths::hardhat_script(&project_dir),
                hardhat_config: paths::hardhat_config(&project_dir),
                hardhat_accounts: accounts,
            },
            scripts_dir: paths::scripts_dir(&project_dir),
            tests_dir: paths::tests_dir(&project_dir),
            src_dir: paths::src_dir(&project_dir),
            project_dir,
            params,
        }
    }

    pub fn name(&self) -> &str {
        &self.params.name
    }

    /// Key of the first account, used as the deployer key
    pub fn deployer_key(&self) -> &str {
        self.hardhat
            .hardhat_accounts
            .first()
            .map(|account| account.private_key.as_str())
            .unwrap_or_default()
    }

    /// Command users type to run a package script (`yarn ios` / `npm run-script ios`)
    pub fn script_command(&self, script: &str) -> String {
        if self.yarn {
            format!("yarn {script}")
        } else {
            format!("npm run-script {script}")
        }
    }
}

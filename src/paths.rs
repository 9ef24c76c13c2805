//! Single source of truth for the generated project's filesystem layout.
//!
//! This module defines WHERE generated files live. It has no I/O, no
//! validation, no business logic. One file shows the entire layout.
//!
//! ```text
//! <project>/
//! ├── index.js / index.d.ts      # Bootstrap shim and type roots
//! ├── package.json               # Deep-merged manifest
//! ├── .env / .env.example        # Environment schema
//! ├── config.js                  # Contract address + provider link
//! ├── hardhat.config.js          # Networks and test accounts
//! ├── assets/{image,video,json,raw}/
//! ├── contracts/HelloLestonz.sol
//! ├── frontend/App.js
//! ├── scripts/{android,ios,web}.ts, deployContract.js
//! └── __tests__/contracts/HelloLestonz.test.js
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Directories
// =============================================================================

/// Project root: `<root>/<name>`
pub fn project_dir(root: &Path, name: &str) -> PathBuf {
    root.join(name)
}

/// Dev-loop launchers: `<project>/scripts/`
pub fn scripts_dir(project: &Path) -> PathBuf {
    project.join("scripts")
}

/// Test root: `<project>/__tests__/`
pub fn tests_dir(project: &Path) -> PathBuf {
    project.join("__tests__")
}

/// Contract tests: `<project>/__tests__/contracts/`
pub fn contract_tests_dir(project: &Path) -> PathBuf {
    tests_dir(project).join("contracts")
}

/// Frontend sources: `<project>/frontend/`
pub fn src_dir(project: &Path) -> PathBuf {
    project.join("frontend")
}

/// Static assets: `<project>/assets/`
pub fn assets_dir(project: &Path) -> PathBuf {
    project.join("assets")
}

/// Solidity sources: `<project>/contracts/`
pub fn contracts_dir(project: &Path) -> PathBuf {
    project.join("contracts")
}

/// Asset subdirectories kept in git with a `.gitkeep`
pub const ASSET_KINDS: [&str; 4] = ["image", "video", "json", "raw"];

// =============================================================================
// Files
// =============================================================================

/// Yarn lockfile, present when the scaffold was installed with yarn
pub fn yarn_lock(project: &Path) -> PathBuf {
    project.join("yarn.lock")
}

/// `<project>/package.json`
pub fn package_json(project: &Path) -> PathBuf {
    project.join("package.json")
}

/// `<project>/hardhat.config.js`
pub fn hardhat_config(project: &Path) -> PathBuf {
    project.join("hardhat.config.js")
}

/// `<project>/scripts/hardhat.ts`
pub fn hardhat_script(project: &Path) -> PathBuf {
    scripts_dir(project).join("hardhat.ts")
}

/// `<project>/assets/image/app-icon.png`
pub fn app_icon(project: &Path) -> PathBuf {
    assets_dir(project).join("image").join("app-icon.png")
}

/// `<project>/App.js` left behind by the scaffold, superseded by `frontend/App.js`
pub fn scaffold_app(project: &Path) -> PathBuf {
    project.join("App.js")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_rooted_at_project() {
        let project = project_dir(Path::new("/work"), "my-dapp");
        assert_eq!(project, PathBuf::from("/work/my-dapp"));
        assert!(scripts_dir(&project).starts_with(&project));
        assert!(contract_tests_dir(&project).ends_with("__tests__/contracts"));
        assert!(app_icon(&project).ends_with("assets/image/app-icon.png"));
        assert!(hardhat_script(&project).ends_with("scripts/hardhat.ts"));
    }
}

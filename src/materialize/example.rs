//! Example contract, its test, the Hardhat config and the frontend app

use anyhow::{Context, Result};
use std::fs;

use super::{write_file, write_text};
use crate::context::CreationContext;
use crate::paths;
use crate::templates;

pub fn prepare_example(ctx: &CreationContext) -> Result<()> {
    let contracts_dir = paths::contracts_dir(&ctx.project_dir);
    write_text(
        &contracts_dir.join("HelloLestonz.sol"),
        templates::example::CONTRACT_SOL,
    )?;

    let contract_tests = paths::contract_tests_dir(&ctx.project_dir);
    write_file(&contract_tests.join(".gitkeep"), "")?;
    write_text(
        &contract_tests.join("HelloLestonz.test.js"),
        templates::example::CONTRACT_TEST_JS,
    )?;

    write_hardhat_config(ctx)?;

    write_text(
        &ctx.src_dir.join("App.js"),
        templates::example::APP_JS,
    )?;

    // The scaffold's root App.js is superseded by frontend/App.js.
    let scaffold_app = paths::scaffold_app(&ctx.project_dir);
    if scaffold_app.exists() {
        fs::remove_file(&scaffold_app)
            .with_context(|| format!("Failed to remove {}", scaffold_app.display()))?;
    }

    Ok(())
}

/// `hardhat.config.js` with the generated accounts embedded as a commented JSON list
fn write_hardhat_config(ctx: &CreationContext) -> Result<()> {
    let accounts = serde_json::to_string(&ctx.hardhat.hardhat_accounts)
        .context("Failed to serialize test accounts")?;
    let content = templates::render(
        templates::example::HARDHAT_CONFIG_JS,
        &[("accounts", accounts.as_str())],
    );
    write_text(&ctx.hardhat.hardhat_config, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materialize::test_support;
    use tempfile::TempDir;

    #[test]
    fn test_writes_example_files() -> Result<()> {
        let temp = TempDir::new()?;
        let ctx = test_support::context(temp.path());

        prepare_example(&ctx)?;

        let contract = fs::read_to_string(ctx.project_dir.join("contracts/HelloLestonz.sol"))?;
        assert!(contract.contains("contract HelloLestonz"));
        assert!(ctx
            .project_dir
            .join("__tests__/contracts/.gitkeep")
            .is_file());
        assert!(ctx.src_dir.join("App.js").is_file());
        Ok(())
    }

    #[test]
    fn test_hardhat_config_embeds_accounts() -> Result<()> {
        let temp = TempDir::new()?;
        let ctx = test_support::context(temp.path());

        prepare_example(&ctx)?;

        let config = fs::read_to_string(&ctx.hardhat.hardhat_config)?;
        let expected = format!(
            "//   accounts: [{{\"privateKey\":\"0x{:064x}\",\"balance\":\"1000000000000000000000\"}}",
            1
        );
        assert!(config.contains(&expected), "{config}");
        assert!(config.contains("tests: './__tests__/contracts'"));
        Ok(())
    }

    #[test]
    fn test_removes_scaffold_app_and_reruns() -> Result<()> {
        let temp = TempDir::new()?;
        let ctx = test_support::context(temp.path());
        fs::create_dir_all(&ctx.project_dir)?;
        fs::write(ctx.project_dir.join("App.js"), "export default null;")?;

        prepare_example(&ctx)?;
        prepare_example(&ctx)?;

        assert!(!ctx.project_dir.join("App.js").exists());
        Ok(())
    }
}

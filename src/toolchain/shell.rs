use super::Toolchain;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::config::ToolchainConfig;
use crate::context::{CreationContext, CreationParams};
use crate::progress;

/// Runs Node.js tooling as child processes.
///
/// Child stderr is inherited; child stdout follows [`progress::child_stdout`].
pub struct ShellToolchain {
    config: ToolchainConfig,
}

impl ShellToolchain {
    pub fn new(config: ToolchainConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(ToolchainConfig::from_env())
    }

    /// Package manager invocation for a project (`yarn` or `npm i`)
    pub fn install_command(yarn: bool) -> (&'static str, &'static [&'static str]) {
        if yarn {
            ("yarn", &[])
        } else {
            ("npm", &["i"])
        }
    }

    fn run(&self, mut command: Command, what: &str) -> Result<()> {
        let status = command
            .stdout(progress::child_stdout())
            .status()
            .with_context(|| format!("Failed to run {what}"))?;

        if status.success() {
            Ok(())
        } else {
            anyhow::bail!("{what} failed ({status})")
        }
    }
}

impl Toolchain for ShellToolchain {
    fn create_base_project(&self, root: &Path, params: &CreationParams) -> Result<()> {
        progress::line(format!("📦 Creating React Native project {}...", params.name));

        let mut command = Command::new(&self.config.npx);
        command.current_dir(root).args([
            "create-react-native-app",
            params.name.as_str(),
            "-t",
            self.config.template.as_str(),
        ]);
        self.run(command, "create-react-native-app")
    }

    fn install(&self, ctx: &CreationContext) -> Result<()> {
        let (program, args) = Self::install_command(ctx.yarn);
        progress::line(format!("📥 Installing dependencies with {program}..."));

        let mut command = Command::new(program);
        command.current_dir(&ctx.project_dir).args(args);
        self.run(command, &format!("{program} install"))
    }

    fn compile_contracts(&self, ctx: &CreationContext) -> Result<()> {
        progress::line("🔨 Compiling contracts...");

        let mut command = Command::new(&self.config.npx);
        command
            .current_dir(&ctx.project_dir)
            .args(["hardhat", "compile"]);
        self.run(command, "hardhat compile")
    }
}

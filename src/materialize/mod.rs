//! Project materialization steps
//!
//! Every step is a function of the [`CreationContext`] that writes files
//! under the project directory and creates the directories it needs. Steps
//! do not depend on each other beyond directory existence. There is no
//! rollback: when a step fails, files written by earlier steps stay on disk.

pub mod assets;
pub mod env_files;
pub mod example;
pub mod manifest;
pub mod scripts;
pub mod shims;
pub mod tooling;

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::context::CreationContext;
use crate::progress;

/// A named materialization step
pub struct Step {
    /// Past-tense summary printed after the step succeeds
    pub name: &'static str,
    pub run: fn(&CreationContext) -> Result<()>,
}

impl Step {
    const fn new(name: &'static str, run: fn(&CreationContext) -> Result<()>) -> Self {
        Self { name, run }
    }

    /// Run the step, tagging any error with the step name
    pub fn execute(&self, ctx: &CreationContext) -> Result<()> {
        (self.run)(ctx).with_context(|| format!("Step failed: {}", self.name))?;
        progress::line(format!("  ✓ {}", self.name));
        Ok(())
    }
}

/// Steps that run before dependencies are installed, in order
pub const BEFORE_INSTALL: &[Step] = &[
    Step::new("Added app icon and asset folders", assets::set_app_icon),
    Step::new("Created index.js shim", shims::inject_shims),
    Step::new("Created dev-loop and deploy scripts", scripts::create_scripts),
    Step::new("Merged package.json", manifest::prepare_package),
    Step::new("Created metro.config.js", tooling::prepare_metro),
    Step::new("Created babel.config.js", tooling::prepare_babel),
    Step::new("Created .eslintrc.json", tooling::prepare_eslint),
    Step::new("Created index.d.ts", tooling::prepare_type_roots),
    Step::new("Created .cspell.json", tooling::prepare_spelling),
    Step::new("Created tsconfig.json", tooling::prepare_tsc),
    Step::new("Updated .gitignore", env_files::prepare_gitignore),
    Step::new("Created .env and .env.example", env_files::write_env),
    Step::new("Created config.js and config.example.js", env_files::write_config_js),
];

/// Steps that run after dependencies are installed, before compiling
pub const AFTER_INSTALL: &[Step] = &[Step::new(
    "Created example contract, tests and frontend",
    example::prepare_example,
)];

/// Write bytes, creating parent directories on demand
pub(crate) fn write_file(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write text with exactly one trailing newline
pub(crate) fn write_text(path: &Path, text: &str) -> Result<()> {
    write_file(path, format!("{}\n", text.trim()))
}

/// Write JSON with two-space indentation
pub(crate) fn write_json(path: &Path, value: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    write_file(path, json)
}

/// Copy `from` to `to`, used for the `*.example` companions
pub(crate) fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to)
        .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}

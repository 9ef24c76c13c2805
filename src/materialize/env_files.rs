//! Environment, runtime config and ignore-file entries

use anyhow::{Context, Result};
use std::fs;

use super::{copy_file, write_file, write_text};
use crate::context::CreationContext;
use crate::env_schema;
use crate::templates;

/// First line of the block appended to `.gitignore`
const GITIGNORE_MARKER: &str = "# Environment Variables";

/// `.env` from the shared schema, copied to `.env.example`
pub fn write_env(ctx: &CreationContext) -> Result<()> {
    let env = ctx.project_dir.join(".env");
    write_file(&env, env_schema::render_dotenv(&env_schema::variables(ctx)))?;
    copy_file(&env, &ctx.project_dir.join(".env.example"))
}

/// `config.js` with contract/provider placeholders, copied to `config.example.js`
pub fn write_config_js(ctx: &CreationContext) -> Result<()> {
    let config = ctx.project_dir.join("config.js");
    write_text(&config, templates::config::CONFIG_JS)?;
    copy_file(&config, &ctx.project_dir.join("config.example.js"))
}

/// Lockfile of the package manager this project does not use
fn foreign_lockfile(ctx: &CreationContext) -> &'static str {
    if ctx.yarn {
        "package-lock.json"
    } else {
        "yarn.lock"
    }
}

/// Append env, jest, package-manager and Hardhat entries to `.gitignore`
///
/// A missing `.gitignore` is treated as empty. The block is not appended a
/// second time.
pub fn prepare_gitignore(ctx: &CreationContext) -> Result<()> {
    let gitignore = ctx.project_dir.join(".gitignore");
    let existing = if gitignore.exists() {
        fs::read_to_string(&gitignore)
            .with_context(|| format!("Failed to read {}", gitignore.display()))?
    } else {
        String::new()
    };

    if existing.contains(GITIGNORE_MARKER) {
        return Ok(());
    }

    let block = templates::render(
        templates::config::GITIGNORE,
        &[("foreign_lockfile", foreign_lockfile(ctx))],
    );
    let content = format!("{}\n\n{}", existing.trim(), block.trim());
    write_text(&gitignore, &content)
}

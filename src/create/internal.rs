//! Internal implementation for project creation

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::{CreationResult, CreationStatus, MISSING_PROJECT_DIR};
use crate::context::{CreationContext, CreationParams};
use crate::materialize;
use crate::progress;
use crate::toolchain::Toolchain;

pub fn create_in(
    root: &Path,
    params: CreationParams,
    toolchain: &dyn Toolchain,
) -> Result<CreationResult> {
    // === STEP 1: BASE PROJECT ===
    toolchain
        .create_base_project(root, &params)
        .context("Failed to create the base project")?;

    // === STEP 2: CONTEXT ===
    let ctx = CreationContext::derive(root, params);

    if !ctx.project_dir.exists() {
        return Ok(CreationResult {
            status: CreationStatus::Failure,
            message: MISSING_PROJECT_DIR.to_string(),
            context: ctx,
        });
    }

    // === STEP 3: MATERIALIZE ===
    progress::line(format!("\n🧩 Integrating Web3 into {}...", ctx.name()));
    for step in materialize::BEFORE_INSTALL {
        step.execute(&ctx)?;
    }

    // === STEP 4: INSTALL ===
    toolchain
        .install(&ctx)
        .context("Failed to install dependencies")?;

    // === STEP 5: EXAMPLE CONTRACT ===
    for step in materialize::AFTER_INSTALL {
        step.execute(&ctx)?;
    }
    toolchain
        .compile_contracts(&ctx)
        .context("Failed to compile contracts")?;

    Ok(CreationResult {
        status: CreationStatus::Success,
        message: success_message(&ctx),
        context: ctx,
    })
}

pub fn success_message(ctx: &CreationContext) -> String {
    let command = |script: &str| ctx.script_command(script).white().bold().to_string();
    format!(
        "{} Successfully integrated Web3 into Lz-DApp React Native!\n\
         \n\
         To compile and run your project in development, execute one of the following commands:\n\
         - {}\n\
         - {}\n\
         - {}",
        "✔".green(),
        command("ios"),
        command("android"),
        command("web"),
    )
}

//! Create a new dapp project
//!
//! Public interface for the generator. The implementation lives in
//! `internal`.
//!
//! # Example
//!
//! ```no_run
//! use lz_dapp::context::CreationParams;
//! use lz_dapp::create::{self, CreationStatus};
//!
//! let result = create::create(CreationParams {
//!     name: "my-dapp".to_string(),
//!     uri_scheme: "mydapp".to_string(),
//! })?;
//!
//! if result.status == CreationStatus::Failure {
//!     anyhow::bail!(result.message);
//! }
//! println!("{}", result.message);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::context::{CreationContext, CreationParams};
use crate::toolchain::{ShellToolchain, Toolchain};

/// Message returned when the scaffold left no project directory behind
pub const MISSING_PROJECT_DIR: &str = "Failed to resolve project directory.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreationStatus {
    Success,
    Failure,
}

/// Outcome of a run, with the context it ran against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationResult {
    pub status: CreationStatus,
    pub message: String,
    #[serde(flatten)]
    pub context: CreationContext,
}

/// Create a project in the current directory using the shell toolchain
///
/// # Errors
///
/// See [`create_in`].
pub fn create(params: CreationParams) -> Result<CreationResult> {
    let root = std::env::current_dir()?;
    create_in(&root, params, &ShellToolchain::from_env())
}

/// Create a project at `<root>/<params.name>`
///
/// # Process
///
/// 1. **Scaffold**: the toolchain creates the base project
/// 2. **Context**: paths, package manager and test accounts are derived
/// 3. **Gate**: a missing project directory returns a `Failure` result
/// 4. **Materialize**: configuration, scripts and env files are written
/// 5. **Install**: the toolchain installs dependencies
/// 6. **Example**: the example contract is written and compiled
///
/// # Errors
///
/// Returns an error if the toolchain fails or any file operation fails.
/// Files written before the failing step are left in place.
pub fn create_in(
    root: &Path,
    params: CreationParams,
    toolchain: &dyn Toolchain,
) -> Result<CreationResult> {
    internal::create_in(root, params, toolchain)
}

/// Completion message listing the commands to run next
pub fn success_message(ctx: &CreationContext) -> String {
    internal::success_message(ctx)
}

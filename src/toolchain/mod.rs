pub mod shell;

use anyhow::Result;
use std::path::Path;

use crate::context::{CreationContext, CreationParams};
use crate::progress;

pub use shell::ShellToolchain;

/// External tools the generator drives as black boxes
pub trait Toolchain {
    /// Create the bare project skeleton at `<root>/<name>`
    fn create_base_project(&self, root: &Path, params: &CreationParams) -> Result<()>;

    /// Install the project's package dependencies
    fn install(&self, ctx: &CreationContext) -> Result<()>;

    /// Compile the project's smart contracts
    fn compile_contracts(&self, ctx: &CreationContext) -> Result<()>;
}

/// Toolchain that performs no external work.
///
/// Used with `--skip-install` to wrap another toolchain so that only the
/// base project is created.
pub struct ScaffoldOnly<'a> {
    inner: &'a dyn Toolchain,
}

impl<'a> ScaffoldOnly<'a> {
    pub fn new(inner: &'a dyn Toolchain) -> Self {
        Self { inner }
    }
}

impl Toolchain for ScaffoldOnly<'_> {
    fn create_base_project(&self, root: &Path, params: &CreationParams) -> Result<()> {
        self.inner.create_base_project(root, params)
    }

    fn install(&self, _ctx: &CreationContext) -> Result<()> {
        progress::line("  ⏭  Skipped dependency install");
        Ok(())
    }

    fn compile_contracts(&self, _ctx: &CreationContext) -> Result<()> {
        progress::line("  ⏭  Skipped contract compilation");
        Ok(())
    }
}

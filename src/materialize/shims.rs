use anyhow::Result;

use super::write_text;
use crate::context::CreationContext;
use crate::templates;

/// Value assigned to `process.version` by the shim
pub const SHIM_PROCESS_VERSION: &str = "v9.40";

/// `index.js`: Node globals for React Native, then root registration
pub fn inject_shims(ctx: &CreationContext) -> Result<()> {
    let content = templates::render(
        templates::shim::INDEX_JS,
        &[("process_version", SHIM_PROCESS_VERSION)],
    );
    write_text(&ctx.project_dir.join("index.js"), &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materialize::test_support;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_shim_content() -> Result<()> {
        let temp = TempDir::new()?;
        let ctx = test_support::context(temp.path());

        inject_shims(&ctx)?;

        let shim = fs::read_to_string(ctx.project_dir.join("index.js"))?;
        assert!(shim.contains("process.version = 'v9.40';"));
        assert!(shim.contains("global.Buffer = require('buffer').Buffer;"));
        assert!(shim.contains("require('./frontend/App')"));
        assert!(!shim.contains("{{."));
        Ok(())
    }
}

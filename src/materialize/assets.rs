use anyhow::Result;

use super::{write_file, write_text};
use crate::context::CreationContext;
use crate::paths;
use crate::templates;

/// Asset folders with `.gitkeep`, the app icon and `assets/index.d.ts`
pub fn set_app_icon(ctx: &CreationContext) -> Result<()> {
    let assets_dir = paths::assets_dir(&ctx.project_dir);

    for kind in paths::ASSET_KINDS {
        write_file(&assets_dir.join(kind).join(".gitkeep"), "")?;
    }

    write_file(&paths::app_icon(&ctx.project_dir), templates::APP_ICON_PNG)?;
    write_text(
        &assets_dir.join("index.d.ts"),
        templates::config::ASSET_TYPES_D_TS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materialize::test_support;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_creates_asset_tree() -> Result<()> {
        let temp = TempDir::new()?;
        let ctx = test_support::context(temp.path());

        set_app_icon(&ctx)?;

        let assets = ctx.project_dir.join("assets");
        for kind in ["image", "video", "json", "raw"] {
            assert!(assets.join(kind).join(".gitkeep").is_file(), "{kind}");
        }
        assert_eq!(
            fs::read(assets.join("image/app-icon.png"))?,
            templates::APP_ICON_PNG
        );
        assert!(fs::read_to_string(assets.join("index.d.ts"))?.contains("declare module '*.png'"));
        Ok(())
    }
}

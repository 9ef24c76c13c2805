use anyhow::Result;

use super::write_text;
use crate::context::CreationContext;
use crate::env_schema::HARDHAT_PORT;
use crate::templates;

/// `scripts/{android,ios,web}.ts` launchers and `scripts/deployContract.js`
pub fn create_scripts(ctx: &CreationContext) -> Result<()> {
    let port = HARDHAT_PORT.to_string();
    let vars = [("port", port.as_str())];

    let launchers = [
        ("android.ts", templates::scripts::ANDROID_TS),
        ("ios.ts", templates::scripts::IOS_TS),
        ("web.ts", templates::scripts::WEB_TS),
    ];
    for (file, template) in launchers {
        write_text(
            &ctx.scripts_dir.join(file),
            &templates::render(template, &vars),
        )?;
    }

    write_text(
        &ctx.scripts_dir.join("deployContract.js"),
        templates::scripts::DEPLOY_CONTRACT_JS,
    )
}

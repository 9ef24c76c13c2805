//! Embedded templates for generated project files
//!
//! Templates are embedded at compile time. Placeholders use the
//! `{{.key}}` form and are filled by [`render`].

// =============================================================================
// Embedded Templates - Bootstrap
// =============================================================================

pub mod shim {
    pub const INDEX_JS: &str = include_str!("../resources/templates/shim/index.js.tmpl");
}

// =============================================================================
// Embedded Templates - Dev-loop scripts
// =============================================================================

pub mod scripts {
    pub const ANDROID_TS: &str = include_str!("../resources/templates/scripts/android.ts.tmpl");
    pub const IOS_TS: &str = include_str!("../resources/templates/scripts/ios.ts.tmpl");
    pub const WEB_TS: &str = include_str!("../resources/templates/scripts/web.ts.tmpl");
    pub const DEPLOY_CONTRACT_JS: &str =
        include_str!("../resources/templates/scripts/deployContract.js.tmpl");
}

// =============================================================================
// Embedded Templates - Tool configuration
// =============================================================================

pub mod config {
    pub const METRO_CONFIG_JS: &str =
        include_str!("../resources/templates/config/metro.config.js.tmpl");
    pub const BABEL_CONFIG_JS: &str =
        include_str!("../resources/templates/config/babel.config.js.tmpl");
    pub const ASSET_TYPES_D_TS: &str =
        include_str!("../resources/templates/config/asset-types.d.ts.tmpl");
    pub const CONFIG_JS: &str = include_str!("../resources/templates/config/config.js.tmpl");
    pub const GITIGNORE: &str = include_str!("../resources/templates/config/gitignore.tmpl");
}

// =============================================================================
// Embedded Templates - Example contract and frontend
// =============================================================================

pub mod example {
    pub const CONTRACT_SOL: &str =
        include_str!("../resources/templates/example/HelloLestonz.sol.tmpl");
    pub const CONTRACT_TEST_JS: &str =
        include_str!("../resources/templates/example/HelloLestonz.test.js.tmpl");
    pub const HARDHAT_CONFIG_JS: &str =
        include_str!("../resources/templates/example/hardhat.config.js.tmpl");
    pub const APP_JS: &str = include_str!("../resources/templates/frontend/App.js.tmpl");
}

// =============================================================================
// Embedded Assets
// =============================================================================

pub const APP_ICON_PNG: &[u8] = include_bytes!("../resources/assets/app-icon.png");

/// Fill `{{.key}}` placeholders
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |out, (key, value)| {
        out.replace(&format!("{{{{.{key}}}}}"), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_occurrence() {
        let out = render("adb reverse tcp:{{.port}} tcp:{{.port}}", &[("port", "8545")]);
        assert_eq!(out, "adb reverse tcp:8545 tcp:8545");
    }

    #[test]
    fn test_render_leaves_js_interpolation_alone() {
        let out = render("`${scheme}://` {{.x}}", &[("x", "y")]);
        assert_eq!(out, "`${scheme}://` y");
    }

    #[test]
    fn test_templates_have_expected_placeholders() {
        assert!(shim::INDEX_JS.contains("{{.process_version}}"));
        assert!(scripts::ANDROID_TS.contains("{{.port}}"));
        assert!(example::HARDHAT_CONFIG_JS.contains("{{.accounts}}"));
        assert!(config::GITIGNORE.contains("{{.foreign_lockfile}}"));
        assert!(example::CONTRACT_SOL.contains("contract HelloLestonz"));
    }

    #[test]
    fn test_app_icon_is_png() {
        assert!(APP_ICON_PNG.starts_with(b"\x89PNG\r\n\x1a\n"));
    }
}

//! Bundler, compiler, linter and type configuration

use anyhow::Result;
use serde_json::{json, Value};

use super::{write_json, write_text};
use crate::context::CreationContext;
use crate::env_schema;
use crate::templates;

pub fn prepare_metro(ctx: &CreationContext) -> Result<()> {
    write_text(
        &ctx.project_dir.join("metro.config.js"),
        templates::config::METRO_CONFIG_JS,
    )
}

pub fn prepare_babel(ctx: &CreationContext) -> Result<()> {
    write_text(
        &ctx.project_dir.join("babel.config.js"),
        templates::config::BABEL_CONFIG_JS,
    )
}

fn eslint_rules() -> Value {
    json!({
        "@typescript-eslint/explicit-module-boundary-types": "off",
        "eslint-comments/disable-enable-pair": ["error", { "allowWholeFile": true }],
        "eslint-comments/no-unused-disable": "error",
        "import/order": [
            "error",
            { "newlines-between": "always", "alphabetize": { "order": "asc" } }
        ],
        "sort-imports": ["error", { "ignoreDeclarationSort": true, "ignoreCase": true }],
        "sort-keys": [
            "error",
            "asc",
            { "caseSensitive": true, "natural": false, "minKeys": 2 }
        ],
        "react-native/no-unused-styles": 2,
        "react-native/split-platform-components": 2,
        "react-native/no-inline-styles": 2,
        "react-native/no-color-literals": 2,
        "react-native/no-raw-text": 2,
        "react-native/no-single-element-style-arrays": 2
    })
}

pub fn eslint_config() -> Value {
    json!({
        "root": true,
        "parser": "@typescript-eslint/parser",
        "env": { "es6": true },
        "ignorePatterns": [
            "node_modules",
            "build",
            "coverage",
            "babel.config.js",
            "metro.config.js",
            "hardhat.config.js",
            "__tests__/contracts"
        ],
        "plugins": ["import", "eslint-comments", "functional", "react", "react-native"],
        "extends": [
            "eslint:recommended",
            "plugin:eslint-comments/recommended",
            "plugin:@typescript-eslint/recommended",
            "plugin:import/typescript",
            "plugin:functional/lite",
            "prettier",
            "prettier/@typescript-eslint"
        ],
        "globals": { "console": true, "__DEV__": true },
        "rules": eslint_rules(),
        "parserOptions": { "ecmaFeatures": { "jsx": true } }
    })
}

pub fn prepare_eslint(ctx: &CreationContext) -> Result<()> {
    write_json(&ctx.project_dir.join(".eslintrc.json"), &eslint_config())
}

/// `index.d.ts`: asset module declarations, then the `@env` module
pub fn prepare_type_roots(ctx: &CreationContext) -> Result<()> {
    let env = env_schema::render_type_declarations(&env_schema::variables(ctx));
    let content = format!(
        "{}\n\n{}",
        templates::config::ASSET_TYPES_D_TS.trim(),
        env
    );
    write_text(&ctx.project_dir.join("index.d.ts"), &content)
}

pub fn prepare_spelling(ctx: &CreationContext) -> Result<()> {
    write_json(
        &ctx.project_dir.join(".cspell.json"),
        &json!({ "words": ["bytecode", "dapp"] }),
    )
}

pub fn tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "allowSyntheticDefaultImports": true,
            "jsx": "react-native",
            "lib": ["dom", "esnext"],
            "moduleResolution": "node",
            "noEmit": true,
            "skipLibCheck": true,
            "resolveJsonModule": true,
            "typeRoots": ["index.d.ts"],
            "types": ["node", "jest"]
        },
        "include": ["**/*.ts", "**/*.tsx"],
        "exclude": [
            "node_modules",
            "babel.config.js",
            "metro.config.js",
            "jest.config.js",
            "**/*.test.tsx",
            "**/*.test.ts",
            "**/*.spec.tsx",
            "**/*.spec.ts"
        ]
    })
}

pub fn prepare_tsc(ctx: &CreationContext) -> Result<()> {
    write_json(&ctx.project_dir.join("tsconfig.json"), &tsconfig())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materialize::test_support;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_type_roots_contain_both_blocks() -> Result<()> {
        let temp = TempDir::new()?;
        let ctx = test_support::context(temp.path());

        prepare_type_roots(&ctx)?;

        let dts = fs::read_to_string(ctx.project_dir.join("index.d.ts"))?;
        let assets_at = dts.find("declare module '*.png'").unwrap();
        let env_at = dts.find("declare module '@env'").unwrap();
        assert!(assets_at < env_at);
        assert!(dts.contains("   export const HARDHAT_PRIVATE_KEY: string;"));
        Ok(())
    }

    #[test]
    fn test_json_configs_parse() -> Result<()> {
        let temp = TempDir::new()?;
        let ctx = test_support::context(temp.path());

        prepare_eslint(&ctx)?;
        prepare_spelling(&ctx)?;
        prepare_tsc(&ctx)?;

        let read = |file: &str| -> Value {
            serde_json::from_str(&fs::read_to_string(ctx.project_dir.join(file)).unwrap())
                .unwrap()
        };
        assert_eq!(read(".eslintrc.json")["rules"]["react-native/no-raw-text"], 2);
        assert_eq!(read(".cspell.json")["words"], json!(["bytecode", "dapp"]));
        assert_eq!(read("tsconfig.json")["compilerOptions"]["jsx"], "react-native");
        Ok(())
    }
}

//! `package.json` fields merged into the scaffold's manifest

use anyhow::Result;
use serde_json::{json, Map, Value};

use crate::context::CreationContext;
use crate::json_merge;
use crate::paths;

const SCRIPTS: &[(&str, &str)] = &[
    ("test", "npx hardhat test && jest"),
    ("android", "expo run:android"),
    ("ios", "expo run:ios"),
    ("web", "node_modules/.bin/ts-node scripts/web"),
    ("web:deploy", "expo build:web && gh-pages -d web-build"),
    ("deploy", "npx hardhat run scripts/deployContract.js"),
    (
        "deploy:truffle",
        "npx hardhat run scripts/deployContract.js --network truffle",
    ),
    ("verify:truffle", "npx hardhat verify --network truffle"),
];

const DEPENDENCIES: &[(&str, &str)] = &[
    ("@react-native-async-storage/async-storage", "1.17.3"),
    ("@walletconnect/modal-react-native", "1.0.0-rc.3"),
    ("@react-native-clipboard/clipboard", "1.11.2"),
    ("react-native-svg", "9.6.4"),
    ("base-64", "1.0.0"),
    ("buffer", "6.0.3"),
    ("node-libs-browser", "2.2.1"),
    ("path-browserify", "0.0.0"),
    ("react-native-crypto", "2.2.0"),
    ("react-native-dotenv", "2.4.3"),
    ("react-native-localhost", "1.0.0"),
    ("react-native-get-random-values", "1.5.0"),
    ("react-native-stream", "0.1.9"),
    ("web3", "^1.10.0"),
];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@babel/core", "7.15.5"),
    ("@babel/plugin-proposal-private-property-in-object", "7.15.4"),
    ("@babel/preset-env", "7.15.6"),
    ("@babel/preset-typescript", "7.15.0"),
    ("app-root-path", "3.0.0"),
    ("babel-jest", "29.3.1"),
    ("chokidar", "3.5.1"),
    ("commitizen", "4.2.3"),
    ("cz-conventional-changelog", "^3.2.0"),
    ("dotenv", "8.2.0"),
    ("husky", "4.3.8"),
    ("prettier", "2.2.1"),
    ("platform-detect", "3.0.1"),
    ("@typescript-eslint/eslint-plugin", "^4.0.1"),
    ("@typescript-eslint/parser", "^4.0.1"),
    ("@openzeppelin/contracts", "^4.7.3"),
    ("eslint", "^7.8.0"),
    ("eslint-config-prettier", "^6.11.0"),
    ("eslint-plugin-eslint-comments", "^3.2.0"),
    ("eslint-plugin-functional", "^3.0.2"),
    ("eslint-plugin-import", "^2.22.0"),
    ("eslint-plugin-react", "7.22.0"),
    ("eslint-plugin-react-native", "3.10.0"),
    ("lint-staged", "10.5.3"),
    ("@types/node", "14.14.22"),
    ("@types/jest", "^26.0.20"),
    ("hardhat", "2.0.6"),
    ("@nomiclabs/hardhat-ethers", "^2.0.1"),
    ("@nomiclabs/hardhat-waffle", "^2.0.1"),
    ("chai", "^4.2.0"),
    ("ethereum-waffle", "^3.2.1"),
    ("gh-pages", "^3.2.3"),
    ("jest", "29.3.1"),
    ("react-test-renderer", "17.0.1"),
    ("ts-node", "9.1.1"),
    ("@nomiclabs/hardhat-etherscan", "^3.1.2"),
];

/// Node core modules aliased to React Native implementations
const NODE_ALIASES: &[(&str, &str)] = &[
    ("stream", "react-native-stream"),
    ("crypto", "react-native-crypto"),
    ("path", "path-browserify"),
    ("process", "node-libs-browser/mock/process"),
];

const KEYWORDS: &[&str] = &[
    "react-native",
    "blockchain",
    "dapp",
    "ethereum",
    "web3",
    "web3Mobile",
];

fn insert_section(fields: &mut Map<String, Value>, section: &str, entries: &[(&str, &str)]) {
    for (key, value) in entries {
        fields.insert(format!("{section}.{key}"), json!(value));
    }
}

/// Dotted-path fields overlaid onto the existing manifest
pub fn dotted_fields(ctx: &CreationContext) -> Map<String, Value> {
    let mut fields = Map::new();

    fields.insert("homepage".into(), json!("https://lestonz.com"));
    fields.insert("license".into(), json!("MIT"));
    fields.insert(
        "contributors".into(),
        json!([{ "name": "@lestonz", "url": "https://github.com/lestonz" }]),
    );
    fields.insert("keywords".into(), json!(KEYWORDS));

    let audit = if ctx.yarn {
        "npx yarn-audit-fix"
    } else {
        "npm_config_yes=true npx yarn-audit-fix"
    };
    fields.insert("scripts.audit".into(), json!(audit));
    insert_section(&mut fields, "scripts", SCRIPTS);
    insert_section(&mut fields, "dependencies", DEPENDENCIES);
    insert_section(&mut fields, "devDependencies", DEV_DEPENDENCIES);
    insert_section(&mut fields, "react-native", NODE_ALIASES);

    fields.insert("jest.preset".into(), json!("react-native"));
    fields.insert(
        "jest.testMatch".into(),
        json!(["**/__tests__/frontend/**/*.[jt]s?(x)"]),
    );
    fields.insert(
        "jest.transformIgnorePatterns".into(),
        json!(["node_modules/(?!@ngrx|(?!deck.gl)|ng-dynamic)"]),
    );

    fields
}

/// Top-level sections that replace whatever the manifest had
pub fn verbatim_fields() -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(
        "config".into(),
        json!({ "commitizen": { "path": "./node_modules/cz-conventional-changelog" } }),
    );
    fields.insert(
        "husky".into(),
        json!({
            "hooks": {
                "prepare-commit-msg": "exec < /dev/tty && git cz --hook",
                "pre-commit": "lint-staged && tsc",
                "pre-push": "test"
            }
        }),
    );
    fields.insert(
        "lint-staged".into(),
        json!({
            "*.{ts,tsx,js,jsx}": "eslint --fix --ext '.ts,.tsx,.js,.jsx' -c .eslintrc.json"
        }),
    );
    fields
}

pub fn prepare_package(ctx: &CreationContext) -> Result<()> {
    json_merge::merge_into_file(
        &paths::package_json(&ctx.project_dir),
        &dotted_fields(ctx),
        Some(&verbatim_fields()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materialize::test_support;
    use std::fs;
    use tempfile::TempDir;

    fn read_manifest(ctx: &CreationContext) -> Value {
        let content = fs::read_to_string(paths::package_json(&ctx.project_dir)).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn test_merges_into_scaffold_manifest() -> Result<()> {
        let temp = TempDir::new()?;
        let ctx = test_support::context(temp.path());
        fs::create_dir_all(&ctx.project_dir)?;
        fs::write(
            paths::package_json(&ctx.project_dir),
            r#"{
  "name": "my-dapp",
  "main": "index.js",
  "scripts": { "start": "expo start" },
  "dependencies": { "expo": "~48.0.0", "react-native": "0.71.8" }
}"#,
        )?;

        prepare_package(&ctx)?;

        let manifest = read_manifest(&ctx);
        assert_eq!(manifest["name"], "my-dapp");
        assert_eq!(manifest["scripts"]["start"], "expo start");
        assert_eq!(manifest["scripts"]["android"], "expo run:android");
        assert_eq!(manifest["scripts"]["web:deploy"], "expo build:web && gh-pages -d web-build");
        assert_eq!(manifest["dependencies"]["expo"], "~48.0.0");
        assert_eq!(manifest["dependencies"]["web3"], "^1.10.0");
        assert_eq!(
            manifest["dependencies"]["@walletconnect/modal-react-native"],
            "1.0.0-rc.3"
        );
        assert_eq!(manifest["devDependencies"]["hardhat"], "2.0.6");
        assert_eq!(manifest["react-native"]["crypto"], "react-native-crypto");
        assert_eq!(manifest["jest"]["preset"], "react-native");
        assert_eq!(manifest["keywords"][0], "react-native");
        assert_eq!(manifest["husky"]["hooks"]["pre-push"], "test");
        assert_eq!(
            manifest["lint-staged"]["*.{ts,tsx,js,jsx}"],
            "eslint --fix --ext '.ts,.tsx,.js,.jsx' -c .eslintrc.json"
        );
        Ok(())
    }

    #[test]
    fn test_audit_script_depends_on_package_manager() {
        let temp = TempDir::new().unwrap();
        let mut ctx = test_support::context(temp.path());

        let npm = dotted_fields(&ctx);
        assert_eq!(npm["scripts.audit"], "npm_config_yes=true npx yarn-audit-fix");

        ctx.yarn = true;
        let yarn = dotted_fields(&ctx);
        assert_eq!(yarn["scripts.audit"], "npx yarn-audit-fix");
    }

    #[test]
    fn test_prepare_package_is_idempotent() -> Result<()> {
        let temp = TempDir::new()?;
        let ctx = test_support::context(temp.path());
        fs::create_dir_all(&ctx.project_dir)?;

        prepare_package(&ctx)?;
        let once = fs::read_to_string(paths::package_json(&ctx.project_dir))?;
        prepare_package(&ctx)?;
        let twice = fs::read_to_string(paths::package_json(&ctx.project_dir))?;

        assert_eq!(once, twice);
        Ok(())
    }
}

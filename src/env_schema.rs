//! Environment variables exposed to the generated app.
//!
//! One ordered list feeds both the `@env` type declarations and the `.env`
//! file. Add a variable to [`variables`] only; both renderers pick it up.

use crate::context::CreationContext;

/// Port of the local Hardhat node
pub const HARDHAT_PORT: u16 = 8545;

/// Placeholder until the user pastes a real explorer key
const BLOCK_EXPLORER_PLACEHOLDER: &str = "818hIAJSDIA0E299021O31230*12EKP*12KE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVariable {
    pub name: &'static str,
    /// TypeScript type used in the declaration block
    pub ty: &'static str,
    pub value: String,
}

impl EnvVariable {
    fn string(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            ty: "string",
            value: value.into(),
        }
    }
}

/// The full schema for a project, in output order
pub fn variables(ctx: &CreationContext) -> Vec<EnvVariable> {
    vec![
        EnvVariable::string("APP_DISPLAY_NAME", ctx.name()),
        EnvVariable::string("HARDHAT_PORT", HARDHAT_PORT.to_string()),
        EnvVariable::string("HARDHAT_PRIVATE_KEY", ctx.deployer_key()),
        EnvVariable::string("BLOCK_EXPLORER_API_KEY", BLOCK_EXPLORER_PLACEHOLDER),
        EnvVariable::string("BLOCK_EXPLORER_API_KEY_BSC_TESTNET", BLOCK_EXPLORER_PLACEHOLDER),
    ]
}

/// `declare module '@env' { ... }` block for `index.d.ts`
pub fn render_type_declarations(vars: &[EnvVariable]) -> String {
    let lines: Vec<String> = vars
        .iter()
        .map(|var| format!("   export const {}: {};", var.name, var.ty))
        .collect();
    format!("declare module '@env' {{\n{}\n}}", lines.join("\n"))
}

/// `NAME=value` lines for `.env`, newline-terminated
pub fn render_dotenv(vars: &[EnvVariable]) -> String {
    let lines: Vec<String> = vars
        .iter()
        .map(|var| format!("{}={}", var.name, var.value))
        .collect();
    format!("{}\n", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::TestAccount;
    use crate::context::CreationParams;
    use std::path::Path;

    fn ctx() -> CreationContext {
        CreationContext::with_accounts(
            Path::new("/work"),
            CreationParams {
                name: "my-dapp".to_string(),
                uri_scheme: "mydapp".to_string(),
            },
            vec![TestAccount {
                private_key: "0xabc".to_string(),
                balance: "1".to_string(),
            }],
        )
    }

    fn declared_names(block: &str) -> Vec<String> {
        block
            .lines()
            .filter_map(|line| line.trim().strip_prefix("export const "))
            .filter_map(|rest| rest.split(':').next())
            .map(str::to_string)
            .collect()
    }

    fn dotenv_names(env: &str) -> Vec<String> {
        env.lines()
            .filter_map(|line| line.split('=').next())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_renderers_stay_in_lockstep() {
        let vars = variables(&ctx());
        let declared = declared_names(&render_type_declarations(&vars));
        let written = dotenv_names(&render_dotenv(&vars));

        assert_eq!(declared, written);
        assert_eq!(declared.len(), vars.len());
    }

    #[test]
    fn test_dotenv_values() {
        let env = render_dotenv(&variables(&ctx()));

        assert!(env.starts_with("APP_DISPLAY_NAME=my-dapp\n"));
        assert!(env.contains("\nHARDHAT_PORT=8545\n"));
        assert!(env.contains("\nHARDHAT_PRIVATE_KEY=0xabc\n"));
        assert!(env.ends_with('\n'));
    }

    #[test]
    fn test_type_declarations_block() {
        let block = render_type_declarations(&variables(&ctx()));

        assert!(block.starts_with("declare module '@env' {\n"));
        assert!(block.contains("   export const HARDHAT_PORT: string;"));
        assert!(block.ends_with("\n}"));
    }
}

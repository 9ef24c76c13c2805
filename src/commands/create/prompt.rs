//! Interactive collection of the creation parameters

use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};

use lz_dapp::progress::{self, Target};

/// Where a parameter value comes from
pub enum Source {
    /// Given on the command line; validated, never prompted
    Flag(String),
    /// Use the default without asking
    Default,
    /// Ask, offering the default
    Prompt,
}

fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Resolve one value, re-prompting until the validator accepts it
pub fn resolve(
    source: Source,
    prompt: &str,
    default: &str,
    validate: fn(&str) -> Result<(), String>,
) -> Result<String> {
    match source {
        Source::Flag(value) => match validate(&value) {
            Ok(()) => Ok(value),
            Err(reason) => bail!("Invalid value '{}' for {}: {}", value, prompt, reason),
        },
        Source::Default => Ok(default.to_string()),
        Source::Prompt => {
            let value: String = Input::with_theme(&theme())
                .with_prompt(prompt)
                .default(default.to_string())
                .validate_with(|input: &String| validate(input))
                .interact_text()?;
            Ok(value)
        }
    }
}

pub fn banner() {
    let term = match progress::target() {
        Target::Stdout => console::Term::stdout(),
        Target::Stderr => console::Term::stderr(),
    };
    // Clearing fails when the stream is not a terminal; the banner still prints.
    let _ = term.clear_screen();
    progress::line("Create Lz-DApp".magenta().bold());
    progress::line(format!(
        "{}\n",
        "React Native + Hardhat starter with Web3 wired in".dimmed()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use lz_dapp::validation;

    #[test]
    fn test_flag_value_is_validated() {
        let err = resolve(
            Source::Flag("1app".to_string()),
            "What is your app named?",
            validation::DEFAULT_NAME,
            validation::validate_name,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Name cannot begin with a number."));
    }

    #[test]
    fn test_flag_and_default_sources() -> Result<()> {
        let name = resolve(
            Source::Flag("my-dapp".to_string()),
            "What is your app named?",
            validation::DEFAULT_NAME,
            validation::validate_name,
        )?;
        assert_eq!(name, "my-dapp");

        let scheme = resolve(
            Source::Default,
            "What is your app's URI scheme?",
            validation::DEFAULT_URI_SCHEME,
            validation::validate_uri_scheme,
        )?;
        assert_eq!(scheme, "reactnative");
        Ok(())
    }
}

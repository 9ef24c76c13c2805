mod prompt;

use anyhow::{bail, Result};

use lz_dapp::create::{self, CreationStatus};
use lz_dapp::{preflight, progress};
use lz_dapp::toolchain::{ScaffoldOnly, ShellToolchain, Toolchain};
use lz_dapp::validation;
use lz_dapp::CreationParams;

use prompt::Source;

pub struct CreateOptions {
    pub name: Option<String>,
    pub uri_scheme: Option<String>,
    pub defaults: bool,
    pub skip_install: bool,
    pub json: bool,
}

impl CreateOptions {
    fn source(&self, flag: &Option<String>) -> Source {
        match flag {
            Some(value) => Source::Flag(value.clone()),
            None if self.defaults => Source::Default,
            None => Source::Prompt,
        }
    }

    fn prompts_needed(&self) -> bool {
        !self.defaults && (self.name.is_none() || self.uri_scheme.is_none())
    }
}

pub fn execute(options: CreateOptions) -> Result<()> {
    progress::reserve_stdout(options.json);

    if options.prompts_needed() {
        prompt::banner();
    }

    let name = prompt::resolve(
        options.source(&options.name),
        "What is your app named?",
        validation::DEFAULT_NAME,
        validation::validate_name,
    )?;
    let uri_scheme = prompt::resolve(
        options.source(&options.uri_scheme),
        "What is your app's URI scheme?",
        validation::DEFAULT_URI_SCHEME,
        validation::validate_uri_scheme,
    )?;

    preflight::warn_missing_tools();

    let root = std::env::current_dir()?;
    let shell = ShellToolchain::from_env();
    let skip = ScaffoldOnly::new(&shell);
    let toolchain: &dyn Toolchain = if options.skip_install { &skip } else { &shell };

    let result = create::create_in(&root, CreationParams { name, uri_scheme }, toolchain)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    match result.status {
        CreationStatus::Failure => bail!(result.message),
        CreationStatus::Success => {
            if !options.json {
                println!("\n{}", result.message);
            }
            Ok(())
        }
    }
}

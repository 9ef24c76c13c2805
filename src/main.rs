use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Create a React Native dapp with Hardhat and Web3 wired in", long_about = None)]
struct Cli {
    /// Project name (letters, digits and hyphens)
    #[arg(long)]
    name: Option<String>,

    /// URI scheme for deep links (lowercase letters and digits)
    #[arg(long)]
    uri_scheme: Option<String>,

    /// Use defaults for any value not given as a flag instead of prompting
    #[arg(short, long)]
    defaults: bool,

    /// Write the project files but skip dependency install and contract compilation
    #[arg(long)]
    skip_install: bool,

    /// Output the result as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::create::execute(commands::create::CreateOptions {
        name: cli.name,
        uri_scheme: cli.uri_scheme,
        defaults: cli.defaults,
        skip_install: cli.skip_install,
        json: cli.json,
    })
}

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod build_tree;
mod common;
mod prove;
mod verify;

#[derive(Parser, Debug)]
#[command(name = "airstream")]
#[command(about = "Issuer tooling for streaming merkle airdrops", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the commitment file from a recipient list
    BuildTree(build_tree::Cli),
    /// Regenerate one recipient's membership proof from a commitment file
    Prove(prove::Cli),
    /// Check a proof against a published root
    Verify(verify::Cli),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildTree(args) => build_tree::run(args)?,
        Commands::Prove(args) => prove::run(args)?,
        Commands::Verify(args) => verify::run(args)?,
    }

    Ok(())
}

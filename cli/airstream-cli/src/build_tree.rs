use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use merkle_tree::{file::encode_root, CommitmentFile, MerkleDistribution};

use crate::common::{parse_pubkey, parse_recipient_line, write_file_atomic};

#[derive(Parser, Debug)]
pub struct Cli {
    /// Input file with one `ADDRESS,AMOUNT` recipient per line
    #[arg(short, long)]
    input: PathBuf,

    /// Output path for the commitment file
    #[arg(short, long)]
    output: PathBuf,

    /// Issuer-chosen label stored in the commitment file
    #[arg(short, long)]
    name: String,

    /// Deployed airstream instance address
    #[arg(short, long)]
    contract: String,

    /// Network identifier stored in the commitment file
    #[arg(long, default_value = "solana:mainnet")]
    chain_id: String,
}

pub fn run(cli: Cli) -> Result<()> {
    let contract = parse_pubkey(&cli.contract)?;

    println!("Reading recipients from {:?}...", cli.input);
    let file = File::open(&cli.input).context("Failed to open input file")?;
    let reader = BufReader::new(file);

    let mut recipients = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read line")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        recipients.push(parse_recipient_line(trimmed)?);
    }

    println!("Total recipients: {}", recipients.len());
    println!("Building commitment tree...");

    let tree = MerkleDistribution::new(recipients)?;
    let total = tree
        .total_amount()
        .context("Total entitlement overflows u64")?;

    println!("Commitment root: {}", encode_root(&tree.root()));
    println!("Total amount: {total}");

    let commitment = CommitmentFile::new(cli.name, &contract, cli.chain_id, &tree);
    write_file_atomic(&cli.output, &commitment.to_json()?)?;

    println!("Commitment file written to {:?}", cli.output);

    Ok(())
}

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use merkle_tree::CommitmentFile;

use crate::common::{parse_pubkey, write_file_atomic};

#[derive(Parser, Debug)]
pub struct Cli {
    /// Commitment file produced by build-tree
    #[arg(short, long)]
    tree: PathBuf,

    /// Recipient address to prove membership for
    #[arg(short, long)]
    address: String,

    /// Optional output file; the proof is printed either way
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ProofOutput {
    address: String,
    amount: String,
    root: String,
    proof: Vec<String>,
}

pub fn run(cli: Cli) -> Result<()> {
    let address = parse_pubkey(&cli.address)?;

    println!("Loading commitment file {:?}...", cli.tree);
    let content = fs::read_to_string(&cli.tree).context("Failed to read commitment file")?;
    let commitment = CommitmentFile::from_json(&content)?;
    // rebuilds the tree and cross-checks the stored root
    let tree = commitment.to_distribution()?;

    let amount = tree
        .recipients()
        .iter()
        .find(|r| r.address == address)
        .map(|r| r.amount)
        .with_context(|| format!("{address} is not part of the commitment"))?;
    let proof = tree.proof_for(&address)?;

    let output = ProofOutput {
        address: address.to_string(),
        amount: amount.to_string(),
        root: commitment.root.clone(),
        proof: proof
            .iter()
            .map(|sibling| format!("0x{}", hex::encode(sibling)))
            .collect(),
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize proof")?;
    println!("{json}");

    if let Some(path) = cli.output {
        write_file_atomic(&path, &json)?;
        println!("Proof written to {path:?}");
    }

    Ok(())
}

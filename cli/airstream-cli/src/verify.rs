use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::common::{parse_hash32, parse_pubkey};

#[derive(Parser, Debug)]
pub struct Cli {
    /// Published commitment root, 0x-prefixed hex
    #[arg(short, long)]
    root: String,

    /// Proof file produced by the prove command
    #[arg(short, long)]
    proof: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ProofInput {
    address: String,
    amount: String,
    proof: Vec<String>,
}

pub fn run(cli: Cli) -> Result<()> {
    let root = parse_hash32(&cli.root)?;

    let content = fs::read_to_string(&cli.proof).context("Failed to read proof file")?;
    let input: ProofInput =
        serde_json::from_str(&content).context("Failed to parse proof JSON")?;

    let address = parse_pubkey(&input.address)?;
    let amount = input
        .amount
        .parse::<u64>()
        .with_context(|| format!("Invalid amount {:?}", input.amount))?;
    let proof = input
        .proof
        .iter()
        .map(|sibling| parse_hash32(sibling))
        .collect::<Result<Vec<_>>>()?;

    if merkle_tree::verify_proof(&root, &address, amount, &proof) {
        println!("Proof is valid for {address} with amount {amount}");
        Ok(())
    } else {
        anyhow::bail!("Proof is INVALID for {address} with amount {amount}");
    }
}

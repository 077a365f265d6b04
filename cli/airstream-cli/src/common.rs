use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use merkle_tree::{Pubkey, Recipient};

/// Parses a base-58 account address.
pub fn parse_pubkey(addr_str: &str) -> Result<Pubkey> {
    let trimmed = addr_str.trim();
    let pubkey = Pubkey::from_str(trimmed)
        .map_err(|e| anyhow::anyhow!("Invalid address {trimmed:?}: {e}"))?;
    if pubkey == Pubkey::default() {
        anyhow::bail!("Zero address not allowed");
    }
    Ok(pubkey)
}

/// Parses one recipient line of the form `ADDRESS,AMOUNT`.
///
/// Amounts are base-10 token units. Empty lines and `#` comments are the
/// caller's job to skip.
pub fn parse_recipient_line(line: &str) -> Result<Recipient> {
    let (addr, amount) = line
        .split_once(',')
        .with_context(|| format!("Expected ADDRESS,AMOUNT, got {line:?}"))?;
    let address = parse_pubkey(addr)?;
    let amount = amount
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Invalid amount {:?}", amount.trim()))?;
    Ok(Recipient { address, amount })
}

/// Parses a 0x-prefixed 32-byte hex hash.
pub fn parse_hash32(encoded: &str) -> Result<[u8; 32]> {
    let stripped = encoded
        .trim()
        .strip_prefix("0x")
        .unwrap_or_else(|| encoded.trim());
    let mut hash = [0u8; 32];
    hex::decode_to_slice(stripped, &mut hash)
        .map_err(|e| anyhow::anyhow!("Invalid hash encoding {encoded:?}: {e}"))?;
    Ok(hash)
}

/// Writes through a temp file and renames into place, so a crash never
/// leaves a half-written commitment file behind.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path).context("Failed to create temp file")?;
    file.write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    file.flush().context("Failed to flush temp file")?;
    std::fs::rename(&temp_path, path).context("Failed to move temp file to output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_valid_recipient_line() {
        let address = Pubkey::new_unique();
        let r = parse_recipient_line(&format!("{address}, 150000")).unwrap();
        assert_eq!(r.address, address);
        assert_eq!(r.amount, 150_000);
    }

    #[test]
    fn rejects_a_line_without_an_amount() {
        assert!(parse_recipient_line(&Pubkey::new_unique().to_string()).is_err());
    }

    #[test]
    fn rejects_an_invalid_address() {
        assert!(parse_recipient_line("not-base58,100").is_err());
    }

    #[test]
    fn rejects_the_zero_address() {
        assert!(parse_pubkey(&Pubkey::default().to_string()).is_err());
    }

    #[test]
    fn hash_parsing_accepts_both_prefixed_and_bare_hex() {
        let hash = [0xabu8; 32];
        let hex = hex::encode(hash);
        assert_eq!(parse_hash32(&format!("0x{hex}")).unwrap(), hash);
        assert_eq!(parse_hash32(&hex).unwrap(), hash);
        assert!(parse_hash32("0x1234").is_err());
    }
}

// PDA Seeds
pub const AIRSTREAM_SEED: &[u8] = b"airstream";
pub const POOL_SEED: &[u8] = b"pool";
pub const CONTROLLER_SEED: &[u8] = b"controller";
pub const MEMBER_RECORD_SEED: &[u8] = b"member";
pub const VAULT_SEED: &[u8] = b"vault";

// Ratio denominator: initial_reward_ppm is expressed in parts per million,
// 1_000_000 = 100%
pub const PPM_DENOMINATOR: u64 = 1_000_000;

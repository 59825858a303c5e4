//! Program-wide constants.

/// Seed of the singleton exchange configuration PDA.
pub const CONFIG_SEED: &[u8] = b"exchange_config";

/// Seed prefix of the vault holding deposited lock tokens.
pub const LOCK_VAULT_SEED: &[u8] = b"lock_vault";

/// Seed prefix of the vault holding the release-token reserve.
pub const RELEASE_VAULT_SEED: &[u8] = b"release_vault";

/// Seed prefix of per-beneficiary lock positions.
pub const LOCK_POSITION_SEED: &[u8] = b"lock_position";

/// Fixed-point scale of `ExchangeConfig::exchange_rate` (1.0 == RATE_PRECISION).
pub const RATE_PRECISION: u64 = 1_000_000_000;

/// Upper bound on the release cycle, roughly one year of 400ms slots.
pub const MAX_RELEASE_CYCLE_BLOCKS: u64 = 78_840_000;

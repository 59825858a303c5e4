use anchor_lang::prelude::*;

use crate::constants::MAX_RELEASE_CYCLE_BLOCKS;
use crate::error::ExchangeError;
use crate::ledger::LedgerParams;

/// Singleton exchange configuration PDA.
#[account]
pub struct ExchangeConfig {
    /// Admin authority.
    pub admin: Pubkey,
    /// Mint deposited by lockers.
    pub lock_mint: Pubkey,
    /// Mint paid out as positions vest.
    pub release_mint: Pubkey,
    /// Blocks (slots) over which a lock fully vests.
    pub release_cycle_blocks: u64,
    /// Release units credited per lock unit, scaled by `RATE_PRECISION`.
    pub exchange_rate: u64,
    /// Emergency pause flag (blocks lock/claim; accrual continues).
    pub paused: bool,
    /// Release units credited to positions over the program lifetime.
    pub total_credited: u64,
    /// Release units paid out over the program lifetime.
    pub total_paid: u64,
}

impl ExchangeConfig {
    pub const SIZE: usize =
        32 + // admin
        32 + // lock_mint
        32 + // release_mint
        8 +  // release_cycle_blocks
        8 +  // exchange_rate
        1 +  // paused
        8 +  // total_credited
        8;   // total_paid

    pub fn ledger_params(&self) -> LedgerParams {
        LedgerParams {
            release_cycle_blocks: self.release_cycle_blocks,
            exchange_rate: self.exchange_rate,
        }
    }

    /// Release units still owed across all positions.
    pub fn outstanding(&self) -> Result<u64> {
        Ok(self
            .total_credited
            .checked_sub(self.total_paid)
            .ok_or(ExchangeError::MathOverflow)?)
    }

    pub fn record_credit(&mut self, credited: u64) -> Result<()> {
        self.total_credited = self
            .total_credited
            .checked_add(credited)
            .ok_or(ExchangeError::MathOverflow)?;
        Ok(())
    }

    /// Flip the pause flag; a no-op transition is rejected.
    pub fn set_paused(&mut self, paused: bool) -> Result<()> {
        if paused {
            require!(!self.paused, ExchangeError::ExchangePaused);
        } else {
            require!(self.paused, ExchangeError::ExchangeNotPaused);
        }
        self.paused = paused;
        Ok(())
    }

    pub fn record_payout(&mut self, paid: u64) -> Result<()> {
        self.total_paid = self
            .total_paid
            .checked_add(paid)
            .ok_or(ExchangeError::MathOverflow)?;
        Ok(())
    }
}

/// Shared validation of admin-supplied ledger parameters.
pub fn validate_params(release_cycle_blocks: u64, exchange_rate: u64) -> Result<()> {
    require!(release_cycle_blocks > 0, ExchangeError::InvalidConfig);
    require!(
        release_cycle_blocks <= MAX_RELEASE_CYCLE_BLOCKS,
        ExchangeError::InvalidConfig
    );
    require!(exchange_rate > 0, ExchangeError::InvalidConfig);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RATE_PRECISION;

    fn config() -> ExchangeConfig {
        ExchangeConfig {
            admin: Pubkey::default(),
            lock_mint: Pubkey::new_unique(),
            release_mint: Pubkey::new_unique(),
            release_cycle_blocks: 5,
            exchange_rate: RATE_PRECISION / 2,
            paused: false,
            total_credited: 0,
            total_paid: 0,
        }
    }

    #[test]
    fn params_bounds() {
        assert!(validate_params(5, RATE_PRECISION).is_ok());
        assert!(validate_params(MAX_RELEASE_CYCLE_BLOCKS, 1).is_ok());
        assert!(validate_params(0, RATE_PRECISION).is_err());
        assert!(validate_params(MAX_RELEASE_CYCLE_BLOCKS + 1, RATE_PRECISION).is_err());
        assert!(validate_params(5, 0).is_err());
    }

    #[test]
    fn ledger_params_mirror_config() {
        let p = config().ledger_params();
        assert_eq!(p.release_cycle_blocks, 5);
        assert_eq!(p.convert(200).unwrap(), 100);
    }

    #[test]
    fn outstanding_tracks_credit_and_payout() {
        let mut cfg = config();
        cfg.record_credit(140).unwrap();
        cfg.record_payout(60).unwrap();
        assert_eq!(cfg.outstanding().unwrap(), 80);

        cfg.total_credited = u64::MAX;
        assert!(cfg.record_credit(1).is_err());
    }

    #[test]
    fn pause_flag_transitions() {
        let mut cfg = config();
        assert!(cfg.set_paused(false).is_err());
        cfg.set_paused(true).unwrap();
        assert!(cfg.paused);
        assert!(cfg.set_paused(true).is_err());
        cfg.set_paused(false).unwrap();
        assert!(!cfg.paused);
    }
}

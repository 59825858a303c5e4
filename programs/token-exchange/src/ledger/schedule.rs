//! Settlement math of a single vesting schedule.
//!
//! Pure functions of (schedule, block height); no clock reads, no accounts.

use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize};

use crate::error::ExchangeError;

/// Linear release schedule of a single beneficiary.
///
/// All amounts are in release-token base units. `debt` counts what has been
/// paid out since the schedule was last merged, so it is compared against the
/// cumulative `released` amount rather than subtracted from the rate.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingSchedule {
    /// Principal vesting under the current schedule.
    pub locked_amount: u64,
    /// Portion of `locked_amount` already paid out.
    pub debt: u64,
    /// Release rate, `locked_amount / release_cycle_blocks` (truncated).
    pub acc_released_per_block: u64,
    /// Block at which the schedule was last merged.
    pub last_update_block: u64,
    /// Cycle length captured when the schedule was last merged.
    pub release_cycle_blocks: u64,
}

impl VestingSchedule {
    pub const SIZE: usize = 8 * 5;

    pub fn is_empty(&self) -> bool {
        self.locked_amount == 0
    }

    pub fn elapsed(&self, current_block: u64) -> u64 {
        current_block.saturating_sub(self.last_update_block)
    }

    /// True once the whole cycle has elapsed since the last merge.
    pub fn is_fully_vested(&self, current_block: u64) -> bool {
        self.elapsed(current_block) >= self.release_cycle_blocks
    }

    /// Cumulative amount released since the last merge.
    ///
    /// Saturates at `locked_amount`. At the end of the cycle the truncation
    /// residue of the per-block rate is released as well.
    pub fn released(&self, current_block: u64) -> u64 {
        if self.is_fully_vested(current_block) {
            return self.locked_amount;
        }
        let accrued =
            (self.acc_released_per_block as u128) * (self.elapsed(current_block) as u128);
        accrued.min(self.locked_amount as u128) as u64
    }

    /// Released but not yet paid out.
    pub fn pending_amount(&self, current_block: u64) -> Result<u64, ExchangeError> {
        self.released(current_block)
            .checked_sub(self.debt)
            .ok_or(ExchangeError::MathOverflow)
    }

    /// Not yet released at `current_block`; carried forward on relock.
    pub fn unreleased(&self, current_block: u64) -> u64 {
        self.locked_amount - self.released(current_block)
    }

    /// Total still owed to the beneficiary (`locked_amount - debt`).
    pub fn outstanding(&self) -> Result<u64, ExchangeError> {
        self.locked_amount
            .checked_sub(self.debt)
            .ok_or(ExchangeError::MathOverflow)
    }
}

/// Return value of `get_lock_info`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockInfo {
    pub locked_amount: u64,
    pub debt: u64,
    pub acc_released_per_block: u64,
    pub last_update_block: u64,
    pub release_cycle_blocks: u64,
}

impl From<&VestingSchedule> for LockInfo {
    fn from(s: &VestingSchedule) -> Self {
        Self {
            locked_amount: s.locked_amount,
            debt: s.debt,
            acc_released_per_block: s.acc_released_per_block,
            last_update_block: s.last_update_block,
            release_cycle_blocks: s.release_cycle_blocks,
        }
    }
}

use anchor_lang::prelude::*;

use crate::ledger::VestingSchedule;

/// Per-beneficiary lock position.
/// Seeds: [b"lock_position", exchange_config.key(), beneficiary.key()]
#[account]
#[derive(Default, Debug)]
pub struct LockPosition {
    /// Beneficiary owning the position.
    pub owner: Pubkey,
    pub schedule: VestingSchedule,
    /// PDA bump seed.
    pub bump: u8,
}

impl LockPosition {
    pub const SIZE: usize =
        32 + // owner
        VestingSchedule::SIZE + // schedule
        1;   // bump

    /// Schedule of `position`, or the empty schedule for a beneficiary that
    /// has never locked.
    pub fn schedule_or_default(position: Option<&LockPosition>) -> VestingSchedule {
        position.map(|p| p.schedule).unwrap_or_default()
    }
}

//! How a new lock folds into an existing schedule.

use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize};

use crate::error::ExchangeError;
use crate::ledger::VestingSchedule;

/// Which state the previous schedule was in when the new lock arrived.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeCase {
    /// No principal vesting yet.
    Fresh,
    /// The whole previous cycle has elapsed; nothing carries over.
    FullyVested,
    /// Part of the previous principal is still unreleased and carries over.
    PartiallyVested,
}

pub fn classify(old: &VestingSchedule, current_block: u64) -> MergeCase {
    if old.is_empty() {
        MergeCase::Fresh
    } else if old.is_fully_vested(current_block) {
        MergeCase::FullyVested
    } else {
        MergeCase::PartiallyVested
    }
}

/// Merge `new_principal` (release units) into `old` at `current_block`.
///
/// The unreleased remainder of `old` and the new principal vest together
/// over a fresh cycle starting now. Released-but-unclaimed value is not part
/// of the remainder; the ledger settles it before calling this.
pub fn merge(
    old: &VestingSchedule,
    current_block: u64,
    new_principal: u64,
    release_cycle_blocks: u64,
) -> Result<(VestingSchedule, MergeCase), ExchangeError> {
    if release_cycle_blocks == 0 {
        return Err(ExchangeError::InvalidConfig);
    }
    let case = classify(old, current_block);
    let remainder = match case {
        MergeCase::Fresh | MergeCase::FullyVested => 0,
        MergeCase::PartiallyVested => old.unreleased(current_block),
    };
    let locked_amount = remainder
        .checked_add(new_principal)
        .ok_or(ExchangeError::MathOverflow)?;

    let merged = VestingSchedule {
        locked_amount,
        debt: 0,
        acc_released_per_block: locked_amount / release_cycle_blocks,
        last_update_block: current_block,
        release_cycle_blocks,
    };
    Ok((merged, case))
}

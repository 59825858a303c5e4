//! Vesting ledger: lock / claim / query over a single beneficiary schedule.
//!
//! Every entry point takes the current block explicitly. The next schedule is
//! computed and every precondition (balance, reserve, authority) checked
//! before the first transfer runs, and the schedule is only written back once
//! every transfer succeeded. A `lock` that pays out and then fails to pull the
//! deposit leaves the payout in place; the host transaction reverts it (every
//! Solana instruction is atomic).

pub mod merge;
pub mod schedule;
pub mod transfer;

#[cfg(test)]
mod proptest_ledger;

pub use merge::*;
pub use schedule::*;
pub use transfer::*;

use crate::constants::RATE_PRECISION;
use crate::error::ExchangeError;

/// Admin-owned parameters the ledger reads but never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerParams {
    pub release_cycle_blocks: u64,
    /// Release units per lock unit, scaled by `RATE_PRECISION`.
    pub exchange_rate: u64,
}

impl LedgerParams {
    /// Lock-token principal -> release-token units (rounded down).
    pub fn convert(&self, principal: u64) -> Result<u64, ExchangeError> {
        let v = (principal as u128)
            .checked_mul(self.exchange_rate as u128)
            .ok_or(ExchangeError::MathOverflow)?
            / RATE_PRECISION as u128;
        u64::try_from(v).map_err(|_| ExchangeError::MathOverflow)
    }
}

/// Result of a successful `lock`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockOutcome {
    /// Lock tokens pulled from the payer.
    pub principal: u64,
    /// Release units added to the schedule.
    pub credited: u64,
    /// Released-but-unclaimed amount paid out before merging.
    pub settled: u64,
    pub case: MergeCase,
}

/// Lock `principal` lock tokens for the schedule owner.
///
/// Pending release is paid out first, then the unreleased remainder and the
/// converted principal are merged into a fresh cycle. Carrying a remainder
/// restarts its cycle, so only the owner may lock into a position that is
/// still vesting (`owner_signed`); anyone may open or refill a settled one.
pub fn lock<S, P>(
    schedule: &mut VestingSchedule,
    params: &LedgerParams,
    current_block: u64,
    principal: u64,
    owner_signed: bool,
    source: &mut S,
    payout: &mut P,
) -> Result<LockOutcome, ExchangeError>
where
    S: LockTokenSource,
    P: ReleaseTokenSink,
{
    if principal == 0 {
        return Err(ExchangeError::InvalidAmount);
    }
    let credited = params.convert(principal)?;
    if credited == 0 {
        return Err(ExchangeError::InvalidAmount);
    }
    if source.available() < principal {
        return Err(ExchangeError::InsufficientBalance);
    }

    let settled = schedule.pending_amount(current_block)?;
    if settled > payout.reserve() {
        return Err(ExchangeError::InsufficientReserve);
    }
    let (next, case) = merge(schedule, current_block, credited, params.release_cycle_blocks)?;
    if case == MergeCase::PartiallyVested && !owner_signed {
        return Err(ExchangeError::Unauthorized);
    }

    if settled > 0 {
        payout.transfer_out(settled)?;
    }
    source.transfer_in(principal)?;
    *schedule = next;

    Ok(LockOutcome {
        principal,
        credited,
        settled,
        case,
    })
}

/// Pay out everything released and not yet claimed. Zero is a valid payout.
pub fn claim<P: ReleaseTokenSink>(
    schedule: &mut VestingSchedule,
    current_block: u64,
    payout: &mut P,
) -> Result<u64, ExchangeError> {
    let pending = schedule.pending_amount(current_block)?;
    if pending > payout.reserve() {
        return Err(ExchangeError::InsufficientReserve);
    }
    let mut next = *schedule;
    next.debt = next
        .debt
        .checked_add(pending)
        .ok_or(ExchangeError::MathOverflow)?;

    if pending > 0 {
        payout.transfer_out(pending)?;
    }
    *schedule = next;
    Ok(pending)
}

/// What `claim` would pay at `current_block`.
pub fn pending_amount(schedule: &VestingSchedule, current_block: u64) -> Result<u64, ExchangeError> {
    schedule.pending_amount(current_block)
}

pub fn lock_info(schedule: &VestingSchedule) -> LockInfo {
    LockInfo::from(schedule)
}

//! Block-height access at the instruction boundary.
//!
//! The ledger takes the block explicitly; handlers read it here once per
//! instruction so lock, claim and the queries agree on the same height.

use anchor_lang::prelude::*;

/// Current block height (Solana slot).
pub fn current_block() -> Result<u64> {
    Ok(Clock::get()?.slot)
}

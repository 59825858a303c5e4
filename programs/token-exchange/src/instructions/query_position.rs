use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, LOCK_POSITION_SEED};
use crate::ledger::{self, LockInfo};
use crate::state::{ExchangeConfig, LockPosition};
use crate::utils::clock;

// Read-only: both handlers only serialize the position, never write it. A
// beneficiary that never locked has no position account and reads as empty.

pub fn get_pending_amount(ctx: Context<QueryPosition>) -> Result<u64> {
    let current_block = clock::current_block()?;
    let schedule = LockPosition::schedule_or_default(ctx.accounts.lock_position.as_deref());
    let pending = ledger::pending_amount(&schedule, current_block)?;

    emit!(PendingQuote {
        beneficiary: ctx.accounts.beneficiary.key(),
        block: current_block,
        pending,
    });
    Ok(pending)
}

pub fn get_lock_info(ctx: Context<QueryPosition>) -> Result<LockInfo> {
    let schedule = LockPosition::schedule_or_default(ctx.accounts.lock_position.as_deref());
    let info = ledger::lock_info(&schedule);

    emit!(LockInfoQuote {
        beneficiary: ctx.accounts.beneficiary.key(),
        locked_amount: info.locked_amount,
        debt: info.debt,
        acc_released_per_block: info.acc_released_per_block,
        last_update_block: info.last_update_block,
    });
    Ok(info)
}

#[derive(Accounts)]
pub struct QueryPosition<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub exchange_config: Account<'info, ExchangeConfig>,

    #[account(
        seeds = [LOCK_POSITION_SEED, exchange_config.key().as_ref(), beneficiary.key().as_ref()],
        bump,
    )]
    pub lock_position: Option<Account<'info, LockPosition>>,

    /// CHECK: Only used to derive the position address.
    pub beneficiary: UncheckedAccount<'info>,
}

#[event]
pub struct PendingQuote {
    pub beneficiary: Pubkey,
    pub block: u64,
    pub pending: u64,
}

#[event]
pub struct LockInfoQuote {
    pub beneficiary: Pubkey,
    pub locked_amount: u64,
    pub debt: u64,
    pub acc_released_per_block: u64,
    pub last_update_block: u64,
}

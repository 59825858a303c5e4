use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("A8Yx7NAnfjHMMht7VYdg5MtXcutajyzJN44bdAZ617jP");

#[program]
pub mod token_exchange {
    use super::*;

    use crate::ledger::LockInfo;

    /// Create the exchange config and both vaults.
    pub fn initialize_exchange(
        ctx: Context<InitializeExchange>,
        release_cycle_blocks: u64,
        exchange_rate: u64,
    ) -> Result<()> {
        instructions::initialize_exchange::initialize_exchange(ctx, release_cycle_blocks, exchange_rate)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        release_cycle_blocks: u64,
        exchange_rate: u64,
    ) -> Result<()> {
        instructions::update_config::update_config(ctx, release_cycle_blocks, exchange_rate)
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::set_paused::set_paused(ctx, paused)
    }

    pub fn fund_reserve(ctx: Context<FundReserve>, amount: u64) -> Result<()> {
        instructions::fund_reserve::fund_reserve(ctx, amount)
    }

    pub fn withdraw_lock_proceeds(ctx: Context<WithdrawLockProceeds>, amount: u64) -> Result<()> {
        instructions::withdraw_lock_proceeds::withdraw_lock_proceeds(ctx, amount)
    }

    /// Lock `amount` lock tokens for the beneficiary; settles any pending
    /// release first and merges the unreleased remainder into a new cycle.
    pub fn lock(ctx: Context<LockTokens>, amount: u64) -> Result<()> {
        instructions::lock_tokens::lock_tokens(ctx, amount)
    }

    /// Pay out everything released so far.
    pub fn claim(ctx: Context<ClaimRelease>) -> Result<()> {
        instructions::claim_release::claim_release(ctx)
    }

    pub fn get_pending_amount(ctx: Context<QueryPosition>) -> Result<u64> {
        instructions::query_position::get_pending_amount(ctx)
    }

    pub fn get_lock_info(ctx: Context<QueryPosition>) -> Result<LockInfo> {
        instructions::query_position::get_lock_info(ctx)
    }
}

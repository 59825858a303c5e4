use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{CONFIG_SEED, LOCK_POSITION_SEED, RELEASE_VAULT_SEED};
use crate::error::ExchangeError;
use crate::ledger::{self, SplReleasePayout};
use crate::state::{ExchangeConfig, LockPosition};
use crate::utils::clock;

/// Pay the beneficiary everything released so far. Emits `Claimed` even for
/// a zero payout, including for a beneficiary that never locked (pass the
/// program id in place of the missing position).
pub fn claim_release(ctx: Context<ClaimRelease>) -> Result<()> {
    require!(!ctx.accounts.exchange_config.paused, ExchangeError::ExchangePaused);

    let mut payout = SplReleasePayout {
        token_program: ctx.accounts.token_program.to_account_info(),
        release_vault: ctx.accounts.release_vault.to_account_info(),
        recipient: ctx.accounts.beneficiary_release_account.to_account_info(),
        config: ctx.accounts.exchange_config.to_account_info(),
        config_bump: ctx.bumps.exchange_config,
        reserve: ctx.accounts.release_vault.amount,
    };
    let beneficiary = ctx.accounts.beneficiary.key();
    let current_block = clock::current_block()?;

    let cfg = &mut ctx.accounts.exchange_config;
    let amount = match ctx.accounts.lock_position.as_mut() {
        Some(position) => ledger::claim(&mut position.schedule, current_block, &mut payout)?,
        None => 0,
    };
    cfg.record_payout(amount)?;

    emit!(Claimed {
        beneficiary,
        release_mint: cfg.release_mint,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimRelease<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub exchange_config: Account<'info, ExchangeConfig>,

    #[account(
        mut,
        seeds = [LOCK_POSITION_SEED, exchange_config.key().as_ref(), beneficiary.key().as_ref()],
        bump,
        constraint = lock_position.owner == beneficiary.key() @ ExchangeError::Unauthorized,
    )]
    pub lock_position: Option<Account<'info, LockPosition>>,

    #[account(
        mut,
        seeds = [RELEASE_VAULT_SEED, exchange_config.key().as_ref()],
        bump,
        constraint = release_vault.mint == exchange_config.release_mint @ ExchangeError::InvalidTokenMint,
    )]
    pub release_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_release_account.mint == exchange_config.release_mint @ ExchangeError::InvalidTokenMint,
        constraint = beneficiary_release_account.owner == beneficiary.key() @ ExchangeError::InvalidTokenAccount,
    )]
    pub beneficiary_release_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Claimed {
    pub beneficiary: Pubkey,
    pub release_mint: Pubkey,
    pub amount: u64,
}

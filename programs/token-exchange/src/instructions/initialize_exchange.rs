use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, LOCK_VAULT_SEED, RELEASE_VAULT_SEED};
use crate::error::ExchangeError;
use crate::state::{validate_params, ExchangeConfig};

pub fn initialize_exchange(
    ctx: Context<InitializeExchange>,
    release_cycle_blocks: u64,
    exchange_rate: u64,
) -> Result<()> {
    validate_params(release_cycle_blocks, exchange_rate)?;
    require_keys_neq!(
        ctx.accounts.lock_mint.key(),
        ctx.accounts.release_mint.key(),
        ExchangeError::InvalidConfig
    );

    let cfg = &mut ctx.accounts.exchange_config;
    cfg.admin = ctx.accounts.admin.key();
    cfg.lock_mint = ctx.accounts.lock_mint.key();
    cfg.release_mint = ctx.accounts.release_mint.key();
    cfg.release_cycle_blocks = release_cycle_blocks;
    cfg.exchange_rate = exchange_rate;
    cfg.paused = false;
    cfg.total_credited = 0;
    cfg.total_paid = 0;

    emit!(ExchangeInitialized {
        admin: cfg.admin,
        lock_mint: cfg.lock_mint,
        release_mint: cfg.release_mint,
        release_cycle_blocks,
        exchange_rate,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeExchange<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + ExchangeConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub exchange_config: Account<'info, ExchangeConfig>,

    #[account(
        init,
        payer = admin,
        token::mint = lock_mint,
        token::authority = exchange_config,
        seeds = [LOCK_VAULT_SEED, exchange_config.key().as_ref()],
        bump
    )]
    pub lock_vault: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = admin,
        token::mint = release_mint,
        token::authority = exchange_config,
        seeds = [RELEASE_VAULT_SEED, exchange_config.key().as_ref()],
        bump
    )]
    pub release_vault: Account<'info, TokenAccount>,

    pub lock_mint: Account<'info, Mint>,

    pub release_mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ExchangeInitialized {
    pub admin: Pubkey,
    pub lock_mint: Pubkey,
    pub release_mint: Pubkey,
    pub release_cycle_blocks: u64,
    pub exchange_rate: u64,
}

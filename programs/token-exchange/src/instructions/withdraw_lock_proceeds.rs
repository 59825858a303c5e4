use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, LOCK_VAULT_SEED};
use crate::error::ExchangeError;
use crate::state::ExchangeConfig;

/// Move collected lock tokens out of the lock vault to the admin.
pub fn withdraw_lock_proceeds(ctx: Context<WithdrawLockProceeds>, amount: u64) -> Result<()> {
    require!(amount > 0, ExchangeError::InvalidAmount);

    let cfg = &ctx.accounts.exchange_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, ExchangeError::Unauthorized);
    require!(
        ctx.accounts.lock_vault.amount >= amount,
        ExchangeError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[ctx.bumps.exchange_config]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.lock_vault.to_account_info(),
                to: ctx.accounts.admin_destination.to_account_info(),
                authority: ctx.accounts.exchange_config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(LockProceedsWithdrawn {
        admin: cfg.admin,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawLockProceeds<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub exchange_config: Account<'info, ExchangeConfig>,

    #[account(
        mut,
        seeds = [LOCK_VAULT_SEED, exchange_config.key().as_ref()],
        bump,
        constraint = lock_vault.mint == exchange_config.lock_mint @ ExchangeError::InvalidTokenMint,
    )]
    pub lock_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = admin_destination.mint == exchange_config.lock_mint @ ExchangeError::InvalidTokenMint,
        constraint = admin_destination.owner == admin.key() @ ExchangeError::InvalidTokenAccount,
    )]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct LockProceedsWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
}

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, RELEASE_VAULT_SEED};
use crate::error::ExchangeError;
use crate::state::ExchangeConfig;

/// Top up the release-token reserve that claims are paid from.
pub fn fund_reserve(ctx: Context<FundReserve>, amount: u64) -> Result<()> {
    require!(amount > 0, ExchangeError::InvalidAmount);

    let cfg = &ctx.accounts.exchange_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, ExchangeError::Unauthorized);
    require!(
        ctx.accounts.admin_token_account.amount >= amount,
        ExchangeError::InsufficientBalance
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.release_vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.release_vault.reload()?;
    let reserve = ctx.accounts.release_vault.amount;
    let outstanding = cfg.outstanding()?;
    if reserve < outstanding {
        msg!("reserve {} still below outstanding {}", reserve, outstanding);
    }

    emit!(ReserveFunded {
        admin: cfg.admin,
        amount,
        reserve,
        outstanding,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundReserve<'info> {
    #[account(seeds = [CONFIG_SEED], bump)]
    pub exchange_config: Account<'info, ExchangeConfig>,

    #[account(
        mut,
        seeds = [RELEASE_VAULT_SEED, exchange_config.key().as_ref()],
        bump,
        constraint = release_vault.mint == exchange_config.release_mint @ ExchangeError::InvalidTokenMint,
    )]
    pub release_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = admin_token_account.mint == exchange_config.release_mint @ ExchangeError::InvalidTokenMint,
        constraint = admin_token_account.owner == admin.key() @ ExchangeError::InvalidTokenAccount,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ReserveFunded {
    pub admin: Pubkey,
    pub amount: u64,
    pub reserve: u64,
    pub outstanding: u64,
}

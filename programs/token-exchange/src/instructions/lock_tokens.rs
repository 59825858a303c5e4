use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{CONFIG_SEED, LOCK_POSITION_SEED, LOCK_VAULT_SEED, RELEASE_VAULT_SEED};
use crate::error::ExchangeError;
use crate::instructions::Claimed;
use crate::ledger::{self, MergeCase, SplLockDeposit, SplReleasePayout};
use crate::state::{ExchangeConfig, LockPosition};
use crate::utils::clock;

/// Lock `amount` lock tokens from the payer on behalf of `beneficiary`.
pub fn lock_tokens(ctx: Context<LockTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, ExchangeError::InvalidAmount);
    require!(!ctx.accounts.exchange_config.paused, ExchangeError::ExchangePaused);

    // Capture AccountInfos before taking mutable borrows of the state accounts.
    let mut source = SplLockDeposit {
        token_program: ctx.accounts.token_program.to_account_info(),
        payer_token_account: ctx.accounts.payer_token_account.to_account_info(),
        lock_vault: ctx.accounts.lock_vault.to_account_info(),
        payer: ctx.accounts.payer.to_account_info(),
        payer_balance: ctx.accounts.payer_token_account.amount,
    };
    let mut payout = SplReleasePayout {
        token_program: ctx.accounts.token_program.to_account_info(),
        release_vault: ctx.accounts.release_vault.to_account_info(),
        recipient: ctx.accounts.beneficiary_release_account.to_account_info(),
        config: ctx.accounts.exchange_config.to_account_info(),
        config_bump: ctx.bumps.exchange_config,
        reserve: ctx.accounts.release_vault.amount,
    };
    let payer = ctx.accounts.payer.key();
    let beneficiary = ctx.accounts.beneficiary.key();
    let owner_signed = ctx.accounts.beneficiary.is_signer || payer == beneficiary;
    let current_block = clock::current_block()?;

    let cfg = &mut ctx.accounts.exchange_config;
    let position = &mut ctx.accounts.lock_position;
    if position.owner == Pubkey::default() {
        position.owner = beneficiary;
        position.bump = ctx.bumps.lock_position;
    }

    let outcome = ledger::lock(
        &mut position.schedule,
        &cfg.ledger_params(),
        current_block,
        amount,
        owner_signed,
        &mut source,
        &mut payout,
    )?;
    cfg.record_credit(outcome.credited)?;
    cfg.record_payout(outcome.settled)?;

    if outcome.case == MergeCase::PartiallyVested {
        msg!(
            "relock at block {}: settled {}, carried remainder into {}",
            current_block,
            outcome.settled,
            position.schedule.locked_amount
        );
    }
    if outcome.settled > 0 {
        emit!(Claimed {
            beneficiary,
            release_mint: cfg.release_mint,
            amount: outcome.settled,
        });
    }

    let s = &position.schedule;
    emit!(Locked {
        payer,
        beneficiary,
        principal: outcome.principal,
        credited: outcome.credited,
        settled: outcome.settled,
        merge_case: outcome.case,
        locked_amount: s.locked_amount,
        debt: s.debt,
        acc_released_per_block: s.acc_released_per_block,
        last_update_block: s.last_update_block,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct LockTokens<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub exchange_config: Account<'info, ExchangeConfig>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + LockPosition::SIZE,
        seeds = [LOCK_POSITION_SEED, exchange_config.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub lock_position: Account<'info, LockPosition>,

    /// CHECK: Any wallet may be locked for; it only keys the position and
    /// must own `beneficiary_release_account`. It has to sign (or be the
    /// payer) when the position is still vesting.
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [LOCK_VAULT_SEED, exchange_config.key().as_ref()],
        bump,
        constraint = lock_vault.mint == exchange_config.lock_mint @ ExchangeError::InvalidTokenMint,
    )]
    pub lock_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [RELEASE_VAULT_SEED, exchange_config.key().as_ref()],
        bump,
        constraint = release_vault.mint == exchange_config.release_mint @ ExchangeError::InvalidTokenMint,
    )]
    pub release_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = payer_token_account.mint == exchange_config.lock_mint @ ExchangeError::InvalidTokenMint,
        constraint = payer_token_account.owner == payer.key() @ ExchangeError::InvalidTokenAccount,
    )]
    pub payer_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_release_account.mint == exchange_config.release_mint @ ExchangeError::InvalidTokenMint,
        constraint = beneficiary_release_account.owner == beneficiary.key() @ ExchangeError::InvalidTokenAccount,
    )]
    pub beneficiary_release_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct Locked {
    pub payer: Pubkey,
    pub beneficiary: Pubkey,
    pub principal: u64,
    pub credited: u64,
    pub settled: u64,
    pub merge_case: MergeCase,
    pub locked_amount: u64,
    pub debt: u64,
    pub acc_released_per_block: u64,
    pub last_update_block: u64,
}

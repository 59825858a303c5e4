use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::ExchangeError;
use crate::state::{validate_params, ExchangeConfig};

/// Replace the ledger parameters. Existing positions keep the cycle they
/// captured until their next lock.
pub fn update_config(
    ctx: Context<UpdateConfig>,
    release_cycle_blocks: u64,
    exchange_rate: u64,
) -> Result<()> {
    let cfg = &mut ctx.accounts.exchange_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, ExchangeError::Unauthorized);
    validate_params(release_cycle_blocks, exchange_rate)?;

    let old_release_cycle_blocks = cfg.release_cycle_blocks;
    let old_exchange_rate = cfg.exchange_rate;
    cfg.release_cycle_blocks = release_cycle_blocks;
    cfg.exchange_rate = exchange_rate;

    emit!(ExchangeConfigUpdated {
        admin: cfg.admin,
        old_release_cycle_blocks,
        new_release_cycle_blocks: release_cycle_blocks,
        old_exchange_rate,
        new_exchange_rate: exchange_rate,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub exchange_config: Account<'info, ExchangeConfig>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ExchangeConfigUpdated {
    pub admin: Pubkey,
    pub old_release_cycle_blocks: u64,
    pub new_release_cycle_blocks: u64,
    pub old_exchange_rate: u64,
    pub new_exchange_rate: u64,
}

use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::ExchangeError;
use crate::state::ExchangeConfig;

/// Admin toggles the pause flag. Setting the flag it already has fails.
pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let cfg = &mut ctx.accounts.exchange_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, ExchangeError::Unauthorized);
    cfg.set_paused(paused)?;

    msg!("exchange {}", if paused { "paused" } else { "resumed" });
    emit!(PauseChanged {
        admin: cfg.admin,
        paused,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub exchange_config: Account<'info, ExchangeConfig>,
    pub admin: Signer<'info>,
}

#[event]
pub struct PauseChanged {
    pub admin: Pubkey,
    pub paused: bool,
}

//! Token-transfer capability consumed by the ledger.
//!
//! The ledger never touches token accounts directly. Deposits go through a
//! [`LockTokenSource`], payouts through a [`ReleaseTokenSink`]; the SPL
//! implementations below are what the instruction handlers inject.

use anchor_lang::prelude::{msg, AccountInfo, CpiContext};
use anchor_spl::token::{self, Transfer};

use crate::constants::CONFIG_SEED;
use crate::error::ExchangeError;

/// Funds a lock by pulling lock tokens from the payer.
pub trait LockTokenSource {
    /// Lock tokens the payer can currently provide.
    fn available(&self) -> u64;

    fn transfer_in(&mut self, amount: u64) -> Result<(), ExchangeError>;
}

/// Pays release tokens from the exchange reserve to the beneficiary.
pub trait ReleaseTokenSink {
    /// Release tokens currently held by the exchange.
    fn reserve(&self) -> u64;

    fn transfer_out(&mut self, amount: u64) -> Result<(), ExchangeError>;
}

/// Payer token account -> lock vault, signed by the payer.
pub struct SplLockDeposit<'info> {
    pub token_program: AccountInfo<'info>,
    pub payer_token_account: AccountInfo<'info>,
    pub lock_vault: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub payer_balance: u64,
}

impl LockTokenSource for SplLockDeposit<'_> {
    fn available(&self) -> u64 {
        self.payer_balance
    }

    fn transfer_in(&mut self, amount: u64) -> Result<(), ExchangeError> {
        if amount > self.payer_balance {
            return Err(ExchangeError::InsufficientBalance);
        }
        token::transfer(
            CpiContext::new(
                self.token_program.clone(),
                Transfer {
                    from: self.payer_token_account.clone(),
                    to: self.lock_vault.clone(),
                    authority: self.payer.clone(),
                },
            ),
            amount,
        )
        .map_err(|e| {
            msg!("lock deposit failed: {:?}", e);
            ExchangeError::TransferFailed
        })?;
        self.payer_balance -= amount;
        Ok(())
    }
}

/// Release vault -> beneficiary token account, signed by the config PDA.
pub struct SplReleasePayout<'info> {
    pub token_program: AccountInfo<'info>,
    pub release_vault: AccountInfo<'info>,
    pub recipient: AccountInfo<'info>,
    pub config: AccountInfo<'info>,
    pub config_bump: u8,
    pub reserve: u64,
}

impl ReleaseTokenSink for SplReleasePayout<'_> {
    fn reserve(&self) -> u64 {
        self.reserve
    }

    fn transfer_out(&mut self, amount: u64) -> Result<(), ExchangeError> {
        if amount > self.reserve {
            return Err(ExchangeError::InsufficientReserve);
        }
        let bump = [self.config_bump];
        let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &bump]];
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.release_vault.clone(),
                    to: self.recipient.clone(),
                    authority: self.config.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
        .map_err(|e| {
            msg!("release payout failed: {:?}", e);
            ExchangeError::TransferFailed
        })?;
        self.reserve -= amount;
        Ok(())
    }
}

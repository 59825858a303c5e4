use anchor_lang::prelude::*;

/// Custom error codes for the token exchange program.
#[error_code]
pub enum ExchangeError {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Invalid amount (must be > 0 after conversion)")]
    InvalidAmount,

    #[msg("Depositor cannot fund the lock")]
    InsufficientBalance,

    #[msg("Release reserve cannot cover the payout")]
    InsufficientReserve,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Exchange is paused")]
    ExchangePaused,

    #[msg("Exchange is not paused")]
    ExchangeNotPaused,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Math overflow")]
    MathOverflow,
}

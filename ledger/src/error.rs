use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("insufficient escrow: need {needed}, available {available}")]
    InsufficientEscrow { needed: u128, available: u128 },

    #[error("arithmetic overflow in balance computation")]
    Overflow,
}

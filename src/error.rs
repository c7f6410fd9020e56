use thiserror::Error;

/// Errors surfaced by decoding, quoting, instruction building and routing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Invalid input amount: amount must be greater than zero")]
    InvalidAmount,

    #[error("Invalid slippage: must be a finite value in [0, 1]")]
    InvalidSlippage,

    #[error("Ambiguous zero amounts: desired output and spend cap cannot both be zero")]
    AmbiguousZeroAmounts,

    #[error("Malformed account data: expected at least {expected} bytes, got {actual}")]
    MalformedAccountData { expected: usize, actual: usize },

    #[error("Wrong account type: expected {expected}, got {actual}")]
    WrongAccountType { expected: String, actual: String },

    #[error("Venue graduated: bonding curve is complete, trade on the pool instead")]
    VenueGraduated,

    #[error("No venue available for this token pair")]
    NoVenueAvailable,

    #[error("Arithmetic overflow during quote calculation")]
    ArithmeticOverflow,
}

impl QuoteError {
    pub(crate) fn wrong_account_type(expected: &[u8; 8], actual: &[u8]) -> Self {
        Self::WrongAccountType { expected: hex::encode(expected), actual: hex::encode(actual) }
    }
}

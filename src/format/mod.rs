//! Display formatting for rupee amounts: `en-IN` currency strings and
//! amounts in words using the Indian numbering system.

pub mod currency;
pub mod words;

pub use currency::*;
pub use words::*;

/// Errors raised when an amount cannot be rendered
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("Cannot format non-finite amount: {0}")]
    NonFinite(f64),
    #[error("Cannot spell a negative amount: {0}")]
    Negative(f64),
    #[error("Amount too large to spell: {0}")]
    OutOfRange(f64),
    #[error("Decimal conversion failed: {0}")]
    Decimal(String),
}

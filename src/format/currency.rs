//! Indian rupee currency formatting

use bigdecimal::{BigDecimal, RoundingMode};
use num_format::{Locale, ToFormattedString};
use std::str::FromStr;

use super::FormatError;

/// Rupee sign prefixed to every formatted amount
pub const RUPEE_SIGN: char = '₹';

/// Format an amount the way the `en-IN` locale renders INR.
///
/// Two decimal places, rounded half away from zero from the shortest
/// decimal form of the `f64`. The integer part is grouped by the `en-IN`
/// locale (`12,34,567`). Negative amounts get a leading minus (`-₹1,000.00`); an
/// amount that rounds to zero is always `₹0.00`.
///
/// ```rust
/// use gst_invoice_core::format_inr;
///
/// assert_eq!(format_inr(1234567.5).unwrap(), "₹12,34,567.50");
/// assert_eq!(format_inr(-1000.0).unwrap(), "-₹1,000.00");
/// ```
pub fn format_inr(amount: f64) -> Result<String, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::NonFinite(amount));
    }

    // f64's Display is the shortest round-tripping decimal and never uses exponents
    let exact =
        BigDecimal::from_str(&amount.to_string()).map_err(|e| FormatError::Decimal(e.to_string()))?;
    let (paise, _) = exact
        .with_scale_round(2, RoundingMode::HalfUp)
        .as_bigint_and_exponent();

    let paise = paise.to_string();
    let (negative, digits) = match paise.strip_prefix('-') {
        Some(magnitude) => (true, magnitude),
        None => (false, paise.as_str()),
    };
    let digits = format!("{:0>3}", digits);
    let (rupees, fraction) = digits.split_at(digits.len() - 2);

    let rupees: u128 = rupees
        .parse()
        .map_err(|_| FormatError::OutOfRange(amount))?;

    let is_zero = rupees == 0 && fraction == "00";
    let sign = if negative && !is_zero { "-" } else { "" };

    Ok(format!(
        "{}{}{}.{}",
        sign,
        RUPEE_SIGN,
        rupees.to_formatted_string(&Locale::en_IN),
        fraction
    ))
}

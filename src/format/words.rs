//! Rupee amounts in English words, grouped the Indian way
//! (crore, lakh, thousand).

use super::FormatError;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Spell out an amount, e.g. `"One Lakh Twenty Thousand Rupees Only"`.
///
/// Only whole rupees are spelled: any paise are truncated. Zero is the bare
/// word `"Zero"` without the "Rupees Only" suffix.
///
/// ```rust
/// use gst_invoice_core::amount_in_words;
///
/// assert_eq!(amount_in_words(105.0).unwrap(), "One Hundred and Five Rupees Only");
/// assert_eq!(amount_in_words(0.0).unwrap(), "Zero");
/// ```
pub fn amount_in_words(amount: f64) -> Result<String, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::NonFinite(amount));
    }
    if amount < 0.0 {
        return Err(FormatError::Negative(amount));
    }
    // 2^64; every f64 below it truncates into a u64
    if amount >= 18_446_744_073_709_551_616.0 {
        return Err(FormatError::OutOfRange(amount));
    }

    let rupees = amount.trunc() as u64;
    if rupees == 0 {
        return Ok("Zero".to_string());
    }

    Ok(format!("{} Rupees Only", spell_indian(rupees)))
}

/// Words for a non-zero whole number in crore/lakh/thousand groups
fn spell_indian(n: u64) -> String {
    let crores = n / CRORE;
    let lakhs = (n % CRORE) / LAKH;
    let thousands = (n % LAKH) / THOUSAND;
    let remainder = n % THOUSAND;

    let mut parts = Vec::new();
    if crores > 0 {
        // more than 999 crore is itself spelled in lakh/thousand groups
        parts.push(format!("{} Crore", spell_indian(crores)));
    }
    if lakhs > 0 {
        parts.push(format!("{} Lakh", below_thousand(lakhs)));
    }
    if thousands > 0 {
        parts.push(format!("{} Thousand", below_thousand(thousands)));
    }
    if remainder > 0 {
        parts.push(below_thousand(remainder));
    }

    parts.join(" ")
}

/// Words for 1..=999; empty for zero
fn below_thousand(n: u64) -> String {
    let n = n as usize;
    match n {
        0 => String::new(),
        1..=9 => ONES[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        20..=99 => {
            if n % 10 == 0 {
                TENS[n / 10].to_string()
            } else {
                format!("{} {}", TENS[n / 10], ONES[n % 10])
            }
        }
        _ => {
            let hundreds = format!("{} Hundred", ONES[n / 100]);
            if n % 100 == 0 {
                hundreds
            } else {
                format!("{} and {}", hundreds, below_thousand((n % 100) as u64))
            }
        }
    }
}

//! Defaults applied to new invoices and line items

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{InvoiceError, InvoiceResult, PaymentMethod, Unit};

/// Longest accepted payment term, in days
pub const MAX_PAYMENT_TERMS_DAYS: i64 = 3650;

/// Invoice defaults, usually loaded once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceDefaults {
    /// Prefix of generated invoice numbers
    pub invoice_prefix: String,
    /// Days between issue date and due date
    pub payment_terms_days: i64,
    /// Tax rate given to new line items, in percent
    pub default_tax_rate: f64,
    /// Unit given to new line items
    pub default_unit: Unit,
    pub default_payment_method: PaymentMethod,
}

impl Default for InvoiceDefaults {
    fn default() -> Self {
        Self {
            invoice_prefix: "INV-".to_string(),
            payment_terms_days: 30,
            default_tax_rate: 18.0,
            default_unit: Unit::Nos,
            default_payment_method: PaymentMethod::BankTransfer,
        }
    }
}

impl InvoiceDefaults {
    /// Parse defaults from JSON; missing keys keep their default values
    pub fn from_json(json: &str) -> InvoiceResult<Self> {
        let defaults: Self = serde_json::from_str(json)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Check that the payment terms fall within `0..=MAX_PAYMENT_TERMS_DAYS`
    pub fn validate(&self) -> InvoiceResult<()> {
        if !(0..=MAX_PAYMENT_TERMS_DAYS).contains(&self.payment_terms_days) {
            return Err(InvoiceError::Validation(format!(
                "Payment terms of {} days are outside 0..={}",
                self.payment_terms_days, MAX_PAYMENT_TERMS_DAYS
            )));
        }
        Ok(())
    }

    /// Due date for an invoice issued on `issue_date`.
    ///
    /// Terms that overflow the calendar leave the invoice due on issue.
    pub fn due_date(&self, issue_date: NaiveDate) -> NaiveDate {
        Duration::try_days(self.payment_terms_days)
            .and_then(|terms| issue_date.checked_add_signed(terms))
            .unwrap_or(issue_date)
    }

    /// Invoice number derived from a timestamp: the prefix followed by the
    /// last eight digits of its Unix time in milliseconds
    pub fn next_invoice_number(&self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis().unsigned_abs() % 100_000_000;
        format!("{}{:08}", self.invoice_prefix, millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let defaults = InvoiceDefaults::default();
        assert_eq!(defaults.invoice_prefix, "INV-");
        assert_eq!(defaults.payment_terms_days, 30);
        assert_eq!(defaults.default_tax_rate, 18.0);
        assert_eq!(defaults.default_unit, Unit::Nos);
        assert_eq!(defaults.default_payment_method, PaymentMethod::BankTransfer);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let defaults =
            InvoiceDefaults::from_json(r#"{"invoice_prefix":"GST/","default_unit":"Hour"}"#)
                .unwrap();
        assert_eq!(defaults.invoice_prefix, "GST/");
        assert_eq!(defaults.default_unit, Unit::Hour);
        assert_eq!(defaults.payment_terms_days, 30);
    }

    #[test]
    fn test_out_of_range_payment_terms_are_rejected() {
        for json in [
            r#"{"payment_terms_days":200000000}"#,
            r#"{"payment_terms_days":-1}"#,
        ] {
            assert!(matches!(
                InvoiceDefaults::from_json(json),
                Err(InvoiceError::Validation(_))
            ));
        }
        let defaults = InvoiceDefaults::from_json(r#"{"payment_terms_days":3650}"#).unwrap();
        assert_eq!(defaults.payment_terms_days, MAX_PAYMENT_TERMS_DAYS);
    }

    #[test]
    fn test_due_date_never_overflows() {
        let issued = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut defaults = InvoiceDefaults::default();
        assert_eq!(
            defaults.due_date(issued),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );

        defaults.payment_terms_days = 200_000_000;
        assert_eq!(defaults.due_date(issued), issued);
        defaults.payment_terms_days = i64::MAX;
        assert_eq!(defaults.due_date(issued), issued);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(InvoiceDefaults::from_json("{not json").is_err());
    }

    #[test]
    fn test_invoice_number_uses_last_eight_millis_digits() {
        let defaults = InvoiceDefaults::default();
        let now = Utc.timestamp_millis_opt(1_717_171_717_123).unwrap();
        assert_eq!(defaults.next_invoice_number(now), "INV-71717123");

        let early = Utc.timestamp_millis_opt(42).unwrap();
        assert_eq!(defaults.next_invoice_number(early), "INV-00000042");
    }
}

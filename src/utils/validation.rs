//! Validation utilities

use crate::invoice::InvoiceDraft;
use crate::traits::*;
use crate::types::*;

/// Validate that an invoice number is usable
pub fn validate_invoice_number(number: &str) -> InvoiceResult<()> {
    if number.trim().is_empty() {
        return Err(InvoiceError::Validation(
            "Invoice number cannot be empty".to_string(),
        ));
    }

    if number.len() > 50 {
        return Err(InvoiceError::Validation(
            "Invoice number cannot exceed 50 characters".to_string(),
        ));
    }

    // Letters, digits and the separators commonly used in invoice series
    if !number
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '/' | '_'))
    {
        return Err(InvoiceError::Validation(
            "Invoice number can only contain letters, digits, '-', '/' and '_'".to_string(),
        ));
    }

    Ok(())
}

/// Validate the numeric ranges of a line item
pub fn validate_line_item(item: &LineItem) -> InvoiceResult<()> {
    if item.quantity < 0.0 {
        return Err(InvoiceError::Validation(format!(
            "Quantity of '{}' cannot be negative",
            item.name
        )));
    }

    if item.unit_price < 0.0 {
        return Err(InvoiceError::Validation(format!(
            "Unit price of '{}' cannot be negative",
            item.name
        )));
    }

    if !(0.0..=100.0).contains(&item.discount_rate) {
        return Err(InvoiceError::Validation(format!(
            "Discount of '{}' must be between 0 and 100 percent",
            item.name
        )));
    }

    if item.tax_rate < 0.0 {
        return Err(InvoiceError::Validation(format!(
            "Tax rate of '{}' cannot be negative",
            item.name
        )));
    }

    Ok(())
}

/// Enhanced draft validator with range and date checks on top of the defaults
pub struct EnhancedInvoiceValidator;

impl InvoiceValidator for EnhancedInvoiceValidator {
    fn validate_draft(&self, draft: &InvoiceDraft) -> InvoiceResult<()> {
        DefaultInvoiceValidator.validate_draft(draft)?;

        validate_invoice_number(&draft.details.invoice_number)?;

        if draft.details.due_date < draft.details.issue_date {
            return Err(InvoiceError::Validation(format!(
                "Due date {} is before issue date {}",
                draft.details.due_date, draft.details.issue_date
            )));
        }

        if draft.customer.display_name().trim().is_empty() {
            return Err(InvoiceError::Validation(
                "Customer name cannot be empty".to_string(),
            ));
        }

        for item in draft.items() {
            validate_line_item(item)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_number_rules() {
        assert!(validate_invoice_number("INV-71717123").is_ok());
        assert!(validate_invoice_number("GST/2024-25/001").is_ok());
        assert!(validate_invoice_number("  ").is_err());
        assert!(validate_invoice_number("INV 001").is_err());
        assert!(validate_invoice_number(&"9".repeat(51)).is_err());
    }

    #[test]
    fn test_line_item_ranges() {
        let ok = LineItem::new("Desk", Unit::Nos, 1.0, 5000.0, 100.0, 28.0);
        assert!(validate_line_item(&ok).is_ok());

        let over_discount = LineItem::new("Desk", Unit::Nos, 1.0, 5000.0, 120.0, 18.0);
        assert!(validate_line_item(&over_discount).is_err());

        let negative_price = LineItem::new("Desk", Unit::Nos, 1.0, -5.0, 0.0, 18.0);
        assert!(validate_line_item(&negative_price).is_err());

        let negative_qty = LineItem::new("Desk", Unit::Nos, -1.0, 5.0, 0.0, 18.0);
        assert!(validate_line_item(&negative_qty).is_err());

        let negative_tax = LineItem::new("Desk", Unit::Nos, 1.0, 5.0, 0.0, -18.0);
        assert!(validate_line_item(&negative_tax).is_err());
    }
}

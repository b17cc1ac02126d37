//! Traits for storage, GST lookup and validation seams

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::invoice::InvoiceDraft;
use crate::tax::gstin::validate_gstin;
use crate::types::*;

/// Storage abstraction for issued invoice records
///
/// The computation core never touches storage; the invoice book persists
/// snapshots through whichever backend implements this trait (browser
/// storage bridge, SQLite, in-memory, etc.).
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Save a record, replacing any record with the same id
    async fn save_record(&mut self, record: &InvoiceRecord) -> InvoiceResult<()>;

    /// Get a record by id
    async fn get_record(&self, record_id: &str) -> InvoiceResult<Option<InvoiceRecord>>;

    /// List records, optionally filtered by status
    async fn list_records(&self, status: Option<InvoiceStatus>)
        -> InvoiceResult<Vec<InvoiceRecord>>;

    /// Update an existing record
    async fn update_record(&mut self, record: &InvoiceRecord) -> InvoiceResult<()>;

    /// Delete a record
    async fn delete_record(&mut self, record_id: &str) -> InvoiceResult<()>;
}

/// Party details as returned by a GST lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstDetails {
    pub name: String,
    pub surname: String,
    pub business_name: String,
    pub state: String,
    pub city: String,
}

/// Source of party details for a GST number
#[async_trait]
pub trait GstLookup: Send + Sync {
    /// Look up the registered party for `gstin`. Malformed numbers yield `None`.
    async fn lookup(&self, gstin: &str) -> InvoiceResult<Option<GstDetails>>;
}

/// Trait for implementing checks run before a draft is issued
pub trait InvoiceValidator: Send + Sync {
    /// Validate a draft before it is issued
    fn validate_draft(&self, draft: &InvoiceDraft) -> InvoiceResult<()>;
}

/// Default draft validator with the minimal issuing rules
pub struct DefaultInvoiceValidator;

impl InvoiceValidator for DefaultInvoiceValidator {
    fn validate_draft(&self, draft: &InvoiceDraft) -> InvoiceResult<()> {
        check_optional_gstin("Seller", &draft.seller.gst_number)?;
        check_optional_gstin("Customer", &draft.customer.gst_number)?;

        if draft.items().iter().all(|item| item.name.trim().is_empty()) {
            return Err(InvoiceError::Validation(
                "Invoice must have at least one named line item".to_string(),
            ));
        }

        for item in draft.items() {
            let values = [
                item.quantity,
                item.unit_price,
                item.discount_rate,
                item.tax_rate,
            ];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(InvoiceError::Validation(format!(
                    "Line item '{}' has a non-finite amount or rate",
                    item.name
                )));
            }
        }

        Ok(())
    }
}

/// A GST number is optional, but when entered it must be well-formed
fn check_optional_gstin(party: &str, gst_number: &str) -> InvoiceResult<()> {
    if !gst_number.is_empty() && !validate_gstin(gst_number) {
        return Err(InvoiceError::Validation(format!(
            "{} GST number '{}' is not a valid GSTIN",
            party, gst_number
        )));
    }
    Ok(())
}

/// Figures shown on the invoice dashboard
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BookSummary {
    pub invoice_count: usize,
    pub paid_count: usize,
    pub pending_count: usize,
    /// Sum of all invoice amounts
    pub total_revenue: f64,
    /// Sum of amounts still pending payment
    pub pending_amount: f64,
}

//! Invoice book: issues drafts into a record store and reports on them

use tracing::{info, warn};

use crate::invoice::InvoiceDraft;
use crate::traits::*;
use crate::types::*;

/// Issued invoices kept in a pluggable [`InvoiceStore`]
pub struct InvoiceBook<S: InvoiceStore> {
    storage: S,
    validator: Box<dyn InvoiceValidator>,
}

impl<S: InvoiceStore> InvoiceBook<S> {
    /// Create a new invoice book with the default validator
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultInvoiceValidator),
        }
    }

    /// Create a new invoice book with a custom validator
    pub fn with_validator(storage: S, validator: Box<dyn InvoiceValidator>) -> Self {
        Self { storage, validator }
    }

    /// Validate a draft and store a snapshot of it
    pub async fn issue(&mut self, draft: &InvoiceDraft) -> InvoiceResult<InvoiceRecord> {
        if let Err(e) = self.validator.validate_draft(draft) {
            warn!(invoice_number = %draft.details.invoice_number, error = %e, "draft rejected");
            return Err(e);
        }

        let record = draft.to_record();
        self.storage.save_record(&record).await?;

        info!(
            record_id = %record.id,
            invoice_number = %record.number,
            amount = record.amount,
            "invoice issued"
        );
        Ok(record)
    }

    /// Get a record by id
    pub async fn get(&self, record_id: &str) -> InvoiceResult<Option<InvoiceRecord>> {
        self.storage.get_record(record_id).await
    }

    /// Get a record by id, returning an error if not found
    pub async fn get_required(&self, record_id: &str) -> InvoiceResult<InvoiceRecord> {
        self.storage
            .get_record(record_id)
            .await?
            .ok_or_else(|| InvoiceError::NotFound(record_id.to_string()))
    }

    /// All records, newest first; same-day records ordered by number
    pub async fn list(&self) -> InvoiceResult<Vec<InvoiceRecord>> {
        self.list_by_status(None).await
    }

    /// Records with the given status, newest first
    pub async fn list_by_status(
        &self,
        status: Option<InvoiceStatus>,
    ) -> InvoiceResult<Vec<InvoiceRecord>> {
        let mut records = self.storage.list_records(status).await?;
        records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.number.cmp(&b.number)));
        Ok(records)
    }

    /// Flip a record between paid and pending
    pub async fn toggle_status(&mut self, record_id: &str) -> InvoiceResult<InvoiceRecord> {
        let mut record = self.get_required(record_id).await?;
        record.status = record.status.toggled();
        self.storage.update_record(&record).await?;

        info!(record_id = %record_id, status = ?record.status, "invoice status changed");
        Ok(record)
    }

    /// Delete a record
    pub async fn delete(&mut self, record_id: &str) -> InvoiceResult<()> {
        self.storage.delete_record(record_id).await?;
        info!(record_id = %record_id, "invoice deleted");
        Ok(())
    }

    /// Counts and amounts for the dashboard
    pub async fn summary(&self) -> InvoiceResult<BookSummary> {
        let records = self.storage.list_records(None).await?;

        let summary = records
            .iter()
            .fold(BookSummary::default(), |mut summary, record| {
                summary.invoice_count += 1;
                summary.total_revenue += record.amount;
                match record.status {
                    InvoiceStatus::Paid => summary.paid_count += 1,
                    InvoiceStatus::Pending => {
                        summary.pending_count += 1;
                        summary.pending_amount += record.amount;
                    }
                }
                summary
            });

        Ok(summary)
    }

    /// Borrow the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

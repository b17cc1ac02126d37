//! Editable invoice state behind the invoice form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::InvoiceDefaults;
use crate::format::{amount_in_words, format_inr};
use crate::tax::gst::{aggregate, InvoiceTotals, SupplyType, TaxSplit};
use crate::types::*;

/// Field changes for one line item; `None` leaves a field as it is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemUpdate {
    pub name: Option<String>,
    pub unit: Option<Unit>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    pub discount_rate: Option<f64>,
    pub tax_rate: Option<f64>,
}

impl LineItemUpdate {
    fn apply(self, item: &mut LineItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(unit) = self.unit {
            item.unit = unit;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(unit_price) = self.unit_price {
            item.unit_price = unit_price;
        }
        if let Some(discount_rate) = self.discount_rate {
            item.discount_rate = discount_rate;
        }
        if let Some(tax_rate) = self.tax_rate {
            item.tax_rate = tax_rate;
        }
    }
}

/// An invoice being filled in: parties, details and line items.
///
/// A draft always holds at least one line item. Totals are computed fresh
/// from the items on every call. Deserializing a draft without line items
/// fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DraftFields")]
pub struct InvoiceDraft {
    pub seller: Seller,
    pub customer: Customer,
    #[serde(rename = "invoiceDetails")]
    pub details: InvoiceDetails,
    #[serde(rename = "products")]
    items: Vec<LineItem>,
    #[serde(skip)]
    defaults: InvoiceDefaults,
}

/// Serialized form of a draft, checked before it becomes an [`InvoiceDraft`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DraftFields {
    seller: Seller,
    customer: Customer,
    #[serde(rename = "invoiceDetails")]
    details: InvoiceDetails,
    #[serde(rename = "products")]
    items: Vec<LineItem>,
}

impl TryFrom<DraftFields> for InvoiceDraft {
    type Error = InvoiceError;

    fn try_from(fields: DraftFields) -> InvoiceResult<Self> {
        if fields.items.is_empty() {
            return Err(InvoiceError::Validation(
                "Invoice draft must have at least one line item".to_string(),
            ));
        }

        Ok(Self {
            seller: fields.seller,
            customer: fields.customer,
            details: fields.details,
            items: fields.items,
            defaults: InvoiceDefaults::default(),
        })
    }
}

impl InvoiceDraft {
    /// Start a new draft created at `now` with a single blank line item
    pub fn new(defaults: InvoiceDefaults, now: DateTime<Utc>) -> Self {
        Self {
            seller: Seller::default(),
            customer: Customer::default(),
            details: InvoiceDetails::new(&defaults, now),
            items: vec![LineItem::blank(&defaults)],
            defaults,
        }
    }

    pub fn defaults(&self) -> &InvoiceDefaults {
        &self.defaults
    }

    /// Line items in display order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a blank line item and return it
    pub fn add_item(&mut self) -> &LineItem {
        let blank = LineItem::blank(&self.defaults);
        self.push_item(blank)
    }

    /// Append a prepared line item and return it
    pub fn push_item(&mut self, item: LineItem) -> &LineItem {
        debug!(item_id = %item.id, "line item added");
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Change fields of a line item
    pub fn update_item(&mut self, id: &str, update: LineItemUpdate) -> InvoiceResult<&LineItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| InvoiceError::LineItemNotFound(id.to_string()))?;

        update.apply(item);
        debug!(item_id = %id, total = item.total(), "line item updated");
        Ok(item)
    }

    /// Remove a line item. The last remaining item is never removed.
    ///
    /// Returns whether an item was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        if self.items.len() <= 1 {
            return false;
        }

        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() < before;
        if removed {
            debug!(item_id = %id, "line item removed");
        }
        removed
    }

    /// Clear everything for a new invoice created at `now`, keeping the seller logo
    pub fn reset(&mut self, now: DateTime<Utc>) {
        let logo = self.seller.logo.take();
        let defaults = std::mem::take(&mut self.defaults);
        *self = Self::new(defaults, now);
        self.seller.logo = logo;
    }

    /// Subtotal, discount, tax and grand total over the current items
    pub fn totals(&self) -> InvoiceTotals {
        aggregate(&self.items)
    }

    /// Intra- or inter-state supply, when both GST numbers are valid
    pub fn supply_type(&self) -> Option<SupplyType> {
        SupplyType::between(&self.seller.gst_number, &self.customer.gst_number)
    }

    /// CGST/SGST or IGST split of the total tax, when the supply type is known
    pub fn tax_split(&self) -> Option<TaxSplit> {
        self.supply_type()
            .map(|supply| self.totals().split(supply))
    }

    /// Grand total formatted as an `en-IN` currency string
    pub fn formatted_grand_total(&self) -> InvoiceResult<String> {
        Ok(format_inr(self.totals().grand_total)?)
    }

    /// Grand total spelled out in words
    pub fn amount_in_words(&self) -> InvoiceResult<String> {
        Ok(amount_in_words(self.totals().grand_total)?)
    }

    /// Snapshot the draft as an invoice record for the invoice list
    pub fn to_record(&self) -> InvoiceRecord {
        let status = if self.details.is_paid {
            InvoiceStatus::Paid
        } else {
            InvoiceStatus::Pending
        };

        InvoiceRecord {
            id: uuid::Uuid::new_v4().to_string(),
            number: self.details.invoice_number.clone(),
            customer: self.customer.display_name().to_string(),
            amount: self.totals().grand_total,
            date: self.details.issue_date,
            status,
            customer_details: CustomerSummary {
                business_name: self.customer.business_name.clone(),
                gst_number: self.customer.gst_number.clone(),
            },
        }
    }
}

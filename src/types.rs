//! Core types and data structures for the invoicing system

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::InvoiceDefaults;
use crate::format::FormatError;
use crate::tax::gst::{compute_line, LineCalculation};
use crate::tax::gstin::state_from_gstin;

/// Unit of measure for a line item. Purely descriptive, never used in arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    /// Numbers (pieces counted individually)
    #[default]
    Nos,
    Kg,
    Gram,
    Litre,
    Metre,
    Hour,
    Day,
    Box,
    Pack,
    Set,
    Piece,
    /// Any label outside the standard set
    Other(String),
}

impl Unit {
    /// Label as shown on the printed invoice
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Nos => "Nos",
            Unit::Kg => "Kg",
            Unit::Gram => "Gram",
            Unit::Litre => "Litre",
            Unit::Metre => "Metre",
            Unit::Hour => "Hour",
            Unit::Day => "Day",
            Unit::Box => "Box",
            Unit::Pack => "Pack",
            Unit::Set => "Set",
            Unit::Piece => "Piece",
            Unit::Other(label) => label,
        }
    }
}

impl From<String> for Unit {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Nos" => Unit::Nos,
            "Kg" => Unit::Kg,
            "Gram" => Unit::Gram,
            "Litre" => Unit::Litre,
            "Metre" => Unit::Metre,
            "Hour" => Unit::Hour,
            "Day" => Unit::Day,
            "Box" => Unit::Box,
            "Pack" => Unit::Pack,
            "Set" => Unit::Set,
            "Piece" => Unit::Piece,
            _ => Unit::Other(label),
        }
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One billable entry on an invoice.
///
/// The line total is never stored: [`LineItem::total`] derives it from the
/// current quantity, price, discount and tax rate on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable identifier assigned when the item is created
    pub id: String,
    /// Free-text description of the product or service
    pub name: String,
    /// Unit of measure
    #[serde(default)]
    pub unit: Unit,
    /// Quantity, fractional values allowed
    pub quantity: f64,
    /// Price per unit before discount and tax
    pub unit_price: f64,
    /// Discount percentage applied to the gross amount
    #[serde(default)]
    pub discount_rate: f64,
    /// Tax percentage applied to the taxable (post-discount) amount
    #[serde(alias = "tax")]
    pub tax_rate: f64,
}

impl LineItem {
    /// Create a new line item with a freshly generated id
    pub fn new(
        name: impl Into<String>,
        unit: Unit,
        quantity: f64,
        unit_price: f64,
        discount_rate: f64,
        tax_rate: f64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            unit,
            quantity,
            unit_price,
            discount_rate,
            tax_rate,
        }
    }

    /// Create the empty row a new invoice starts with
    pub fn blank(defaults: &InvoiceDefaults) -> Self {
        Self::new(
            String::new(),
            defaults.default_unit.clone(),
            1.0,
            0.0,
            0.0,
            defaults.default_tax_rate,
        )
    }

    /// Full tax breakdown for this line
    pub fn calculate(&self) -> LineCalculation {
        compute_line(
            self.quantity,
            self.unit_price,
            self.discount_rate,
            self.tax_rate,
        )
    }

    /// Post-discount, post-tax amount of this line
    pub fn total(&self) -> f64 {
        self.calculate().line_total
    }
}

/// Payment method shown on the invoice
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    #[default]
    BankTransfer,
    Cash,
    Upi,
    CreditCard,
    Cheque,
    Other(String),
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Cheque => "Cheque",
            PaymentMethod::Other(label) => label,
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Bank Transfer" => PaymentMethod::BankTransfer,
            "Cash" => PaymentMethod::Cash,
            "UPI" => PaymentMethod::Upi,
            "Credit Card" => PaymentMethod::CreditCard,
            "Cheque" => PaymentMethod::Cheque,
            _ => PaymentMethod::Other(label),
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.as_str().to_string()
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invoice-level metadata. Has no arithmetic dependency on the line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetails {
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub is_paid: bool,
    /// Free-text notes printed below the totals
    #[serde(default, alias = "description")]
    pub notes: String,
}

impl InvoiceDetails {
    /// Fresh details for an invoice created at `now`, issued on its UTC date
    pub fn new(defaults: &InvoiceDefaults, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        Self {
            invoice_number: defaults.next_invoice_number(now),
            issue_date: today,
            due_date: defaults.due_date(today),
            payment_method: defaults.default_payment_method.clone(),
            is_paid: false,
            notes: String::new(),
        }
    }
}

/// The business issuing the invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seller {
    pub gst_number: String,
    pub name: String,
    pub surname: String,
    pub business_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub email: String,
    pub phone: String,
    /// Reference to a stored logo image
    pub logo: Option<String>,
}

impl Seller {
    /// State decoded from the GST number, empty when the number is invalid
    pub fn gst_state(&self) -> &'static str {
        state_from_gstin(&self.gst_number)
    }
}

/// The party being billed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub gst_number: String,
    pub name: String,
    pub business_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    /// State decoded from the GST number, empty when the number is invalid
    pub fn gst_state(&self) -> &'static str {
        state_from_gstin(&self.gst_number)
    }

    /// Name shown in invoice listings: business name, falling back to the person
    pub fn display_name(&self) -> &str {
        if self.business_name.trim().is_empty() {
            &self.name
        } else {
            &self.business_name
        }
    }
}

/// Payment status of an issued invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Paid,
    Pending,
}

impl InvoiceStatus {
    pub fn toggled(self) -> Self {
        match self {
            InvoiceStatus::Paid => InvoiceStatus::Pending,
            InvoiceStatus::Pending => InvoiceStatus::Paid,
        }
    }
}

// Anything other than "paid" is treated as pending
impl From<String> for InvoiceStatus {
    fn from(status: String) -> Self {
        if status == "paid" {
            InvoiceStatus::Paid
        } else {
            InvoiceStatus::Pending
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Paid => "paid".to_string(),
            InvoiceStatus::Pending => "pending".to_string(),
        }
    }
}

/// Customer fields kept alongside a stored invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub business_name: String,
    pub gst_number: String,
}

/// Snapshot of an issued invoice as kept in the invoice list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub id: String,
    pub number: String,
    /// Customer display name
    pub customer: String,
    /// Grand total at the time of issue
    pub amount: f64,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    pub customer_details: CustomerSummary,
}

/// Errors that can occur while validating, issuing or storing invoices
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invoice not found: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Line item not found: {0}")]
    LineItemNotFound(String),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for invoice operations
pub type InvoiceResult<T> = Result<T, InvoiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_total_is_derived() {
        let mut item = LineItem::new("Laptop", Unit::Nos, 5.0, 45000.0, 10.0, 18.0);
        assert_eq!(item.total(), 238950.0);

        item.quantity = 1.0;
        assert_eq!(item.total(), 47790.0);
    }

    #[test]
    fn test_line_item_accepts_legacy_tax_key() {
        let json = r#"{"id":"p1","name":"Rice","unit":"Kg","quantity":2,"unitPrice":50,"discountRate":0,"tax":5}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.unit, Unit::Kg);
        assert_eq!(item.tax_rate, 5.0);
        assert_eq!(item.total(), 105.0);
    }

    #[test]
    fn test_unit_round_trips_custom_labels() {
        assert_eq!(Unit::from("Dozen".to_string()), Unit::Other("Dozen".to_string()));
        assert_eq!(String::from(Unit::Litre), "Litre");
        assert_eq!(Unit::Other("Dozen".to_string()).to_string(), "Dozen");
    }

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(PaymentMethod::Upi.as_str(), "UPI");
        assert_eq!(
            PaymentMethod::from("Credit Card".to_string()),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            PaymentMethod::from("Barter".to_string()),
            PaymentMethod::Other("Barter".to_string())
        );
    }

    #[test]
    fn test_unknown_status_reads_as_pending() {
        let status: InvoiceStatus = serde_json::from_str(r#""overdue""#).unwrap();
        assert_eq!(status, InvoiceStatus::Pending);
        let status: InvoiceStatus = serde_json::from_str(r#""paid""#).unwrap();
        assert_eq!(status, InvoiceStatus::Paid);
        assert_eq!(serde_json::to_string(&InvoiceStatus::Pending).unwrap(), r#""pending""#);
    }

    #[test]
    fn test_customer_display_name_falls_back_to_person() {
        let mut customer = Customer {
            name: "Ravi".to_string(),
            ..Default::default()
        };
        assert_eq!(customer.display_name(), "Ravi");
        customer.business_name = "Ravi Traders".to_string();
        assert_eq!(customer.display_name(), "Ravi Traders");
    }

    #[test]
    fn test_party_state_from_gst_number() {
        let seller = Seller {
            gst_number: "27AAPFU0939F1ZV".to_string(),
            ..Default::default()
        };
        assert_eq!(seller.gst_state(), "Maharashtra");

        let customer = Customer {
            gst_number: "27aapfu0939f1zv".to_string(),
            ..Default::default()
        };
        assert_eq!(customer.gst_state(), "");
    }
}

//! GST (Goods and Services Tax) calculation engine for Indian invoices
//!
//! Amounts are plain `f64` rupees. Nothing is rounded here; rounding to
//! paise happens only when an amount is rendered with
//! [`format_inr`](crate::format::format_inr). Non-finite inputs are not
//! rejected: a NaN anywhere in a line poisons that line and every total it
//! contributes to.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tax::gstin::Gstin;
use crate::types::LineItem;

/// Tax breakdown of a single line item
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineCalculation {
    /// Quantity times unit price
    pub gross_amount: f64,
    /// Discount taken off the gross amount
    pub discount_amount: f64,
    /// Gross minus discount; the amount tax is charged on
    pub taxable_amount: f64,
    /// Tax charged on the taxable amount
    pub tax_amount: f64,
    /// Taxable amount plus tax
    pub line_total: f64,
}

/// Compute discount, taxable amount, tax and total for one line.
///
/// Tax is charged on the post-discount amount.
pub fn compute_line(
    quantity: f64,
    unit_price: f64,
    discount_rate: f64,
    tax_rate: f64,
) -> LineCalculation {
    let gross_amount = quantity * unit_price;
    let discount_amount = gross_amount * discount_rate / 100.0;
    let taxable_amount = gross_amount - discount_amount;
    let tax_amount = taxable_amount * tax_rate / 100.0;

    LineCalculation {
        gross_amount,
        discount_amount,
        taxable_amount,
        tax_amount,
        line_total: taxable_amount + tax_amount,
    }
}

/// Invoice-level totals over all line items
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of gross amounts (before discount and tax)
    pub subtotal: f64,
    pub total_discount: f64,
    pub total_tax: f64,
    /// `subtotal - total_discount + total_tax`
    pub grand_total: f64,
}

impl InvoiceTotals {
    /// Split the total tax into its central/state or integrated parts
    pub fn split(&self, supply: SupplyType) -> TaxSplit {
        TaxSplit::new(self.total_tax, supply)
    }
}

/// Sum every line item's figures, in input order.
///
/// An empty slice yields all-zero totals.
pub fn aggregate(items: &[LineItem]) -> InvoiceTotals {
    let mut subtotal = 0.0;
    let mut total_discount = 0.0;
    let mut total_tax = 0.0;

    for item in items {
        let line = item.calculate();
        subtotal += line.gross_amount;
        total_discount += line.discount_amount;
        total_tax += line.tax_amount;
    }

    let totals = InvoiceTotals {
        subtotal,
        total_discount,
        total_tax,
        grand_total: subtotal - total_discount + total_tax,
    };

    debug!(
        items = items.len(),
        subtotal = totals.subtotal,
        total_tax = totals.total_tax,
        grand_total = totals.grand_total,
        "aggregated invoice totals"
    );

    totals
}

/// Whether a supply stays within one state or crosses state lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplyType {
    /// Seller and customer in the same state: CGST + SGST
    IntraState,
    /// Seller and customer in different states: IGST
    InterState,
}

impl SupplyType {
    /// Determine the supply type from the two parties' GST numbers.
    ///
    /// Returns `None` when either number is malformed.
    pub fn between(seller_gstin: &str, customer_gstin: &str) -> Option<Self> {
        let seller = Gstin::parse(seller_gstin)?;
        let customer = Gstin::parse(customer_gstin)?;

        if seller.state_code() == customer.state_code() {
            Some(SupplyType::IntraState)
        } else {
            Some(SupplyType::InterState)
        }
    }
}

/// Tax amount divided into its GST components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxSplit {
    pub supply: SupplyType,
    /// Central GST
    pub cgst: f64,
    /// State GST
    pub sgst: f64,
    /// Integrated GST
    pub igst: f64,
}

impl TaxSplit {
    pub fn new(total_tax: f64, supply: SupplyType) -> Self {
        match supply {
            SupplyType::IntraState => {
                let half = total_tax / 2.0;
                Self {
                    supply,
                    cgst: half,
                    sgst: half,
                    igst: 0.0,
                }
            }
            SupplyType::InterState => Self {
                supply,
                cgst: 0.0,
                sgst: 0.0,
                igst: total_tax,
            },
        }
    }

    /// Sum of all components
    pub fn total(&self) -> f64 {
        self.cgst + self.sgst + self.igst
    }
}

/// Conventional GST slabs. Line items may carry any rate; these are the
/// rates offered to users by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstSlab {
    /// Essential items (unprocessed food, medicines) - 0%
    Exempt,
    /// Reduced rate items - 5%
    Reduced,
    /// Standard rate items - 12%
    Standard,
    /// Most services - 18%
    Higher,
    /// Luxury/sin goods - 28%
    Luxury,
}

impl GstSlab {
    pub const ALL: [GstSlab; 5] = [
        GstSlab::Exempt,
        GstSlab::Reduced,
        GstSlab::Standard,
        GstSlab::Higher,
        GstSlab::Luxury,
    ];

    /// Rate percentage for this slab
    pub fn rate(&self) -> f64 {
        match self {
            GstSlab::Exempt => 0.0,
            GstSlab::Reduced => 5.0,
            GstSlab::Standard => 12.0,
            GstSlab::Higher => 18.0,
            GstSlab::Luxury => 28.0,
        }
    }

    /// The slab matching `rate` exactly, if any
    pub fn from_rate(rate: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|slab| slab.rate() == rate)
    }
}

//! # GST Invoice Core
//!
//! Computation and formatting engine for GST-compliant Indian invoices.
//!
//! ## Features
//!
//! - **Line-item tax**: discount, taxable amount, tax and line total
//! - **Invoice totals**: subtotal, total discount, total tax and grand total
//! - **GSTIN handling**: structural validation and state decoding, CGST/SGST vs IGST split
//! - **Formatting**: `en-IN` rupee strings (`₹12,34,567.50`) and amounts in words
//!   using crore/lakh/thousand
//! - **Drafts and records**: editable invoice drafts, an invoice book over a
//!   pluggable record store, dashboard summaries
//!
//! The calculation functions are pure and keep no state between calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use gst_invoice_core::{aggregate, amount_in_words, format_inr, LineItem, Unit};
//!
//! let items = vec![LineItem::new("Laptop", Unit::Nos, 5.0, 45000.0, 10.0, 18.0)];
//! let totals = aggregate(&items);
//!
//! assert_eq!(format_inr(totals.grand_total).unwrap(), "₹2,38,950.00");
//! assert_eq!(
//!     amount_in_words(totals.grand_total).unwrap(),
//!     "Two Lakh Thirty Eight Thousand Nine Hundred and Fifty Rupees Only"
//! );
//! ```

pub mod config;
pub mod directory;
pub mod format;
pub mod invoice;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use directory::*;
pub use format::*;
pub use invoice::*;
pub use tax::*;
pub use traits::*;
pub use types::*;

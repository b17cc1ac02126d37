//! Filling in, issuing and tracking an invoice

use chrono::Utc;
use gst_invoice_core::utils::{EnhancedInvoiceValidator, MemoryStorage};
use gst_invoice_core::{
    format_inr, GstLookup, InvoiceBook, InvoiceDefaults, InvoiceDraft, LineItem, LineItemUpdate,
    MockGstDirectory, PaymentMethod, Unit,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("🧾 GST Invoice Core - Invoice Walkthrough\n");

    let defaults = InvoiceDefaults::from_json(r#"{"invoice_prefix": "SHOP-", "payment_terms_days": 15}"#)?;
    let mut draft = InvoiceDraft::new(defaults, Utc::now());
    draft.details.payment_method = PaymentMethod::Upi;

    // 1. Parties from their GST numbers
    println!("🔎 Looking up GST numbers...");
    let directory = MockGstDirectory::new();

    draft.seller.gst_number = "27AAPFU0939F1ZV".to_string();
    if let Some(details) = directory.lookup(&draft.seller.gst_number).await? {
        draft.seller.name = details.name;
        draft.seller.surname = details.surname;
        draft.seller.business_name = details.business_name;
        draft.seller.state = details.state;
        draft.seller.city = details.city;
    }

    draft.customer.gst_number = "27AABCU9603R1ZM".to_string();
    if let Some(details) = directory.lookup(&draft.customer.gst_number).await? {
        draft.customer.name = format!("{} {}", details.name, details.surname);
        draft.customer.business_name = details.business_name;
        draft.customer.state = details.state;
        draft.customer.city = details.city;
    }

    println!(
        "  Seller:   {} ({}, {})",
        draft.seller.business_name, draft.seller.city, draft.seller.state
    );
    println!(
        "  Customer: {} ({}, {})",
        draft.customer.business_name, draft.customer.city, draft.customer.state
    );
    println!();

    // 2. Line items
    let first = draft.items()[0].id.clone();
    draft.update_item(
        &first,
        LineItemUpdate {
            name: Some("Office chair".to_string()),
            quantity: Some(4.0),
            unit_price: Some(7499.0),
            discount_rate: Some(5.0),
            ..Default::default()
        },
    )?;
    draft.push_item(LineItem::new("Assembly", Unit::Hour, 2.0, 350.0, 0.0, 18.0));
    draft.push_item(LineItem::new("Printer paper", Unit::Box, 3.0, 240.0, 0.0, 12.0));

    println!("📦 Line Items ({}):", draft.details.invoice_number);
    for item in draft.items() {
        println!(
            "  {} × {} {} @ {} → {}",
            item.name,
            item.quantity,
            item.unit,
            format_inr(item.unit_price)?,
            format_inr(item.total())?
        );
    }
    println!();

    // 3. Totals and the tax split
    let totals = draft.totals();
    println!("💰 Totals:");
    println!("  Subtotal:    {}", format_inr(totals.subtotal)?);
    println!("  Discount:    {}", format_inr(totals.total_discount)?);
    println!("  Tax:         {}", format_inr(totals.total_tax)?);
    if let Some(split) = draft.tax_split() {
        println!(
            "    {:?}: CGST {} / SGST {} / IGST {}",
            split.supply,
            format_inr(split.cgst)?,
            format_inr(split.sgst)?,
            format_inr(split.igst)?
        );
    }
    println!("  Grand Total: {}", draft.formatted_grand_total()?);
    println!("  {}", draft.amount_in_words()?);
    println!();

    // 4. Issue and track
    let mut book = InvoiceBook::with_validator(MemoryStorage::new(), Box::new(EnhancedInvoiceValidator));
    let record = book.issue(&draft).await?;
    println!("📚 Issued {} for {}", record.number, record.customer);

    draft.reset(Utc::now());
    println!("  Draft reset: {} blank row(s)", draft.items().len());

    book.toggle_status(&record.id).await?;
    let summary = book.summary().await?;
    println!(
        "  Invoices: {} ({} paid, {} pending)",
        summary.invoice_count, summary.paid_count, summary.pending_count
    );
    println!("  Revenue:  {}", format_inr(summary.total_revenue)?);
    println!("  Pending:  {}", format_inr(summary.pending_amount)?);

    println!("\n🎉 Invoice walkthrough completed successfully!");
    Ok(())
}

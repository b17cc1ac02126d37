//! GST calculation examples

use gst_invoice_core::{
    aggregate, amount_in_words, compute_line, format_inr, state_from_gstin, validate_gstin,
    GstSlab, LineItem, SupplyType, Unit,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 GST Invoice Core - GST Calculation Examples\n");

    // 1. Conventional slabs
    println!("📊 GST Slabs:");
    for slab in GstSlab::ALL {
        println!("  {:?}: {}%", slab, slab.rate());
    }
    println!();

    // 2. A single line item
    println!("🧮 Line Item: 5 × ₹45,000 with 10% discount at 18% GST");
    let line = compute_line(5.0, 45000.0, 10.0, 18.0);
    println!("  Gross:    {}", format_inr(line.gross_amount)?);
    println!("  Discount: {}", format_inr(line.discount_amount)?);
    println!("  Taxable:  {}", format_inr(line.taxable_amount)?);
    println!("  Tax:      {}", format_inr(line.tax_amount)?);
    println!("  Total:    {}", format_inr(line.line_total)?);
    println!();

    // 3. A multi-rate invoice
    println!("🧾 Multi-item Invoice with Different GST Rates:");
    let items = vec![
        LineItem::new("Rice - 10kg", Unit::Pack, 2.0, 150.0, 0.0, GstSlab::Exempt.rate()),
        LineItem::new("Coffee powder - 500g", Unit::Pack, 1.0, 400.0, 0.0, GstSlab::Reduced.rate()),
        LineItem::new("Cooking oil - 1L", Unit::Litre, 3.0, 120.0, 5.0, GstSlab::Standard.rate()),
        LineItem::new("Consultation", Unit::Hour, 1.5, 2000.0, 0.0, GstSlab::Higher.rate()),
    ];

    for (i, item) in items.iter().enumerate() {
        let line = item.calculate();
        println!(
            "    {}. {} × {} {} @ {} = {} (GST {}%: {})",
            i + 1,
            item.name,
            item.quantity,
            item.unit,
            format_inr(item.unit_price)?,
            format_inr(line.line_total)?,
            item.tax_rate,
            format_inr(line.tax_amount)?
        );
    }

    let totals = aggregate(&items);
    println!();
    println!("  Subtotal:    {}", format_inr(totals.subtotal)?);
    println!("  Discount:    {}", format_inr(totals.total_discount)?);
    println!("  Total GST:   {}", format_inr(totals.total_tax)?);
    println!("  Grand Total: {}", format_inr(totals.grand_total)?);
    println!("  In words:    {}", amount_in_words(totals.grand_total)?);
    println!();

    // 4. Intra-state vs inter-state
    let seller = "27AAPFU0939F1ZV";
    for customer in ["27AABCU9603R1ZM", "29AABCU9603R1ZM"] {
        let Some(supply) = SupplyType::between(seller, customer) else {
            continue;
        };
        let split = totals.split(supply);
        println!(
            "🏢 {} → {} ({:?}):",
            state_from_gstin(seller),
            state_from_gstin(customer),
            supply
        );
        println!("  CGST: {}", format_inr(split.cgst)?);
        println!("  SGST: {}", format_inr(split.sgst)?);
        println!("  IGST: {}", format_inr(split.igst)?);
    }
    println!();

    // 5. GSTIN validation
    println!("✅ GSTIN Validation:");
    for gstin in ["27AAPFU0939F1ZV", "27aapfu0939f1zv", "27AAPFU0939F1Z", "99AAPFU0939F1ZV"] {
        if validate_gstin(gstin) {
            println!("  ✓ {} ({})", gstin, state_from_gstin(gstin));
        } else {
            println!("  ❌ {}", gstin);
        }
    }

    println!("\n🎉 GST calculation examples completed successfully!");
    Ok(())
}

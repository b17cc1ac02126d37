//! Property-based tests for the calculation and formatting core.

use gst_invoice_core::{
    aggregate, amount_in_words, compute_line, format_inr, state_from_gstin, validate_gstin,
    LineItem, SupplyType, Unit, STATE_CODES,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────────

/// Quantities from 0 to 1000 in steps of 0.5
fn arb_quantity() -> impl Strategy<Value = f64> {
    (0u32..=2000).prop_map(|halves| f64::from(halves) / 2.0)
}

/// Prices from 0.00 to 9,99,999.99
fn arb_price() -> impl Strategy<Value = f64> {
    (0u64..100_000_000).prop_map(|paise| paise as f64 / 100.0)
}

fn arb_discount() -> impl Strategy<Value = f64> {
    (0u32..=100).prop_map(f64::from)
}

fn arb_tax_rate() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(5.0), Just(12.0), Just(18.0), Just(28.0)]
}

fn arb_item() -> impl Strategy<Value = LineItem> {
    (arb_quantity(), arb_price(), arb_discount(), arb_tax_rate()).prop_map(
        |(quantity, unit_price, discount_rate, tax_rate)| {
            LineItem::new("Item", Unit::Nos, quantity, unit_price, discount_rate, tax_rate)
        },
    )
}

fn arb_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(arb_item(), 0..20)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

// ── Calculator and aggregator ───────────────────────────────────────────────

proptest! {
    #[test]
    fn line_total_is_taxable_plus_tax(
        quantity in arb_quantity(),
        price in arb_price(),
        discount in arb_discount(),
        rate in arb_tax_rate(),
    ) {
        let line = compute_line(quantity, price, discount, rate);
        let gross = quantity * price;
        let taxable = gross - gross * discount / 100.0;

        prop_assert_eq!(line.gross_amount, gross);
        prop_assert_eq!(line.taxable_amount, taxable);
        prop_assert_eq!(line.line_total, taxable + taxable * rate / 100.0);
    }

    #[test]
    fn grand_total_is_additive(items in arb_items()) {
        let totals = aggregate(&items);
        prop_assert!(close(
            totals.grand_total,
            totals.subtotal - totals.total_discount + totals.total_tax
        ));

        let line_sum: f64 = items.iter().map(LineItem::total).sum();
        prop_assert!(close(totals.grand_total, line_sum));
    }

    #[test]
    fn aggregate_is_idempotent(items in arb_items()) {
        let first = aggregate(&items);
        let second = aggregate(&items);

        prop_assert_eq!(first.subtotal.to_bits(), second.subtotal.to_bits());
        prop_assert_eq!(first.total_discount.to_bits(), second.total_discount.to_bits());
        prop_assert_eq!(first.total_tax.to_bits(), second.total_tax.to_bits());
        prop_assert_eq!(first.grand_total.to_bits(), second.grand_total.to_bits());
    }

    #[test]
    fn single_item_aggregate_matches_line(item in arb_item()) {
        let line = item.calculate();
        let totals = aggregate(std::slice::from_ref(&item));

        prop_assert_eq!(totals.subtotal, line.gross_amount);
        prop_assert_eq!(totals.total_discount, line.discount_amount);
        prop_assert_eq!(totals.total_tax, line.tax_amount);
        prop_assert!(close(totals.grand_total, line.line_total));
    }

    #[test]
    fn tax_split_preserves_total(items in arb_items()) {
        let totals = aggregate(&items);
        for supply in [SupplyType::IntraState, SupplyType::InterState] {
            let split = totals.split(supply);
            prop_assert!(close(split.total(), totals.total_tax));
        }
    }
}

// ── GSTIN ───────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generated_gstins_validate(
        state in prop::sample::select(STATE_CODES.to_vec()),
        pan in "[A-Z]{5}[0-9]{4}[A-Z]",
        entity in "[1-9A-Z]",
        check in "[0-9A-Z]",
    ) {
        let gstin = format!("{}{}{}Z{}", state.0, pan, entity, check);
        prop_assert!(validate_gstin(&gstin));
        prop_assert_eq!(state_from_gstin(&gstin), state.1);
    }

    #[test]
    fn lowercase_gstins_never_validate(gstin in "[0-9]{2}[a-z]{5}[0-9]{4}[a-z][1-9a-z]z[0-9a-z]") {
        prop_assert!(!validate_gstin(&gstin));
        prop_assert_eq!(state_from_gstin(&gstin), "");
    }

    #[test]
    fn arbitrary_strings_never_panic(input in ".{0,20}") {
        let valid = validate_gstin(&input);
        let state = state_from_gstin(&input);
        if !valid {
            prop_assert_eq!(state, "");
        }
    }
}

// ── Formatting ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn formatted_amount_has_two_decimals(paise in -10_000_000_000i64..10_000_000_000i64) {
        let amount = paise as f64 / 100.0;
        let formatted = format_inr(amount).unwrap();

        let body = formatted.strip_prefix('-').unwrap_or(&formatted);
        prop_assert!(body.starts_with('₹'));
        let (_, fraction) = body.rsplit_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
        prop_assert_eq!(formatted.starts_with('-'), paise < 0);

        // Removing separators gives back the plain amount
        let digits: String = body.trim_start_matches('₹').chars().filter(|c| *c != ',').collect();
        prop_assert_eq!(digits, format!("{}.{:02}", paise.abs() / 100, paise.abs() % 100));
    }

    #[test]
    fn words_end_with_suffix(rupees in 1u64..1_000_000_000_000u64) {
        let words = amount_in_words(rupees as f64).unwrap();
        prop_assert!(words.ends_with(" Rupees Only"));
        prop_assert!(!words.contains("  "));
        prop_assert!(!words.starts_with(' '));
    }
}

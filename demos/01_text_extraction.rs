/// text extraction - partial drafts, defaults, and the fee breakdown
use fee_receipt_rs::{
    extract_payment_record_now, fee_totals, outstanding_balance, Discount, FeeLineItem, Money,
    SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // fixed clock so the demo output is stable
    let time = SafeTimeProvider::new(TimeSource::Test(
        chrono::DateTime::parse_from_rfc3339("2025-09-01T08:00:00Z")?.with_timezone(&chrono::Utc),
    ));

    // an incomplete message: no amount anywhere
    let result = extract_payment_record_now("Receipt for Chidi Okeke, JSS 2, second term", &time)?;
    println!("complete: {}", result.is_complete);
    println!("missing:  {}", result.missing_fields().join(", "));
    println!("draft so far: {:#?}", result.draft);

    // fee breakdown with a sibling discount
    let items = vec![
        FeeLineItem::new("Tuition", Money::from_major(40_000), 1),
        FeeLineItem::new("Uniform", Money::from_major(3_500), 2),
        FeeLineItem::new("Books", Money::from_major(1_500), 4),
    ];
    let discount = Discount::Percentage(dec!(10));
    discount.validate()?;

    let totals = fee_totals(&items, &discount);
    println!("subtotal: ₦{}", totals.subtotal);
    println!("discount: ₦{}", totals.discount_amount);
    println!("total:    ₦{}", totals.total);
    println!(
        "balance after ₦30,000 paid: ₦{}",
        outstanding_balance(totals.total, Money::from_major(30_000))
    );

    Ok(())
}

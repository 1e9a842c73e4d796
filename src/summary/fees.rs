//! Per-receipt fee totals, discounts, and outstanding balances.

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{Discount, FeeLineItem};

/// breakdown of a receipt's fee computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeTotals {
    pub subtotal: Money,
    pub discount_amount: Money,
    pub total: Money,
}

/// Subtotal over line items plus discount application.
///
/// The total is not clamped at zero: a discount larger than the subtotal
/// simply yields a negative total, and upstream validation is expected to
/// keep discounts within sane bounds. Percentage discounts are quantized
/// to kobo (2 decimal places), so a sub-kobo exact result rounds.
pub fn fee_totals(items: &[FeeLineItem], discount: &Discount) -> FeeTotals {
    let subtotal: Money = items.iter().map(|item| item.line_total()).sum();
    let discount_amount = match discount {
        Discount::None => Money::ZERO,
        Discount::Percentage(p) => subtotal.percentage(*p),
        Discount::Fixed(amount) => *amount,
    };
    FeeTotals {
        subtotal,
        discount_amount,
        total: subtotal - discount_amount,
    }
}

/// amount still owed after payments applied, floored at zero
pub fn outstanding_balance(total: Money, amount_paid: Money) -> Money {
    (total - amount_paid).max(Money::ZERO)
}

//! Reporting aggregation over payment record collections.
//!
//! Aggregation never mutates source records; each call folds the full
//! collection into fresh buckets, so re-running over unchanged input
//! yields identical output. Empty collections produce zero-valued
//! summaries rather than errors.

pub mod fees;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::decimal::Money;
use crate::types::PaymentRecord;

pub use fees::{fee_totals, outstanding_balance, FeeTotals};

/// one grouped aggregate for reporting; derived, never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationBucket {
    pub key: String,
    pub total_amount: Money,
    pub count: usize,
}

/// headline figures for the analytics dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RevenueSummary {
    pub total_revenue: Money,
    pub receipt_count: usize,
    pub average_payment: Money,
    pub active_students: usize,
}

/// Partition records by a key function, summing amounts and counting
/// members per distinct key. Buckets come out in first-occurrence order;
/// callers re-sort as needed.
pub fn group_and_sum<K>(records: &[PaymentRecord], key_fn: K) -> Vec<AggregationBucket>
where
    K: Fn(&PaymentRecord) -> String,
{
    let mut buckets: Vec<AggregationBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = key_fn(record);
        match index.get(&key) {
            Some(&i) => {
                buckets[i].total_amount += record.amount_paid;
                buckets[i].count += 1;
            }
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(AggregationBucket {
                    key,
                    total_amount: record.amount_paid,
                    count: 1,
                });
            }
        }
    }
    buckets
}

/// month bucket key, e.g. "June 2025"
pub fn month_key(record: &PaymentRecord) -> String {
    record.payment_date.format("%B %Y").to_string()
}

/// class bucket key, e.g. "Primary 5"; empty for unresolved classes
pub fn class_key(record: &PaymentRecord) -> String {
    record.student_class.label()
}

/// term + session composite key, e.g. "First Term 2025/2026"
pub fn term_session_key(record: &PaymentRecord) -> String {
    format!("{} {}", record.term, record.session)
}

/// records paid on or after the cutoff, compared as calendar dates
pub fn filter_since(records: &[PaymentRecord], cutoff: NaiveDate) -> Vec<PaymentRecord> {
    records
        .iter()
        .filter(|r| r.payment_date >= cutoff)
        .cloned()
        .collect()
}

/// distinct student names, case-insensitive
pub fn unique_student_count(records: &[PaymentRecord]) -> usize {
    records
        .iter()
        .map(|r| r.student_name.trim().to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

/// headline totals; zero-valued for an empty collection, with the
/// average of zero records defined as zero
pub fn revenue_summary(records: &[PaymentRecord]) -> RevenueSummary {
    let total_revenue: Money = records.iter().map(|r| r.amount_paid).sum();
    let receipt_count = records.len();
    let average_payment = if receipt_count == 0 {
        Money::ZERO
    } else {
        total_revenue / rust_decimal::Decimal::from(receipt_count as u64)
    };
    RevenueSummary {
        total_revenue,
        receipt_count,
        average_payment,
        active_students: unique_student_count(records),
    }
}

/// in-place sort for the ranking views, largest bucket first
pub fn sort_by_total_desc(buckets: &mut [AggregationBucket]) {
    buckets.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
}

/// in-place sort by bucket key, ascending
pub fn sort_by_key_asc(buckets: &mut [AggregationBucket]) {
    buckets.sort_by(|a, b| a.key.cmp(&b.key));
}

pub mod decimal;
pub mod errors;
pub mod extract;
pub mod store;
pub mod summary;
pub mod types;
pub mod words;

// re-export key types
pub use decimal::Money;
pub use errors::{ReceiptError, Result};
pub use extract::{extract_payment_record, extract_payment_record_now, Extraction};
pub use store::{MemoryStore, ReceiptPatch, ReceiptStore};
pub use summary::{
    class_key, fee_totals, filter_since, group_and_sum, month_key, outstanding_balance,
    revenue_summary, sort_by_key_asc, sort_by_total_desc, term_session_key, unique_student_count,
    AggregationBucket, FeeTotals, RevenueSummary,
};
pub use types::{
    ClassStage, Discount, FeeLineItem, PaymentRecord, PaymentRecordDraft, ReceiptId, Session,
    StudentClass, Term, DEFAULT_DESCRIPTION,
};
pub use words::amount_in_words;

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;

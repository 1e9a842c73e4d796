//! Free-form text to structured payment-record drafts.
//!
//! Runs independent pattern passes for each field and merges the results,
//! filling documented defaults where a pass found nothing. Partial
//! extraction is not an error: the caller gets the draft either way,
//! together with a completeness flag over the three required fields
//! (student name, class, amount).

pub mod patterns;

use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;

use crate::errors::{ReceiptError, Result};
use crate::types::{PaymentRecordDraft, Session, Term, DEFAULT_DESCRIPTION};

pub use patterns::{
    match_amount, match_class, match_date, match_description, match_name, match_term,
    parse_date_text,
};

/// result of one extraction pass over a piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub draft: PaymentRecordDraft,
    pub is_complete: bool,
}

impl Extraction {
    /// required fields that still need user correction, empty when complete
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.draft.missing_required()
    }
}

/// Extract a best-effort payment record draft from free-form text.
///
/// `today` anchors relative dates ("today", "yesterday"), the default
/// payment date, the year of dates given without one, and the session.
/// Only blank input is an error; every unresolved field takes its default:
/// date = `today`, term = first term, description = "School fees",
/// amount = zero, name/class = empty.
pub fn extract_payment_record(text: &str, today: NaiveDate) -> Result<Extraction> {
    if text.trim().is_empty() {
        return Err(ReceiptError::EmptyInput);
    }

    let draft = PaymentRecordDraft {
        student_name: match_name(text).unwrap_or_default(),
        student_class: match_class(text).unwrap_or_default(),
        term: match_term(text).unwrap_or(Term::First),
        session: Session::for_date(today),
        amount_paid: match_amount(text).unwrap_or_default(),
        payment_date: match_date(text, today).unwrap_or(today),
        description: match_description(text).unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
    };

    let is_complete = draft.is_complete();
    Ok(Extraction { draft, is_complete })
}

/// same as [`extract_payment_record`] with the current date taken from a
/// shared time provider
pub fn extract_payment_record_now(text: &str, time: &SafeTimeProvider) -> Result<Extraction> {
    extract_payment_record(text, time.now().date_naive())
}

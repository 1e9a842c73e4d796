//! Persistence seam for payment records.
//!
//! The real application keeps receipts in a hosted backend; this crate
//! only defines the read/write contract it consumes, plus an in-memory
//! implementation for tests and demos.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{ReceiptError, Result};
use crate::types::{PaymentRecord, ReceiptId, Session, StudentClass, Term};

/// partial update to a stored record; unset fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiptPatch {
    pub student_name: Option<String>,
    pub student_class: Option<StudentClass>,
    pub term: Option<Term>,
    pub session: Option<Session>,
    pub amount_paid: Option<Money>,
    pub payment_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ReceiptPatch {
    fn apply(self, record: &mut PaymentRecord) {
        if let Some(v) = self.student_name {
            record.student_name = v;
        }
        if let Some(v) = self.student_class {
            record.student_class = v;
        }
        if let Some(v) = self.term {
            record.term = v;
        }
        if let Some(v) = self.session {
            record.session = v;
        }
        if let Some(v) = self.amount_paid {
            record.amount_paid = v;
        }
        if let Some(v) = self.payment_date {
            record.payment_date = v;
        }
        if let Some(v) = self.description {
            record.description = v;
        }
    }
}

/// CRUD contract the surrounding application provides
pub trait ReceiptStore {
    fn fetch_all(&self) -> Result<Vec<PaymentRecord>>;
    fn insert(&mut self, record: PaymentRecord) -> Result<PaymentRecord>;
    fn update(&mut self, id: ReceiptId, patch: ReceiptPatch) -> Result<PaymentRecord>;
    /// returns whether a record was actually deleted
    fn remove(&mut self, id: ReceiptId) -> Result<bool>;
}

/// in-memory store, insertion-ordered
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<PaymentRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ReceiptStore for MemoryStore {
    fn fetch_all(&self) -> Result<Vec<PaymentRecord>> {
        Ok(self.records.clone())
    }

    fn insert(&mut self, record: PaymentRecord) -> Result<PaymentRecord> {
        record.validate()?;
        self.records.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, id: ReceiptId, patch: ReceiptPatch) -> Result<PaymentRecord> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(ReceiptError::ReceiptNotFound { id })?;
        let mut updated = self.records[pos].clone();
        patch.apply(&mut updated);
        updated.validate()?;
        self.records[pos] = updated.clone();
        Ok(updated)
    }

    fn remove(&mut self, id: ReceiptId) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        Ok(self.records.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassStage, PaymentRecordDraft, DEFAULT_DESCRIPTION};

    fn draft(name: &str, amount: i64) -> PaymentRecordDraft {
        PaymentRecordDraft {
            student_name: name.to_string(),
            student_class: StudentClass::known(ClassStage::Primary, 5),
            term: Term::First,
            session: Session::for_year(2025),
            amount_paid: Money::from_major(amount),
            payment_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    #[test]
    fn test_insert_and_fetch() {
        let mut store = MemoryStore::new();
        let record = store.insert(draft("Mary Johnson", 25_000).into_record()).unwrap();

        let all = store.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], record);
    }

    #[test]
    fn test_insert_rejects_invalid() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.insert(draft("", 25_000).into_record()),
            Err(ReceiptError::EmptyStudentName)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_partial() {
        let mut store = MemoryStore::new();
        let record = store.insert(draft("Mary Johnson", 25_000).into_record()).unwrap();

        let updated = store
            .update(
                record.id,
                ReceiptPatch {
                    amount_paid: Some(Money::from_major(30_000)),
                    term: Some(Term::Second),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.amount_paid, Money::from_major(30_000));
        assert_eq!(updated.term, Term::Second);
        // untouched fields keep their value
        assert_eq!(updated.student_name, "Mary Johnson");
    }

    #[test]
    fn test_update_missing_record() {
        let mut store = MemoryStore::new();
        let result = store.update(ReceiptId::new_v4(), ReceiptPatch::default());
        assert!(matches!(result, Err(ReceiptError::ReceiptNotFound { .. })));
    }

    #[test]
    fn test_remove_reports_deletion() {
        let mut store = MemoryStore::new();
        let record = store.insert(draft("Chidi Okeke", 40_000).into_record()).unwrap();

        assert_eq!(store.remove(record.id).unwrap(), true);
        assert_eq!(store.remove(record.id).unwrap(), false);
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = draft("Ada Obi", 12_500).into_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: PaymentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        // session and class serialize as their display strings
        assert!(json.contains("\"2025/2026\""));
        assert!(json.contains("\"Primary 5\""));
    }
}

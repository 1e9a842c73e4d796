use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{ReceiptError, Result};

/// unique identifier for a stored receipt
pub type ReceiptId = Uuid;

/// default description when text extraction finds nothing usable
pub const DEFAULT_DESCRIPTION: &str = "School fees";

/// academic term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Term {
    #[default]
    First,
    Second,
    Third,
}

impl Term {
    pub const ALL: [Term; 3] = [Term::First, Term::Second, Term::Third];

    /// canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            Term::First => "First Term",
            Term::Second => "Second Term",
            Term::Third => "Third Term",
        }
    }

    /// map an ordinal word or abbreviation to a term
    pub fn from_ordinal(word: &str) -> Option<Term> {
        match word.to_lowercase().as_str() {
            "first" | "1st" => Some(Term::First),
            "second" | "2nd" => Some(Term::Second),
            "third" | "3rd" => Some(Term::Third),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Term {
    type Err = ReceiptError;

    fn from_str(s: &str) -> Result<Self> {
        let ordinal = s
            .trim()
            .to_lowercase()
            .strip_suffix("term")
            .map(|p| p.trim().to_string())
            .unwrap_or_else(|| s.trim().to_lowercase());
        Term::from_ordinal(&ordinal).ok_or_else(|| ReceiptError::UnrecognizedTerm {
            value: s.to_string(),
        })
    }
}

/// academic session, displayed as "YYYY/YYYY+1"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Session {
    start_year: i32,
}

impl Session {
    /// session starting in the given calendar year
    pub fn for_year(start_year: i32) -> Self {
        Session { start_year }
    }

    /// session a given date falls in, taking the date's calendar year as
    /// the start year
    pub fn for_date(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Session::for_year(date.year())
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + 1
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start_year, self.start_year + 1)
    }
}

impl FromStr for Session {
    type Err = ReceiptError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ReceiptError::InvalidSession {
            value: s.to_string(),
        };
        let (start, end) = s.trim().split_once('/').ok_or_else(invalid)?;
        let start: i32 = start.parse().map_err(|_| invalid())?;
        let end: i32 = end.parse().map_err(|_| invalid())?;
        if end != start + 1 {
            return Err(invalid());
        }
        Ok(Session { start_year: start })
    }
}

impl From<Session> for String {
    fn from(s: Session) -> String {
        s.to_string()
    }
}

impl TryFrom<String> for Session {
    type Error = ReceiptError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// school stage a class label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassStage {
    Nursery,
    Primary,
    Secondary,
    Jss,
    Sss,
}

impl ClassStage {
    /// canonical label prefix
    pub fn label(&self) -> &'static str {
        match self {
            ClassStage::Nursery => "Nursery",
            ClassStage::Primary => "Primary",
            ClassStage::Secondary => "Secondary",
            ClassStage::Jss => "JSS",
            ClassStage::Sss => "SSS",
        }
    }

    /// recognize a stage keyword, case-insensitive
    pub fn from_keyword(word: &str) -> Option<ClassStage> {
        match word.to_lowercase().as_str() {
            "nursery" => Some(ClassStage::Nursery),
            "primary" => Some(ClassStage::Primary),
            "secondary" => Some(ClassStage::Secondary),
            "jss" => Some(ClassStage::Jss),
            "sss" => Some(ClassStage::Sss),
            _ => None,
        }
    }
}

/// a student's class or grade label
///
/// `Known` carries a canonical stage + level, e.g. "Primary 5" or "JSS 1".
/// `Raw` keeps an extracted span verbatim when the keyword was not one of
/// the known stages (e.g. "class 5"). `Unresolved` renders as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "String", from = "String")]
pub enum StudentClass {
    Known { stage: ClassStage, level: u8 },
    Raw(String),
    #[default]
    Unresolved,
}

impl StudentClass {
    pub fn known(stage: ClassStage, level: u8) -> Self {
        StudentClass::Known { stage, level }
    }

    /// canonical display label, empty when unresolved
    pub fn label(&self) -> String {
        match self {
            StudentClass::Known { stage, level } => format!("{} {}", stage.label(), level),
            StudentClass::Raw(text) => text.clone(),
            StudentClass::Unresolved => String::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, StudentClass::Unresolved)
    }
}

impl fmt::Display for StudentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<StudentClass> for String {
    fn from(c: StudentClass) -> String {
        c.label()
    }
}

impl From<String> for StudentClass {
    fn from(s: String) -> StudentClass {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return StudentClass::Unresolved;
        }
        if let Some((word, level)) = trimmed.rsplit_once(' ') {
            if let (Some(stage), Ok(level)) = (ClassStage::from_keyword(word), level.parse()) {
                return StudentClass::Known { stage, level };
            }
        }
        StudentClass::Raw(trimmed.to_string())
    }
}

/// best-effort structured record produced by extraction or form binding,
/// every field populated with a default where resolution failed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecordDraft {
    pub student_name: String,
    pub student_class: StudentClass,
    pub term: Term,
    pub session: Session,
    pub amount_paid: Money,
    pub payment_date: NaiveDate,
    pub description: String,
}

impl PaymentRecordDraft {
    /// which of the three required fields are still missing
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.student_name.trim().is_empty() {
            missing.push("student name");
        }
        if !self.student_class.is_resolved() {
            missing.push("class");
        }
        if !self.amount_paid.is_positive() {
            missing.push("amount");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// promote to a stored record with a fresh id
    pub fn into_record(self) -> PaymentRecord {
        PaymentRecord {
            id: Uuid::new_v4(),
            student_name: self.student_name,
            student_class: self.student_class,
            term: self.term,
            session: self.session,
            amount_paid: self.amount_paid,
            payment_date: self.payment_date,
            description: self.description,
        }
    }
}

/// a single recorded fee payment for one student for one term/session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: ReceiptId,
    pub student_name: String,
    pub student_class: StudentClass,
    pub term: Term,
    pub session: Session,
    pub amount_paid: Money,
    pub payment_date: NaiveDate,
    pub description: String,
}

impl PaymentRecord {
    /// invariants enforced before a record is handed to the store
    pub fn validate(&self) -> Result<()> {
        if self.student_name.trim().is_empty() {
            return Err(ReceiptError::EmptyStudentName);
        }
        if self.amount_paid.is_negative() {
            return Err(ReceiptError::NegativeAmount {
                amount: self.amount_paid,
            });
        }
        Ok(())
    }
}

/// a named, priced billable item composable into a receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeLineItem {
    pub category: String,
    pub amount: Money,
    pub quantity: u32,
}

impl FeeLineItem {
    pub fn new(category: impl Into<String>, amount: Money, quantity: u32) -> Self {
        FeeLineItem {
            category: category.into(),
            amount,
            quantity,
        }
    }

    pub fn line_total(&self) -> Money {
        self.amount * rust_decimal::Decimal::from(self.quantity)
    }

    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(ReceiptError::ZeroQuantity {
                category: self.category.clone(),
            });
        }
        if self.amount.is_negative() {
            return Err(ReceiptError::NegativeAmount {
                amount: self.amount,
            });
        }
        Ok(())
    }
}

/// discount applied to a fee subtotal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Discount {
    #[default]
    None,
    /// percentage of the subtotal, 0-100
    Percentage(rust_decimal::Decimal),
    /// fixed amount off the subtotal
    Fixed(Money),
}

impl Discount {
    /// reject percentages outside 0-100 and negative fixed amounts; the
    /// discount-versus-subtotal bound is the caller's responsibility
    pub fn validate(&self) -> Result<()> {
        match self {
            Discount::None => Ok(()),
            Discount::Percentage(p) => {
                if p.is_sign_negative() || *p > rust_decimal::Decimal::from(100) {
                    Err(ReceiptError::InvalidDiscount {
                        message: format!("percentage must be 0-100, got {}", p),
                    })
                } else {
                    Ok(())
                }
            }
            Discount::Fixed(amount) => {
                if amount.is_negative() {
                    Err(ReceiptError::InvalidDiscount {
                        message: format!("fixed discount must not be negative, got {}", amount),
                    })
                } else {
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_labels_and_parsing() {
        assert_eq!(Term::First.label(), "First Term");
        assert_eq!("third term".parse::<Term>().unwrap(), Term::Third);
        assert_eq!("2nd Term".parse::<Term>().unwrap(), Term::Second);
        assert_eq!("1st".parse::<Term>().unwrap(), Term::First);
        assert!("fourth term".parse::<Term>().is_err());
    }

    #[test]
    fn test_session_format_and_parse() {
        let s = Session::for_year(2025);
        assert_eq!(s.to_string(), "2025/2026");
        assert_eq!("2025/2026".parse::<Session>().unwrap(), s);
        assert!("2025/2027".parse::<Session>().is_err());
        assert!("2025".parse::<Session>().is_err());
    }

    #[test]
    fn test_session_for_date() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        assert_eq!(Session::for_date(d).to_string(), "2026/2027");
    }

    #[test]
    fn test_class_labels() {
        assert_eq!(StudentClass::known(ClassStage::Primary, 5).label(), "Primary 5");
        assert_eq!(StudentClass::known(ClassStage::Jss, 1).label(), "JSS 1");
        assert_eq!(StudentClass::Raw("class 5".to_string()).label(), "class 5");
        assert_eq!(StudentClass::Unresolved.label(), "");
    }

    #[test]
    fn test_class_string_round_trip() {
        let c = StudentClass::from("Primary 5".to_string());
        assert_eq!(c, StudentClass::known(ClassStage::Primary, 5));
        assert_eq!(StudentClass::from(String::new()), StudentClass::Unresolved);
        assert_eq!(
            StudentClass::from("grade 5".to_string()),
            StudentClass::Raw("grade 5".to_string())
        );
    }

    #[test]
    fn test_draft_missing_required() {
        let draft = PaymentRecordDraft {
            student_name: String::new(),
            student_class: StudentClass::Unresolved,
            term: Term::First,
            session: Session::for_year(2025),
            amount_paid: Money::ZERO,
            payment_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            description: DEFAULT_DESCRIPTION.to_string(),
        };
        assert_eq!(draft.missing_required(), vec!["student name", "class", "amount"]);
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_line_item_total_and_validation() {
        let item = FeeLineItem::new("Uniform", Money::from_major(3_500), 2);
        assert_eq!(item.line_total(), Money::from_major(7_000));
        assert!(item.validate().is_ok());

        let bad = FeeLineItem::new("Books", Money::from_major(100), 0);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_discount_validation() {
        use rust_decimal_macros::dec;
        assert!(Discount::None.validate().is_ok());
        assert!(Discount::Percentage(dec!(10)).validate().is_ok());
        assert!(Discount::Percentage(dec!(101)).validate().is_err());
        assert!(Discount::Percentage(dec!(-1)).validate().is_err());
        assert!(Discount::Fixed(Money::from_major(500)).validate().is_ok());
    }
}

//! Per-field pattern passes over free-form receipt text.
//!
//! Each pass is independent: one failed field never blocks another, and
//! every pass returns `Option` so the orchestrator can apply defaults.

use std::sync::OnceLock;

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;

use crate::decimal::Money;
use crate::types::{ClassStage, StudentClass, Term};

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

re!(re_name, r"(?i)\bfor\s+([a-z][a-z .'-]*?)\s*,");

re!(re_class,
    r"(?i)\b(class|grade|primary|secondary|nursery|jss|sss)\s+(\d{1,2}|one|two|three|four|five|six)\b");

re!(re_amount,
    r"(?i)(?:₦|\bnaira\b|\bamount\b|\bpaid\b|\bpay\b)[\s:]*₦?\s*((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{1,2})?)");

re!(re_description_payment_for,
    r"(?i)\b(?:payment\s+for|paying\s+for)\s+(.+?)(?:\s+paid\b|\s+amount\b|\s*₦|\s*,|$)");
re!(re_description_for,
    r"(?i)\bfor\s+(.+?)(?:\s+paid\b|\s+amount\b|\s*₦|$)");

re!(re_date,
    r"(?i)\b(?:paid\s+on|date:?|on)\s+(today|yesterday|\d{4}-\d{2}-\d{2}|\d{1,2}/\d{1,2}/\d{2,4}|[a-z]+\s+\d{1,2}(?:,?\s+\d{4})?)");

re!(re_term, r"(?i)\b(first|second|third|1st|2nd|3rd)\s+term\b");

/// student name: text after a "for" trigger up to the next comma
pub fn match_name(text: &str) -> Option<String> {
    re_name()
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
}

/// class label: stage keyword followed by a level number or number word;
/// unknown keywords ("class", "grade") keep the matched span verbatim
pub fn match_class(text: &str) -> Option<StudentClass> {
    let caps = re_class().captures(text)?;
    let level = parse_level(&caps[2])?;
    match ClassStage::from_keyword(&caps[1]) {
        Some(stage) => Some(StudentClass::known(stage, level)),
        None => Some(StudentClass::Raw(caps[0].to_string())),
    }
}

fn parse_level(token: &str) -> Option<u8> {
    if let Ok(n) = token.parse() {
        return Some(n);
    }
    match token.to_lowercase().as_str() {
        "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        _ => None,
    }
}

/// amount: currency indicator followed by a number, thousands separators
/// stripped, at most two decimal digits
pub fn match_amount(text: &str) -> Option<Money> {
    let caps = re_amount().captures(text)?;
    Money::from_str_exact(&caps[1].replace(',', "")).ok()
}

/// description: text after a "payment for"/"paying for"/"for" trigger,
/// stopping before paid/amount/₦/end of string
///
/// The explicit payment triggers win over a bare "for". Among bare "for"
/// clauses the last one is taken, since earlier clauses normally carry the
/// student name. A capture containing the word "term" is discarded as a
/// false positive that grabbed term text instead of a description. The
/// heuristic is coarse (it would also drop text like "terminal report"),
/// and callers get the "School fees" default in that case.
pub fn match_description(text: &str) -> Option<String> {
    let captured = re_description_payment_for()
        .captures(text)
        .or_else(|| re_description_for().captures_iter(text).last())?;
    let cleaned = captured[1].trim().trim_end_matches(['.', ',']).trim();
    if cleaned.is_empty() || cleaned.to_lowercase().contains("term") {
        return None;
    }
    Some(cleaned.to_string())
}

/// payment date: text after "paid on"/"on"/"date", with "today" and
/// "yesterday" resolved against the supplied current date
pub fn match_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = re_date().captures(text)?;
    parse_date_text(&caps[1], today)
}

/// term: ordinal word or abbreviation immediately followed by "term"
pub fn match_term(text: &str) -> Option<Term> {
    re_term()
        .captures(text)
        .and_then(|caps| Term::from_ordinal(&caps[1]))
}

/// resolve captured date text against a reference date
pub fn parse_date_text(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let text = text.trim();
    match text.to_lowercase().as_str() {
        "today" => return Some(today),
        "yesterday" => return today.checked_sub_days(Days::new(1)),
        _ => {}
    }

    if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in ["%d/%m/%Y", "%d/%m/%y", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
            return Some(d);
        }
    }

    parse_month_name_date(text, today.year())
}

/// "June 10" or "June 10, 2025"; the reference year fills in when absent
fn parse_month_name_date(text: &str, default_year: i32) -> Option<NaiveDate> {
    let parts: Vec<_> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }
    let month = month_from_name(parts[0])?;
    let day: u32 = parts[1].parse().ok()?;
    let year: i32 = match parts.get(2) {
        Some(y) => y.parse().ok()?,
        None => default_year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_from_name(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "january", "february", "march", "april", "may", "june", "july", "august", "september",
        "october", "november", "december",
    ];
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == name || (name.len() == 3 && m.starts_with(&name)))
        .map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_match_name() {
        assert_eq!(
            match_name("Generate a receipt for Mary Johnson, Primary 5"),
            Some("Mary Johnson".to_string())
        );
        assert_eq!(match_name("no trigger phrase here"), None);
        // comma required: the name ends at the next comma
        assert_eq!(match_name("receipt for Mary Johnson"), None);
    }

    #[test]
    fn test_match_class_known_stages() {
        assert_eq!(
            match_class("she is in primary 5 now"),
            Some(StudentClass::known(ClassStage::Primary, 5))
        );
        assert_eq!(
            match_class("moved to JSS 1 this session"),
            Some(StudentClass::known(ClassStage::Jss, 1))
        );
        assert_eq!(
            match_class("nursery two pupil"),
            Some(StudentClass::known(ClassStage::Nursery, 2))
        );
    }

    #[test]
    fn test_match_class_unrecognized_keyword_kept_verbatim() {
        assert_eq!(
            match_class("student in class 5"),
            Some(StudentClass::Raw("class 5".to_string()))
        );
        assert_eq!(
            match_class("grade 3 student"),
            Some(StudentClass::Raw("grade 3".to_string()))
        );
    }

    #[test]
    fn test_match_amount() {
        assert_eq!(
            match_amount("paid ₦25,000 for fees"),
            Some(Money::from_major(25_000))
        );
        assert_eq!(
            match_amount("amount 25000.50"),
            Some(Money::from_decimal(dec!(25000.50)))
        );
        assert_eq!(match_amount("no money mentioned"), None);
    }

    #[test]
    fn test_match_amount_indicator_must_precede_number() {
        // "paid on June 10" has no number after the indicator
        assert_eq!(match_amount("paid on June 10"), None);
    }

    #[test]
    fn test_match_description() {
        assert_eq!(
            match_description("receipt for Ada, paying for uniform and books, amount 5000"),
            Some("uniform and books".to_string())
        );
        // last bare "for" clause wins over the name clause
        assert_eq!(
            match_description("receipt for Ada, ₦2000 for exam fees"),
            Some("exam fees".to_string())
        );
    }

    #[test]
    fn test_match_description_term_discarded() {
        assert_eq!(
            match_description("receipt for Ada, ₦2000 for first term school fees."),
            None
        );
    }

    #[test]
    fn test_match_date_relative() {
        assert_eq!(match_date("paid on today", june_15()), Some(june_15()));
        assert_eq!(
            match_date("paid on yesterday", june_15()),
            NaiveDate::from_ymd_opt(2025, 6, 14)
        );
    }

    #[test]
    fn test_match_date_month_name() {
        assert_eq!(
            match_date("paid on June 10 for fees", june_15()),
            NaiveDate::from_ymd_opt(2025, 6, 10)
        );
        assert_eq!(
            match_date("paid on March 3, 2024", june_15()),
            NaiveDate::from_ymd_opt(2024, 3, 3)
        );
    }

    #[test]
    fn test_match_date_numeric_formats() {
        assert_eq!(
            match_date("on 2025-01-20", june_15()),
            NaiveDate::from_ymd_opt(2025, 1, 20)
        );
        assert_eq!(
            match_date("on 20/01/2025", june_15()),
            NaiveDate::from_ymd_opt(2025, 1, 20)
        );
    }

    #[test]
    fn test_match_date_garbage_unresolved() {
        assert_eq!(match_date("paid on friday maybe", june_15()), None);
        assert_eq!(match_date("nothing here", june_15()), None);
    }

    #[test]
    fn test_match_term() {
        assert_eq!(match_term("for first term fees"), Some(Term::First));
        assert_eq!(match_term("2nd term payment"), Some(Term::Second));
        assert_eq!(match_term("third TERM"), Some(Term::Third));
        assert_eq!(match_term("no term trigger"), None);
        // ordinal must be immediately followed by "term"
        assert_eq!(match_term("first payment of the session"), None);
    }

    #[test]
    fn test_month_from_name() {
        assert_eq!(month_from_name("June"), Some(6));
        assert_eq!(month_from_name("jan"), Some(1));
        assert_eq!(month_from_name("notamonth"), None);
    }
}

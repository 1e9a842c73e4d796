/// quick start - extract a receipt from text and print it
use chrono::NaiveDate;
use fee_receipt_rs::{amount_in_words, extract_payment_record};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    let text =
        "Generate a receipt for Mary Johnson, Primary 5, ₦25,000 paid on June 10 for first term school fees.";
    let result = extract_payment_record(text, today)?;

    let draft = &result.draft;
    println!("Student:  {}", draft.student_name);
    println!("Class:    {}", draft.student_class);
    println!("Term:     {} {}", draft.term, draft.session);
    println!("Amount:   ₦{}", draft.amount_paid);
    println!("In words: {}", amount_in_words(draft.amount_paid));
    println!("Date:     {}", draft.payment_date);
    println!("For:      {}", draft.description);

    if !result.is_complete {
        println!("Missing fields: {}", result.missing_fields().join(", "));
    }

    Ok(())
}

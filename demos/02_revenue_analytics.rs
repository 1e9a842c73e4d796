/// revenue analytics - store some receipts, then bucket and summarize them
use chrono::NaiveDate;
use fee_receipt_rs::{
    class_key, filter_since, group_and_sum, month_key, revenue_summary, sort_by_total_desc,
    ClassStage, MemoryStore, Money, PaymentRecordDraft, ReceiptStore, Session, StudentClass, Term,
};

fn draft(name: &str, class: StudentClass, amount: i64, date: NaiveDate) -> PaymentRecordDraft {
    PaymentRecordDraft {
        student_name: name.to_string(),
        student_class: class,
        term: Term::First,
        session: Session::for_year(2025),
        amount_paid: Money::from_major(amount),
        payment_date: date,
        description: "School fees".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MemoryStore::new();
    let june = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let sept = NaiveDate::from_ymd_opt(2025, 9, 12).unwrap();

    store.insert(draft("Mary Johnson", StudentClass::known(ClassStage::Primary, 5), 25_000, june).into_record())?;
    store.insert(draft("Chidi Okeke", StudentClass::known(ClassStage::Jss, 1), 40_000, june).into_record())?;
    store.insert(draft("Ada Obi", StudentClass::known(ClassStage::Jss, 1), 40_000, sept).into_record())?;
    store.insert(draft("mary johnson", StudentClass::known(ClassStage::Primary, 5), 5_000, sept).into_record())?;

    let records = store.fetch_all()?;

    let summary = revenue_summary(&records);
    println!("revenue:  ₦{}", summary.total_revenue);
    println!("receipts: {}", summary.receipt_count);
    println!("average:  ₦{}", summary.average_payment);
    println!("students: {}", summary.active_students);

    println!("\nby month:");
    for bucket in group_and_sum(&records, month_key) {
        println!("  {:<16} ₦{:>10}  ({} receipts)", bucket.key, bucket.total_amount, bucket.count);
    }

    println!("\ntop classes:");
    let mut by_class = group_and_sum(&records, class_key);
    sort_by_total_desc(&mut by_class);
    for bucket in by_class {
        println!("  {:<16} ₦{:>10}", bucket.key, bucket.total_amount);
    }

    let recent = filter_since(&records, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
    println!("\nsince Sep 1: {} receipts", recent.len());

    Ok(())
}

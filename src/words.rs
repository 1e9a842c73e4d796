//! English spell-out of naira amounts for printed receipts.

use crate::decimal::Money;

const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 4] = ["", "thousand", "million", "billion"];

/// words for 1-99: teens verbatim, otherwise tens hyphenated with ones
fn two_digits_in_words(n: u8) -> String {
    debug_assert!(n >= 1 && n <= 99);
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{}-{}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

/// words for a three-digit group, empty for zero
pub fn chunk_in_words(n: u16) -> String {
    debug_assert!(n <= 999);
    let mut parts = Vec::new();
    let hundreds = n / 100;
    let rest = (n % 100) as u8;
    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    if rest > 0 {
        parts.push(two_digits_in_words(rest));
    }
    parts.join(" ")
}

fn whole_in_words(mut n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }
    // chunks of three digits, least significant first
    let mut chunks = Vec::new();
    while n > 0 {
        chunks.push((n % 1000) as u16);
        n /= 1000;
    }
    let mut parts = Vec::new();
    for (idx, chunk) in chunks.iter().enumerate().rev() {
        if *chunk == 0 {
            continue;
        }
        let scale = SCALES.get(idx).copied().unwrap_or("");
        let words = chunk_in_words(*chunk);
        if scale.is_empty() {
            parts.push(words);
        } else {
            parts.push(format!("{} {}", words, scale));
        }
    }
    parts.join(" ")
}

/// Render a naira amount as the sentence printed on receipts, e.g.
/// "Twenty-five thousand naira only" or
/// "One thousand two hundred fifty naira and fifty kobo only".
///
/// The kobo clause is omitted when the fractional part is zero; a zero
/// amount renders as "Zero naira only". Amounts are read by absolute
/// value and supported up to the billions.
pub fn amount_in_words(amount: Money) -> String {
    let (whole, kobo) = amount.split_major_minor();
    let mut sentence = format!("{} naira", whole_in_words(whole));
    if kobo > 0 {
        sentence.push_str(&format!(" and {} kobo", two_digits_in_words(kobo)));
    }
    sentence.push_str(" only");
    capitalize_first(&sentence)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

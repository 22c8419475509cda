//! Display formatting for the back-office tables

use chrono::{NaiveDate, NaiveDateTime};

const NBSP: char = '\u{00A0}';

/// Format a Russian phone number as `+7(XXX)-XXX-XX-XX`.
///
/// Only 11-digit numbers are recognised; anything else is returned as given.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 11 {
        return phone.to_string();
    }

    format!(
        "+7({})-{}-{}-{}",
        &digits[1..4],
        &digits[4..7],
        &digits[7..9],
        &digits[9..11]
    )
}

/// Format an amount in roubles the way ru-RU currency display does
pub fn format_price(price: f64) -> String {
    let price = if price.is_finite() { price } else { 0.0 };

    let fixed = format!("{:.2}", price.abs());
    let (units, kopecks) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = units.bytes().chain(kopecks.bytes()).all(|b| b == b'0');
    let sign = if price < 0.0 && !is_zero { "-" } else { "" };
    let grouped = group_thousands(units);

    if price.fract() == 0.0 {
        format!("{sign}{grouped}{NBSP}₽")
    } else {
        format!("{sign}{grouped},{kopecks}{NBSP}₽")
    }
}

/// Format a table cell holding a price; text without a leading number is left alone
pub fn format_price_text(text: &str) -> String {
    match leading_number(text) {
        Some(price) => format_price(price),
        None => text.to_string(),
    }
}

/// Longest numeric prefix of `text`, ignoring leading whitespace
fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let candidate_len = trimmed
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(trimmed.len());

    (1..=candidate_len)
        .rev()
        .filter_map(|len| trimmed[..len].parse::<f64>().ok())
        .find(|value| value.is_finite())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(NBSP);
        }
        out.push(ch);
    }
    out
}

/// `dd.mm.yyyy`
pub fn format_date_ru(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `dd.mm.yyyy, HH:MM`
pub fn format_date_time_ru(at: NaiveDateTime) -> String {
    at.format("%d.%m.%Y, %H:%M").to_string()
}

/// `YYYY-MM-DD`, or empty when no date is picked
pub fn format_iso_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

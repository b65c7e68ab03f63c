//! Console input helpers.

use chrono::{Local, NaiveDate};

/// Reads one raw line from stdin. Returns an empty string on read failure.
pub fn get_user_input() -> String {
    let mut user_input = String::new();
    let _ = std::io::stdin().read_line(&mut user_input);
    user_input
}

/// Prints a label and reads one trimmed line.
pub fn prompt_line(label: &str) -> String {
    println!("{label}");
    get_user_input().trim().to_string()
}

/// Reads a date. Anything that does not parse as YYYY-MM-DD, the empty
/// string included, falls back to today.
pub fn prompt_date(label: &str) -> NaiveDate {
    let raw = prompt_line(&format!("{label} (YYYY-MM-DD, empty for today):"));
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").unwrap_or_else(|_| Local::now().date_naive())
}

//! Small formatting and parsing helpers shared by the pages.

use chrono::DateTime;

/// Fits text into a fixed-width table column, truncating with an ellipsis.
pub fn get_column_string(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() == width {
        return text.to_string();
    }
    if chars.len() < width {
        return format!("{text}{}", " ".repeat(width - chars.len()));
    }
    if width <= 3 {
        return ".".repeat(width);
    }
    let mut truncated: String = chars[..width - 3].iter().collect();
    truncated.push_str("...");
    truncated
}

/// Parses commands of the form `d 2` or `d2` into a command letter and a
/// zero-based row index. One-based input, so `d 0` is rejected.
pub fn parse_indexed_command(input: &str) -> Option<(char, usize)> {
    let mut chars = input.trim().chars();
    let command = chars.next()?;
    let index = chars.as_str().trim().parse::<usize>().ok()?;
    index.checked_sub(1).map(|zero_based| (command, zero_based))
}

/// Renders an epoch-ms timestamp for display.
pub fn format_epoch_ms(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|moment| moment.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_column_string_pads_and_truncates() {
        assert_eq!(get_column_string("", 0), "");
        assert_eq!(get_column_string("abc", 3), "abc");
        assert_eq!(get_column_string("ab", 4), "ab  ");
        assert_eq!(get_column_string("abcdef", 2), "..");
        assert_eq!(get_column_string("abcdefgh", 6), "abc...");
    }

    #[test]
    fn parse_indexed_command_accepts_both_spacings() {
        assert_eq!(parse_indexed_command("d 2"), Some(('d', 1)));
        assert_eq!(parse_indexed_command("d2"), Some(('d', 1)));
        assert_eq!(parse_indexed_command(" u  10 \n"), Some(('u', 9)));
        assert_eq!(parse_indexed_command("d 0"), None);
        assert_eq!(parse_indexed_command("d"), None);
        assert_eq!(parse_indexed_command("d x"), None);
        assert_eq!(parse_indexed_command(""), None);
    }

    #[test]
    fn format_epoch_ms_renders_utc() {
        assert_eq!(format_epoch_ms(0), "1970-01-01 00:00");
    }
}

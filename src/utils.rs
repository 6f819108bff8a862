//! Common utility functions shared across the codebase.

use unicode_width::UnicodeWidthStr;

/// Counts whitespace-delimited words.
///
/// Any run of Unicode whitespace separates two words; an empty or
/// whitespace-only string has zero words.
///
/// # Examples
///
/// ```
/// use locount::utils::count_words;
///
/// assert_eq!(count_words("Hello world"), 2);
/// assert_eq!(count_words("  아이템을   획득했습니다 "), 2);
/// assert_eq!(count_words(""), 0);
/// ```
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Formats an integer with `,` thousands separators.
///
/// ```
/// use locount::utils::format_thousands;
///
/// assert_eq!(format_thousands(0), "0");
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// ```
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a USD amount with cents and thousands separators, e.g. `1,234.50`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs() as usize;
    format!("{}{}.{:02}", sign, format_thousands(cents / 100), cents % 100)
}

/// Rounds a USD amount to cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Pads `text` on the right to `width` terminal columns.
///
/// Uses display width, so wide (CJK) characters occupy two columns.
pub fn pad_right(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

/// Pads `text` on the left to `width` terminal columns.
pub fn pad_left(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", " ".repeat(width.saturating_sub(used)), text)
}

/// Truncates `text` to at most `width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

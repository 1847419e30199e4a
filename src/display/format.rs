//! Balance and text formatting helpers for terminal output

use crate::models::AccountPath;

/// Format a balance with a currency symbol and thousands separators
///
/// Two decimals, sign in front of the symbol: `-$1,234.50`.
pub fn format_balance(amount: f64, currency_symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let formatted = format!("{}.{}", group_thousands(whole), cents);

    if amount < 0.0 {
        format!("-{}{}", currency_symbol, formatted)
    } else {
        format!("{}{}", currency_symbol, formatted)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Account name without its category prefix
///
/// `Assets:Bank:Checking` becomes `Bank:Checking`; a one-segment name is
/// returned unchanged. Names that don't parse are shown as given.
pub fn short_account_name(full_name: &str) -> String {
    AccountPath::parse(full_name)
        .map(|p| p.short_name())
        .unwrap_or_else(|_| full_name.to_string())
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(0.0, "$"), "$0.00");
        assert_eq!(format_balance(40.0, "$"), "$40.00");
        assert_eq!(format_balance(1234.5, "$"), "$1,234.50");
        assert_eq!(format_balance(-1234.5, "$"), "-$1,234.50");
        assert_eq!(format_balance(1234567.891, "€"), "€1,234,567.89");
        assert_eq!(format_balance(999.999, "$"), "$1,000.00");
        assert_eq!(format_balance(-12.0, "Rp "), "-Rp 12.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_short_account_name() {
        assert_eq!(short_account_name("Assets:Bank:Checking"), "Bank:Checking");
        assert_eq!(short_account_name("Expenses:Food"), "Food");
        assert_eq!(short_account_name("Income"), "Income");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }
}

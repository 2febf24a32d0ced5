/// Currencies the search form offers and the validator accepts
pub const SUPPORTED_CURRENCIES: [&str; 8] = ["USD", "EUR", "JPY", "GBP", "AUD", "CAD", "CHF", "ILS"];

/// Maximum number of secondary currencies plotted against one base
pub const MAX_SECONDARY: usize = 3;

/// Check if a ticker is in the supported set (exact, upper-case match)
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_CURRENCIES.contains(&code)
}

/// Human-readable name for the form's select options
pub fn display_name(code: &str) -> &'static str {
    match code {
        "USD" => "US Dollar",
        "EUR" => "Euro",
        "JPY" => "Japanese Yen",
        "GBP" => "British Pound",
        "AUD" => "Australian Dollar",
        "CAD" => "Canadian Dollar",
        "CHF" => "Swiss Franc",
        "ILS" => "Israeli New Shekel",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_set() {
        assert!(is_supported("USD"));
        assert!(is_supported("ILS"));
        assert!(!is_supported("BTC"));
        assert!(!is_supported("usd"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_every_supported_code_has_a_name() {
        for code in SUPPORTED_CURRENCIES {
            assert_ne!(display_name(code), "Unknown", "{} has no display name", code);
        }
    }
}

//! Search request models

/// Form field carrying the base currency
pub const BASE_FIELD: &str = "base-currency";
/// Form field carrying a secondary currency (may repeat)
pub const SECONDARY_FIELD: &str = "secondary-currency";
/// Form field carrying the time-frame label or day count
pub const TIME_FRAME_FIELD: &str = "time-frame";

/// Raw search parameters as submitted by the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub base: String,
    pub secondary: Vec<String>,
    pub time_frame: String,
}

impl SearchParams {
    /// Collect parameters from decoded form or query pairs.
    ///
    /// Tickers are trimmed and upper-cased. Repeated secondary tickers collapse
    /// to their first occurrence, and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = SearchParams::default();

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            match key.as_ref() {
                BASE_FIELD => params.base = value.to_uppercase(),
                SECONDARY_FIELD => {
                    let ticker = value.to_uppercase();
                    if !ticker.is_empty() && !params.secondary.contains(&ticker) {
                        params.secondary.push(ticker);
                    }
                }
                TIME_FRAME_FIELD => params.time_frame = value.to_string(),
                _ => {}
            }
        }

        params
    }

    /// True when no field carries anything
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.secondary.is_empty() && self.time_frame.is_empty()
    }
}

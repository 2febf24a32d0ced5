use chrono::NaiveDate;
use thiserror::Error;
use crate::currencies::{is_supported, MAX_SECONDARY};
use crate::models::SearchParams;

/// Reasons a search cannot be charted
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Please choose a base currency, at least one secondary currency and a time frame.")]
    Empty,
    #[error("Currency '{0}' is not supported.")]
    UnsupportedCurrency(String),
    #[error("The base currency {0} cannot also be a secondary currency.")]
    BaseInSecondary(String),
    #[error("Choose between 1 and 3 secondary currencies ({0} selected).")]
    SecondaryCount(usize),
    #[error("Time frame '{0}' is not valid.")]
    InvalidTimeFrame(String),
}

/// Check the parameters, reporting the first rule that fails
pub fn validate(params: &SearchParams) -> Result<(), ValidationError> {
    if params.is_empty() {
        return Err(ValidationError::Empty);
    }

    let count = params.secondary.len();
    if count == 0 || count > MAX_SECONDARY {
        return Err(ValidationError::SecondaryCount(count));
    }

    if params.secondary.contains(&params.base) {
        return Err(ValidationError::BaseInSecondary(params.base.clone()));
    }

    if let Some(code) = std::iter::once(&params.base)
        .chain(params.secondary.iter())
        .find(|c| !is_supported(c))
    {
        return Err(ValidationError::UnsupportedCurrency(code.clone()));
    }

    Ok(())
}

/// Boolean form of [`validate`]
pub fn is_valid(params: &SearchParams) -> bool {
    validate(params).is_ok()
}

/// True if every ticker, base included, is supported
pub fn are_currencies_valid(currencies: &[String], base: &str) -> bool {
    is_supported(base) && currencies.iter().all(|c| is_supported(c))
}

/// Combined check once the time frame has been resolved:
/// base not among the secondaries, a start date exists, and every ticker is supported
pub fn check_input(base: &str, currencies: &[String], start: Option<NaiveDate>) -> bool {
    !currencies.iter().any(|c| c == base) && start.is_some() && are_currencies_valid(currencies, base)
}

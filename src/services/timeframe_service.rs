use chrono::{Days, NaiveDate, Utc};

/// A lookback window chosen on the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    LastWeek,
    LastMonth,
    LastThreeMonths,
    LastSixMonths,
    /// Raw day count, always at least 1
    Days(u32),
}

impl TimeFrame {
    /// Relative windows offered by the form, in display order
    pub const PRESETS: [TimeFrame; 4] = [
        TimeFrame::LastWeek,
        TimeFrame::LastMonth,
        TimeFrame::LastThreeMonths,
        TimeFrame::LastSixMonths,
    ];

    /// Parse a form label or a raw day count
    /// Supported labels: "Last week", "Last month", "Last 3 month", "Last 6 month"
    pub fn parse(input: &str) -> Option<TimeFrame> {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "last week" => Some(TimeFrame::LastWeek),
            "last month" => Some(TimeFrame::LastMonth),
            "last 3 month" | "last 3 months" => Some(TimeFrame::LastThreeMonths),
            "last 6 month" | "last 6 months" => Some(TimeFrame::LastSixMonths),
            _ => match input.parse::<u32>() {
                Ok(days) if days > 0 => Some(TimeFrame::Days(days)),
                _ => None,
            },
        }
    }

    /// Number of days to look back
    pub fn days(&self) -> u64 {
        match self {
            TimeFrame::LastWeek => 7,
            TimeFrame::LastMonth => 31,
            TimeFrame::LastThreeMonths => 91,
            TimeFrame::LastSixMonths => 182,
            TimeFrame::Days(days) => u64::from(*days),
        }
    }

    /// Label as the form submits it
    pub fn label(&self) -> String {
        match self {
            TimeFrame::LastWeek => "Last week".to_string(),
            TimeFrame::LastMonth => "Last month".to_string(),
            TimeFrame::LastThreeMonths => "Last 3 month".to_string(),
            TimeFrame::LastSixMonths => "Last 6 month".to_string(),
            TimeFrame::Days(days) => days.to_string(),
        }
    }
}

/// Resolve a time-frame to the first day of the window, counting back from `today`.
/// Returns `None` when the input cannot be parsed or the date would underflow.
pub fn normalize_date(time_frame: &str, today: NaiveDate) -> Option<NaiveDate> {
    let frame = TimeFrame::parse(time_frame)?;
    today.checked_sub_days(Days::new(frame.days()))
}

/// Current UTC date, the end of every window
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Date in the API's `YYYY-MM-DD` format
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

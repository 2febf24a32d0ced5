//! Chart generation models

use chrono::NaiveDate;

/// One currency's history as parallel date / value vectors, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencySeries {
    pub currency: String,
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl CurrencySeries {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            dates: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn push(&mut self, date: NaiveDate, value: f64) {
        self.dates.push(date);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate (date, value) points in date order
    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

/// Reshaped rate history: every requested currency, in request order
#[derive(Debug, Clone, PartialEq)]
pub struct RateSeries {
    pub base: String,
    pub series: Vec<CurrencySeries>,
}

impl RateSeries {
    pub fn total_points(&self) -> usize {
        self.series.iter().map(CurrencySeries::len).sum()
    }
}

/// Summary row shown under the chart
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub currency: String,
    pub first: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
    pub change_pct: f64,
}

/// Everything the search page needs to show a result
#[derive(Debug, Clone)]
pub struct ChartView {
    pub base: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub svg: String,
    pub summary: Vec<SeriesSummary>,
}

//! Data models shared by routes and services

pub mod chart;
pub mod search;

pub use chart::{ChartView, CurrencySeries, RateSeries, SeriesSummary};
pub use search::SearchParams;

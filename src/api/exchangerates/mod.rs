pub mod client;
pub mod models;

#[cfg(test)]
pub mod stub;

pub use client::ExchangeRatesClient;
pub use models::ApiError;

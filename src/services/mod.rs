pub mod chart_service;
pub mod rates_service;
pub mod search_service;
pub mod timeframe_service;
pub mod validation_service;

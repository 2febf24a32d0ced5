pub mod exchangerates;

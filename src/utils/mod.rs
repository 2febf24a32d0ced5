pub mod table;
pub mod page;
pub mod errors;

pub use table::Table;
pub use page::{escape_html, Page};
pub use errors::{extract_api_message, ChartError};

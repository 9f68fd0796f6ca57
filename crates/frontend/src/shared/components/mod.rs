pub mod date_input;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod status;

pub use date_input::DateRangeInputs;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
pub use status::{ErrorBanner, LoadingIndicator};

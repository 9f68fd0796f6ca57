pub mod registry;
pub mod router;
pub mod routes;
pub mod table;

pub use router::{use_router, AppRouter, Link};
pub use table::{resolve, Page, RouteEntry};

pub mod view;

pub use view::DataCollectionPage;

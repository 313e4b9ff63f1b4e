//! Client-side data layer: typed wrappers over the REST surface plus the
//! derived browse state the buyer and farmer views consume.

pub mod api;
pub mod catalog;

pub use api::{ApiClient, ClientError};
pub use catalog::ProductCatalog;

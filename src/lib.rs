//! Phone catalog HTTP service library.

pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use catalog::{CatalogSource, CellPhone, SeedCatalog};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

//! Phone catalog subsystem.
//!
//! # Data Flow
//! ```text
//! CatalogSource (seed data today, a real store later)
//!     → source.rs list() (owned copy per call)
//!     → filter.rs (by id, make, os)
//!     → handlers encode the result
//! ```
//!
//! # Design Decisions
//! - The source is a trait object so storage can change without touching filters or handlers
//! - Filters are pure functions over `list()`; ordering is catalog order
//! - Record ids are not checked for uniqueness

pub mod filter;
pub mod model;
pub mod source;

pub use filter::{filter_by_make, filter_by_os, find_by_id};
pub use model::{CellPhone, PhoneId};
pub use source::{seed_phones, CatalogSource, SeedCatalog};

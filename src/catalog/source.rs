//! Catalog sources.
//!
//! # Responsibilities
//! - Provide the current record set in catalog order
//! - Hand out owned copies so callers cannot mutate the canonical set
//!
//! A persistent store would implement [`CatalogSource`] and carry its own
//! read/write locking; nothing outside this module depends on the seed data.

use std::sync::Arc;

use crate::catalog::model::{CellPhone, PhoneId};

/// Read-only provider of catalog records.
pub trait CatalogSource: Send + Sync + std::fmt::Debug {
    /// Returns every record in catalog order.
    fn list(&self) -> Vec<CellPhone>;

    /// Returns the first record with the given id.
    fn get(&self, id: PhoneId) -> Option<CellPhone> {
        self.list().into_iter().find(|phone| phone.id == id)
    }
}

/// In-memory catalog fixed at construction.
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    phones: Arc<[CellPhone]>,
}

impl SeedCatalog {
    /// Create a catalog holding the default seed records.
    pub fn new() -> Self {
        Self::from_phones(seed_phones())
    }

    /// Create a catalog over an arbitrary record set.
    pub fn from_phones(phones: Vec<CellPhone>) -> Self {
        Self {
            phones: phones.into(),
        }
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for SeedCatalog {
    fn list(&self) -> Vec<CellPhone> {
        self.phones.to_vec()
    }
}

/// The records served when no other source is configured.
pub fn seed_phones() -> Vec<CellPhone> {
    vec![
        CellPhone {
            id: 0,
            make: "Motorola".to_string(),
            model: "g power 2021".to_string(),
            os: "android".to_string(),
            release_date: "01/11/2021".to_string(),
            image: "A Motorola phone image".to_string(),
        },
        CellPhone {
            id: 1,
            make: "Apple".to_string(),
            model: "iPhone 13".to_string(),
            os: "ios".to_string(),
            release_date: "11/11/2021".to_string(),
            image: "An iPhone image".to_string(),
        },
    ]
}

//! Catalog filters.
//!
//! All filters iterate the source's current list and keep catalog order.
//! "No match" is an empty result, never an error.

use crate::catalog::model::{CellPhone, PhoneId};
use crate::catalog::source::CatalogSource;

/// Find the first record with the given id.
///
/// Negative ids cannot name a record and yield `None`.
pub fn find_by_id(source: &dyn CatalogSource, id: i64) -> Option<CellPhone> {
    let id = PhoneId::try_from(id).ok()?;
    source.get(id)
}

/// Records whose `make` equals `make` exactly.
pub fn filter_by_make(source: &dyn CatalogSource, make: &str) -> Vec<CellPhone> {
    source
        .list()
        .into_iter()
        .filter(|phone| phone.make == make)
        .collect()
}

/// Records whose `os` equals `os` exactly.
pub fn filter_by_os(source: &dyn CatalogSource, os: &str) -> Vec<CellPhone> {
    source
        .list()
        .into_iter()
        .filter(|phone| phone.os == os)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::source::{seed_phones, SeedCatalog};

    #[test]
    fn test_find_by_id() {
        let catalog = SeedCatalog::new();
        for phone in seed_phones() {
            assert_eq!(find_by_id(&catalog, phone.id as i64), Some(phone));
        }
        assert!(find_by_id(&catalog, -1).is_none());
        assert!(find_by_id(&catalog, i64::MAX).is_none());
    }

    #[test]
    fn test_find_by_id_first_match_wins() {
        let mut phones = seed_phones();
        let mut duplicate = phones[1].clone();
        duplicate.id = 0;
        phones.push(duplicate);
        let catalog = SeedCatalog::from_phones(phones);

        let found = find_by_id(&catalog, 0).unwrap();
        assert_eq!(found.make, "Motorola");
    }

    #[test]
    fn test_filter_by_make() {
        let catalog = SeedCatalog::new();
        for make in ["Motorola", "Apple"] {
            let phones = filter_by_make(&catalog, make);
            assert_eq!(phones.len(), 1);
            assert!(phones.iter().all(|p| p.make == make));
        }
        assert!(filter_by_make(&catalog, "Nokia").is_empty());
        assert!(filter_by_make(&catalog, "apple").is_empty());
    }

    #[test]
    fn test_filter_by_os_is_case_sensitive() {
        let catalog = SeedCatalog::new();
        for os in ["android", "ios"] {
            let phones = filter_by_os(&catalog, os);
            assert!(!phones.is_empty());
            assert!(phones.iter().all(|p| p.os == os));
        }
        assert!(filter_by_os(&catalog, "Android").is_empty());
        assert_ne!(filter_by_os(&catalog, "Android"), filter_by_os(&catalog, "android"));
    }

    #[test]
    fn test_filters_keep_catalog_order() {
        let mut phones = seed_phones();
        let mut second_moto = phones[0].clone();
        second_moto.id = 2;
        second_moto.model = "edge".to_string();
        phones.push(second_moto);
        let catalog = SeedCatalog::from_phones(phones);

        let ids: Vec<_> = filter_by_make(&catalog, "Motorola").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }
}

//! In-memory property store for fixtures
//!
//! A mock of property creation that never touches the database. Records
//! live in a map seeded from a JSON fixture keyed by id, and new records get
//! `id = len + 1`. Use [`Database::add_property`](crate::Database::add_property)
//! for real writes; this type exists for tests and offline demos.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{DbError, Result};
use crate::models::{NewProperty, Property};

/// JSON-seeded property map
#[derive(Debug, Default)]
pub struct PropertyStore {
    properties: RwLock<BTreeMap<i32, Property>>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from JSON shaped like `{"1": {...property...}, "2": {...}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, "properties JSON")
    }

    /// Seed from a JSON fixture file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| DbError::fixture(path.display().to_string(), e))?;
        let store = Self::parse(&json, &path.display().to_string())?;
        debug!(path = %path.display(), count = store.len(), "seeded property store");
        Ok(store)
    }

    fn parse(json: &str, context: &str) -> Result<Self> {
        let properties: BTreeMap<i32, Property> =
            serde_json::from_str(json).map_err(|e| DbError::fixture(context, e))?;
        Ok(Self {
            properties: RwLock::new(properties),
        })
    }

    /// Store `property` under the next synthetic id and return it.
    ///
    /// The id is the current record count plus one. A fixture with gaps in
    /// its ids can therefore have an existing record replaced.
    pub fn add_property(&self, property: NewProperty) -> Property {
        let mut properties = self
            .properties
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let id = properties.len() as i32 + 1;
        let stored = property.into_property(id);
        properties.insert(id, stored.clone());
        stored
    }

    pub fn get(&self, id: i32) -> Option<Property> {
        self.properties
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.properties
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const FIXTURE: &str = include_str!("../fixtures/properties.json");

    fn cabin(owner_id: i32) -> NewProperty {
        NewProperty {
            owner_id,
            title: "Lakeside cabin".to_string(),
            description: Some("Quiet spot".to_string()),
            thumbnail_photo_url: "thumb.jpg".to_string(),
            cover_photo_url: "cover.jpg".to_string(),
            cost_per_night: 12500,
            parking_spaces: 2,
            number_of_bathrooms: 1,
            number_of_bedrooms: 2,
            country: "Canada".to_string(),
            street: "12 Shore Rd".to_string(),
            city: "Kelowna".to_string(),
            province: "British Columbia".to_string(),
            post_code: "V1Y".to_string(),
        }
    }

    #[test]
    fn empty_store_starts_at_one() {
        let store = PropertyStore::new();
        assert!(store.is_empty());

        let stored = store.add_property(cabin(1));
        assert_eq!(stored.id, 1);
        assert!(stored.active);
        assert_eq!(store.get(1), Some(stored));
    }

    #[test]
    fn seeded_store_continues_numbering() {
        let store = PropertyStore::from_json_str(FIXTURE).unwrap();
        let seeded = store.len();
        assert_eq!(seeded, 2);
        assert_eq!(store.get(1).unwrap().city, "Sotboske");

        let stored = store.add_property(cabin(4));
        assert_eq!(stored.id, seeded as i32 + 1);
        assert_eq!(store.len(), seeded + 1);
    }

    #[test]
    fn malformed_fixture_is_fixture_error() {
        let err = PropertyStore::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, DbError::Fixture { .. }));
    }

    #[test]
    fn load_missing_file_is_fixture_error() {
        let err = PropertyStore::load("/nonexistent/properties.json").unwrap_err();
        assert!(matches!(err, DbError::Fixture { .. }));
    }

    #[test]
    fn concurrent_writers_get_distinct_ids() {
        let store = Arc::new(PropertyStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.add_property(cabin(i)).id)
            })
            .collect();

        let mut ids: Vec<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }
}

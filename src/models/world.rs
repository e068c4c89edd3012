use crate::error::{AppResult, DomainError};
use crate::models::location::Location;
use crate::models::types::LocationId;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Table of every loaded location, keyed by id.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct World {
    locations: BTreeMap<LocationId, Location>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a location; ids must be unique across the whole world.
    pub fn insert(&mut self, location: Location) -> AppResult<()> {
        match self.locations.entry(location.id().clone()) {
            Entry::Occupied(e) => Err(DomainError::Validation {
                field: "location",
                message: format!("duplicate location id '{}'", e.key()),
            }),
            Entry::Vacant(e) => {
                e.insert(location);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Locations in id order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    pub fn action_count(&self) -> usize {
        self.locations.values().map(|l| l.actions().len()).sum()
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Mapping;

    fn loc(id: &str, name: &str) -> Location {
        let m: Mapping = serde_yaml::from_str(&format!(
            "name: {name}\nactions:\n  - {{ action: look, type: exposition }}"
        ))
        .unwrap();
        Location::from_definition(id, &m).unwrap()
    }

    #[test]
    fn insert_and_lookup() {
        let mut world = World::new();
        world.insert(loc("hall", "Hall")).unwrap();
        world.insert(loc("attic", "Attic")).unwrap();

        assert_eq!(world.len(), 2);
        assert_eq!(world.action_count(), 2);
        assert!(world.contains("hall"));
        assert_eq!(world.get("attic").map(Location::name), Some("Attic"));
        assert!(world.get("cellar").is_none());

        let ids: Vec<_> = world.locations().map(|l| l.id().as_str()).collect();
        assert_eq!(ids, vec!["attic", "hall"]);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut world = World::new();
        world.insert(loc("hall", "Hall")).unwrap();
        let err = world.insert(loc("hall", "Other Hall")).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "location", .. }));
        assert_eq!(world.get("hall").map(Location::name), Some("Hall"));
    }

    #[test]
    fn json_uses_content_field_names() {
        let mut world = World::new();
        world.insert(loc("hall", "Hall")).unwrap();

        let v: serde_json::Value = serde_json::from_str(&world.to_json_pretty().unwrap()).unwrap();
        assert_eq!(v["hall"]["name"], "Hall");
        assert_eq!(v["hall"]["type"], serde_json::Value::Null);
        assert_eq!(v["hall"]["actions"][0]["action"], "look");
        assert_eq!(v["hall"]["actions"][0]["type"], "exposition");
    }
}

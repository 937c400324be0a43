//! World registry standing in for the host engine's entity-access API.
//!
//! [`FarmWorld`] holds the canonical animal and location state the
//! snapshot layer reads. The host simulation mutates it from a single
//! thread; the registry performs no synchronization of its own, and
//! callers needing a consistent multi-field view hold exclusion for the
//! duration of their reads.

use std::collections::HashMap;

use tracing::debug;

use crate::animal::{AnimalId, AnimalIdAllocator, FarmAnimal};
use crate::location::Location;

/// Errors from world mutation.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// An animal was spawned into a location that is not registered.
    #[error("cannot spawn into unregistered location `{0}`")]
    UnknownLocation(String),

    /// A location with the same resolved name is already registered.
    #[error("location `{0}` is already registered")]
    DuplicateLocation(String),
}

/// The canonical farm state: locations by name, animals by ID.
///
/// Locations are keyed by [`Location::name_or_unique_name`], which is
/// also the form animal `home` references use.
#[derive(Debug)]
pub struct FarmWorld {
    /// Animal ID allocator.
    allocator: AnimalIdAllocator,
    /// Registered locations, keyed by resolved name.
    locations: HashMap<String, Location>,
    /// Live animals, keyed by ID.
    animals: HashMap<AnimalId, FarmAnimal>,
}

impl FarmWorld {
    /// Create a new empty world.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: AnimalIdAllocator::new(),
            locations: HashMap::new(),
            animals: HashMap::new(),
        }
    }

    /// Register a location.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateLocation`] if a location with the
    /// same resolved name is already registered.
    pub fn add_location(&mut self, location: Location) -> Result<(), WorldError> {
        let key = location.name_or_unique_name().to_string();
        if self.locations.contains_key(&key) {
            return Err(WorldError::DuplicateLocation(key));
        }
        debug!(location = key, "registered location");
        self.locations.insert(key, location);
        Ok(())
    }

    /// Spawn an animal, stamping a fresh ID onto it.
    ///
    /// The animal's `home` must name a registered location.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownLocation`] if the home location is
    /// not registered.
    pub fn spawn_animal(&mut self, mut animal: FarmAnimal) -> Result<AnimalId, WorldError> {
        if !self.locations.contains_key(&animal.home) {
            return Err(WorldError::UnknownLocation(animal.home));
        }
        let id = self.allocator.allocate();
        animal.id = id;
        debug!(animal = %id, kind = animal.kind, home = animal.home, "spawned animal");
        self.animals.insert(id, animal);
        Ok(id)
    }

    /// Look up a live animal by ID.
    #[must_use]
    pub fn animal(&self, id: AnimalId) -> Option<&FarmAnimal> {
        self.animals.get(&id)
    }

    /// Look up a live animal by ID, mutably. Simulation-thread only.
    #[must_use]
    pub fn animal_mut(&mut self, id: AnimalId) -> Option<&mut FarmAnimal> {
        self.animals.get_mut(&id)
    }

    /// Iterate all animals in ascending ID order.
    pub fn animals(&self) -> impl Iterator<Item = &FarmAnimal> {
        let mut all: Vec<&FarmAnimal> = self.animals.values().collect();
        all.sort_by_key(|animal| animal.id);
        all.into_iter()
    }

    /// Iterate the animals whose home is the given location, in ascending
    /// ID order.
    pub fn animals_in<'a>(&'a self, location: &str) -> impl Iterator<Item = &'a FarmAnimal> + use<'a> {
        let mut matching: Vec<&FarmAnimal> = self
            .animals
            .values()
            .filter(|animal| animal.home == location)
            .collect();
        matching.sort_by_key(|animal| animal.id);
        matching.into_iter()
    }

    /// Look up a location by its resolved name.
    #[must_use]
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    /// All registered location names, sorted.
    #[must_use]
    pub fn location_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.locations.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of live animals.
    #[must_use]
    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    /// Number of registered locations.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }
}

impl Default for FarmWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_farm() -> FarmWorld {
        let mut world = FarmWorld::new();
        world.add_location(Location::new("Farm")).unwrap();
        world
    }

    #[test]
    fn test_add_location_rejects_duplicates() {
        let mut world = world_with_farm();
        let err = world.add_location(Location::new("Farm")).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateLocation(name) if name == "Farm"));
    }

    #[test]
    fn test_locations_keyed_by_unique_name() {
        let mut world = FarmWorld::new();
        world
            .add_location(Location::new("Barn").with_unique_name("Barn#1"))
            .unwrap();
        world
            .add_location(Location::new("Barn").with_unique_name("Barn#2"))
            .unwrap();
        assert_eq!(world.location_count(), 2);
        assert!(world.location("Barn#1").is_some());
        assert!(world.location("Barn").is_none());
    }

    #[test]
    fn test_spawn_requires_registered_home() {
        let mut world = world_with_farm();
        let err = world
            .spawn_animal(FarmAnimal::new("Goat", "Gus").with_home("Mines"))
            .unwrap_err();
        assert!(matches!(err, WorldError::UnknownLocation(name) if name == "Mines"));
    }

    #[test]
    fn test_spawn_stamps_ascending_ids() {
        let mut world = world_with_farm();
        let a = world
            .spawn_animal(FarmAnimal::new("White Cow", "Bessie").with_home("Farm"))
            .unwrap();
        let b = world
            .spawn_animal(FarmAnimal::new("Chicken", "Peep").with_home("Farm"))
            .unwrap();
        assert!(a < b);
        assert_eq!(world.animal(a).unwrap().name, "Bessie");
        assert_eq!(world.animal(b).unwrap().id, b);
        assert_eq!(world.animal_count(), 2);
    }

    #[test]
    fn test_animals_iterate_in_id_order() {
        let mut world = world_with_farm();
        for name in ["First", "Second", "Third"] {
            world
                .spawn_animal(FarmAnimal::new("Sheep", name).with_home("Farm"))
                .unwrap();
        }
        let names: Vec<&str> = world.animals().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_animals_in_filters_by_home() {
        let mut world = world_with_farm();
        world
            .add_location(Location::new("Barn").with_unique_name("Barn#1"))
            .unwrap();
        world
            .spawn_animal(FarmAnimal::new("White Cow", "Bessie").with_home("Barn#1"))
            .unwrap();
        world
            .spawn_animal(FarmAnimal::new("Chicken", "Peep").with_home("Farm"))
            .unwrap();

        let in_barn: Vec<&str> = world.animals_in("Barn#1").map(|a| a.name.as_str()).collect();
        assert_eq!(in_barn, vec!["Bessie"]);
        assert_eq!(world.animals_in("Farm").count(), 1);
        assert_eq!(world.animals_in("Mines").count(), 0);
    }

    #[test]
    fn test_location_names_sorted() {
        let mut world = world_with_farm();
        world.add_location(Location::new("Coop")).unwrap();
        world.add_location(Location::new("Beach")).unwrap();
        assert_eq!(world.location_names(), vec!["Beach", "Coop", "Farm"]);
    }

    #[test]
    fn test_animal_mut_allows_simulation_updates() {
        let mut world = world_with_farm();
        let id = world
            .spawn_animal(FarmAnimal::new("White Cow", "Bessie").with_home("Farm"))
            .unwrap();
        world.animal_mut(id).unwrap().was_pet = true;
        assert!(world.animal(id).unwrap().was_pet);
    }
}

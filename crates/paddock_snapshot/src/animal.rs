//! Animal snapshots.
//!
//! [`AnimalSnapshot`] is the payload handed onward to the accessibility
//! client: a fixed, curated subset of one animal's observable state,
//! captured at a single instant. Serialized key names are part of the
//! wire contract and must not change.
//!
//! Field reads are independent, not atomic over the whole entity. A
//! caller that needs a consistent multi-field view invokes projection on
//! the simulation thread or under its own exclusion.

use paddock_entity::{AnimalId, FarmAnimal, FarmWorld, HarvestTool, Location};
use paddock_math::{IVec2, Vec2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SnapshotError;

/// A detached, serialization-ready view of one farm animal.
///
/// Every field is copied or derived by value at capture time: mutating
/// the source entity afterwards never changes an already-returned
/// snapshot. Two fields are derived rather than copied,
/// [`is_mature`](Self::is_mature) and
/// [`ready_for_harvest`](Self::ready_for_harvest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalSnapshot {
    /// Continuous world position, `[x, y]` in pixels.
    pub position: Vec2,
    /// Standing anchor, `[x, y]` in pixels.
    pub center: IVec2,
    /// Tile column.
    pub tile_x: i32,
    /// Tile row.
    pub tile_y: i32,
    /// Petted today.
    pub was_pet: bool,
    /// Species/breed identifier (e.g. `"White Cow"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Player-given display name.
    pub name: String,
    /// Age has reached the maturity threshold.
    pub is_mature: bool,
    /// Raw harvestable-produce counter.
    pub current_produce: i32,
    /// Mature and holding produce.
    pub ready_for_harvest: bool,
    /// Tool needed to collect produce; empty string for laid produce.
    pub tool_used_for_harvest: HarvestTool,
    /// Unique or display name of the containing location.
    pub location: String,
}

impl AnimalSnapshot {
    /// Project one animal against its already-resolved containing
    /// location.
    ///
    /// Pure and infallible: no side effects, constant time, and the
    /// result aliases nothing owned by the host.
    #[must_use]
    pub fn capture(animal: &FarmAnimal, location: &Location) -> Self {
        let is_mature = animal.is_mature();
        let current_produce = animal.produce_count;
        Self {
            position: animal.position,
            center: animal.standing,
            tile_x: animal.tile.x,
            tile_y: animal.tile.y,
            was_pet: animal.was_pet,
            kind: animal.kind.clone(),
            name: animal.name.clone(),
            is_mature,
            current_produce,
            ready_for_harvest: is_mature && current_produce > 0,
            tool_used_for_harvest: animal.harvest_tool,
            location: location.name_or_unique_name().to_string(),
        }
    }
}

/// Project the animal registered under `id`.
///
/// # Errors
///
/// - [`SnapshotError::InvalidHandle`] if `id` is the null sentinel.
/// - [`SnapshotError::UnknownAnimal`] if no animal is registered under
///   `id`.
/// - [`SnapshotError::UnresolvedLocation`] if the animal's home
///   back-reference does not resolve.
pub fn project(world: &FarmWorld, id: AnimalId) -> Result<AnimalSnapshot, SnapshotError> {
    if !id.is_valid() {
        return Err(SnapshotError::InvalidHandle);
    }
    let animal = world.animal(id).ok_or(SnapshotError::UnknownAnimal(id))?;
    let location =
        world
            .location(&animal.home)
            .ok_or_else(|| SnapshotError::UnresolvedLocation {
                animal: animal.name.clone(),
                location: animal.home.clone(),
            })?;
    Ok(AnimalSnapshot::capture(animal, location))
}

/// Project every animal in the world, in ascending ID order.
///
/// All-or-nothing: the first failing animal aborts the whole projection.
///
/// # Errors
///
/// Returns the first per-animal failure, as in [`project`].
pub fn project_all(world: &FarmWorld) -> Result<Vec<AnimalSnapshot>, SnapshotError> {
    let mut snapshots = Vec::with_capacity(world.animal_count());
    for animal in world.animals() {
        snapshots.push(project(world, animal.id)?);
    }
    debug!(count = snapshots.len(), "projected all animals");
    Ok(snapshots)
}

/// Project the animals homed in one location, in ascending ID order.
///
/// All-or-nothing, like [`project_all`].
///
/// # Errors
///
/// - [`SnapshotError::UnknownLocation`] if `name` is not a registered
///   location.
/// - Any per-animal failure, as in [`project`].
pub fn project_location(
    world: &FarmWorld,
    name: &str,
) -> Result<Vec<AnimalSnapshot>, SnapshotError> {
    if world.location(name).is_none() {
        return Err(SnapshotError::UnknownLocation(name.to_string()));
    }
    let mut snapshots = Vec::new();
    for animal in world.animals_in(name) {
        snapshots.push(project(world, animal.id)?);
    }
    debug!(location = name, count = snapshots.len(), "projected location");
    Ok(snapshots)
}

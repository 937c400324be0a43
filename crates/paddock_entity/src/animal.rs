//! Animal identifiers and the live animal entity.
//!
//! A [`FarmAnimal`] is owned and mutated by the host simulation; the
//! snapshot layer only ever reads it. IDs are allocated by the world
//! registry to keep them unique per world.

use paddock_math::{IVec2, TilePoint, Vec2};
use serde::{Deserialize, Serialize};

/// A unique animal identifier.
///
/// Animal IDs are allocated by the owning [`FarmWorld`](crate::FarmWorld)
/// and are stable for the lifetime of the animal. The zero value is the
/// null sentinel and never refers to a live animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimalId(pub u64);

impl AnimalId {
    /// The null / invalid animal sentinel.
    pub const INVALID: AnimalId = AnimalId(0);

    /// Create an ID from a raw `u64` identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is a valid (non-zero) handle.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for AnimalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Animal({})", self.0)
    }
}

/// Allocates monotonically increasing animal IDs.
///
/// Lives inside the world registry, which is the single source of truth
/// for animal identity.
#[derive(Debug)]
pub struct AnimalIdAllocator {
    next_id: u64,
}

impl AnimalIdAllocator {
    /// Creates a new allocator. IDs start at 1 (0 is reserved for
    /// [`AnimalId::INVALID`]).
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocates a fresh animal ID.
    pub fn allocate(&mut self) -> AnimalId {
        let id = self.next_id;
        self.next_id += 1;
        AnimalId(id)
    }

    /// Returns the number of IDs allocated so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.next_id - 1
    }
}

impl Default for AnimalIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Tool required to collect an animal's produce.
///
/// Serialized as its canonical string identifier; the tool-less case is
/// the empty string so the payload key is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HarvestTool {
    /// Produce is laid or dropped; no tool involved.
    #[default]
    #[serde(rename = "")]
    None,
    /// Milking tool for cows and goats.
    MilkPail,
    /// Shearing tool for sheep.
    Shears,
}

impl HarvestTool {
    /// Canonical string identifier, as it appears in payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::MilkPail => "MilkPail",
            Self::Shears => "Shears",
        }
    }
}

impl std::fmt::Display for HarvestTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A live, host-owned farm animal.
///
/// Mutable simulation state, updated by the host's single simulation
/// thread. `position`, `standing`, and `tile` are all part of the host's
/// observable surface and are stored independently: the standing anchor
/// is a rendering/collision point, not derivable from the tile
/// coordinate. [`FarmAnimal::move_to`] keeps the three coherent for
/// ordinary movement.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmAnimal {
    /// Stable identity, stamped by the world registry on spawn.
    pub id: AnimalId,
    /// Species/breed identifier (e.g. `"White Cow"`).
    pub kind: String,
    /// Player-given display name.
    pub name: String,
    /// Continuous world position, in pixels.
    pub position: Vec2,
    /// Standing anchor, in pixels.
    pub standing: IVec2,
    /// Tile-grid coordinate.
    pub tile: TilePoint,
    /// Sprite bounding-box size, in pixels. Used to derive the standing
    /// anchor from the position.
    pub sprite_size: Vec2,
    /// Age in simulation days.
    pub age_days: u32,
    /// Age at which the animal counts as adult.
    pub mature_age_days: u32,
    /// Harvestable-produce counter. Non-positive means nothing to
    /// harvest; the host uses a negative sentinel for "no produce".
    pub produce_count: i32,
    /// Petted today.
    pub was_pet: bool,
    /// Tool required to collect produce.
    pub harvest_tool: HarvestTool,
    /// Name of the containing location. A weak reference, resolved by
    /// name against the world registry, never an owned pointer.
    pub home: String,
}

impl FarmAnimal {
    /// Create an animal of the given kind with a display name.
    ///
    /// The ID stays [`AnimalId::INVALID`] until the world registry stamps
    /// a real one on spawn.
    #[must_use]
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: AnimalId::INVALID,
            kind: kind.into(),
            name: name.into(),
            position: Vec2::ZERO,
            standing: IVec2::ZERO,
            tile: TilePoint::ZERO,
            sprite_size: Vec2::new(64.0, 64.0),
            age_days: 0,
            mature_age_days: 3,
            produce_count: -1,
            was_pet: false,
            harvest_tool: HarvestTool::None,
            home: String::new(),
        }
    }

    /// Set the containing location by name.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }

    /// Set the harvest tool.
    #[must_use]
    pub fn with_harvest_tool(mut self, tool: HarvestTool) -> Self {
        self.harvest_tool = tool;
        self
    }

    /// Set the maturity threshold, in days.
    #[must_use]
    pub fn with_mature_age(mut self, days: u32) -> Self {
        self.mature_age_days = days;
        self
    }

    /// Set the current age, in days.
    #[must_use]
    pub fn with_age(mut self, days: u32) -> Self {
        self.age_days = days;
        self
    }

    /// Set the produce counter.
    #[must_use]
    pub fn with_produce(mut self, count: i32) -> Self {
        self.produce_count = count;
        self
    }

    /// Set the sprite bounding-box size, in pixels.
    #[must_use]
    pub fn with_sprite_size(mut self, size: Vec2) -> Self {
        self.sprite_size = size;
        self
    }

    /// Place the animal at a world position and recompute its standing
    /// anchor (bounding-box centre) and tile coordinate, the way the host
    /// simulation does on movement.
    #[must_use]
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.move_to(position);
        self
    }

    /// Move to a world position, keeping `standing` and `tile` coherent.
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
        self.standing = (position + self.sprite_size / 2.0).floor().as_ivec2();
        self.tile = TilePoint::from_pixels(self.standing);
    }

    /// Whether the animal's age has reached its maturity threshold.
    #[must_use]
    pub fn is_mature(&self) -> bool {
        self.age_days >= self.mature_age_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = AnimalId::from_raw(42);
        assert_eq!(id.id(), 42);
        assert!(id.is_valid());
    }

    #[test]
    fn test_id_invalid() {
        assert!(!AnimalId::INVALID.is_valid());
        assert_eq!(AnimalId::INVALID.id(), 0);
    }

    #[test]
    fn test_allocator_produces_unique_ids() {
        let mut alloc = AnimalIdAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        assert_eq!(a.id(), 1);
        assert_eq!(b.id(), 2);
        assert_eq!(alloc.count(), 2);
    }

    #[test]
    fn test_harvest_tool_strings() {
        assert_eq!(HarvestTool::MilkPail.as_str(), "MilkPail");
        assert_eq!(HarvestTool::Shears.as_str(), "Shears");
        assert_eq!(HarvestTool::None.as_str(), "");
    }

    #[test]
    fn test_harvest_tool_serializes_as_string() {
        assert_eq!(
            serde_json::to_value(HarvestTool::MilkPail).unwrap(),
            serde_json::json!("MilkPail")
        );
        assert_eq!(
            serde_json::to_value(HarvestTool::None).unwrap(),
            serde_json::json!("")
        );
    }

    #[test]
    fn test_maturity_threshold_boundary() {
        let animal = FarmAnimal::new("White Cow", "Bessie").with_mature_age(5);
        assert!(!animal.clone().with_age(4).is_mature());
        assert!(animal.clone().with_age(5).is_mature());
        assert!(animal.with_age(6).is_mature());
    }

    #[test]
    fn test_move_to_keeps_anchors_coherent() {
        let mut animal = FarmAnimal::new("Goat", "Gus").with_sprite_size(Vec2::new(64.0, 64.0));
        animal.move_to(Vec2::new(96.0, 32.0));
        assert_eq!(animal.position, Vec2::new(96.0, 32.0));
        assert_eq!(animal.standing, IVec2::new(128, 64));
        assert_eq!(animal.tile, TilePoint::new(2, 1));
    }

    #[test]
    fn test_new_animal_defaults() {
        let animal = FarmAnimal::new("Chicken", "Peep");
        assert_eq!(animal.id, AnimalId::INVALID);
        assert_eq!(animal.harvest_tool, HarvestTool::None);
        assert!(!animal.was_pet);
        assert!(animal.produce_count < 0);
    }
}

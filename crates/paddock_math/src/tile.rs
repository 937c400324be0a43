//! Tile-grid coordinates.
//!
//! The host world is a grid of square tiles, [`TILE_SIZE`] pixels on a
//! side. Continuous positions are measured in pixels; [`TilePoint`] is
//! the discrete tile coordinate most world queries operate on.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Side length of one world tile, in pixels.
pub const TILE_SIZE: i32 = 64;

/// A discrete tile-grid coordinate.
///
/// Distinct from a pixel anchor: an entity standing at pixel `(100, 56)`
/// occupies tile `(1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePoint {
    /// Tile column.
    pub x: i32,
    /// Tile row.
    pub y: i32,
}

impl TilePoint {
    /// The origin tile.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a tile coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The tile containing the given pixel anchor.
    ///
    /// Divides by [`TILE_SIZE`] with flooring, so negative anchors land
    /// in the tile left of / above the origin.
    #[must_use]
    pub const fn from_pixels(anchor: IVec2) -> Self {
        Self {
            x: anchor.x.div_euclid(TILE_SIZE),
            y: anchor.y.div_euclid(TILE_SIZE),
        }
    }

    /// The tile containing the given continuous world position.
    #[must_use]
    pub fn from_world(position: Vec2) -> Self {
        Self::from_pixels(position.floor().as_ivec2())
    }

    /// The pixel-space centre of this tile.
    #[must_use]
    pub fn center(self) -> Vec2 {
        let half = TILE_SIZE as f32 / 2.0;
        Vec2::new(
            (self.x * TILE_SIZE) as f32 + half,
            (self.y * TILE_SIZE) as f32 + half,
        )
    }
}

impl std::fmt::Display for TilePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_within_first_tile() {
        assert_eq!(TilePoint::from_pixels(IVec2::new(0, 0)), TilePoint::ZERO);
        assert_eq!(TilePoint::from_pixels(IVec2::new(63, 63)), TilePoint::ZERO);
    }

    #[test]
    fn test_from_pixels_tile_boundary() {
        assert_eq!(
            TilePoint::from_pixels(IVec2::new(64, 0)),
            TilePoint::new(1, 0)
        );
        assert_eq!(
            TilePoint::from_pixels(IVec2::new(100, 56)),
            TilePoint::new(1, 0)
        );
    }

    #[test]
    fn test_from_pixels_negative_floors() {
        assert_eq!(
            TilePoint::from_pixels(IVec2::new(-1, -65)),
            TilePoint::new(-1, -2)
        );
    }

    #[test]
    fn test_from_world() {
        assert_eq!(
            TilePoint::from_world(Vec2::new(200.5, 10.0)),
            TilePoint::new(3, 0)
        );
    }

    #[test]
    fn test_center_roundtrips_into_same_tile() {
        let tile = TilePoint::new(3, 1);
        assert_eq!(TilePoint::from_world(tile.center()), tile);
    }

    #[test]
    fn test_display() {
        assert_eq!(TilePoint::new(3, 1).to_string(), "(3, 1)");
    }

    #[test]
    fn test_serializes_as_object() {
        let json = serde_json::to_value(TilePoint::new(3, 1)).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 3, "y": 1 }));
    }
}

//! # paddock_math
//!
//! Math types for the farm-state bridge. Re-exports [`glam`] for vector
//! math and defines the tile-grid types shared across the workspace.

pub mod tile;

// Re-export glam types for convenience.
pub use glam::{IVec2, Vec2};

pub use tile::{TILE_SIZE, TilePoint};

//! # paddock_entity
//!
//! The host-side entity model the snapshot layer reads: live farm animals
//! and the locations that contain them.
//!
//! This crate provides:
//!
//! - [`AnimalId`] — lightweight `u64` animal identifiers.
//! - [`AnimalIdAllocator`] — monotonically increasing ID allocator.
//! - [`FarmAnimal`] — the live, mutable animal entity.
//! - [`HarvestTool`] — categorical harvest-tool identifier.
//! - [`Location`] — a named map region.
//! - [`FarmWorld`] — the registry standing in for the host engine's
//!   entity-access API.

pub mod animal;
pub mod location;
pub mod world;

pub use animal::{AnimalId, AnimalIdAllocator, FarmAnimal, HarvestTool};
pub use location::Location;
pub use world::{FarmWorld, WorldError};

//! # paddock_snapshot
//!
//! Projection layer of the farm-state bridge: reads live animal entities
//! owned by the host world and produces immutable, serialization-ready
//! snapshots for the accessibility client downstream.
//!
//! This crate provides:
//!
//! - [`AnimalSnapshot`] — the detached payload record.
//! - [`project`], [`project_all`], [`project_location`] — checked
//!   projection entry points over a
//!   [`FarmWorld`](paddock_entity::FarmWorld).
//! - [`codec`] — JSON rendering helpers for outbound payloads.
//! - [`SnapshotError`] — the failure taxonomy.

pub mod animal;
pub mod codec;
pub mod error;

pub use animal::{AnimalSnapshot, project, project_all, project_location};
pub use codec::{decode, encode, encode_pretty};
pub use error::SnapshotError;

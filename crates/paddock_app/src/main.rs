//! # paddock_app — Snapshot feed
//!
//! Builds a demonstration farm, advances its state the way the host
//! simulation would, and emits animal snapshots as JSON lines on stdout.
//! Whatever consumes stdout owns the transport; this binary's contract
//! ends at the serialized payload.

use std::io::Write;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use paddock_entity::{FarmAnimal, FarmWorld, HarvestTool, Location};
use paddock_math::Vec2;
use paddock_snapshot::{encode, project_all};

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("paddock_app=info".parse()?))
        .init();

    info!("snapshot feed starting");

    let mut world = FarmWorld::new();
    world.add_location(Location::new("Farm"))?;
    world.add_location(Location::new("Barn").with_unique_name("Barn#1"))?;
    world.add_location(Location::new("Coop").with_unique_name("Coop#1"))?;

    let bessie = world.spawn_animal(
        FarmAnimal::new("White Cow", "Bessie")
            .with_home("Barn#1")
            .with_harvest_tool(HarvestTool::MilkPail)
            .with_mature_age(5)
            .with_position(Vec2::new(384.0, 320.0)),
    )?;
    world.spawn_animal(
        FarmAnimal::new("Sheep", "Wooly")
            .with_home("Barn#1")
            .with_harvest_tool(HarvestTool::Shears)
            .with_mature_age(4)
            .with_position(Vec2::new(512.0, 320.0)),
    )?;
    world.spawn_animal(
        FarmAnimal::new("Brown Chicken", "Peep")
            .with_home("Coop#1")
            .with_mature_age(3)
            .with_position(Vec2::new(128.0, 192.0)),
    )?;

    // Advance state the way the host simulation would between snapshots.
    if let Some(cow) = world.animal_mut(bessie) {
        cow.age_days = 6;
        cow.produce_count = 1;
        cow.was_pet = true;
        cow.move_to(Vec2::new(448.0, 256.0));
    }

    let snapshots = project_all(&world)?;
    let mut stdout = std::io::stdout().lock();
    for snapshot in &snapshots {
        stdout.write_all(&encode(snapshot)?)?;
        stdout.write_all(b"\n")?;
    }

    info!(animals = snapshots.len(), "feed complete");
    Ok(())
}

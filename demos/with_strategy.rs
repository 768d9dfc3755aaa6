//! Vehicles With the Strategy Pattern
//!
//! This example builds each strategy-based vehicle and drives it.
//!
//! Key concepts:
//! - Drive behavior lives in separate strategy types
//! - Vehicles receive their strategy at construction (constructor injection)
//! - Two vehicles share one strategy without duplicating code
//!
//! Run with: RUST_LOG=debug cargo run --example with_strategy

use drive_strategy::strategy::DriveStyle;
use drive_strategy::with_strategy::{OffRoadVehicle, VehicleBuilder};
use drive_strategy::VehicleKind;

fn main() {
    env_logger::init();

    println!("=== Strategy Pattern Example ===\n");

    // Goods, passenger and sports vehicles are only built inside the crate
    for kind in [VehicleKind::Goods, VehicleKind::Passenger, VehicleKind::Sports] {
        kind.build().drive();
    }

    let off_road = OffRoadVehicle::new();
    off_road.drive();

    println!("\nOff-road uses the {} strategy", off_road.strategy_name());

    // A vehicle with a caller-chosen strategy goes through the builder
    match VehicleBuilder::new().style(DriveStyle::Sports).build() {
        Ok(custom) => custom.drive(),
        Err(err) => eprintln!("could not build vehicle: {err}"),
    }

    if let Err(err) = VehicleBuilder::new().build() {
        println!("Without a strategy: {err}");
    }

    println!("\n=== Example Complete ===");
}

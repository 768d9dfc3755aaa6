//! Vehicles Without the Strategy Pattern
//!
//! This example drives vehicles whose behavior is hard-coded per type.
//!
//! Key concepts:
//! - A default `drive` on the trait, overridden per vehicle
//! - Dispatch on the runtime type behind `dyn Vehicle`
//! - Sharing a behavior means duplicating the override
//!
//! Run with: cargo run --example without_strategy

use drive_strategy::without_strategy::{BaseVehicle, OffRoadVehicle, SportsVehicle, Vehicle};

fn main() {
    env_logger::init();

    println!("=== Inheritance Example ===\n");

    let vehicles: Vec<Box<dyn Vehicle>> = vec![
        Box::new(BaseVehicle),
        Box::new(OffRoadVehicle),
        Box::new(SportsVehicle),
    ];

    for vehicle in &vehicles {
        vehicle.drive();
    }

    println!("\n=== Example Complete ===");
}

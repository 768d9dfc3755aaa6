//! Fleet From JSON
//!
//! This example describes a fleet as data, builds every vehicle and
//! prints the drive journal.
//!
//! Key concepts:
//! - Vehicle kinds are plain serializable values
//! - Both variants are driven through one interface
//! - Every drive is recorded in an immutable journal
//!
//! Run with: cargo run --example fleet

use drive_strategy::{showcase, VehicleKind};
use std::io;

const FLEET: &str = r#"["goods", "inherited_off_road", "sports", "base", "passenger"]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Fleet Example ===\n");

    let kinds: Vec<VehicleKind> = serde_json::from_str(FLEET)?;
    for kind in &kinds {
        match kind.drive_style() {
            Some(style) => println!("{kind}: strategy {style:?}"),
            None => println!("{kind}: hard-coded"),
        }
    }
    println!();

    let journal = showcase::drive_all(&kinds, &mut io::stdout())?;

    println!("\nJournal:");
    println!("{}", serde_json::to_string_pretty(&journal)?);

    println!("\n=== Example Complete ===");
    Ok(())
}

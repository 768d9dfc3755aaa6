//! Drive Strategy: the Strategy pattern, shown twice
//!
//! The same vehicles are modelled two ways so the difference is easy to
//! see side by side:
//!
//! - **[`without_strategy`]**: each vehicle type overrides a default
//!   `drive` behavior on the `Vehicle` trait.
//! - **[`with_strategy`]**: a single `Vehicle` type owns a
//!   [`DriveStrategy`](strategy::DriveStrategy) supplied at construction
//!   and delegates to it. Concrete vehicles only choose the strategy.
//!
//! Every `drive` writes exactly one fixed line to standard output;
//! `drive_to` writes the same line to any writer.
//!
//! # Example
//!
//! ```rust
//! use drive_strategy::with_strategy::OffRoadVehicle;
//! use drive_strategy::without_strategy::{self, Vehicle as _};
//! use drive_strategy::VehicleKind;
//!
//! let mut out = Vec::new();
//! VehicleKind::Goods.build().drive_to(&mut out).unwrap();
//! OffRoadVehicle::new().drive_to(&mut out).unwrap();
//! without_strategy::OffRoadVehicle.drive_to(&mut out).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Normal drive capability\nSports drive capability\nOff-road driving\n"
//! );
//! ```

mod console;
pub mod error;
pub mod fleet;
pub mod journal;
pub mod showcase;
pub mod strategy;
pub mod with_strategy;
pub mod without_strategy;

// Re-export commonly used types
pub use error::{BuildError, DriveError};
pub use fleet::{AnyVehicle, VehicleKind};
pub use journal::{DriveLog, DriveRecord};
pub use strategy::{DriveStrategy, DriveStyle, NormalDriveStrategy, SportsDriveStrategy};

//! Vehicles whose drive behavior is baked into each type.
//!
//! The [`Vehicle`] trait carries a default drive line; concrete types
//! override it. Behavior is selected by the runtime type behind
//! `&dyn Vehicle`, with no strategy object involved.

use crate::console;
use crate::error::DriveError;
use std::io::Write;

/// Line produced by any vehicle that keeps the default behavior.
pub const NORMAL_DRIVING: &str = "Normal driving";
/// Line produced by [`OffRoadVehicle`].
pub const OFF_ROAD_DRIVING: &str = "Off-road driving";
/// Line produced by [`SportsVehicle`].
pub const SPORTY_DRIVING: &str = "Sporty driving";

/// Drivable vehicle with an overridable default behavior.
///
/// # Example
///
/// ```rust
/// use drive_strategy::without_strategy::{BaseVehicle, OffRoadVehicle, Vehicle};
///
/// let fleet: Vec<Box<dyn Vehicle>> = vec![Box::new(BaseVehicle), Box::new(OffRoadVehicle)];
/// let lines: Vec<&str> = fleet.iter().map(|v| v.message()).collect();
/// assert_eq!(lines, ["Normal driving", "Off-road driving"]);
/// ```
pub trait Vehicle {
    /// The line `drive` produces. Defaults to normal driving.
    fn message(&self) -> &str {
        NORMAL_DRIVING
    }

    /// Write the drive line to `out`.
    fn drive_to(&self, out: &mut dyn Write) -> Result<(), DriveError> {
        log::trace!("driving: {}", self.message());
        console::write_line(out, self.message())
    }

    /// Print the drive line to standard output.
    fn drive(&self) {
        log::trace!("driving: {}", self.message());
        console::print_line(self.message());
    }
}

/// A vehicle with no override; drives with the default behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaseVehicle;

impl Vehicle for BaseVehicle {}

/// Off-road vehicle with its own hard-coded drive line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OffRoadVehicle;

impl Vehicle for OffRoadVehicle {
    fn message(&self) -> &str {
        OFF_ROAD_DRIVING
    }
}

/// Sports vehicle with its own hard-coded drive line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SportsVehicle;

impl Vehicle for SportsVehicle {
    fn message(&self) -> &str {
        SPORTY_DRIVING
    }
}

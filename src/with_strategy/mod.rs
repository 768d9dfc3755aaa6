//! Vehicles whose drive behavior is a separately-defined strategy.
//!
//! The base [`Vehicle`] owns one [`DriveStrategy`] supplied at
//! construction and delegates `drive` to it. Concrete vehicles differ
//! only in which strategy they hand to the base.

mod builder;
mod vehicles;

pub use builder::VehicleBuilder;
pub use vehicles::{GoodsVehicle, OffRoadVehicle, PassengerVehicle, SportsVehicle};

use crate::error::DriveError;
use crate::strategy::DriveStrategy;
use std::io::Write;

/// Context object that delegates driving to its strategy.
///
/// The strategy is fixed for the lifetime of the vehicle: the field is
/// private and there is no setter.
#[derive(Debug)]
pub struct Vehicle {
    drive_strategy: Box<dyn DriveStrategy>,
}

impl Vehicle {
    pub(crate) fn new(drive_strategy: Box<dyn DriveStrategy>) -> Self {
        log::debug!(
            "vehicle constructed with {} drive strategy",
            drive_strategy.name()
        );
        Self { drive_strategy }
    }

    /// Print this vehicle's drive line to standard output.
    pub fn drive(&self) {
        self.drive_strategy.drive();
    }

    /// Write this vehicle's drive line to `out`.
    pub fn drive_to(&self, out: &mut dyn Write) -> Result<(), DriveError> {
        self.drive_strategy.drive_to(out)
    }

    /// The line `drive` produces.
    pub fn message(&self) -> &str {
        self.drive_strategy.message()
    }

    /// Name of the strategy this vehicle was built with.
    pub fn strategy_name(&self) -> &str {
        self.drive_strategy.name()
    }
}

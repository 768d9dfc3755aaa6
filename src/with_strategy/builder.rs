//! Builder for vehicles with a caller-chosen strategy.

use super::Vehicle;
use crate::error::BuildError;
use crate::strategy::{DriveStrategy, DriveStyle};

/// Builder for a [`Vehicle`] with any strategy.
///
/// A vehicle cannot exist without a strategy; finishing the builder
/// before one is supplied fails with [`BuildError::MissingStrategy`].
///
/// # Example
///
/// ```rust
/// use drive_strategy::error::BuildError;
/// use drive_strategy::strategy::{DriveStyle, NormalDriveStrategy};
/// use drive_strategy::with_strategy::VehicleBuilder;
///
/// let vehicle = VehicleBuilder::new().style(DriveStyle::Normal).build().unwrap();
/// assert_eq!(vehicle.message(), NormalDriveStrategy::MESSAGE);
///
/// let missing = VehicleBuilder::new().build();
/// assert_eq!(missing.unwrap_err(), BuildError::MissingStrategy);
/// ```
#[derive(Debug, Default)]
pub struct VehicleBuilder {
    strategy: Option<Box<dyn DriveStrategy>>,
}

impl VehicleBuilder {
    pub fn new() -> Self {
        Self { strategy: None }
    }

    /// Set the strategy (required).
    pub fn strategy<D: DriveStrategy + 'static>(mut self, strategy: D) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    /// Set the strategy by style name.
    pub fn style(mut self, style: DriveStyle) -> Self {
        self.strategy = Some(style.strategy());
        self
    }

    /// Build the vehicle.
    /// Returns an error if no strategy was supplied.
    pub fn build(self) -> Result<Vehicle, BuildError> {
        let strategy = self.strategy.ok_or(BuildError::MissingStrategy)?;
        Ok(Vehicle::new(strategy))
    }
}

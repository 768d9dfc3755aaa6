//! Error types for vehicle construction and driving.

use thiserror::Error;

/// Errors that can occur when building a vehicle through [`VehicleBuilder`].
///
/// [`VehicleBuilder`]: crate::with_strategy::VehicleBuilder
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Drive strategy not specified. Call .strategy(s) or .style(style) before .build()")]
    MissingStrategy,
}

/// Errors that can occur while driving or describing vehicles
#[derive(Debug, Error)]
pub enum DriveError {
    /// Writing the drive line to its sink failed
    #[error("Failed to write drive output: {0}")]
    Output(#[from] std::io::Error),

    /// A vehicle kind name did not match any known vehicle
    #[error("Unknown vehicle kind: {0}")]
    UnknownVehicle(String),
}

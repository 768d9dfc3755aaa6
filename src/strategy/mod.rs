//! Interchangeable drive behaviors.
//!
//! A [`DriveStrategy`] is the capability a strategy-based vehicle delegates
//! to. Each implementation is stateless and produces one fixed line.
//! [`DriveStyle`] names a strategy as plain data so it can be serialized
//! and turned back into a boxed strategy.

mod normal;
mod sports;
mod style;

pub use normal::NormalDriveStrategy;
pub use sports::SportsDriveStrategy;
pub use style::DriveStyle;

use crate::console;
use crate::error::DriveError;
use std::fmt::Debug;
use std::io::Write;

/// Drive behavior that a vehicle can be constructed with.
///
/// Implementations must be stateless: `drive` produces the same line every
/// time it is called.
///
/// # Example
///
/// ```rust
/// use drive_strategy::strategy::DriveStrategy;
///
/// #[derive(Debug)]
/// struct EcoDriveStrategy;
///
/// impl DriveStrategy for EcoDriveStrategy {
///     fn name(&self) -> &str {
///         "Eco"
///     }
///
///     fn message(&self) -> &str {
///         "Eco drive capability"
///     }
/// }
///
/// let mut out = Vec::new();
/// EcoDriveStrategy.drive_to(&mut out).unwrap();
/// assert_eq!(out, b"Eco drive capability\n");
/// ```
pub trait DriveStrategy: Debug + Send + Sync {
    /// Short name for display/logging.
    fn name(&self) -> &str;

    /// The fixed line this strategy produces when driving.
    fn message(&self) -> &str;

    /// Write the drive line to `out`.
    fn drive_to(&self, out: &mut dyn Write) -> Result<(), DriveError> {
        log::trace!("{} strategy driving", self.name());
        console::write_line(out, self.message())
    }

    /// Print the drive line to standard output.
    fn drive(&self) {
        log::trace!("{} strategy driving", self.name());
        console::print_line(self.message());
    }
}

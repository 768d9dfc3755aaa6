//! One of every vehicle, driven in order.

use crate::error::DriveError;
use crate::fleet::VehicleKind;
use crate::journal::{DriveLog, DriveRecord};
use std::io::Write;

/// Build one vehicle of every kind, drive each into `out`, and return the
/// journal of what was driven.
///
/// # Example
///
/// ```rust
/// use drive_strategy::showcase;
///
/// let mut out = Vec::new();
/// let log = showcase::run(&mut out).unwrap();
/// assert_eq!(log.messages(), showcase::expected_lines());
/// ```
pub fn run(out: &mut dyn Write) -> Result<DriveLog, DriveError> {
    drive_all(&VehicleKind::ALL, out)
}

/// Build and drive the given kinds in order.
pub fn drive_all(kinds: &[VehicleKind], out: &mut dyn Write) -> Result<DriveLog, DriveError> {
    let mut journal = DriveLog::new();
    for kind in kinds {
        let vehicle = kind.build();
        vehicle.drive_to(out)?;
        journal = journal.record(DriveRecord::now(kind.name(), vehicle.message()));
    }
    log::debug!("drove {} vehicles", journal.records().len());
    Ok(journal)
}

/// Lines [`run`] writes, in order.
pub fn expected_lines() -> Vec<&'static str> {
    vec![
        "Normal driving",
        "Off-road driving",
        "Sporty driving",
        "Normal drive capability",
        "Normal drive capability",
        "Sports drive capability",
        "Sports drive capability",
    ]
}

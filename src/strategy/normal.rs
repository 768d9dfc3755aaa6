use super::DriveStrategy;

/// Everyday driving, used by goods and passenger vehicles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalDriveStrategy;

impl NormalDriveStrategy {
    pub const MESSAGE: &'static str = "Normal drive capability";
}

impl DriveStrategy for NormalDriveStrategy {
    fn name(&self) -> &str {
        "Normal"
    }

    fn message(&self) -> &str {
        Self::MESSAGE
    }
}

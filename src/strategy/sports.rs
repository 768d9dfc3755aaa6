use super::DriveStrategy;

/// Sporty driving, shared by sports and off-road vehicles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SportsDriveStrategy;

impl SportsDriveStrategy {
    pub const MESSAGE: &'static str = "Sports drive capability";
}

impl DriveStrategy for SportsDriveStrategy {
    fn name(&self) -> &str {
        "Sports"
    }

    fn message(&self) -> &str {
        Self::MESSAGE
    }
}

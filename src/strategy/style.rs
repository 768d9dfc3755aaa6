//! Drive strategies named as data.

use super::{DriveStrategy, NormalDriveStrategy, SportsDriveStrategy};
use serde::{Deserialize, Serialize};

/// Tagged name for each built-in [`DriveStrategy`].
///
/// # Example
///
/// ```rust
/// use drive_strategy::strategy::{DriveStrategy, DriveStyle, SportsDriveStrategy};
///
/// let style: DriveStyle = serde_json::from_str("\"sports\"").unwrap();
/// assert_eq!(style, DriveStyle::Sports);
/// assert_eq!(style.strategy().message(), SportsDriveStrategy::MESSAGE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveStyle {
    Normal,
    Sports,
}

impl DriveStyle {
    /// Build a fresh strategy instance for this style.
    pub fn strategy(self) -> Box<dyn DriveStrategy> {
        match self {
            Self::Normal => Box::new(NormalDriveStrategy),
            Self::Sports => Box::new(SportsDriveStrategy),
        }
    }

    /// The line a vehicle driven in this style produces.
    pub fn message(self) -> &'static str {
        match self {
            Self::Normal => NormalDriveStrategy::MESSAGE,
            Self::Sports => SportsDriveStrategy::MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_matches_style_message() {
        for style in [DriveStyle::Normal, DriveStyle::Sports] {
            assert_eq!(style.strategy().message(), style.message());
        }
    }

    #[test]
    fn style_serializes_as_snake_case() {
        let json = serde_json::to_string(&DriveStyle::Normal).unwrap();
        assert_eq!(json, "\"normal\"");
    }

    #[test]
    fn unknown_style_is_rejected() {
        let parsed: Result<DriveStyle, _> = serde_json::from_str("\"rally\"");
        assert!(parsed.is_err());
    }
}

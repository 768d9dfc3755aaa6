//! Every concrete vehicle of both variants, named as data.

use crate::error::DriveError;
use crate::strategy::DriveStyle;
use crate::{with_strategy, without_strategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Name of a concrete vehicle type.
///
/// The first three kinds belong to the inheritance-based variant, the
/// rest to the strategy-based variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Base,
    InheritedOffRoad,
    InheritedSports,
    Goods,
    Passenger,
    Sports,
    OffRoad,
}

impl VehicleKind {
    /// All kinds, inheritance-based first.
    pub const ALL: [VehicleKind; 7] = [
        Self::Base,
        Self::InheritedOffRoad,
        Self::InheritedSports,
        Self::Goods,
        Self::Passenger,
        Self::Sports,
        Self::OffRoad,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::InheritedOffRoad => "inherited_off_road",
            Self::InheritedSports => "inherited_sports",
            Self::Goods => "goods",
            Self::Passenger => "passenger",
            Self::Sports => "sports",
            Self::OffRoad => "off_road",
        }
    }

    /// Strategy the vehicle is built with, or `None` for the
    /// inheritance-based kinds.
    pub fn drive_style(self) -> Option<DriveStyle> {
        match self {
            Self::Base | Self::InheritedOffRoad | Self::InheritedSports => None,
            Self::Goods | Self::Passenger => Some(DriveStyle::Normal),
            Self::Sports | Self::OffRoad => Some(DriveStyle::Sports),
        }
    }

    /// Construct a fresh vehicle of this kind.
    pub fn build(self) -> AnyVehicle {
        match self {
            Self::Base => AnyVehicle::Inherited(Box::new(without_strategy::BaseVehicle)),
            Self::InheritedOffRoad => {
                AnyVehicle::Inherited(Box::new(without_strategy::OffRoadVehicle))
            }
            Self::InheritedSports => {
                AnyVehicle::Inherited(Box::new(without_strategy::SportsVehicle))
            }
            Self::Goods => AnyVehicle::Composed(with_strategy::GoodsVehicle::new().into()),
            Self::Passenger => {
                AnyVehicle::Composed(with_strategy::PassengerVehicle::new().into())
            }
            Self::Sports => AnyVehicle::Composed(with_strategy::SportsVehicle::new().into()),
            Self::OffRoad => AnyVehicle::Composed(with_strategy::OffRoadVehicle::new().into()),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleKind {
    type Err = DriveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DriveError::UnknownVehicle(s.to_string()))
    }
}

/// A vehicle of either variant.
pub enum AnyVehicle {
    Inherited(Box<dyn without_strategy::Vehicle>),
    Composed(with_strategy::Vehicle),
}

impl AnyVehicle {
    pub fn message(&self) -> &str {
        match self {
            Self::Inherited(vehicle) => vehicle.message(),
            Self::Composed(vehicle) => vehicle.message(),
        }
    }

    pub fn drive_to(&self, out: &mut dyn Write) -> Result<(), DriveError> {
        match self {
            Self::Inherited(vehicle) => vehicle.drive_to(out),
            Self::Composed(vehicle) => vehicle.drive_to(out),
        }
    }

    pub fn drive(&self) {
        match self {
            Self::Inherited(vehicle) => vehicle.drive(),
            Self::Composed(vehicle) => vehicle.drive(),
        }
    }
}

impl fmt::Debug for AnyVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherited(vehicle) => f
                .debug_tuple("Inherited")
                .field(&vehicle.message())
                .finish(),
            Self::Composed(vehicle) => f.debug_tuple("Composed").field(vehicle).finish(),
        }
    }
}

//! Concrete vehicles, each fixing the strategy handed to the base.

use super::Vehicle;
use crate::strategy::{NormalDriveStrategy, SportsDriveStrategy};
use std::ops::Deref;

/// Declare a vehicle newtype that constructs the base with a fixed strategy.
macro_rules! strategy_vehicle {
    (
        $(#[$meta:meta])*
        $name:ident => $strategy:expr, constructor: $ctor_vis:vis
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name(Vehicle);

        impl $name {
            $ctor_vis fn new() -> Self {
                log::debug!("constructing {}", stringify!($name));
                Self(Vehicle::new(Box::new($strategy)))
            }
        }

        impl Deref for $name {
            type Target = Vehicle;

            fn deref(&self) -> &Vehicle {
                &self.0
            }
        }

        impl From<$name> for Vehicle {
            fn from(vehicle: $name) -> Vehicle {
                vehicle.0
            }
        }
    };
}

strategy_vehicle! {
    /// Goods carrier; drives normally. Built in-crate, reach it through
    /// `VehicleKind::Goods`.
    GoodsVehicle => NormalDriveStrategy, constructor: pub(crate)
}

strategy_vehicle! {
    /// Passenger carrier; drives normally. Reach it through
    /// `VehicleKind::Passenger`.
    PassengerVehicle => NormalDriveStrategy, constructor: pub(crate)
}

strategy_vehicle! {
    /// Sports car; drives sportily. Reach it through `VehicleKind::Sports`.
    SportsVehicle => SportsDriveStrategy, constructor: pub(crate)
}

strategy_vehicle! {
    /// Off-road vehicle; shares the sports strategy. The only vehicle
    /// constructible outside the crate.
    OffRoadVehicle => SportsDriveStrategy, constructor: pub
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of(vehicle: &Vehicle) -> String {
        let mut out = Vec::new();
        vehicle.drive_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn goods_and_passenger_drive_normally() {
        assert_eq!(line_of(&GoodsVehicle::new()), "Normal drive capability\n");
        assert_eq!(line_of(&PassengerVehicle::new()), "Normal drive capability\n");
    }

    #[test]
    fn sports_and_off_road_drive_sportily() {
        assert_eq!(line_of(&SportsVehicle::new()), "Sports drive capability\n");
        assert_eq!(line_of(&OffRoadVehicle::new()), "Sports drive capability\n");
    }

    #[test]
    fn converts_into_base_vehicle() {
        let base: Vehicle = OffRoadVehicle::new().into();
        assert_eq!(base.strategy_name(), "Sports");
    }
}

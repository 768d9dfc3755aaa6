//! Property-based tests for vehicle behavior.
//!
//! These tests use proptest to verify that driving is deterministic and
//! that each vehicle kind always produces its own line.

use drive_strategy::fleet::VehicleKind;
use drive_strategy::journal::{DriveLog, DriveRecord};
use drive_strategy::showcase;
use drive_strategy::strategy::{DriveStyle, NormalDriveStrategy, SportsDriveStrategy};
use drive_strategy::with_strategy::VehicleBuilder;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_kind()(index in 0..VehicleKind::ALL.len()) -> VehicleKind {
        VehicleKind::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_style()(sporty in any::<bool>()) -> DriveStyle {
        if sporty {
            DriveStyle::Sports
        } else {
            DriveStyle::Normal
        }
    }
}

fn drive_lines(kinds: &[VehicleKind]) -> Vec<String> {
    let mut out = Vec::new();
    showcase::drive_all(kinds, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

proptest! {
    #[test]
    fn drive_is_idempotent(kind in arbitrary_kind(), times in 1..8usize) {
        let vehicle = kind.build();
        let mut out = Vec::new();
        for _ in 0..times {
            vehicle.drive_to(&mut out).unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), times);
        prop_assert!(lines.iter().all(|line| *line == vehicle.message()));
    }

    #[test]
    fn output_follows_invocation_order(
        kinds in prop::collection::vec(arbitrary_kind(), 0..12)
    ) {
        let lines = drive_lines(&kinds);
        let expected: Vec<String> = kinds
            .iter()
            .map(|kind| kind.build().message().to_string())
            .collect();
        prop_assert_eq!(lines, expected);
    }

    #[test]
    fn composed_vehicles_match_their_style(kind in arbitrary_kind()) {
        let vehicle = kind.build();
        match kind.drive_style() {
            Some(DriveStyle::Normal) => {
                prop_assert_eq!(vehicle.message(), NormalDriveStrategy::MESSAGE);
            }
            Some(DriveStyle::Sports) => {
                prop_assert_eq!(vehicle.message(), SportsDriveStrategy::MESSAGE);
            }
            None => {
                prop_assert!(vehicle.message().ends_with("driving"));
            }
        }
    }

    #[test]
    fn builder_vehicle_matches_style(style in arbitrary_style()) {
        let vehicle = VehicleBuilder::new().style(style).build().unwrap();
        prop_assert_eq!(vehicle.message(), style.message());
    }

    #[test]
    fn journal_record_is_pure(kind in arbitrary_kind()) {
        let log = DriveLog::new();
        let updated = log.record(DriveRecord::now(kind.name(), kind.build().message()));

        // Original journal unchanged
        prop_assert_eq!(log.records().len(), 0);
        prop_assert_eq!(updated.records().len(), 1);
    }

    #[test]
    fn kind_roundtrip_serialization(kind in arbitrary_kind()) {
        let json = serde_json::to_string(&kind).unwrap();
        let deserialized: VehicleKind = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(kind, deserialized);
    }
}

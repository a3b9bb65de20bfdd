//! Tests for error types

use lotkeeper::core::{AllocationError, SpaceCategory, VehicleKind};

#[test]
fn test_invalid_vehicle_kind_error() {
    let err = AllocationError::InvalidVehicleKind(9);
    assert_eq!(format!("{}", err), "invalid vehicle kind: 9");
}

#[test]
fn test_invalid_space_category_error() {
    let err = AllocationError::InvalidSpaceCategory(7);
    assert_eq!(format!("{}", err), "invalid space category: 7");
}

#[test]
fn test_incompatible_space_error() {
    let err = AllocationError::IncompatibleSpace {
        kind: VehicleKind::Van,
        category: SpaceCategory::Motorcycle,
    };
    assert_eq!(
        format!("{}", err),
        "van: space category motorcycle not allowed"
    );
}

#[test]
fn test_no_space_available_error() {
    let err = AllocationError::NoSpaceAvailable;
    assert_eq!(format!("{}", err), "no space available");
}

#[test]
fn test_plate_generation_error() {
    let err = AllocationError::PlateGeneration("entropy exhausted".to_string());
    assert_eq!(
        format!("{}", err),
        "plate generation failed: entropy exhausted"
    );
}

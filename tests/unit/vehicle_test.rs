//! Tests for vehicle descriptors and plate minting

use lotkeeper::core::{
    AllocationError, PlateSource, SpaceCategory, Vehicle, VehicleKind,
};

#[test]
fn test_factories_set_kind_and_start_unparked() {
    let car = Vehicle::car().unwrap();
    assert_eq!(car.kind(), VehicleKind::Car);
    assert_eq!(car.current_category(), SpaceCategory::NotParked);

    let motorcycle = Vehicle::motorcycle().unwrap();
    assert_eq!(motorcycle.kind(), VehicleKind::Motorcycle);

    let van = Vehicle::van().unwrap();
    assert_eq!(van.kind(), VehicleKind::Van);
}

#[test]
fn test_uuid_plates_are_unique_tokens() {
    let a = Vehicle::car().unwrap();
    let b = Vehicle::car().unwrap();
    assert_eq!(a.plate().len(), 36);
    assert_eq!(b.plate().len(), 36);
    assert_ne!(a.plate(), b.plate());
}

struct FailingPlates;

impl PlateSource for FailingPlates {
    fn mint(&mut self) -> Result<String, AllocationError> {
        Err(AllocationError::PlateGeneration("rng unavailable".into()))
    }
}

#[test]
fn test_plate_source_failure_produces_no_descriptor() {
    let err = Vehicle::with_plate_from(VehicleKind::Van, &mut FailingPlates)
        .expect_err("minting failed");
    assert!(matches!(err, AllocationError::PlateGeneration(_)));
}

#[test]
fn test_compatibility_by_kind() {
    let car = Vehicle::car().unwrap();
    assert!(car.compatible(SpaceCategory::Car));
    assert!(car.compatible(SpaceCategory::BigCar));
    assert!(!car.compatible(SpaceCategory::Motorcycle));
    assert!(!car.compatible(SpaceCategory::NotParked));

    let van = Vehicle::van().unwrap();
    assert!(van.compatible(SpaceCategory::Car));
    assert!(van.compatible(SpaceCategory::BigCar));
    assert!(!van.compatible(SpaceCategory::Motorcycle));
    assert!(!van.compatible(SpaceCategory::NotParked));

    let motorcycle = Vehicle::motorcycle().unwrap();
    assert!(motorcycle.compatible(SpaceCategory::Car));
    assert!(motorcycle.compatible(SpaceCategory::Motorcycle));
    assert!(motorcycle.compatible(SpaceCategory::BigCar));
    assert!(!motorcycle.compatible(SpaceCategory::NotParked));
}

#[test]
fn test_assign_succeeds_only_inside_compatibility_set() {
    let mut van = Vehicle::van().unwrap();

    let err = van.assign(SpaceCategory::Motorcycle).expect_err("vans never fit");
    assert!(matches!(
        err,
        AllocationError::IncompatibleSpace {
            kind: VehicleKind::Van,
            category: SpaceCategory::Motorcycle,
        }
    ));
    assert_eq!(van.current_category(), SpaceCategory::NotParked);

    van.assign(SpaceCategory::BigCar).expect("vans fit oversized spaces");
    assert_eq!(van.current_category(), SpaceCategory::BigCar);

    // A failed re-assignment leaves the previous assignment in place.
    van.assign(SpaceCategory::NotParked).expect_err("the sentinel is unassignable");
    assert_eq!(van.current_category(), SpaceCategory::BigCar);
}

#[test]
fn test_occupancy_cost_rules() {
    let mut van = Vehicle::van().unwrap();
    assert_eq!(van.occupancy_cost(), 1);

    van.assign(SpaceCategory::Car).unwrap();
    assert_eq!(van.occupancy_cost(), 3);

    van.assign(SpaceCategory::BigCar).unwrap();
    assert_eq!(van.occupancy_cost(), 1);

    let mut car = Vehicle::car().unwrap();
    car.assign(SpaceCategory::Car).unwrap();
    assert_eq!(car.occupancy_cost(), 1);

    let mut motorcycle = Vehicle::motorcycle().unwrap();
    motorcycle.assign(SpaceCategory::Car).unwrap();
    assert_eq!(motorcycle.occupancy_cost(), 1);
}

#[test]
fn test_kind_and_category_serialize_snake_case() {
    assert_eq!(serde_json::to_string(&VehicleKind::Van).unwrap(), "\"van\"");
    assert_eq!(
        serde_json::to_string(&SpaceCategory::BigCar).unwrap(),
        "\"big_car\""
    );
    let decoded: SpaceCategory = serde_json::from_str("\"not_parked\"").unwrap();
    assert_eq!(decoded, SpaceCategory::NotParked);
}

#[test]
fn test_kind_decoding_boundaries() {
    assert_eq!(VehicleKind::try_from(0).unwrap(), VehicleKind::Car);
    assert_eq!(VehicleKind::try_from(1).unwrap(), VehicleKind::Motorcycle);
    assert_eq!(VehicleKind::try_from(2).unwrap(), VehicleKind::Van);
    assert!(matches!(
        VehicleKind::try_from(3),
        Err(AllocationError::InvalidVehicleKind(3))
    ));
}

#[test]
fn test_category_decoding_boundaries() {
    assert_eq!(SpaceCategory::try_from(0).unwrap(), SpaceCategory::NotParked);
    assert_eq!(SpaceCategory::try_from(1).unwrap(), SpaceCategory::Car);
    assert_eq!(SpaceCategory::try_from(2).unwrap(), SpaceCategory::Motorcycle);
    assert_eq!(SpaceCategory::try_from(3).unwrap(), SpaceCategory::BigCar);
    assert!(matches!(
        SpaceCategory::try_from(4),
        Err(AllocationError::InvalidSpaceCategory(4))
    ));
    assert!(!SpaceCategory::NotParked.is_assignable());
    assert!(SpaceCategory::BigCar.is_assignable());
}

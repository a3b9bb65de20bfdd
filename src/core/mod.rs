//! Core space model, vehicle descriptors, and the allocation engine.

pub mod audit;
pub mod error;
pub mod facility;
pub mod space;
pub mod vehicle;

pub use audit::{build_parking_event, AuditSink, InMemoryAuditSink, ParkingEvent};
pub use error::{AllocationError, AppResult};
pub use facility::Facility;
pub use space::{SpaceCategory, VehicleKind};
pub use vehicle::{PlateSource, UuidPlateSource, Vehicle, VehicleHandle};

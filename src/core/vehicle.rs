//! Vehicle descriptors and plate minting.

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::core::error::AllocationError;
use crate::core::space::{SpaceCategory, VehicleKind};

/// Mints globally unique plate identifiers for new descriptors.
///
/// The allocation engine never constructs descriptors itself; plates come
/// from outside. Implementations may fail, in which case no descriptor is
/// produced.
pub trait PlateSource {
    /// Produce a fresh, globally unique plate.
    fn mint(&mut self) -> Result<String, AllocationError>;
}

/// Default plate source backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidPlateSource;

impl PlateSource for UuidPlateSource {
    fn mint(&mut self) -> Result<String, AllocationError> {
        Ok(Uuid::new_v4().to_string())
    }
}

/// Shared handle to a vehicle descriptor.
///
/// The facility keeps one clone in its parked list; the creator keeps
/// another and can read the descriptor after parking. Assignment is
/// engine-controlled: only [`crate::core::Facility::park`] mutates a parked
/// descriptor, under this handle's lock.
pub type VehicleHandle = Arc<Mutex<Vehicle>>;

/// A vehicle descriptor: immutable identity plus the current assignment.
///
/// Compatibility and occupancy cost are selected by the `kind` field; the
/// kinds form a closed set, so a match on kind replaces any subclass
/// dispatch.
#[derive(Debug, Clone)]
pub struct Vehicle {
    plate: String,
    kind: VehicleKind,
    current: SpaceCategory,
}

impl Vehicle {
    /// Create a descriptor with a plate minted from the given source.
    ///
    /// # Errors
    ///
    /// Propagates [`AllocationError::PlateGeneration`] from the source.
    pub fn with_plate_from(
        kind: VehicleKind,
        plates: &mut dyn PlateSource,
    ) -> Result<Self, AllocationError> {
        let plate = plates.mint()?;
        Ok(Self {
            plate,
            kind,
            current: SpaceCategory::NotParked,
        })
    }

    /// Create a car descriptor with a UUID plate.
    ///
    /// # Errors
    ///
    /// Fails with [`AllocationError::PlateGeneration`] if minting fails.
    pub fn car() -> Result<Self, AllocationError> {
        Self::with_plate_from(VehicleKind::Car, &mut UuidPlateSource)
    }

    /// Create a motorcycle descriptor with a UUID plate.
    ///
    /// # Errors
    ///
    /// Fails with [`AllocationError::PlateGeneration`] if minting fails.
    pub fn motorcycle() -> Result<Self, AllocationError> {
        Self::with_plate_from(VehicleKind::Motorcycle, &mut UuidPlateSource)
    }

    /// Create a van descriptor with a UUID plate.
    ///
    /// # Errors
    ///
    /// Fails with [`AllocationError::PlateGeneration`] if minting fails.
    pub fn van() -> Result<Self, AllocationError> {
        Self::with_plate_from(VehicleKind::Van, &mut UuidPlateSource)
    }

    /// Wrap the descriptor in a shared handle for parking.
    #[must_use]
    pub fn into_handle(self) -> VehicleHandle {
        Arc::new(Mutex::new(self))
    }

    /// Plate identifier, fixed at creation.
    #[must_use]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Kind of vehicle, constant for the descriptor's life.
    #[must_use]
    pub const fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Current assignment; [`SpaceCategory::NotParked`] until parked.
    #[must_use]
    pub const fn current_category(&self) -> SpaceCategory {
        self.current
    }

    /// Whether this vehicle may occupy the given category. Pure.
    ///
    /// Cars and vans tolerate `{Car, BigCar}`; motorcycles tolerate any
    /// assignable category. Nothing is compatible with the sentinel.
    #[must_use]
    pub const fn compatible(&self, category: SpaceCategory) -> bool {
        match self.kind {
            VehicleKind::Car | VehicleKind::Van => {
                matches!(category, SpaceCategory::Car | SpaceCategory::BigCar)
            }
            VehicleKind::Motorcycle => matches!(
                category,
                SpaceCategory::Car | SpaceCategory::Motorcycle | SpaceCategory::BigCar
            ),
        }
    }

    /// Commit the descriptor to a category. The only mutator.
    ///
    /// # Errors
    ///
    /// Fails with [`AllocationError::IncompatibleSpace`] and leaves the
    /// assignment unchanged when the category is outside the compatibility
    /// set.
    pub fn assign(&mut self, category: SpaceCategory) -> Result<(), AllocationError> {
        if !self.compatible(category) {
            return Err(AllocationError::IncompatibleSpace {
                kind: self.kind,
                category,
            });
        }
        self.current = category;
        Ok(())
    }

    /// Capacity units this vehicle consumes in its assigned category.
    ///
    /// Always 1, except a van squeezed into a regular car space, which
    /// consumes three car-space units.
    #[must_use]
    pub const fn occupancy_cost(&self) -> u32 {
        match (self.kind, self.current) {
            (VehicleKind::Van, SpaceCategory::Car) => 3,
            _ => 1,
        }
    }
}

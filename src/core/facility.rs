//! The allocation engine: per-category capacity accounting and best-fit
//! space selection.

use std::sync::Arc;

use crate::core::audit::{build_parking_event, AuditSink};
use crate::core::error::AllocationError;
use crate::core::space::{SpaceCategory, VehicleKind};
use crate::core::vehicle::{Vehicle, VehicleHandle};
use crate::util::clock::now_ms;

/// Fixed priority order for the fallback scan when a vehicle's default
/// category is exhausted.
const SCAN_ORDER: [SpaceCategory; 3] = [
    SpaceCategory::Car,
    SpaceCategory::BigCar,
    SpaceCategory::Motorcycle,
];

/// Capacity units tracked per assignable category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CategoryUnits {
    car: u32,
    motorcycle: u32,
    big_car: u32,
}

impl CategoryUnits {
    const fn get(self, category: SpaceCategory) -> Option<u32> {
        match category {
            SpaceCategory::Car => Some(self.car),
            SpaceCategory::Motorcycle => Some(self.motorcycle),
            SpaceCategory::BigCar => Some(self.big_car),
            SpaceCategory::NotParked => None,
        }
    }

    fn add(&mut self, category: SpaceCategory, units: u32) {
        match category {
            SpaceCategory::Car => self.car += units,
            SpaceCategory::Motorcycle => self.motorcycle += units,
            SpaceCategory::BigCar => self.big_car += units,
            // Selection never yields the sentinel.
            SpaceCategory::NotParked => {}
        }
    }

    const fn total(self) -> u32 {
        self.car + self.motorcycle + self.big_car
    }
}

/// Allocation engine for one parking facility.
///
/// Owns per-category capacity and occupancy counters plus the ordered list
/// of parked vehicle handles (arrival order, aggregate queries only). The
/// engine is synchronous and single-writer: [`Facility::park`] is a
/// read-then-write sequence, so callers sharing a facility across threads
/// must wrap the whole value in one exclusive lock.
pub struct Facility {
    capacity: CategoryUnits,
    occupied: CategoryUnits,
    parked: Vec<VehicleHandle>,
    audit: Option<Box<dyn AuditSink>>,
}

impl Facility {
    /// Create a facility with fixed per-category capacities.
    ///
    /// Capacities are taken as given; zero means no spaces in that category.
    #[must_use]
    pub fn new(car_spaces: u32, motorcycle_spaces: u32, big_car_spaces: u32) -> Self {
        Self {
            capacity: CategoryUnits {
                car: car_spaces,
                motorcycle: motorcycle_spaces,
                big_car: big_car_spaces,
            },
            occupied: CategoryUnits::default(),
            parked: Vec::new(),
            audit: None,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Sum of the per-category capacities. Fixed at construction.
    #[must_use]
    pub const fn total_capacity(&self) -> u32 {
        self.capacity.total()
    }

    /// Sum of the per-category occupancy counters.
    #[must_use]
    pub const fn total_occupied(&self) -> u32 {
        self.occupied.total()
    }

    /// Total capacity minus total occupancy, floored at zero.
    #[must_use]
    pub const fn available_total(&self) -> u32 {
        self.total_capacity().saturating_sub(self.total_occupied())
    }

    /// Remaining units in the default category for a vehicle kind.
    #[must_use]
    pub fn available_for_kind(&self, kind: VehicleKind) -> u32 {
        self.remaining(kind.default_category()).unwrap_or_default()
    }

    /// Remaining units in the named category.
    ///
    /// # Errors
    ///
    /// Fails with [`AllocationError::InvalidSpaceCategory`] for the
    /// unassignable [`SpaceCategory::NotParked`] sentinel.
    pub fn available_by_category(
        &self,
        category: SpaceCategory,
    ) -> Result<u32, AllocationError> {
        self.remaining(category)
            .ok_or(AllocationError::InvalidSpaceCategory(category as u8))
    }

    /// Sum of occupancy cost over parked vehicles of the given kind,
    /// regardless of which category they ended up in. Zero for no matches.
    #[must_use]
    pub fn occupied_by_kind(&self, kind: VehicleKind) -> u32 {
        let mut units = 0;
        for handle in &self.parked {
            let vehicle = handle.lock();
            if vehicle.kind() == kind {
                units += vehicle.occupancy_cost();
            }
        }
        units
    }

    /// Whether no vehicle is parked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parked.is_empty()
    }

    /// Whether total occupancy exactly equals total capacity.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.total_occupied() == self.total_capacity()
    }

    /// Pick the best category for a vehicle: its default category if that
    /// has room, otherwise the first compatible category with room in the
    /// fixed scan order.
    ///
    /// The facility-full gate lives in [`Facility::park`], not here.
    ///
    /// # Errors
    ///
    /// Fails with [`AllocationError::NoSpaceAvailable`] when no compatible
    /// category has room.
    pub fn best_available_space(
        &self,
        vehicle: &Vehicle,
    ) -> Result<SpaceCategory, AllocationError> {
        let default = vehicle.kind().default_category();
        if self.available_by_category(default)? > 0 {
            return Ok(default);
        }

        for category in SCAN_ORDER {
            if vehicle.compatible(category) && self.available_by_category(category)? > 0 {
                tracing::debug!(
                    kind = %vehicle.kind(),
                    category = %category,
                    "default category exhausted, falling back"
                );
                return Ok(category);
            }
        }

        Err(AllocationError::NoSpaceAvailable)
    }

    /// Park a vehicle: gate on fullness, select the best category, commit
    /// the assignment, then account for it.
    ///
    /// A failed assignment leaves the counters and the parked list
    /// untouched. On success the handle joins the parked list and the
    /// assigned category's counter grows by the vehicle's occupancy cost.
    ///
    /// # Errors
    ///
    /// Fails with [`AllocationError::NoSpaceAvailable`] when the facility or
    /// every compatible category is at capacity, and propagates
    /// [`AllocationError::IncompatibleSpace`] from the descriptor rather
    /// than swallowing it.
    pub fn park(&mut self, handle: &VehicleHandle) -> Result<SpaceCategory, AllocationError> {
        let mut vehicle = handle.lock();

        if self.is_full() {
            tracing::warn!(plate = vehicle.plate(), "park rejected: facility full");
            self.record_reject(vehicle.plate(), "facility full");
            return Err(AllocationError::NoSpaceAvailable);
        }

        let target = match self.best_available_space(&vehicle) {
            Ok(target) => target,
            Err(err) => {
                tracing::warn!(
                    plate = vehicle.plate(),
                    kind = %vehicle.kind(),
                    %err,
                    "park rejected"
                );
                self.record_reject(vehicle.plate(), &err.to_string());
                return Err(err);
            }
        };

        vehicle.assign(target)?;

        let cost = vehicle.occupancy_cost();
        let plate = vehicle.plate().to_owned();
        let kind = vehicle.kind();
        drop(vehicle);

        self.parked.push(Arc::clone(handle));
        self.occupied.add(target, cost);

        tracing::info!(plate = %plate, kind = %kind, category = %target, cost, "vehicle parked");
        self.record(&plate, "park", target, None);

        Ok(target)
    }

    fn remaining(&self, category: SpaceCategory) -> Option<u32> {
        let capacity = self.capacity.get(category)?;
        let occupied = self.occupied.get(category)?;
        Some(capacity.saturating_sub(occupied))
    }

    fn record(
        &mut self,
        plate: &str,
        action: &str,
        category: SpaceCategory,
        detail: Option<String>,
    ) {
        if let Some(sink) = self.audit.as_mut() {
            sink.record(build_parking_event(
                format!("{plate}-{action}-{}", now_ms()),
                plate,
                action,
                category,
                detail,
            ));
        }
    }

    fn record_reject(&mut self, plate: &str, reason: &str) {
        self.record(plate, "reject", SpaceCategory::NotParked, Some(reason.to_owned()));
    }
}

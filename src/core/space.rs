//! Space categories and vehicle kinds.
//!
//! Both enums are closed sets with fixed `u8` discriminants. Untrusted
//! numeric values enter through `TryFrom<u8>`, which is where out-of-range
//! values are rejected; once a value is an enum it is in range by
//! construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::AllocationError;

/// Kinds of physical space a facility offers, plus a sentinel for vehicles
/// that have no assignment yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SpaceCategory {
    /// No assignment yet. Never a valid target for allocation.
    NotParked = 0,
    /// Regular car space.
    Car = 1,
    /// Motorcycle space.
    Motorcycle = 2,
    /// Oversized space for vans and big cars.
    BigCar = 3,
}

impl SpaceCategory {
    /// Whether a vehicle can be assigned to this category at all.
    #[must_use]
    pub const fn is_assignable(self) -> bool {
        !matches!(self, Self::NotParked)
    }
}

impl TryFrom<u8> for SpaceCategory {
    type Error = AllocationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotParked),
            1 => Ok(Self::Car),
            2 => Ok(Self::Motorcycle),
            3 => Ok(Self::BigCar),
            other => Err(AllocationError::InvalidSpaceCategory(other)),
        }
    }
}

impl fmt::Display for SpaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotParked => "not_parked",
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::BigCar => "big_car",
        };
        f.write_str(name)
    }
}

/// Class of vehicle being parked. Determines default category,
/// compatibility, and occupancy cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum VehicleKind {
    /// Regular car.
    Car = 0,
    /// Motorcycle.
    Motorcycle = 1,
    /// Van.
    Van = 2,
}

impl VehicleKind {
    /// The category a vehicle of this kind parks into when it has room.
    #[must_use]
    pub const fn default_category(self) -> SpaceCategory {
        match self {
            Self::Car => SpaceCategory::Car,
            Self::Motorcycle => SpaceCategory::Motorcycle,
            Self::Van => SpaceCategory::BigCar,
        }
    }
}

impl TryFrom<u8> for VehicleKind {
    type Error = AllocationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Car),
            1 => Ok(Self::Motorcycle),
            2 => Ok(Self::Van),
            other => Err(AllocationError::InvalidVehicleKind(other)),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::Van => "van",
        };
        f.write_str(name)
    }
}

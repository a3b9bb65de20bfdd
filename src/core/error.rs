//! Error types for allocation operations.

use thiserror::Error;

use crate::core::space::{SpaceCategory, VehicleKind};

/// Errors produced by vehicle descriptors and the allocation engine.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// A kind value outside the known vehicle kinds.
    #[error("invalid vehicle kind: {0}")]
    InvalidVehicleKind(u8),
    /// A category value outside the space categories, or the unassigned
    /// sentinel where an assignable category is required.
    #[error("invalid space category: {0}")]
    InvalidSpaceCategory(u8),
    /// A descriptor rejected an assignment outside its compatibility set.
    #[error("{kind}: space category {category} not allowed")]
    IncompatibleSpace {
        /// Kind of the vehicle that rejected the assignment.
        kind: VehicleKind,
        /// Category the vehicle was asked to take.
        category: SpaceCategory,
    },
    /// The facility, or every compatible category, is at capacity.
    #[error("no space available")]
    NoSpaceAvailable,
    /// Plate minting failed; no descriptor was produced.
    #[error("plate generation failed: {0}")]
    PlateGeneration(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;

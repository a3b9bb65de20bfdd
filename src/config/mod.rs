//! Configuration models for facility construction.

/// Facility configuration structures.
pub mod facility;

pub use facility::{AuditBackendConfig, FacilityConfig};

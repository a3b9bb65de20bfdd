//! Construct a facility from configuration.

use crate::config::{AuditBackendConfig, FacilityConfig};
use crate::core::{Facility, InMemoryAuditSink};

/// Build a facility from configuration, wiring the configured audit sink.
#[must_use]
pub fn build_facility(cfg: &FacilityConfig) -> Facility {
    let facility = Facility::new(cfg.car_spaces, cfg.motorcycle_spaces, cfg.big_car_spaces);
    match cfg.audit {
        AuditBackendConfig::Disabled => facility,
        AuditBackendConfig::InMemory { max_events } => {
            facility.with_audit(Box::new(InMemoryAuditSink::new(max_events)))
        }
    }
}

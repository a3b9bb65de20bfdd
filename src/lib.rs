//! # Lotkeeper
//!
//! A space allocation engine for parking facilities.
//!
//! This library models a facility with a fixed inventory of space categories,
//! a set of vehicles that may occupy those spaces under compatibility rules,
//! and a deterministic best-fit algorithm that assigns each arriving vehicle
//! to a space category and commits the assignment.
//!
//! ## Core Problem Solved
//!
//! Parking capacity is not one number. A facility offers distinct space
//! categories, vehicles differ in which categories they tolerate, and some
//! pairings consume more capacity than others:
//!
//! - **Compatibility**: a van never fits a motorcycle space, while a
//!   motorcycle fits anywhere
//! - **Cost-weighted occupancy**: a van squeezed into a regular car space
//!   consumes three car-space units
//! - **Best-fit selection**: vehicles prefer their own category and only
//!   spill over when it is exhausted, keeping categories pure for as long
//!   as possible
//!
//! ## Key Features
//!
//! - **Per-category accounting**: capacity and occupancy tracked per space
//!   category, with aggregate and per-kind availability queries
//! - **Deterministic allocation**: default category first, then a fixed
//!   fallback scan; no randomness, no tie-breaking on arrival order
//! - **Shared vehicle handles**: parked descriptors stay readable by their
//!   creator while assignment remains engine-controlled
//! - **Audit trail**: optional in-memory sink recording committed parks and
//!   rejections
//!
//! ## Example
//!
//! ```rust
//! use lotkeeper::core::{AppResult, Facility, SpaceCategory, Vehicle};
//!
//! # fn main() -> AppResult<()> {
//! let mut facility = Facility::new(10, 20, 5);
//!
//! let car = Vehicle::car()?.into_handle();
//! let assigned = facility.park(&car)?;
//!
//! assert_eq!(assigned, SpaceCategory::Car);
//! assert_eq!(facility.total_occupied(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! For complete examples, see:
//! - `tests/allocation_test.rs` - Full allocation scenarios
//! - `README.md` - Comprehensive documentation

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core space model, vehicle descriptors, and the allocation engine.
pub mod core;
/// Configuration models for facility construction.
pub mod config;
/// Builders to construct a facility from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;

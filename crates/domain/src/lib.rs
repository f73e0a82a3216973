//! # dewflow-domain
//!
//! Pure domain model for the dewflow ventilation-baffle driver.
//!
//! ## Responsibilities
//! - Foundational types: numeric host identifiers, error conventions
//! - Define **Zones** (a monitored climate area: immutable configuration plus
//!   live dew-point state)
//! - Define the **Zone registry** (ordered zone collection with name, sensor
//!   variable, and inlet/outlet topology lookups)
//! - Dew-point and temperature-unit math
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod dewpoint;
pub mod registry;
pub mod units;
pub mod zone;

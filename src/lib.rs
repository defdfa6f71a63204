//! Warehouse slotting service.
//!
//! SKUs are scored by pick frequency, weight, size and inbound rate, mapped to
//! one of four zones and packed into a fixed rack grid per zone. An optional
//! external advisor can suggest zone reassignments.

pub mod advisor;
pub mod api;
pub mod config;
pub mod layout;
pub mod model;
pub mod normalizer;
pub mod registry;
pub mod samples;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod types;
pub mod warehouse;

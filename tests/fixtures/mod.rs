//! Test fixtures for service-route-planner.
//!
//! Provides realistic test data including:
//! - Real Warsaw locations grouped by district (zone)
//! - Builders for jobs and technicians

#![allow(dead_code)]

pub mod warsaw_locations;

pub use warsaw_locations::*;

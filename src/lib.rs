//! Field-service route planner
//!
//! Assigns pending jobs to technicians by zone eligibility and urgency,
//! sequences each technician's jobs into a travel-efficient route, scores
//! the routes, and reports quality problems for dispatch review.

pub mod builder;
pub mod directions;
pub mod haversine;
pub mod metrics;
pub mod model;
pub mod options;
pub mod preflight;
pub mod solver;
pub mod tables;
pub mod traits;
pub mod validator;

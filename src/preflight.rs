//! Input checks run before optimization.
//!
//! The heuristics assume finite coordinates and positive service times;
//! this stage rejects records that break those assumptions so the caller
//! can decide what to do with them.

use std::collections::HashSet;

use thiserror::Error;
use tracing::warn;

use crate::model::{GeoPoint, JobPoint, TechnicianProfile, TimeWindow};

const SECONDS_PER_DAY: i32 = 24 * 3600;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreflightError {
    #[error("invalid coordinates for {owner}: ({lat}, {lng})")]
    InvalidCoordinates { owner: String, lat: f64, lng: f64 },
    #[error("duplicate job id: {0}")]
    DuplicateJobId(String),
    #[error("job {job} has a service time of zero minutes")]
    NonPositiveServiceMinutes { job: String },
    #[error("invalid time window for {owner}")]
    InvalidTimeWindow { owner: String },
}

/// Validates technicians and jobs. Stops at the first problem found.
pub fn check(technicians: &[TechnicianProfile], jobs: &[JobPoint]) -> Result<(), PreflightError> {
    let result = check_all(technicians, jobs);
    if let Err(err) = &result {
        warn!(error = %err, "preflight rejected input");
    }
    result
}

fn check_all(technicians: &[TechnicianProfile], jobs: &[JobPoint]) -> Result<(), PreflightError> {
    for technician in technicians {
        let owner = format!("technician {}", technician.id);
        check_point(&owner, technician.home_location)?;
        check_window(&owner, technician.working_hours)?;
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(jobs.len());
    for job in jobs {
        if !seen.insert(job.id.as_str()) {
            return Err(PreflightError::DuplicateJobId(job.id.clone()));
        }
        let owner = format!("job {}", job.id);
        check_point(&owner, job.location)?;
        if job.service_minutes == Some(0) {
            return Err(PreflightError::NonPositiveServiceMinutes { job: job.id.clone() });
        }
        if let Some(window) = job.time_window {
            check_window(&owner, window)?;
        }
    }

    Ok(())
}

fn check_point(owner: &str, point: GeoPoint) -> Result<(), PreflightError> {
    let valid = point.lat.is_finite()
        && point.lng.is_finite()
        && (-90.0..=90.0).contains(&point.lat)
        && (-180.0..=180.0).contains(&point.lng);
    if valid {
        Ok(())
    } else {
        Err(PreflightError::InvalidCoordinates {
            owner: owner.to_string(),
            lat: point.lat,
            lng: point.lng,
        })
    }
}

fn check_window(owner: &str, window: TimeWindow) -> Result<(), PreflightError> {
    let valid = window.start_secs >= 0
        && window.end_secs <= SECONDS_PER_DAY
        && window.start_secs <= window.end_secs;
    if valid {
        Ok(())
    } else {
        Err(PreflightError::InvalidTimeWindow {
            owner: owner.to_string(),
        })
    }
}

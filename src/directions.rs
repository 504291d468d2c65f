//! Turns a route into ordered, human-readable directions for dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{GeoPoint, JobType, OptimizedRoute, TechnicianProfile, TimeWindow, Urgency};
use crate::tables::RoutingTables;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DirectionStep {
    Start {
        home: GeoPoint,
    },
    Stop {
        position: usize,
        job_id: String,
        address: String,
        zone: String,
        urgency: Urgency,
        job_type: JobType,
        service_minutes: u32,
        time_window: Option<TimeWindow>,
    },
    Return {
        home: GeoPoint,
    },
    Summary {
        jobs: usize,
        distance_km: f64,
        duration_minutes: f64,
        estimated_cost: f64,
    },
}

impl fmt::Display for DirectionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionStep::Start { home } => {
                write!(f, "Start from home ({:.5}, {:.5})", home.lat, home.lng)
            }
            DirectionStep::Stop {
                position,
                job_id,
                address,
                zone,
                urgency,
                job_type,
                service_minutes,
                time_window,
            } => {
                write!(f, "{}. ", position)?;
                if *urgency == Urgency::Urgent {
                    f.write_str("[URGENT] ")?;
                }
                let place = if address.is_empty() { job_id } else { address };
                write!(
                    f,
                    "{} ({}) - {} {}, ~{} min",
                    place, zone, urgency, job_type, service_minutes
                )?;
                if let Some(window) = time_window {
                    write!(f, ", window {}", window)?;
                }
                Ok(())
            }
            DirectionStep::Return { home } => {
                write!(f, "Return home ({:.5}, {:.5})", home.lat, home.lng)
            }
            DirectionStep::Summary {
                jobs,
                distance_km,
                duration_minutes,
                estimated_cost,
            } => write!(
                f,
                "Total: {} jobs, {:.1} km, {:.0} min, cost {:.2}",
                jobs, distance_km, duration_minutes, estimated_cost
            ),
        }
    }
}

/// Directions for `route`, starting and ending at the technician's home.
///
/// An empty route yields only the summary line.
pub fn render(
    route: &OptimizedRoute,
    technician: &TechnicianProfile,
    tables: &RoutingTables,
) -> Vec<DirectionStep> {
    let mut steps = Vec::with_capacity(route.len() + 3);

    if !route.is_empty() {
        steps.push(DirectionStep::Start {
            home: technician.home_location,
        });
        steps.extend(route.jobs.iter().enumerate().map(|(idx, job)| DirectionStep::Stop {
            position: idx + 1,
            job_id: job.id.clone(),
            address: job.address.clone(),
            zone: job.zone.clone(),
            urgency: job.urgency,
            job_type: job.job_type,
            service_minutes: tables.durations.service_minutes(job),
            time_window: job.time_window,
        }));
        steps.push(DirectionStep::Return {
            home: technician.home_location,
        });
    }

    steps.push(DirectionStep::Summary {
        jobs: route.len(),
        distance_km: route.total_distance_km,
        duration_minutes: route.total_duration_minutes,
        estimated_cost: route.estimated_cost,
    });
    steps
}

/// Plain-text lines for [`render`].
pub fn render_lines(
    route: &OptimizedRoute,
    technician: &TechnicianProfile,
    tables: &RoutingTables,
) -> Vec<String> {
    render(route, technician, tables)
        .iter()
        .map(ToString::to_string)
        .collect()
}

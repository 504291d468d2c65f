//! Single-technician route construction.
//!
//! Greedy nearest-neighbor: from the current position, always go to the
//! candidate with the lowest weighted score
//!
//! ```text
//! score = distance / zone_efficiency - priority_weight * urgency_bias
//! ```
//!
//! so closer jobs and more urgent jobs both win. The bias is bounded: an
//! urgent job jumps ahead of a closer one only while the travel-time gap is
//! smaller than the weight difference times the bias.
//!
//! # Complexity
//!
//! O(n²) where n = number of jobs handed to the technician.

use tracing::debug;

use crate::metrics::route_metrics;
use crate::model::{GeoPoint, JobPoint, OptimizedRoute, TechnicianProfile};
use crate::options::OptimizeOptions;
use crate::tables::RoutingTables;
use crate::traits::DistanceProvider;

/// Sequences `jobs` into a visiting order for `technician`.
///
/// Always succeeds. An empty job list yields a zero-valued route.
/// Travel time is zone-adjusted and expressed in hours, so each leg adds
/// `travel_time * 60` minutes plus the job's service minutes.
pub fn build_route<D: DistanceProvider>(
    technician: &TechnicianProfile,
    jobs: &[JobPoint],
    distances: &D,
    tables: &RoutingTables,
    options: &OptimizeOptions,
) -> OptimizedRoute {
    if jobs.is_empty() {
        return OptimizedRoute::empty(technician.id.clone());
    }

    let mut pool: Vec<&JobPoint> = jobs.iter().collect();
    let mut ordered: Vec<JobPoint> = Vec::with_capacity(jobs.len());
    let mut current = technician.home_location;
    let mut total_distance_km = 0.0;
    let mut total_duration_minutes = 0.0;

    while !pool.is_empty() {
        let (next_idx, leg) = pick_next(current, &pool, distances, tables, options);
        let job = pool.remove(next_idx);

        total_distance_km += leg.distance_km;
        total_duration_minutes +=
            leg.travel_time * 60.0 + f64::from(tables.durations.service_minutes(job));
        current = job.location;
        ordered.push(job.clone());
    }

    if let Some(last) = ordered.last() {
        let home = leg_to(current, technician.home_location, &last.zone, distances, tables);
        total_distance_km += home.distance_km;
        total_duration_minutes += home.travel_time * 60.0;
    }

    let metrics = route_metrics(
        &ordered,
        total_distance_km,
        total_duration_minutes,
        technician.vehicle_class,
        tables,
    );
    let zones_covered = ordered.iter().map(|job| job.zone.clone()).collect();

    debug!(
        technician = %technician.id,
        jobs = ordered.len(),
        distance_km = total_distance_km,
        duration_min = total_duration_minutes,
        efficiency = metrics.efficiency_score,
        "built route"
    );

    OptimizedRoute {
        technician_id: technician.id.clone(),
        jobs: ordered,
        total_distance_km,
        total_duration_minutes,
        efficiency_score: metrics.efficiency_score,
        zones_covered,
        estimated_cost: metrics.estimated_cost,
    }
}

#[derive(Debug, Clone, Copy)]
struct Leg {
    distance_km: f64,
    travel_time: f64,
}

fn leg_to<D: DistanceProvider>(
    from: GeoPoint,
    to: GeoPoint,
    zone: &str,
    distances: &D,
    tables: &RoutingTables,
) -> Leg {
    let distance_km = distances.distance_km(from, to);
    Leg {
        distance_km,
        travel_time: distance_km / tables.zones.efficiency(zone),
    }
}

/// Index of the best-scoring candidate in `pool` and the leg to reach it.
///
/// Ties keep the earliest candidate in pool order. `pool` must be non-empty.
fn pick_next<D: DistanceProvider>(
    current: GeoPoint,
    pool: &[&JobPoint],
    distances: &D,
    tables: &RoutingTables,
    options: &OptimizeOptions,
) -> (usize, Leg) {
    let mut best_idx = 0;
    let mut best_leg = leg_to(current, pool[0].location, &pool[0].zone, distances, tables);
    let mut best_score = candidate_score(pool[0], best_leg, tables, options);

    for (idx, job) in pool.iter().enumerate().skip(1) {
        let leg = leg_to(current, job.location, &job.zone, distances, tables);
        let score = candidate_score(job, leg, tables, options);
        if score < best_score {
            best_idx = idx;
            best_leg = leg;
            best_score = score;
        }
    }

    (best_idx, best_leg)
}

fn candidate_score(job: &JobPoint, leg: Leg, tables: &RoutingTables, options: &OptimizeOptions) -> f64 {
    leg.travel_time - tables.priorities.weight(job.urgency) * options.urgency_bias
}

//! Route scoring: efficiency and cost.
//!
//! Efficiency blends three 0..=1 ratios:
//! - time: share of the day spent on site rather than driving (weight 0.5)
//! - distance: jobs served per kilometre, capped at 1 (weight 0.3)
//! - priority: average priority weight over the top of the scale (weight 0.2)

use crate::model::{JobPoint, VehicleClass};
use crate::tables::RoutingTables;

const TIME_WEIGHT: f64 = 0.5;
const DISTANCE_WEIGHT: f64 = 0.3;
const PRIORITY_WEIGHT: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMetrics {
    pub efficiency_score: f64,
    pub estimated_cost: f64,
}

pub fn route_metrics(
    jobs: &[JobPoint],
    distance_km: f64,
    duration_minutes: f64,
    vehicle: VehicleClass,
    tables: &RoutingTables,
) -> RouteMetrics {
    RouteMetrics {
        efficiency_score: efficiency_score(jobs, distance_km, duration_minutes, tables),
        estimated_cost: estimated_cost(distance_km, duration_minutes, vehicle, tables),
    }
}

/// Composite 0..=1 quality score. Zero for a route without jobs.
pub fn efficiency_score(
    jobs: &[JobPoint],
    distance_km: f64,
    duration_minutes: f64,
    tables: &RoutingTables,
) -> f64 {
    if jobs.is_empty() {
        return 0.0;
    }

    let service_minutes: f64 = jobs
        .iter()
        .map(|job| f64::from(tables.durations.service_minutes(job)))
        .sum();
    let time_efficiency = ratio(service_minutes, duration_minutes).min(1.0);

    let distance_efficiency = ratio(jobs.len() as f64, distance_km).min(1.0);

    let average_weight = jobs
        .iter()
        .map(|job| tables.priorities.weight(job.urgency))
        .sum::<f64>()
        / jobs.len() as f64;
    let priority_efficiency = ratio(average_weight, tables.priorities.max_weight()).min(1.0);

    let score = TIME_WEIGHT * time_efficiency
        + DISTANCE_WEIGHT * distance_efficiency
        + PRIORITY_WEIGHT * priority_efficiency;
    score.clamp(0.0, 1.0)
}

/// Fuel for the distance driven plus labor for the time spent.
pub fn estimated_cost(
    distance_km: f64,
    duration_minutes: f64,
    vehicle: VehicleClass,
    tables: &RoutingTables,
) -> f64 {
    distance_km * tables.costs.fuel_per_km(vehicle)
        + (duration_minutes / 60.0) * tables.costs.hourly_labor_rate
}

/// `numerator / denominator`, or 0 when the denominator is not positive.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        (numerator / denominator).max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{JobType, Urgency};

    fn job(id: &str, urgency: Urgency) -> JobPoint {
        JobPoint::new(id, (52.23, 21.01), "Wola", urgency, JobType::Maintenance)
    }

    #[test]
    fn empty_route_scores_zero() {
        let tables = RoutingTables::default();
        assert_eq!(efficiency_score(&[], 0.0, 0.0, &tables), 0.0);
    }

    #[test]
    fn zero_distance_contributes_no_distance_efficiency() {
        let tables = RoutingTables::default();
        let jobs = vec![job("a", Urgency::Urgent)];
        // 60 service minutes over 60 minutes: time 1.0, distance 0, priority 1.0
        let score = efficiency_score(&jobs, 0.0, 60.0, &tables);
        assert!((score - 0.7).abs() < 1e-9, "got {}", score);
        assert!(score.is_finite());
    }

    #[test]
    fn score_combines_weighted_components() {
        let tables = RoutingTables::default();
        let jobs = vec![job("a", Urgency::Medium), job("b", Urgency::Low)];
        // time: 120 / 240 = 0.5, distance: 2 / 4 = 0.5, priority: 1.5 / 4 = 0.375
        let score = efficiency_score(&jobs, 4.0, 240.0, &tables);
        let expected = 0.5 * 0.5 + 0.3 * 0.5 + 0.2 * 0.375;
        assert!((score - expected).abs() < 1e-9, "got {}, expected {}", score, expected);
    }

    #[test]
    fn distance_efficiency_is_capped() {
        let tables = RoutingTables::default();
        let jobs = vec![job("a", Urgency::Urgent), job("b", Urgency::Urgent)];
        let score = efficiency_score(&jobs, 0.5, 120.0, &tables);
        assert!((score - 1.0).abs() < 1e-9, "got {}", score);
    }

    #[test]
    fn cost_uses_vehicle_fuel_rate_and_labor() {
        let tables = RoutingTables::default();
        // 10 km * 0.8 + 1.5 h * 80
        let van = estimated_cost(10.0, 90.0, VehicleClass::Van, &tables);
        assert!((van - 128.0).abs() < 1e-9);
        let moto = estimated_cost(10.0, 90.0, VehicleClass::Motorcycle, &tables);
        assert!((moto - 123.0).abs() < 1e-9);
    }

    #[test]
    fn custom_labor_rate_is_respected() {
        let mut tables = RoutingTables::default();
        tables.costs.hourly_labor_rate = 100.0;
        let cost = estimated_cost(0.0, 30.0, VehicleClass::Car, &tables);
        assert!((cost - 50.0).abs() < 1e-9);
    }
}

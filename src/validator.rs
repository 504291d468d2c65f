//! Post-hoc quality report for a set of routes.
//!
//! Never fails; every problem becomes an issue with a matching hint.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{JobPoint, OptimizedRoute, TechnicianProfile, Urgency};

/// Mean efficiency below this is reported.
pub const MIN_AVERAGE_EFFICIENCY: f64 = 0.6;
/// Largest tolerated spread between the busiest and idlest route.
pub const MAX_WORKLOAD_SPREAD: usize = 3;
/// Urgent jobs past this visiting index (0-based) are scheduled too late.
pub const LATEST_URGENT_INDEX: usize = 2;

const ISSUE_PENALTY: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub accuracy_score: f64,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn validate(
    routes: &[OptimizedRoute],
    original_jobs: &[JobPoint],
    technicians: &[TechnicianProfile],
) -> ValidationReport {
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    check_coverage(routes, original_jobs, technicians, &mut issues, &mut recommendations);
    check_efficiency(routes, &mut issues, &mut recommendations);
    check_balance(routes, &mut issues, &mut recommendations);
    check_urgent_placement(routes, &mut issues, &mut recommendations);

    let accuracy_score = (1.0 - ISSUE_PENALTY * issues.len() as f64).max(0.0);
    if !issues.is_empty() {
        warn!(issues = issues.len(), accuracy = accuracy_score, "route validation found issues");
    }

    ValidationReport {
        is_valid: issues.is_empty(),
        accuracy_score,
        issues,
        recommendations,
    }
}

fn check_coverage(
    routes: &[OptimizedRoute],
    original_jobs: &[JobPoint],
    technicians: &[TechnicianProfile],
    issues: &mut Vec<String>,
    recommendations: &mut Vec<String>,
) {
    let mut visits: HashMap<&str, usize> = HashMap::new();
    for job in routes.iter().flat_map(|route| route.jobs.iter()) {
        *visits.entry(job.id.as_str()).or_default() += 1;
    }

    let unassigned: Vec<&JobPoint> = original_jobs
        .iter()
        .filter(|job| !visits.contains_key(job.id.as_str()))
        .collect();
    if !unassigned.is_empty() {
        issues.push(format!("{} jobs were not assigned to any technician", unassigned.len()));
        recommendations.push(
            "Add technicians or raise the per-technician job limit to cover the remaining jobs"
                .to_string(),
        );

        let uncovered: BTreeSet<&str> = unassigned
            .iter()
            .filter(|job| !technicians.iter().any(|tech| tech.serves(&job.zone)))
            .map(|job| job.zone.as_str())
            .collect();
        if !uncovered.is_empty() {
            let zones: Vec<&str> = uncovered.into_iter().collect();
            recommendations.push(format!(
                "No technician is eligible for zones: {}",
                zones.join(", ")
            ));
        }

        let routed: BTreeSet<&str> = routes.iter().map(|r| r.technician_id.as_str()).collect();
        let idle: Vec<&str> = technicians
            .iter()
            .map(|tech| tech.id.as_str())
            .filter(|id| !routed.contains(id))
            .collect();
        if !idle.is_empty() {
            recommendations.push(format!(
                "Technicians without work could take more zones: {}",
                idle.join(", ")
            ));
        }
    }

    let duplicated: Vec<&str> = original_jobs
        .iter()
        .map(|job| job.id.as_str())
        .filter(|id| visits.get(id).is_some_and(|&count| count > 1))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if !duplicated.is_empty() {
        issues.push(format!(
            "{} jobs appear in more than one route: {}",
            duplicated.len(),
            duplicated.join(", ")
        ));
        recommendations.push("Each job must be dispatched to exactly one technician".to_string());
    }
}

fn check_efficiency(routes: &[OptimizedRoute], issues: &mut Vec<String>, recommendations: &mut Vec<String>) {
    if routes.is_empty() {
        return;
    }
    let average = routes.iter().map(|r| r.efficiency_score).sum::<f64>() / routes.len() as f64;
    if average < MIN_AVERAGE_EFFICIENCY {
        issues.push(format!("Average route efficiency is low ({:.0}%)", average * 100.0));
        recommendations.push(
            "Group jobs by zone or assign technicians closer to their jobs to cut travel time"
                .to_string(),
        );
    }
}

fn check_balance(routes: &[OptimizedRoute], issues: &mut Vec<String>, recommendations: &mut Vec<String>) {
    let counts = routes.iter().map(OptimizedRoute::len);
    let (Some(max), Some(min)) = (counts.clone().max(), counts.min()) else {
        return;
    };
    if max - min > MAX_WORKLOAD_SPREAD {
        issues.push(format!(
            "Workload is unbalanced: {} to {} jobs per technician",
            min, max
        ));
        recommendations.push(
            "Lower the per-technician job limit or widen eligible zones to spread work evenly"
                .to_string(),
        );
    }
}

fn check_urgent_placement(
    routes: &[OptimizedRoute],
    issues: &mut Vec<String>,
    recommendations: &mut Vec<String>,
) {
    let mut late = false;
    for route in routes {
        for (position, job) in route.jobs.iter().enumerate() {
            if job.urgency == Urgency::Urgent && position > LATEST_URGENT_INDEX {
                issues.push(format!(
                    "Urgent job {} is stop {} for technician {}",
                    job.id,
                    position + 1,
                    route.technician_id
                ));
                late = true;
            }
        }
    }
    if late {
        recommendations.push(
            "Move urgent jobs into the first three stops or dispatch them to another technician"
                .to_string(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobType;

    fn job(id: &str, urgency: Urgency) -> JobPoint {
        JobPoint::new(id, (52.23, 21.01), "Wola", urgency, JobType::Repair)
    }

    fn route(tech: &str, jobs: Vec<JobPoint>, efficiency: f64) -> OptimizedRoute {
        let mut route = OptimizedRoute::empty(tech);
        route.jobs = jobs;
        route.efficiency_score = efficiency;
        route
    }

    #[test]
    fn clean_routes_are_valid() {
        let jobs = vec![job("a", Urgency::High), job("b", Urgency::Low)];
        let routes = vec![route("t1", jobs.clone(), 0.8)];
        let report = validate(&routes, &jobs, &[]);
        assert!(report.is_valid);
        assert_eq!(report.accuracy_score, 1.0);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn reports_unassigned_jobs() {
        let jobs = vec![job("a", Urgency::High), job("b", Urgency::Low), job("c", Urgency::Low)];
        let routes = vec![route("t1", vec![jobs[0].clone()], 0.9)];
        let report = validate(&routes, &jobs, &[]);
        assert!(!report.is_valid);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].starts_with("2 jobs"));
        assert!((report.accuracy_score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn reports_duplicate_assignment() {
        let jobs = vec![job("a", Urgency::High)];
        let routes = vec![route("t1", jobs.clone(), 0.9), route("t2", jobs.clone(), 0.9)];
        let report = validate(&routes, &jobs, &[]);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].contains("more than one route"));
    }

    #[test]
    fn reports_low_average_efficiency() {
        let jobs = vec![job("a", Urgency::Low), job("b", Urgency::Low)];
        let routes = vec![
            route("t1", vec![jobs[0].clone()], 0.7),
            route("t2", vec![jobs[1].clone()], 0.4),
        ];
        let report = validate(&routes, &jobs, &[]);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].contains("efficiency"));
    }

    #[test]
    fn reports_workload_imbalance() {
        let busy: Vec<JobPoint> = (0..5).map(|i| job(&format!("b{}", i), Urgency::Low)).collect();
        let light = vec![job("l0", Urgency::Low)];
        let all: Vec<JobPoint> = busy.iter().chain(light.iter()).cloned().collect();
        let routes = vec![route("t1", busy, 0.9), route("t2", light, 0.9)];
        let report = validate(&routes, &all, &[]);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].contains("unbalanced"));
    }

    #[test]
    fn spread_of_three_is_tolerated() {
        let busy: Vec<JobPoint> = (0..4).map(|i| job(&format!("b{}", i), Urgency::Low)).collect();
        let light = vec![job("l0", Urgency::Low)];
        let all: Vec<JobPoint> = busy.iter().chain(light.iter()).cloned().collect();
        let routes = vec![route("t1", busy, 0.9), route("t2", light, 0.9)];
        assert!(validate(&routes, &all, &[]).is_valid);
    }

    #[test]
    fn reports_late_urgent_job() {
        let jobs = vec![
            job("a", Urgency::Low),
            job("b", Urgency::Low),
            job("c", Urgency::Urgent),
            job("d", Urgency::Urgent),
        ];
        let routes = vec![route("t1", jobs.clone(), 0.9)];
        let report = validate(&routes, &jobs, &[]);
        // "c" sits at index 2 and is fine; "d" at index 3 is late.
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].contains("Urgent job d"));
        assert_eq!(report.recommendations.len(), 1);
    }

    #[test]
    fn accuracy_never_negative() {
        let jobs: Vec<JobPoint> = (0..15).map(|i| job(&format!("u{}", i), Urgency::Urgent)).collect();
        let routes = vec![route("t1", jobs.clone(), 0.1)];
        let report = validate(&routes, &jobs, &[]);
        assert!(report.issues.len() > 10);
        assert_eq!(report.accuracy_score, 0.0);
    }

    #[test]
    fn names_idle_technicians_and_uncovered_zones() {
        let jobs = vec![
            JobPoint::new("a", (52.23, 21.01), "Wola", Urgency::Low, JobType::Repair),
            JobPoint::new("b", (52.23, 21.01), "Bemowo", Urgency::Low, JobType::Repair),
        ];
        let techs = vec![
            TechnicianProfile::new("t1", (52.23, 21.01)).with_zones(["Wola"]),
            TechnicianProfile::new("t2", (52.23, 21.01)).with_zones(["Ursus"]),
        ];
        let routes = vec![route("t1", vec![jobs[0].clone()], 0.9)];
        let report = validate(&routes, &jobs, &techs);
        assert_eq!(report.issues.len(), 1);
        assert!(report.recommendations.iter().any(|r| r.contains("Bemowo")));
        assert!(report.recommendations.iter().any(|r| r.ends_with("t2")));
    }
}

//! Assignment planner: distributes the job pool across technicians.
//!
//! Selection is sequential in the caller's technician order, so earlier
//! technicians get first pick of the highest-priority eligible jobs. Once
//! every technician's subset is fixed, the per-technician routes are
//! independent and may be built in parallel.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::builder;
use crate::haversine::Haversine;
use crate::model::{JobPoint, OptimizedRoute, TechnicianProfile};
use crate::options::OptimizeOptions;
use crate::preflight::{self, PreflightError};
use crate::tables::RoutingTables;
use crate::traits::DistanceProvider;

/// Optimization engine holding its configuration and distance model.
#[derive(Debug, Clone)]
pub struct RoutePlanner<D = Haversine> {
    distances: D,
    tables: RoutingTables,
    options: OptimizeOptions,
}

impl RoutePlanner<Haversine> {
    /// Planner with great-circle distances and the default tables.
    pub fn new(options: OptimizeOptions) -> Self {
        Self::with_distances(Haversine, RoutingTables::default(), options)
    }
}

impl Default for RoutePlanner<Haversine> {
    fn default() -> Self {
        Self::new(OptimizeOptions::default())
    }
}

impl<D: DistanceProvider> RoutePlanner<D> {
    pub fn with_distances(distances: D, tables: RoutingTables, options: OptimizeOptions) -> Self {
        Self {
            distances,
            tables,
            options,
        }
    }

    pub fn tables(&self) -> &RoutingTables {
        &self.tables
    }

    pub fn options(&self) -> &OptimizeOptions {
        &self.options
    }

    /// Assigns jobs to technicians and sequences each technician's route.
    ///
    /// Technicians that receive no jobs are left out of the result. Jobs
    /// that no technician can take stay unassigned; use
    /// [`crate::validator::validate`] to surface them. Routes come back
    /// sorted by efficiency, best first.
    pub fn assign(&self, technicians: &[TechnicianProfile], jobs: &[JobPoint]) -> Vec<OptimizedRoute> {
        let mut pool: Vec<&JobPoint> = jobs.iter().collect();
        if self.options.prioritize_urgent {
            pool.sort_by(|a, b| self.compare_priority(a, b));
        }

        let cap = self.options.max_jobs_per_technician;
        let mut batches: Vec<(&TechnicianProfile, Vec<JobPoint>)> = Vec::new();

        for technician in technicians {
            let mut selected: Vec<JobPoint> = Vec::new();
            pool.retain(|job| {
                if selected.len() < cap && technician.serves(&job.zone) {
                    selected.push((*job).clone());
                    false
                } else {
                    true
                }
            });

            if selected.is_empty() {
                debug!(technician = %technician.id, "no eligible jobs, skipping");
                continue;
            }

            debug!(
                technician = %technician.id,
                jobs = selected.len(),
                remaining = pool.len(),
                "selected jobs"
            );
            batches.push((technician, selected));
        }

        let mut routes: Vec<OptimizedRoute> = if self.options.parallel {
            batches
                .par_iter()
                .map(|(technician, selected)| self.build_route(technician, selected))
                .collect()
        } else {
            batches
                .iter()
                .map(|(technician, selected)| self.build_route(technician, selected))
                .collect()
        };

        routes.sort_by(|a, b| b.efficiency_score.total_cmp(&a.efficiency_score));

        info!(
            technicians = technicians.len(),
            jobs = jobs.len(),
            routes = routes.len(),
            unassigned = pool.len(),
            "optimization finished"
        );

        routes
    }

    /// Sequences a given job subset for one technician, without filtering.
    ///
    /// Unlike [`RoutePlanner::assign`], an empty job list still produces a
    /// (zero-valued) route.
    pub fn build_route(&self, technician: &TechnicianProfile, jobs: &[JobPoint]) -> OptimizedRoute {
        builder::build_route(technician, jobs, &self.distances, &self.tables, &self.options)
    }

    /// Validates the input, then runs [`RoutePlanner::assign`].
    pub fn plan(
        &self,
        technicians: &[TechnicianProfile],
        jobs: &[JobPoint],
    ) -> Result<Vec<OptimizedRoute>, PreflightError> {
        preflight::check(technicians, jobs)?;
        Ok(self.assign(technicians, jobs))
    }

    /// Higher urgency first, then shorter jobs first.
    fn compare_priority(&self, a: &JobPoint, b: &JobPoint) -> Ordering {
        let weight = |job: &JobPoint| self.tables.priorities.weight(job.urgency);
        let minutes = |job: &JobPoint| self.tables.durations.service_minutes(job);
        weight(b)
            .total_cmp(&weight(a))
            .then_with(|| minutes(a).cmp(&minutes(b)))
    }
}

/// Runs an optimization with great-circle distances and the default tables.
pub fn assign(
    technicians: &[TechnicianProfile],
    jobs: &[JobPoint],
    options: OptimizeOptions,
) -> Vec<OptimizedRoute> {
    RoutePlanner::new(options).assign(technicians, jobs)
}

/// Builds a single technician's route with the default tables.
pub fn build_route(
    technician: &TechnicianProfile,
    jobs: &[JobPoint],
    options: OptimizeOptions,
) -> OptimizedRoute {
    RoutePlanner::new(options).build_route(technician, jobs)
}

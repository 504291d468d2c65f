use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizeOptions {
    /// Upper bound on jobs handed to a single technician.
    pub max_jobs_per_technician: usize,
    /// Order the job pool by urgency before distributing it.
    pub prioritize_urgent: bool,
    /// Accepted but not enforced; time windows are advisory for now.
    pub respect_time_windows: bool,
    /// Accepted but not enforced; reserved for travel-minimizing passes.
    pub minimize_travel: bool,
    /// Travel-time bonus per unit of priority weight when picking the next stop.
    pub urgency_bias: f64,
    /// Build the per-technician routes on the rayon pool.
    pub parallel: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            max_jobs_per_technician: 8,
            prioritize_urgent: true,
            respect_time_windows: true,
            minimize_travel: true,
            urgency_bias: 5.0,
            parallel: true,
        }
    }
}

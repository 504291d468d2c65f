//! Static lookup tables that drive the routing heuristics.
//!
//! These are plain immutable values injected into the planner, so tests
//! and deployments can substitute their own tables without global state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{JobPoint, JobType, Urgency, VehicleClass};

/// Multiplier used for zones missing from the table.
pub const DEFAULT_ZONE_EFFICIENCY: f64 = 0.8;

/// Travel-efficiency multiplier per zone, in (0, 1]. Lower means more friction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneEfficiency {
    zones: BTreeMap<String, f64>,
    fallback: f64,
}

impl ZoneEfficiency {
    /// An empty table where every zone uses the default multiplier.
    pub fn uniform() -> Self {
        Self {
            zones: BTreeMap::new(),
            fallback: DEFAULT_ZONE_EFFICIENCY,
        }
    }

    pub fn with_zone(mut self, zone: impl Into<String>, efficiency: f64) -> Self {
        self.zones.insert(zone.into(), efficiency);
        self
    }

    /// Multiplier for `zone`. Never zero or negative.
    pub fn efficiency(&self, zone: &str) -> f64 {
        let value = self.zones.get(zone).copied().unwrap_or(self.fallback);
        if value.is_finite() && value > 0.0 {
            value.min(1.0)
        } else {
            DEFAULT_ZONE_EFFICIENCY
        }
    }
}

impl Default for ZoneEfficiency {
    /// Warsaw districts, the service area the planner was tuned for.
    fn default() -> Self {
        Self::uniform()
            .with_zone("Śródmieście", 0.6)
            .with_zone("Wola", 0.75)
            .with_zone("Mokotów", 0.75)
            .with_zone("Ochota", 0.8)
            .with_zone("Praga-Północ", 0.7)
            .with_zone("Praga-Południe", 0.8)
            .with_zone("Żoliborz", 0.85)
            .with_zone("Bielany", 0.9)
            .with_zone("Ursynów", 0.9)
            .with_zone("Wilanów", 0.9)
    }
}

/// Numeric weight per urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub urgent: f64,
}

impl PriorityWeights {
    pub fn weight(&self, urgency: Urgency) -> f64 {
        match urgency {
            Urgency::Low => self.low,
            Urgency::Medium => self.medium,
            Urgency::High => self.high,
            Urgency::Urgent => self.urgent,
        }
    }

    /// Highest weight on the scale, used to normalize averages to 0..=1.
    pub fn max_weight(&self) -> f64 {
        self.low.max(self.medium).max(self.high).max(self.urgent)
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            low: 1.0,
            medium: 2.0,
            high: 3.0,
            urgent: 4.0,
        }
    }
}

/// Expected on-site minutes per job type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobDurations {
    pub installation: u32,
    pub repair: u32,
    pub maintenance: u32,
    pub inspection: u32,
    pub emergency: u32,
}

impl JobDurations {
    pub fn minutes(&self, job_type: JobType) -> u32 {
        match job_type {
            JobType::Installation => self.installation,
            JobType::Repair => self.repair,
            JobType::Maintenance => self.maintenance,
            JobType::Inspection => self.inspection,
            JobType::Emergency => self.emergency,
        }
    }

    /// Service minutes for a job: its own override, else the type estimate.
    pub fn service_minutes(&self, job: &JobPoint) -> u32 {
        job.service_minutes.unwrap_or_else(|| self.minutes(job.job_type))
    }
}

impl Default for JobDurations {
    fn default() -> Self {
        Self {
            installation: 120,
            repair: 90,
            maintenance: 60,
            inspection: 45,
            emergency: 60,
        }
    }
}

/// Monetary rates used for cost estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRates {
    pub van_per_km: f64,
    pub car_per_km: f64,
    pub motorcycle_per_km: f64,
    pub hourly_labor_rate: f64,
}

impl CostRates {
    pub fn fuel_per_km(&self, vehicle: VehicleClass) -> f64 {
        match vehicle {
            VehicleClass::Van => self.van_per_km,
            VehicleClass::Car => self.car_per_km,
            VehicleClass::Motorcycle => self.motorcycle_per_km,
        }
    }
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            van_per_km: 0.8,
            car_per_km: 0.6,
            motorcycle_per_km: 0.3,
            hourly_labor_rate: 80.0,
        }
    }
}

/// All lookup tables the planner reads, bundled for injection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingTables {
    pub zones: ZoneEfficiency,
    pub priorities: PriorityWeights,
    pub durations: JobDurations,
    pub costs: CostRates,
}

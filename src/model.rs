//! Plain records exchanged with the surrounding CRM application.
//!
//! Jobs and technicians come in from the data layer; routes go back out.
//! Field names serialize as camelCase to match the CRM's JSON records.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// A clock-time interval, in seconds from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub start_secs: i32,
    pub end_secs: i32,
}

impl TimeWindow {
    pub const fn new(start_secs: i32, end_secs: i32) -> Self {
        Self {
            start_secs,
            end_secs,
        }
    }

    /// Builds a window from whole hours, e.g. `from_hours(8, 17)`.
    pub const fn from_hours(start: i32, end: i32) -> Self {
        Self::new(start * 3600, end * 3600)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start_secs / 3600,
            (self.start_secs % 3600) / 60,
            self.end_secs / 3600,
            (self.end_secs % 3600) / 60
        )
    }
}

/// Job urgency, ordered from least to most pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Urgent,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Installation,
    Repair,
    Maintenance,
    Inspection,
    Emergency,
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JobType::Installation => "installation",
            JobType::Repair => "repair",
            JobType::Maintenance => "maintenance",
            JobType::Inspection => "inspection",
            JobType::Emergency => "emergency",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Van,
    Car,
    Motorcycle,
}

/// One unit of dispatchable work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPoint {
    pub id: String,
    pub location: GeoPoint,
    pub address: String,
    pub zone: String,
    pub urgency: Urgency,
    pub job_type: JobType,
    /// Overrides the job-type duration estimate when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
}

impl JobPoint {
    pub fn new(
        id: impl Into<String>,
        location: impl Into<GeoPoint>,
        zone: impl Into<String>,
        urgency: Urgency,
        job_type: JobType,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            address: String::new(),
            zone: zone.into(),
            urgency,
            job_type,
            service_minutes: None,
            time_window: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_service_minutes(mut self, minutes: u32) -> Self {
        self.service_minutes = Some(minutes);
        self
    }

    pub fn with_time_window(mut self, window: TimeWindow) -> Self {
        self.time_window = Some(window);
        self
    }
}

/// One dispatchable worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianProfile {
    pub id: String,
    pub home_location: GeoPoint,
    /// Zones this technician may be routed into. Empty means no work.
    pub eligible_zones: BTreeSet<String>,
    pub working_hours: TimeWindow,
    pub vehicle_class: VehicleClass,
}

impl TechnicianProfile {
    pub fn new(id: impl Into<String>, home_location: impl Into<GeoPoint>) -> Self {
        Self {
            id: id.into(),
            home_location: home_location.into(),
            eligible_zones: BTreeSet::new(),
            working_hours: TimeWindow::from_hours(8, 17),
            vehicle_class: VehicleClass::Van,
        }
    }

    pub fn with_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.eligible_zones.extend(zones.into_iter().map(Into::into));
        self
    }

    pub fn with_vehicle(mut self, vehicle_class: VehicleClass) -> Self {
        self.vehicle_class = vehicle_class;
        self
    }

    pub fn with_working_hours(mut self, hours: TimeWindow) -> Self {
        self.working_hours = hours;
        self
    }

    pub fn serves(&self, zone: &str) -> bool {
        self.eligible_zones.contains(zone)
    }
}

/// The visiting order built for one technician, with its metrics.
///
/// Built once per optimization run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute {
    pub technician_id: String,
    pub jobs: Vec<JobPoint>,
    pub total_distance_km: f64,
    /// Travel plus service time, including the return leg home.
    pub total_duration_minutes: f64,
    pub efficiency_score: f64,
    pub zones_covered: BTreeSet<String>,
    pub estimated_cost: f64,
}

impl OptimizedRoute {
    /// A zero-valued route: no jobs, no distance, no cost.
    pub fn empty(technician_id: impl Into<String>) -> Self {
        Self {
            technician_id: technician_id.into(),
            jobs: Vec::new(),
            total_distance_km: 0.0,
            total_duration_minutes: 0.0,
            efficiency_score: 0.0,
            zones_covered: BTreeSet::new(),
            estimated_cost: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn job_ids(&self) -> Vec<&str> {
        self.jobs.iter().map(|job| job.id.as_str()).collect()
    }
}

//! Real Warsaw locations for realistic test fixtures.
//!
//! Coordinates are approximate OpenStreetMap positions. Each location is
//! tagged with the district the planner treats as its zone.

use service_route_planner::model::{GeoPoint, JobPoint, JobType, TechnicianProfile, Urgency};

/// A named location with coordinates and district.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub zone: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, zone: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, zone, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// A job at this location, addressed by the location's name.
    pub fn job(&self, id: &str, urgency: Urgency, job_type: JobType) -> JobPoint {
        JobPoint::new(id, self.point(), self.zone, urgency, job_type).with_address(self.name)
    }
}

/// Central station area; technicians start here in most tests.
pub const DEPOT: Location = Location::new("Warszawa Centralna", "Śródmieście", 52.2297, 21.0122);

// ============================================================================
// City centre
// ============================================================================

pub const SRODMIESCIE: &[Location] = &[
    Location::new("Palace of Culture and Science", "Śródmieście", 52.2318, 21.0060),
    Location::new("Łazienki Park", "Śródmieście", 52.2150, 21.0355),
    Location::new("Plac Zamkowy", "Śródmieście", 52.2476, 21.0137),
    Location::new("Nowy Świat 40", "Śródmieście", 52.2330, 21.0190),
];

// ============================================================================
// West
// ============================================================================

pub const WOLA: &[Location] = &[
    Location::new("Warsaw Uprising Museum", "Wola", 52.2323, 20.9810),
    Location::new("Arkadia", "Wola", 52.2567, 20.9846),
    Location::new("Rondo Daszyńskiego", "Wola", 52.2300, 20.9840),
];

pub const OCHOTA: &[Location] = &[
    Location::new("Plac Narutowicza", "Ochota", 52.2195, 20.9830),
    Location::new("Pole Mokotowskie", "Ochota", 52.2120, 21.0000),
];

// ============================================================================
// South
// ============================================================================

pub const MOKOTOW: &[Location] = &[
    Location::new("Galeria Mokotów", "Mokotów", 52.1800, 21.0030),
    Location::new("Służewiec", "Mokotów", 52.1850, 20.9950),
];

pub const URSYNOW: &[Location] = &[Location::new("Kabaty", "Ursynów", 52.1310, 21.0660)];

pub const WILANOW: &[Location] = &[Location::new("Wilanów Palace", "Wilanów", 52.1650, 21.0905)];

// ============================================================================
// East bank and north
// ============================================================================

pub const PRAGA: &[Location] = &[
    Location::new("Stadion Narodowy", "Praga-Południe", 52.2395, 21.0458),
    Location::new("Koneser", "Praga-Północ", 52.2547, 21.0445),
    Location::new("Warsaw Zoo", "Praga-Północ", 52.2575, 21.0232),
];

pub const NORTH: &[Location] = &[
    Location::new("Plac Wilsona", "Żoliborz", 52.2690, 20.9850),
    Location::new("Młociny", "Bielany", 52.2915, 20.9300),
];

/// Every fixture location.
pub fn all_locations() -> Vec<Location> {
    [SRODMIESCIE, WOLA, OCHOTA, MOKOTOW, URSYNOW, WILANOW, PRAGA, NORTH]
        .iter()
        .flat_map(|group| group.iter().copied())
        .collect()
}

/// Technician living at `home` and serving `zones`.
pub fn technician(id: &str, home: Location, zones: &[&str]) -> TechnicianProfile {
    TechnicianProfile::new(id, home.point()).with_zones(zones.iter().copied())
}

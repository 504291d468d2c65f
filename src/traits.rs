//! Seams the planner is generic over.
//!
//! Kept minimal so callers can plug in road-network distances or
//! predictable test geometries without touching the heuristics.

use crate::model::GeoPoint;

/// Provides the travel distance between two points, in kilometres.
///
/// Implementations must be pure: the same pair always yields the same
/// distance, since route building relies on reproducible scores.
pub trait DistanceProvider: Sync {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64;
}

impl<T: DistanceProvider + ?Sized> DistanceProvider for &T {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        (**self).distance_km(from, to)
    }
}

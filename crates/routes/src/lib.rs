//! Mission legs, great-circle distances, and location lookup.
//!
//! The sizing engine never owns the route list; callers build a `Vec<MissionLeg>`
//! from catalogs or the airport database and pass it by reference.

use sizer_config::RouteConfig;
use sizer_core::constants::EARTH_RADIUS_KM;
use thiserror::Error;

pub mod catalog;

/// A named point on the Earth's surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

/// One leg of the mission, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionLeg {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub distance_km: f64,
}

impl MissionLeg {
    /// Build a leg between two waypoints, deriving the great-circle distance.
    pub fn between(origin: Waypoint, destination: Waypoint) -> Self {
        let distance_km = great_circle_distance_km(
            origin.latitude_deg,
            origin.longitude_deg,
            destination.latitude_deg,
            destination.longitude_deg,
        );
        MissionLeg {
            origin,
            destination,
            distance_km,
        }
    }

    /// "Origin → Destination" label used in reports.
    pub fn label(&self) -> String {
        format!("{} → {}", self.origin.name, self.destination.name)
    }
}

/// Great-circle distance between two coordinates via the haversine formula (km).
pub fn great_circle_distance_km(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> f64 {
    let lat1 = lat1_deg.to_radians();
    let lat2 = lat2_deg.to_radians();
    let dlat = (lat2_deg - lat1_deg).to_radians();
    let dlon = (lon2_deg - lon1_deg).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Convert a `RouteConfig` record into a runtime `MissionLeg`.
///
/// A missing `dist_km` is derived from the endpoint coordinates; an explicit
/// value from the catalog wins, matching how surveyed route tables quote
/// planned rather than geometric distances.
pub fn from_config(config: &RouteConfig) -> MissionLeg {
    let origin = Waypoint {
        name: config.origin_name.clone(),
        latitude_deg: config.origin_lat,
        longitude_deg: config.origin_lon,
    };
    let destination = Waypoint {
        name: config.dest_name.clone(),
        latitude_deg: config.dest_lat,
        longitude_deg: config.dest_lon,
    };
    match config.dist_km {
        Some(distance_km) => MissionLeg {
            origin,
            destination,
            distance_km,
        },
        None => MissionLeg::between(origin, destination),
    }
}

/// The longest leg in the set; it constrains the whole design.
pub fn governing_leg(legs: &[MissionLeg]) -> Option<&MissionLeg> {
    legs.iter()
        .max_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
}

/// Errors surfaced while resolving route endpoints.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("location '{0}' not found in the airport catalog")]
    UnknownLocation(String),
    #[error("leg specification '{0}' is not of the form ORIGIN:DEST")]
    MalformedLeg(String),
}

/// Location lookup at the interface boundary of the engine.
///
/// Implementations return candidate waypoints for a free-text query. The
/// built-in [`catalog::AirportCatalog`] resolves IATA codes and city names
/// offline; network geocoders would implement the same trait but live
/// outside this repository.
pub trait LocationSearch {
    fn search(&self, query: &str) -> Vec<Waypoint>;
}

/// Resolve an `ORIGIN:DEST` pair against a location provider.
pub fn resolve_leg(provider: &dyn LocationSearch, spec: &str) -> Result<MissionLeg, RouteError> {
    let (origin_query, dest_query) = spec
        .split_once(':')
        .ok_or_else(|| RouteError::MalformedLeg(spec.to_string()))?;
    let origin = provider
        .search(origin_query)
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::UnknownLocation(origin_query.to_string()))?;
    let destination = provider
        .search(dest_query)
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::UnknownLocation(dest_query.to_string()))?;
    Ok(MissionLeg::between(origin, destination))
}

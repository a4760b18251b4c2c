//! Built-in airport catalog for offline location lookup.
//!
//! Covers the tier-1/tier-2 Indian and African cities the tool targets plus
//! a few international hubs. Queries match IATA codes exactly, then code
//! prefixes and case-insensitive city-name substrings.

use crate::{LocationSearch, Waypoint};

/// `(IATA code, latitude, longitude, city)` rows of the built-in catalog.
const AIRPORTS: &[(&str, f64, f64, &str)] = &[
    // India, tier 1
    ("DEL", 28.5355, 77.1099, "Delhi"),
    ("BOM", 19.0896, 72.8656, "Mumbai"),
    ("BLR", 13.1939, 77.7064, "Bangalore"),
    ("HYD", 17.3850, 78.4867, "Hyderabad"),
    ("MAA", 12.9896, 80.1693, "Chennai"),
    ("CCU", 22.6542, 88.4480, "Kolkata"),
    ("PNQ", 18.5793, 73.8143, "Pune"),
    ("AGX", 23.0225, 72.5714, "Ahmedabad"),
    // India, tier 2
    ("JAI", 26.9124, 75.7873, "Jaipur"),
    ("LKO", 26.8467, 80.9462, "Lucknow"),
    ("CHD", 30.7333, 76.7794, "Chandigarh"),
    ("IDR", 22.7196, 75.8577, "Indore"),
    ("CJB", 11.0026, 76.6955, "Coimbatore"),
    ("COK", 10.1924, 76.2597, "Kochi"),
    ("SRT", 21.1702, 72.8311, "Surat"),
    ("NAG", 21.1458, 79.0882, "Nagpur"),
    ("VTZ", 17.6869, 83.2185, "Visakhapatnam"),
    ("BHO", 23.1815, 79.9864, "Bhopal"),
    ("PY", 12.0, 79.8330, "Pondicherry"),
    // Africa, tier 1
    ("JNB", -24.6282, 28.2372, "Johannesburg"),
    ("LOS", 6.5244, 3.3519, "Lagos"),
    ("CAI", 30.0444, 31.2357, "Cairo"),
    ("CPT", -33.9249, 18.4241, "Cape Town"),
    ("ACC", 5.6037, -0.2167, "Accra"),
    ("DSS", 14.6749, -17.1360, "Dakar"),
    ("NBO", -1.2921, 36.7726, "Nairobi"),
    ("ADD", 9.0320, 38.7469, "Addis Ababa"),
    ("CMN", 33.5731, -7.5898, "Casablanca"),
    // Africa, tier 2
    ("FIH", -4.3276, 15.3136, "Kinshasa"),
    ("DAR", -6.8016, 39.2083, "Dar es Salaam"),
    ("KRT", 15.5007, 32.5599, "Khartoum"),
    ("EBB", 0.0260, 32.4458, "Kampala"),
    ("ABJ", 5.5471, -0.5567, "Abidjan"),
    ("DLA", 3.8667, 11.5167, "Douala"),
    ("LAD", -8.8383, 13.2344, "Luanda"),
    ("MPM", -23.8650, 35.3180, "Maputo"),
    ("GBE", -24.6282, 25.9231, "Gaborone"),
    ("RUN", -20.8692, 55.4920, "Port Louis"),
    // International hubs
    ("DXB", 25.2528, 55.3644, "Dubai"),
];

/// Offline location provider backed by the static airport table.
#[derive(Debug, Default, Clone, Copy)]
pub struct AirportCatalog;

impl AirportCatalog {
    /// Exact IATA code lookup.
    pub fn by_code(&self, code: &str) -> Option<Waypoint> {
        let upper = code.trim().to_uppercase();
        AIRPORTS
            .iter()
            .find(|(iata, _, _, _)| *iata == upper)
            .map(|row| waypoint(row))
    }
}

impl LocationSearch for AirportCatalog {
    fn search(&self, query: &str) -> Vec<Waypoint> {
        let query = query.trim();
        if query.len() < 2 {
            return Vec::new();
        }
        let upper = query.to_uppercase();

        let mut results = Vec::new();
        if let Some(exact) = self.by_code(&upper) {
            results.push(exact);
        }
        for row in AIRPORTS {
            let (code, _, _, city) = row;
            let candidate = waypoint(row);
            if results.contains(&candidate) {
                continue;
            }
            if code.starts_with(&upper) || city.to_uppercase().contains(&upper) {
                results.push(candidate);
            }
            if results.len() >= 5 {
                break;
            }
        }
        results
    }
}

fn waypoint(row: &(&str, f64, f64, &str)) -> Waypoint {
    let (_, lat, lon, city) = row;
    Waypoint {
        name: (*city).to_string(),
        latitude_deg: *lat,
        longitude_deg: *lon,
    }
}

//! Configuration models and loaders for the Electric Airplane Sizer.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sizer_core::units;
use thiserror::Error;

/// Payload and powertrain mode of the aircraft.
///
/// The hybrid-only knobs live inside the `Hybrid` variant, so they exist
/// exactly when the mode is hybrid and every consumer is forced to handle
/// each mode explicitly.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "mode")]
pub enum PayloadMode {
    #[serde(rename = "passenger")]
    Passenger { passengers: u32, cargo_kg: f64 },
    #[serde(rename = "cargo_only")]
    CargoOnly { cargo_kg: f64 },
    #[serde(rename = "mixed")]
    Mixed { passengers: u32, cargo_kg: f64 },
    #[serde(rename = "hybrid")]
    Hybrid {
        passengers: u32,
        cargo_kg: f64,
        powertrain: HybridPowertrain,
    },
}

impl PayloadMode {
    /// Passenger count carried by this mode.
    pub fn passengers(&self) -> u32 {
        match self {
            PayloadMode::Passenger { passengers, .. }
            | PayloadMode::Mixed { passengers, .. }
            | PayloadMode::Hybrid { passengers, .. } => *passengers,
            PayloadMode::CargoOnly { .. } => 0,
        }
    }

    /// Cargo mass carried by this mode (kg).
    pub fn cargo_kg(&self) -> f64 {
        match self {
            PayloadMode::Passenger { cargo_kg, .. }
            | PayloadMode::CargoOnly { cargo_kg }
            | PayloadMode::Mixed { cargo_kg, .. }
            | PayloadMode::Hybrid { cargo_kg, .. } => *cargo_kg,
        }
    }

    /// Hybrid powertrain parameters, present only in hybrid mode.
    pub fn hybrid_powertrain(&self) -> Option<&HybridPowertrain> {
        match self {
            PayloadMode::Hybrid { powertrain, .. } => Some(powertrain),
            _ => None,
        }
    }
}

/// Dual electric + dual turboprop powertrain parameters.
#[derive(Debug, Deserialize, Clone)]
pub struct HybridPowertrain {
    /// Share of cruise power delivered by the turboprops, in percent (0–100).
    pub turboprop_cruise_fraction_pct: f64,
    /// Turboprop fuel burn at cruise (kg/h).
    pub fuel_consumption_kg_h: f64,
    /// Specific energy of the fuel (MJ/kg). Defaults to Jet-A.
    #[serde(default = "default_fuel_specific_energy")]
    pub fuel_specific_energy_mj_kg: f64,
}

fn default_fuel_specific_energy() -> f64 {
    43.0
}

/// Aircraft configuration parsed from catalog files.
///
/// Speed and altitude are accepted in the pilot-facing units (km/h, ft) and
/// converted to SI at this boundary; nothing downstream sees non-SI values.
#[derive(Debug, Deserialize, Clone)]
pub struct AircraftConfig {
    pub name: String,
    #[serde(flatten)]
    pub payload: PayloadMode,
    pub cruise_speed_kmh: f64,
    pub cruise_altitude_ft: f64,
    pub battery_specific_energy_wh_kg: f64,
    pub propulsion_efficiency: f64,
    pub peak_to_cruise_ratio: f64,
    pub charge_time_h: f64,
    pub parasite_cd0: f64,
    pub empty_mass_kg: f64,
    #[serde(default = "default_passenger_mass")]
    pub passenger_mass_kg: f64,
}

fn default_passenger_mass() -> f64 {
    100.0
}

impl AircraftConfig {
    /// Cruise speed in m/s.
    pub fn cruise_speed_ms(&self) -> f64 {
        units::kmh_to_ms(self.cruise_speed_kmh)
    }

    /// Cruise altitude in metres.
    pub fn cruise_altitude_m(&self) -> f64 {
        units::feet_to_m(self.cruise_altitude_ft)
    }

    /// Total payload mass (kg): passengers at the configured per-seat mass
    /// plus cargo.
    pub fn payload_kg(&self) -> f64 {
        f64::from(self.payload.passengers()) * self.passenger_mass_kg + self.payload.cargo_kg()
    }

    /// True when the aircraft carries the hybrid powertrain.
    pub fn is_hybrid(&self) -> bool {
        matches!(self.payload, PayloadMode::Hybrid { .. })
    }

    /// Reject configurations the sizing chain cannot interpret.
    ///
    /// The engine itself degrades gracefully on degenerate numbers; this
    /// check exists so catalog typos surface at load time rather than as
    /// silently zeroed outputs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.propulsion_efficiency) || self.propulsion_efficiency == 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "propulsion_efficiency",
                value: self.propulsion_efficiency,
                expected: "(0, 1]",
            });
        }
        if self.battery_specific_energy_wh_kg <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "battery_specific_energy_wh_kg",
                value: self.battery_specific_energy_wh_kg,
                expected: "> 0",
            });
        }
        if self.peak_to_cruise_ratio < 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "peak_to_cruise_ratio",
                value: self.peak_to_cruise_ratio,
                expected: ">= 1",
            });
        }
        if self.empty_mass_kg <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "empty_mass_kg",
                value: self.empty_mass_kg,
                expected: "> 0",
            });
        }
        if let Some(powertrain) = self.payload.hybrid_powertrain() {
            if !(0.0..=100.0).contains(&powertrain.turboprop_cruise_fraction_pct) {
                return Err(ConfigError::OutOfRange {
                    field: "turboprop_cruise_fraction_pct",
                    value: powertrain.turboprop_cruise_fraction_pct,
                    expected: "[0, 100]",
                });
            }
            if powertrain.fuel_specific_energy_mj_kg <= 0.0 {
                return Err(ConfigError::OutOfRange {
                    field: "fuel_specific_energy_mj_kg",
                    value: powertrain.fuel_specific_energy_mj_kg,
                    expected: "> 0",
                });
            }
        }
        Ok(())
    }
}

/// Mission leg record parsed from route catalogs.
///
/// `dist_km` may be omitted, in which case the runtime layer derives it from
/// the endpoint coordinates via the great-circle distance.
#[derive(Debug, Deserialize, Clone)]
pub struct RouteConfig {
    pub origin_name: String,
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub dest_name: String,
    pub dest_lat: f64,
    pub dest_lon: f64,
    #[serde(default)]
    pub dist_km: Option<f64>,
}

/// Load route configurations from a YAML file, a TOML file, or a directory
/// of TOML records.
pub fn load_route_configs<P: AsRef<Path>>(path: P) -> Result<Vec<RouteConfig>, ConfigError> {
    load_records(path)
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{field} = {value} is outside {expected}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Load aircraft configurations from a YAML file, a TOML file, or a
/// directory of TOML records. Every record is validated on the way in.
pub fn load_aircraft_configs<P: AsRef<Path>>(path: P) -> Result<Vec<AircraftConfig>, ConfigError> {
    let configs: Vec<AircraftConfig> = load_records(path)?;
    for config in &configs {
        config.validate()?;
    }
    Ok(configs)
}

pub(crate) fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

/// Select an aircraft from the catalog by optional name, defaulting to the
/// first entry.
pub fn select<'a>(
    configs: &'a [AircraftConfig],
    requested: Option<&str>,
) -> Result<&'a AircraftConfig, SelectError> {
    if configs.is_empty() {
        return Err(SelectError::EmptyCatalog);
    }
    match requested {
        Some(name) => {
            let upper = name.to_uppercase();
            configs
                .iter()
                .find(|cfg| cfg.name.to_uppercase() == upper)
                .ok_or_else(|| SelectError::NotFound(name.to_string()))
        }
        None => Ok(&configs[0]),
    }
}

/// Errors surfaced when selecting aircraft from a catalog.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("aircraft '{0}' not found in catalog")]
    NotFound(String),
    #[error("aircraft catalog is empty")]
    EmptyCatalog,
}

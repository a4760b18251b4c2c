//! International Standard Atmosphere density model.
//!
//! The sizing chain only needs troposphere densities (regional electric
//! aircraft cruise below ~5 km), so a single-layer ISA with a linear lapse
//! rate covers the whole operating envelope. The function is pure and total:
//! altitudes outside the troposphere are clamped to its limits.

/// Sea-level standard temperature (K).
const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;
/// Sea-level standard density (kg/m³).
const SEA_LEVEL_DENSITY_KG_M3: f64 = 1.225;
/// Tropospheric temperature lapse rate (K/m).
const LAPSE_RATE_K_M: f64 = 0.0065;
/// Specific gas constant for dry air (J/(kg·K)).
const GAS_CONSTANT_AIR: f64 = 287.05;
/// Standard gravity used by the ISA definition (m/s²).
const ISA_GRAVITY_M_S2: f64 = 9.80665;
/// Top of the troposphere (m).
const TROPOPAUSE_ALTITUDE_M: f64 = 11_000.0;

/// Air density at the given geometric altitude (kg/m³).
///
/// Monotonically decreasing over [0, 11 000] m; inputs outside that band are
/// clamped so callers never observe a fault or a non-physical value.
pub fn density_kg_m3(altitude_m: f64) -> f64 {
    let altitude = altitude_m.clamp(0.0, TROPOPAUSE_ALTITUDE_M);
    let temperature = SEA_LEVEL_TEMPERATURE_K - LAPSE_RATE_K_M * altitude;
    let exponent = ISA_GRAVITY_M_S2 / (GAS_CONSTANT_AIR * LAPSE_RATE_K_M) - 1.0;
    SEA_LEVEL_DENSITY_KG_M3 * (temperature / SEA_LEVEL_TEMPERATURE_K).powf(exponent)
}

/// Air temperature at the given geometric altitude (K).
pub fn temperature_k(altitude_m: f64) -> f64 {
    let altitude = altitude_m.clamp(0.0, TROPOPAUSE_ALTITUDE_M);
    SEA_LEVEL_TEMPERATURE_K - LAPSE_RATE_K_M * altitude
}

//! Hybrid powertrain model: cruise power split, fuel budget, and range.
//!
//! Turboprop power is expressed against the same electrical-equivalent
//! cruise-power baseline the closure solver uses for the electric path; the
//! split is a pair of fractions of one `p_elec_cruise_w`, not a separate
//! mechanical-efficiency chain. The one exception is the fuel-only endurance
//! conversion, which goes through the turboprop thermal efficiency below.

use sizer_config::HybridPowertrain;
use sizer_core::constants::{JOULES_PER_MJ, SECONDS_PER_HOUR};
use sizer_core::{safe_div, units};

/// Fractional fuel reserve carried on top of the cruise burn.
pub const FUEL_RESERVE_FRACTION: f64 = 0.3;
/// Fuel tank structural mass as a fraction of fuel mass.
pub const FUEL_TANK_MASS_FRACTION: f64 = 0.12;
/// Thermal efficiency of the turboprop converting fuel to shaft power.
pub const TURBOPROP_THERMAL_EFFICIENCY: f64 = 0.78;

/// Cruise power split between the electric motors and the turboprops (kW).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CruisePowerSplit {
    pub electric_kw: f64,
    pub turboprop_kw: f64,
}

/// Split the converged cruise electrical power by the configured turboprop
/// fraction. Both shares are fractions of the same baseline, so they always
/// sum to the full cruise power.
pub fn split_cruise_power(cruise_power_elec_w: f64, turboprop_fraction_pct: f64) -> CruisePowerSplit {
    let total_kw = units::w_to_kw(cruise_power_elec_w);
    CruisePowerSplit {
        electric_kw: total_kw * (100.0 - turboprop_fraction_pct) / 100.0,
        turboprop_kw: total_kw * turboprop_fraction_pct / 100.0,
    }
}

/// Fuel load sized for the governing leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelBudget {
    pub cruise_fuel_kg: f64,
    pub reserve_fuel_kg: f64,
    pub total_capacity_kg: f64,
    pub tank_mass_kg: f64,
}

/// Fuel needed to fly `cruise_time_h` at the configured burn rate, plus the
/// fixed reserve fraction and the tank structure carrying it.
pub fn fuel_budget(powertrain: &HybridPowertrain, cruise_time_h: f64) -> FuelBudget {
    let cruise_fuel_kg = powertrain.fuel_consumption_kg_h * cruise_time_h;
    let reserve_fuel_kg = cruise_fuel_kg * FUEL_RESERVE_FRACTION;
    let total_capacity_kg = cruise_fuel_kg + reserve_fuel_kg;
    FuelBudget {
        cruise_fuel_kg,
        reserve_fuel_kg,
        total_capacity_kg,
        tank_mass_kg: total_capacity_kg * FUEL_TANK_MASS_FRACTION,
    }
}

/// Electric-only, fuel-only, and combined extended range (km).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridRangeBreakdown {
    pub electric_only_range_km: f64,
    pub fuel_only_range_km: f64,
    pub combined_range_km: f64,
}

/// Battery endurance converted to range at cruise speed.
///
/// Deliberately uses the *total* cruise electrical power rather than the
/// electric share: electric-only flight assumes full cruise power sourced
/// from the battery. Degenerate cruise power yields zero range.
pub fn electric_only_range_km(
    battery_kwh: f64,
    cruise_power_elec_w: f64,
    cruise_speed_ms: f64,
) -> f64 {
    let cruise_power_kw = units::w_to_kw(cruise_power_elec_w);
    let endurance_s = safe_div(battery_kwh * SECONDS_PER_HOUR, cruise_power_kw);
    endurance_s * cruise_speed_ms / 1_000.0
}

/// Range breakdown for a converged hybrid sizing.
pub fn range_breakdown(
    powertrain: &HybridPowertrain,
    battery_kwh: f64,
    cruise_power_elec_w: f64,
    cruise_speed_kmh: f64,
    propulsion_efficiency: f64,
    fuel_capacity_kg: f64,
) -> HybridRangeBreakdown {
    let cruise_speed_ms = units::kmh_to_ms(cruise_speed_kmh);
    let electric_only =
        electric_only_range_km(battery_kwh, cruise_power_elec_w, cruise_speed_ms);

    let split = split_cruise_power(cruise_power_elec_w, powertrain.turboprop_cruise_fraction_pct);
    let fuel_energy_j = fuel_capacity_kg * powertrain.fuel_specific_energy_mj_kg * JOULES_PER_MJ;
    let fuel_shaft_energy_j = fuel_energy_j * TURBOPROP_THERMAL_EFFICIENCY;
    let turboprop_shaft_power_w =
        safe_div(split.turboprop_kw * 1_000.0, propulsion_efficiency);
    let fuel_only_time_h = safe_div(fuel_shaft_energy_j, turboprop_shaft_power_w * SECONDS_PER_HOUR);
    let fuel_only = fuel_only_time_h * cruise_speed_kmh;

    HybridRangeBreakdown {
        electric_only_range_km: electric_only,
        fuel_only_range_km: fuel_only,
        // Sequential endurance segments, not power-blended distance.
        combined_range_km: electric_only + fuel_only,
    }
}

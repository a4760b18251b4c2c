//! Mission energy budget: taxi, climb, cruise, descent, and fixed reserve.
//!
//! The climb multiplier and descent fraction are empirical calibration
//! constants of the reference sizing model, not first-principles values;
//! they approximate non-ideal climb power and partial recovery on descent.

use sizer_core::constants::{GRAVITY_M_S2, JOULES_PER_KWH};
use sizer_core::{safe_div, units};

/// Climb energy multiplier over the ideal potential-energy change.
pub const CLIMB_ENERGY_FACTOR: f64 = 2.2;
/// Descent energy as a fraction of the ideal potential-energy change.
pub const DESCENT_ENERGY_FRACTION: f64 = 0.3;
/// Fixed taxi allowance (J), pre- and post-flight.
pub const TAXI_ENERGY_J: f64 = 8.0e3 * 3_600.0;
/// Fixed mission reserve allowance (J).
pub const RESERVE_ENERGY_J: f64 = 20.0e3 * 3_600.0;
/// Operational margin applied on top of the raw mission energy.
pub const MISSION_ENERGY_MARGIN: f64 = 1.4;
/// Dischargeable fraction of the installed battery pack.
pub const USABLE_BATTERY_FRACTION: f64 = 0.85;

/// Five-way decomposition of one mission's energy, in joules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBudget {
    pub taxi_j: f64,
    pub climb_j: f64,
    pub cruise_j: f64,
    pub descent_j: f64,
    pub reserve_j: f64,
}

impl EnergyBudget {
    /// Compute the budget for a mission flown at the given cruise condition.
    ///
    /// A zero cruise speed yields zero cruise energy rather than a division
    /// fault; exploratory inputs must always resolve to defined numbers.
    pub fn for_mission(
        total_mass_kg: f64,
        cruise_altitude_m: f64,
        cruise_power_elec_w: f64,
        distance_m: f64,
        cruise_speed_ms: f64,
        propulsion_efficiency: f64,
    ) -> Self {
        let cruise_time_s = safe_div(distance_m, cruise_speed_ms);
        let potential_j = total_mass_kg * GRAVITY_M_S2 * cruise_altitude_m;
        EnergyBudget {
            taxi_j: TAXI_ENERGY_J,
            climb_j: safe_div(potential_j * CLIMB_ENERGY_FACTOR, propulsion_efficiency),
            cruise_j: cruise_power_elec_w * cruise_time_s,
            descent_j: safe_div(potential_j * DESCENT_ENERGY_FRACTION, propulsion_efficiency),
            reserve_j: RESERVE_ENERGY_J,
        }
    }

    /// Total mission energy (J).
    pub fn mission_total_j(&self) -> f64 {
        self.taxi_j + self.climb_j + self.cruise_j + self.descent_j + self.reserve_j
    }

    /// Everything but cruise (J): the electric share of a hybrid mission,
    /// whose cruise leg is assumed turboprop-covered.
    pub fn non_cruise_total_j(&self) -> f64 {
        self.taxi_j + self.climb_j + self.descent_j + self.reserve_j
    }

    /// Cruise energy in kWh.
    pub fn cruise_kwh(&self) -> f64 {
        units::j_to_kwh(self.cruise_j)
    }

    /// Climb energy in kWh.
    pub fn climb_kwh(&self) -> f64 {
        units::j_to_kwh(self.climb_j)
    }

    /// Descent energy in kWh.
    pub fn descent_kwh(&self) -> f64 {
        units::j_to_kwh(self.descent_j)
    }

    /// Taxi energy in kWh.
    pub fn taxi_kwh(&self) -> f64 {
        units::j_to_kwh(self.taxi_j)
    }

    /// Reserve energy in kWh.
    pub fn reserve_kwh(&self) -> f64 {
        units::j_to_kwh(self.reserve_j)
    }
}

/// Installed (gross) energy required to deliver `mission_j` of flight energy.
///
/// Policy stack of the reference model: 40 % operational margin, then the
/// 85 % usable-depth correction. The order matters for numeric parity.
pub fn gross_energy_j(mission_j: f64) -> f64 {
    mission_j * MISSION_ENERGY_MARGIN / USABLE_BATTERY_FRACTION
}

/// Battery mass for a gross energy requirement at a pack specific energy.
pub fn battery_mass_kg(gross_j: f64, specific_energy_wh_kg: f64) -> f64 {
    let battery_kwh = gross_j / JOULES_PER_KWH;
    safe_div(battery_kwh * 1_000.0, specific_energy_wh_kg)
}

//! Per-route performance against the converged battery capacity.
//!
//! Climb, cruise, and descent energies of the governing computation scale
//! linearly with leg distance; taxi and reserve are leg-independent fixed
//! allowances. Each leg is judged against the usable share of the battery.

use sizer_core::safe_div;
use sizer_energy::USABLE_BATTERY_FRACTION;
use sizer_routes::MissionLeg;

use crate::closure::SizingResult;

/// One leg's energy margin report.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePerformance {
    pub label: String,
    pub distance_km: f64,
    pub flight_time_h: f64,
    pub mission_energy_kwh: f64,
    pub usable_battery_kwh: f64,
    pub feasible: bool,
    /// Percentage headroom against the usable capacity; negative when the
    /// leg cannot be flown.
    pub margin_pct: f64,
}

/// Evaluate every leg against the governing sizing. Infeasible legs are
/// reported, never skipped, and do not abort the evaluation of the rest.
pub fn evaluate_routes(sizing: &SizingResult, legs: &[MissionLeg], cruise_speed_kmh: f64) -> Vec<RoutePerformance> {
    let usable_battery_kwh = sizing.battery_kwh * USABLE_BATTERY_FRACTION;
    legs.iter()
        .map(|leg| {
            let scale = if sizing.governing_distance_km > 0.0 {
                leg.distance_km / sizing.governing_distance_km
            } else {
                1.0
            };
            let mission_energy_kwh = sizing.energy.taxi_kwh()
                + sizing.energy.climb_kwh() * scale
                + sizing.energy.cruise_kwh() * scale
                + sizing.energy.descent_kwh() * scale
                + sizing.energy.reserve_kwh();
            let margin_pct = if mission_energy_kwh > 0.0 {
                safe_div(
                    (usable_battery_kwh - mission_energy_kwh) * 100.0,
                    usable_battery_kwh,
                )
            } else {
                0.0
            };
            RoutePerformance {
                label: leg.label(),
                distance_km: leg.distance_km,
                flight_time_h: safe_div(leg.distance_km, cruise_speed_kmh),
                mission_energy_kwh,
                usable_battery_kwh,
                feasible: mission_energy_kwh <= usable_battery_kwh,
                margin_pct,
            }
        })
        .collect()
}

//! Pure-electric vs hybrid efficiency comparison.
//!
//! Purely derived metrics over one converged sizing; no new physics. The
//! pure-electric side strips the fuel system from the mass stack, the hybrid
//! side uses the combined extended range and a kWh-equivalent blend of
//! battery and fuel energy.

use sizer_config::AircraftConfig;
use sizer_core::safe_div;
use sizer_hybrid::{HybridRangeBreakdown, electric_only_range_km};

use crate::closure::SizingResult;

/// Efficiency metrics of one powertrain variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricMetrics {
    pub mass_kg: f64,
    pub range_km: f64,
    /// Mass per unit range (kg/km); lower is better.
    pub mass_per_km: f64,
    /// Range per unit energy (km/kWh, kWh-equivalent for hybrids).
    pub range_per_kwh: f64,
    pub payload_fraction_pct: f64,
}

/// Hybrid advantage over the pure-electric variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridAdvantage {
    pub hybrid: ElectricMetrics,
    pub range_improvement_pct: f64,
    pub mass_delta_kg: f64,
    /// Positive when the hybrid carries less mass per kilometre of range.
    pub weight_efficiency_gain_pct: f64,
    pub fuel_capacity_kg: f64,
}

/// Comparison output; the hybrid block is present only for hybrid sizings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonMetrics {
    pub pure_electric: ElectricMetrics,
    pub hybrid: Option<HybridAdvantage>,
}

/// Derive the comparison metrics from a converged sizing.
pub fn compare(
    config: &AircraftConfig,
    sizing: &SizingResult,
    hybrid_range: Option<&HybridRangeBreakdown>,
) -> ComparisonMetrics {
    let pure_mass_kg = sizing.pure_electric_mass_kg();
    let pure_range_km = electric_only_range_km(
        sizing.battery_kwh,
        sizing.cruise_power_elec_w,
        config.cruise_speed_ms(),
    );
    let pure_electric = ElectricMetrics {
        mass_kg: pure_mass_kg,
        range_km: pure_range_km,
        mass_per_km: safe_div(pure_mass_kg, pure_range_km),
        range_per_kwh: safe_div(pure_range_km, sizing.battery_kwh),
        payload_fraction_pct: safe_div(sizing.payload_kg * 100.0, pure_mass_kg),
    };

    let hybrid = config.payload.hybrid_powertrain().zip(hybrid_range).map(
        |(powertrain, breakdown)| {
            let mass_kg = sizing.total_mass_kg;
            let range_km = breakdown.combined_range_km;
            let mass_per_km = safe_div(mass_kg, range_km);
            // kWh-equivalent of the blended on-board energy.
            let total_energy_kwh_eq = sizing.battery_kwh
                + sizing.fuel_mass_kg * powertrain.fuel_specific_energy_mj_kg / 3.6;
            let hybrid_metrics = ElectricMetrics {
                mass_kg,
                range_km,
                mass_per_km,
                range_per_kwh: safe_div(range_km, total_energy_kwh_eq),
                payload_fraction_pct: safe_div(sizing.payload_kg * 100.0, mass_kg),
            };
            HybridAdvantage {
                hybrid: hybrid_metrics,
                range_improvement_pct: safe_div(
                    (range_km - pure_range_km) * 100.0,
                    pure_range_km,
                ),
                mass_delta_kg: mass_kg - pure_mass_kg,
                weight_efficiency_gain_pct: safe_div(
                    (pure_electric.mass_per_km - mass_per_km) * 100.0,
                    pure_electric.mass_per_km,
                ),
                fuel_capacity_kg: sizing.fuel_mass_kg,
            }
        },
    );

    ComparisonMetrics {
        pure_electric,
        hybrid,
    }
}

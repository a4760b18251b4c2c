//! Top-level orchestrator sequencing the solver and its evaluators.

use sizer_config::AircraftConfig;
use sizer_hybrid::{HybridRangeBreakdown, range_breakdown};
use sizer_routes::{MissionLeg, governing_leg};

use crate::closure::{SizingResult, solve_closure};
use crate::comparison::{ComparisonMetrics, compare};
use crate::feasibility::{FeasibilityVerdict, evaluate};
use crate::performance::{RoutePerformance, evaluate_routes};

/// Aggregated sizing output: the converged result plus every derived view.
#[derive(Debug, Clone)]
pub struct SizingReport {
    pub sizing: SizingResult,
    pub feasibility: FeasibilityVerdict,
    pub hybrid: Option<HybridRangeBreakdown>,
    pub routes: Vec<RoutePerformance>,
    pub comparison: ComparisonMetrics,
}

/// Top-level sizing error.
#[derive(Debug, thiserror::Error)]
pub enum SizingError {
    #[error("no mission legs provided; at least one leg is required to size the aircraft")]
    EmptyRouteSet,
}

/// Size the aircraft for the given mission set.
///
/// The longest leg governs the design; the converged result then feeds the
/// feasibility gate, the hybrid range model, the per-route evaluator, and
/// the comparison engine, which are independent consumers of the same
/// result. Pure function of its inputs; identical calls yield identical
/// reports.
pub fn size_aircraft(
    config: &AircraftConfig,
    legs: &[MissionLeg],
) -> Result<SizingReport, SizingError> {
    let governing = governing_leg(legs).ok_or(SizingError::EmptyRouteSet)?;
    let sizing = solve_closure(governing.distance_km, config);

    let feasibility = evaluate(&sizing);
    let hybrid = config.payload.hybrid_powertrain().map(|powertrain| {
        range_breakdown(
            powertrain,
            sizing.battery_kwh,
            sizing.cruise_power_elec_w,
            config.cruise_speed_kmh,
            config.propulsion_efficiency,
            sizing.fuel_mass_kg,
        )
    });
    let routes = evaluate_routes(&sizing, legs, config.cruise_speed_kmh);
    let comparison = compare(config, &sizing, hybrid.as_ref());

    Ok(SizingReport {
        sizing,
        feasibility,
        hybrid,
        routes,
        comparison,
    })
}

//! The mass–energy–power closure solver.
//!
//! Battery mass depends on cruise power, cruise power on wing loading, wing
//! loading on total mass, and total mass on battery mass. The solver breaks
//! the circle by fixed-count iterative refinement: seed the state from
//! empirical regressions, then re-derive wing area, aerodynamics, power,
//! energy, and battery mass a fixed number of passes. Each pass re-targets
//! the wing to the cruise lift coefficient instead of perturbing the
//! previous area, so the iteration converges without damping; the CL clamp
//! in the aerodynamic model is the only stabilisation device.

use sizer_aero as aero;
use sizer_config::AircraftConfig;
use sizer_core::constants::GRAVITY_M_S2;
use sizer_core::{safe_div, units};
use sizer_energy::EnergyBudget;
use sizer_energy::{battery_mass_kg, gross_energy_j};
use sizer_hybrid::fuel_budget;

/// Number of refinement passes. A fixed count rather than a convergence
/// tolerance is a deliberate simplicity choice of the reference model; the
/// state is contracting enough that three passes settle the mass stack.
pub const CLOSURE_PASSES: usize = 3;

/// Ballistic recovery parachute allowance carried by every configuration (kg).
pub const PARACHUTE_MASS_KG: f64 = 60.0;
/// Flat battery placeholder used to seed the first total-mass estimate (kg).
pub const BATTERY_SEED_MASS_KG: f64 = 200.0;
/// Wing area seed regression on payload mass: `12 + payload / 25` m².
pub const WING_AREA_SEED_BASE_M2: f64 = 12.0;
pub const WING_AREA_SEED_KG_PER_M2: f64 = 25.0;
/// Cruise lift coefficient the wing is re-sized to hold each pass.
pub const TARGET_CRUISE_CL: f64 = 0.6;
/// Packaging/structural sanity bounds on wing area (m²).
pub const WING_AREA_MIN_M2: f64 = 10.0;
pub const WING_AREA_MAX_M2: f64 = 75.0;
/// Fixed four-motor electric layout.
pub const MOTOR_COUNT: f64 = 4.0;
/// Charge-target fraction used to size the ground charger.
pub const CHARGE_TARGET_FRACTION: f64 = 0.8;

/// Converged output of the closure solver for one governing distance and
/// configuration. Fully determined by its inputs; recomputed per request.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingResult {
    pub governing_distance_km: f64,
    pub air_density_kg_m3: f64,
    pub payload_kg: f64,
    pub total_mass_kg: f64,
    pub wing_area_m2: f64,
    pub cl: f64,
    pub cd: f64,
    pub lift_to_drag: f64,
    pub cruise_power_elec_w: f64,
    pub peak_power_kw: f64,
    pub motor_unit_power_kw: f64,
    pub max_speed_kmh: f64,
    pub battery_kwh: f64,
    pub battery_mass_kg: f64,
    pub fuel_mass_kg: f64,
    pub fuel_tank_mass_kg: f64,
    pub charger_power_kw: f64,
    pub energy: EnergyBudget,
}

impl SizingResult {
    /// Cruise electrical power in kW.
    pub fn cruise_power_kw(&self) -> f64 {
        units::w_to_kw(self.cruise_power_elec_w)
    }

    /// Airframe mass without the fuel system: the pure-electric equivalent
    /// of this sizing, used by the comparison engine.
    pub fn pure_electric_mass_kg(&self) -> f64 {
        self.total_mass_kg - self.fuel_mass_kg - self.fuel_tank_mass_kg
    }
}

/// Run the closure for the governing distance under the given configuration.
///
/// Total on all inputs: degenerate values (zero speed, zero distance) settle
/// to defined zero-valued outputs instead of faulting, so exploratory
/// configurations can be swept freely.
pub fn solve_closure(governing_distance_km: f64, config: &AircraftConfig) -> SizingResult {
    let distance_m = units::km_to_m(governing_distance_km);
    let speed_ms = config.cruise_speed_ms();
    let altitude_m = config.cruise_altitude_m();
    let payload_kg = config.payload_kg();
    let efficiency = config.propulsion_efficiency;
    let rho = sizer_atmosphere::density_kg_m3(altitude_m);

    // Seed pass: empirical wing area, placeholder battery, first full
    // aero/power/energy sweep to get an initial battery mass estimate.
    let mut wing_area_m2 = WING_AREA_SEED_BASE_M2 + payload_kg / WING_AREA_SEED_KG_PER_M2;
    let mut total_mass_kg =
        config.empty_mass_kg + payload_kg + PARACHUTE_MASS_KG + BATTERY_SEED_MASS_KG;
    let mut point = aero::cruise_point(
        total_mass_kg * GRAVITY_M_S2,
        rho,
        speed_ms,
        wing_area_m2,
        config.parasite_cd0,
    );
    let mut cruise_power_elec_w = safe_div(point.drag_n * speed_ms, efficiency);
    let mut budget = EnergyBudget::for_mission(
        total_mass_kg,
        altitude_m,
        cruise_power_elec_w,
        distance_m,
        speed_ms,
        efficiency,
    );
    let mut gross_j = gross_energy_j(budget.mission_total_j());
    let mut battery_kg = battery_mass_kg(gross_j, config.battery_specific_energy_wh_kg);

    let mut fuel_kg = 0.0;
    let mut fuel_tank_kg = 0.0;

    for _ in 0..CLOSURE_PASSES {
        if let Some(powertrain) = config.payload.hybrid_powertrain() {
            let cruise_time_h = units::seconds_to_hours(safe_div(distance_m, speed_ms));
            let fuel = fuel_budget(powertrain, cruise_time_h);
            fuel_kg = fuel.total_capacity_kg;
            fuel_tank_kg = fuel.tank_mass_kg;
        }

        total_mass_kg = config.empty_mass_kg
            + payload_kg
            + battery_kg
            + PARACHUTE_MASS_KG
            + fuel_kg
            + fuel_tank_kg;
        let weight_n = total_mass_kg * GRAVITY_M_S2;

        // Re-target the wing to hold the cruise CL, then bound it.
        let retarget_pressure = aero::dynamic_pressure_pa(rho, speed_ms) * TARGET_CRUISE_CL;
        wing_area_m2 = safe_div(weight_n, retarget_pressure).clamp(WING_AREA_MIN_M2, WING_AREA_MAX_M2);

        point = aero::cruise_point(weight_n, rho, speed_ms, wing_area_m2, config.parasite_cd0);
        cruise_power_elec_w = safe_div(point.drag_n * speed_ms, efficiency);

        budget = EnergyBudget::for_mission(
            total_mass_kg,
            altitude_m,
            cruise_power_elec_w,
            distance_m,
            speed_ms,
            efficiency,
        );

        // Hybrid missions cover cruise with the turboprops; the battery only
        // carries climb, descent, taxi, and the reserve.
        let electric_mission_j = if config.is_hybrid() {
            budget.non_cruise_total_j()
        } else {
            budget.mission_total_j()
        };
        gross_j = gross_energy_j(electric_mission_j);
        battery_kg = battery_mass_kg(gross_j, config.battery_specific_energy_wh_kg);
    }

    // Recombine the mass stack with the last battery estimate, then derive
    // the reported aerodynamic state. Cruise power intentionally stays at
    // the last pass value; the wing is not re-sized after the final mass.
    total_mass_kg = config.empty_mass_kg
        + payload_kg
        + battery_kg
        + PARACHUTE_MASS_KG
        + fuel_kg
        + fuel_tank_kg;
    point = aero::cruise_point(
        total_mass_kg * GRAVITY_M_S2,
        rho,
        speed_ms,
        wing_area_m2,
        config.parasite_cd0,
    );

    let battery_kwh = units::j_to_kwh(gross_j);
    let peak_power_kw = units::w_to_kw(cruise_power_elec_w) * config.peak_to_cruise_ratio;
    let motor_unit_power_kw = (peak_power_kw / MOTOR_COUNT).round();
    // Cube-law approximation relating the power margin to attainable speed.
    let max_speed_kmh = config.cruise_speed_kmh * config.peak_to_cruise_ratio.powf(1.0 / 3.0);
    let charger_power_kw = safe_div(battery_kwh * CHARGE_TARGET_FRACTION, config.charge_time_h);

    SizingResult {
        governing_distance_km,
        air_density_kg_m3: rho,
        payload_kg,
        total_mass_kg,
        wing_area_m2,
        cl: point.cl,
        cd: point.cd,
        lift_to_drag: point.lift_to_drag,
        cruise_power_elec_w,
        peak_power_kw,
        motor_unit_power_kw,
        max_speed_kmh,
        battery_kwh,
        battery_mass_kg: battery_kg,
        fuel_mass_kg: fuel_kg,
        fuel_tank_mass_kg: fuel_tank_kg,
        charger_power_kw,
        energy: budget,
    }
}

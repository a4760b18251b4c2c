use electric_airplane_sizer::config::{AircraftConfig, HybridPowertrain, PayloadMode};
use electric_airplane_sizer::hybrid::{
    FUEL_RESERVE_FRACTION, FUEL_TANK_MASS_FRACTION, electric_only_range_km, fuel_budget,
    range_breakdown, split_cruise_power,
};
use electric_airplane_sizer::sizing::solve_closure;

fn powertrain() -> HybridPowertrain {
    HybridPowertrain {
        turboprop_cruise_fraction_pct: 75.0,
        fuel_consumption_kg_h: 25.0,
        fuel_specific_energy_mj_kg: 43.0,
    }
}

fn hybrid_config() -> AircraftConfig {
    AircraftConfig {
        name: "Hybrid Commuter 2E2TP".to_string(),
        payload: PayloadMode::Hybrid {
            passengers: 4,
            cargo_kg: 50.0,
            powertrain: powertrain(),
        },
        cruise_speed_kmh: 200.0,
        cruise_altitude_ft: 6_000.0,
        battery_specific_energy_wh_kg: 240.0,
        propulsion_efficiency: 0.85,
        peak_to_cruise_ratio: 1.8,
        charge_time_h: 1.5,
        parasite_cd0: 0.022,
        empty_mass_kg: 900.0,
        passenger_mass_kg: 100.0,
    }
}

#[test]
fn cruise_power_split_sums_to_the_baseline() {
    let split = split_cruise_power(100_000.0, 75.0);
    assert!((split.electric_kw - 25.0).abs() < 1e-12);
    assert!((split.turboprop_kw - 75.0).abs() < 1e-12);
    assert!((split.electric_kw + split.turboprop_kw - 100.0).abs() < 1e-12);
}

#[test]
fn zero_turboprop_fraction_leaves_everything_electric() {
    let split = split_cruise_power(80_000.0, 0.0);
    assert_eq!(split.turboprop_kw, 0.0);
    assert!((split.electric_kw - 80.0).abs() < 1e-12);
}

#[test]
fn fuel_budget_includes_reserve_and_tank() {
    // 25 kg/h over a 1.75 h cruise.
    let budget = fuel_budget(&powertrain(), 1.75);
    assert!((budget.cruise_fuel_kg - 43.75).abs() < 1e-9);
    assert!((budget.reserve_fuel_kg - 43.75 * FUEL_RESERVE_FRACTION).abs() < 1e-9);
    assert!((budget.total_capacity_kg - 56.875).abs() < 1e-9);
    assert!((budget.tank_mass_kg - 56.875 * FUEL_TANK_MASS_FRACTION).abs() < 1e-9);
}

#[test]
fn electric_range_follows_battery_endurance() {
    // 100 kWh at 100 kW is one hour; one hour at 200 km/h is 200 km.
    let range = electric_only_range_km(100.0, 100_000.0, 200.0 / 3.6);
    assert!((range - 200.0).abs() < 1e-9, "range = {}", range);
    // Degenerate cruise power resolves to zero range, not a fault.
    assert_eq!(electric_only_range_km(100.0, 0.0, 200.0 / 3.6), 0.0);
}

#[test]
fn reference_hybrid_range_breakdown() {
    let result = solve_closure(350.0, &hybrid_config());
    let breakdown = range_breakdown(
        &powertrain(),
        result.battery_kwh,
        result.cruise_power_elec_w,
        200.0,
        0.85,
        result.fuel_mass_kg,
    );

    assert!(
        (breakdown.electric_only_range_km - 249.7).abs() < 1.5,
        "electric = {}",
        breakdown.electric_only_range_km
    );
    assert!(
        (breakdown.fuel_only_range_km - 1_646.6).abs() < 10.0,
        "fuel = {}",
        breakdown.fuel_only_range_km
    );
    assert!(
        (breakdown.combined_range_km
            - breakdown.electric_only_range_km
            - breakdown.fuel_only_range_km)
            .abs()
            < 1e-9
    );
}

#[test]
fn all_electric_split_collapses_combined_range_to_electric_only() {
    let mut zero_tp = powertrain();
    zero_tp.turboprop_cruise_fraction_pct = 0.0;
    let breakdown = range_breakdown(&zero_tp, 91.0, 72_943.0, 200.0, 0.85, 56.875);
    // No turboprop share means no fuel-only segment regardless of fuel load.
    assert_eq!(breakdown.fuel_only_range_km, 0.0);
    assert_eq!(breakdown.combined_range_km, breakdown.electric_only_range_km);
}

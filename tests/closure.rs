use electric_airplane_sizer::aero::{CL_MAX, CL_MIN};
use electric_airplane_sizer::config::{AircraftConfig, HybridPowertrain, PayloadMode};
use electric_airplane_sizer::sizing::solve_closure;

fn reference_config() -> AircraftConfig {
    AircraftConfig {
        name: "Regional Commuter E4".to_string(),
        payload: PayloadMode::Passenger {
            passengers: 4,
            cargo_kg: 50.0,
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

fn hybrid_config() -> AircraftConfig {
    let mut config = reference_config();
    config.name = "Hybrid Commuter 2E2TP".to_string();
    config.payload = PayloadMode::Hybrid {
        passengers: 4,
        cargo_kg: 50.0,
        powertrain: HybridPowertrain {
            turboprop_cruise_fraction_pct: 75.0,
            fuel_consumption_kg_h: 25.0,
            fuel_specific_energy_mj_kg: 43.0,
        },
    };
    config
}

#[test]
fn reference_scenario_converges_to_the_known_fixed_point() {
    // 350 km, 200 km/h, 6000 ft, 4 pax + 50 kg, 900 kg empty, 240 Wh/kg.
    let result = solve_closure(350.0, &reference_config());

    assert!((result.payload_kg - 450.0).abs() < 1e-9);
    assert!(
        (result.total_mass_kg - 3_565.2).abs() < 5.0,
        "total mass = {}",
        result.total_mass_kg
    );
    assert!(
        (result.wing_area_m2 - 35.58).abs() < 0.1,
        "wing area = {}",
        result.wing_area_m2
    );
    assert!((result.cl - 0.622).abs() < 5e-3, "cl = {}", result.cl);
    assert!(
        (result.lift_to_drag - 16.58).abs() < 0.05,
        "L/D = {}",
        result.lift_to_drag
    );
    assert!(
        (result.cruise_power_kw() - 134.65).abs() < 0.5,
        "cruise power = {}",
        result.cruise_power_kw()
    );
    assert!(
        (result.peak_power_kw - 242.38).abs() < 1.0,
        "peak power = {}",
        result.peak_power_kw
    );
    assert!(
        (result.battery_kwh - 517.25).abs() < 2.0,
        "battery = {}",
        result.battery_kwh
    );
    assert!(
        (result.battery_mass_kg - 2_155.2).abs() < 8.0,
        "battery mass = {}",
        result.battery_mass_kg
    );
    assert_eq!(result.fuel_mass_kg, 0.0);
    assert_eq!(result.fuel_tank_mass_kg, 0.0);

    // Derived powertrain numbers.
    assert_eq!(result.motor_unit_power_kw, (result.peak_power_kw / 4.0).round());
    assert!(
        (result.max_speed_kmh - 200.0 * 1.8f64.powf(1.0 / 3.0)).abs() < 1e-9
    );
    assert!(
        (result.charger_power_kw - result.battery_kwh * 0.8 / 1.5).abs() < 1e-9
    );
}

#[test]
fn reference_energy_budget_matches() {
    let result = solve_closure(350.0, &reference_config());
    assert!((result.energy.taxi_kwh() - 8.0).abs() < 1e-9);
    assert!((result.energy.reserve_kwh() - 20.0).abs() < 1e-9);
    assert!(
        (result.energy.cruise_kwh() - 235.6).abs() < 1.0,
        "cruise = {}",
        result.energy.cruise_kwh()
    );
    assert!(
        (result.energy.climb_kwh() - 44.35).abs() < 0.2,
        "climb = {}",
        result.energy.climb_kwh()
    );
    assert!(
        (result.energy.descent_kwh() - 6.05).abs() < 0.05,
        "descent = {}",
        result.energy.descent_kwh()
    );
}

#[test]
fn identical_inputs_give_bit_identical_results() {
    let config = reference_config();
    let first = solve_closure(350.0, &config);
    let second = solve_closure(350.0, &config);
    assert_eq!(first, second);
}

#[test]
fn wing_area_stays_within_packaging_bounds() {
    let config = reference_config();
    for distance_km in [50.0, 150.0, 350.0, 600.0, 1_000.0, 2_000.0] {
        let result = solve_closure(distance_km, &config);
        assert!(
            (10.0..=75.0).contains(&result.wing_area_m2),
            "wing area {} at {} km",
            result.wing_area_m2,
            distance_km
        );
        assert!(
            (CL_MIN..=CL_MAX).contains(&result.cl),
            "cl {} at {} km",
            result.cl,
            distance_km
        );
    }
}

#[test]
fn long_range_case_saturates_the_wing_area_clamp() {
    let result = solve_closure(1_000.0, &reference_config());
    assert_eq!(result.wing_area_m2, 75.0);
    // With the wing pinned, the demanded CL saturates at the band edge too.
    assert_eq!(result.cl, CL_MAX);
}

#[test]
fn battery_mass_is_monotone_in_governing_distance() {
    let config = reference_config();
    let mut previous = 0.0;
    let mut distance_km = 50.0;
    while distance_km <= 1_000.0 {
        let result = solve_closure(distance_km, &config);
        assert!(
            result.battery_mass_kg >= previous,
            "battery mass fell at {} km: {} < {}",
            distance_km,
            result.battery_mass_kg,
            previous
        );
        previous = result.battery_mass_kg;
        distance_km += 50.0;
    }
}

#[test]
fn hybrid_scenario_carries_fuel_and_a_smaller_battery() {
    let result = solve_closure(350.0, &hybrid_config());

    // 25 kg/h for 1.75 h plus the 30% reserve, and the 12% tank structure.
    assert!(
        (result.fuel_mass_kg - 56.875).abs() < 1e-6,
        "fuel = {}",
        result.fuel_mass_kg
    );
    assert!(
        (result.fuel_tank_mass_kg - 6.825).abs() < 1e-6,
        "tank = {}",
        result.fuel_tank_mass_kg
    );

    // The battery only carries climb + descent + taxi + reserve.
    assert!(
        (result.battery_kwh - 91.1).abs() < 0.5,
        "battery = {}",
        result.battery_kwh
    );
    assert!(
        (result.total_mass_kg - 1_853.2).abs() < 5.0,
        "total mass = {}",
        result.total_mass_kg
    );

    let electric = solve_closure(350.0, &reference_config());
    assert!(result.battery_mass_kg < electric.battery_mass_kg);
    assert!(result.total_mass_kg < electric.total_mass_kg);
}

#[test]
fn degenerate_cruise_speed_produces_defined_outputs() {
    let mut config = reference_config();
    config.cruise_speed_kmh = 0.0;
    let result = solve_closure(350.0, &config);

    assert!(result.total_mass_kg.is_finite());
    assert!(result.battery_kwh.is_finite());
    assert_eq!(result.energy.cruise_j, 0.0);
    assert_eq!(result.cruise_power_elec_w, 0.0);
    assert_eq!(result.peak_power_kw, 0.0);
    // Wing retarget degenerates to the lower packaging bound.
    assert_eq!(result.wing_area_m2, 10.0);
}

#[test]
fn zero_charge_time_zeroes_charger_power() {
    let mut config = reference_config();
    config.charge_time_h = 0.0;
    let result = solve_closure(350.0, &config);
    assert_eq!(result.charger_power_kw, 0.0);
}

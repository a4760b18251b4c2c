use std::path::PathBuf;

use clap::Parser;
use electric_airplane_sizer::config::{load_aircraft_configs, load_route_configs, select};
use electric_airplane_sizer::export::routes as route_export;
use electric_airplane_sizer::export::summary::{EnergyBudgetKwh, SizingSummary, write_sidecar};
use electric_airplane_sizer::routes::catalog::AirportCatalog;
use electric_airplane_sizer::routes::{MissionLeg, from_config, governing_leg, resolve_leg};
use electric_airplane_sizer::sizing::{SizingReport, size_aircraft};

#[derive(Parser)]
#[command(author, version, about = "Electric airplane sizing calculator")]
struct Cli {
    /// Aircraft catalog (YAML file, TOML file, or directory of TOML records)
    #[arg(long, default_value = "configs/aircraft")]
    aircraft: PathBuf,

    /// Aircraft name from the catalog (defaults to the first entry)
    #[arg(long)]
    name: Option<String>,

    /// Route catalog (YAML file, TOML file, or directory of TOML records)
    #[arg(long)]
    routes: Option<PathBuf>,

    /// Extra leg as ORIGIN:DEST IATA codes or city names, repeatable
    #[arg(long = "leg")]
    legs: Vec<String>,

    /// Write the per-route performance table as CSV (use `-` for stdout)
    #[arg(long)]
    export_csv: Option<PathBuf>,

    /// Write the sizing summary as a JSON sidecar
    #[arg(long)]
    export_summary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let catalog = load_aircraft_configs(&cli.aircraft)?;
    let aircraft = select(&catalog, cli.name.as_deref())?;

    let mut legs: Vec<MissionLeg> = Vec::new();
    if let Some(routes_path) = &cli.routes {
        legs.extend(load_route_configs(routes_path)?.iter().map(from_config));
    }
    let airports = AirportCatalog;
    for spec in &cli.legs {
        legs.push(resolve_leg(&airports, spec)?);
    }
    if legs.is_empty() {
        anyhow::bail!("no mission legs: pass --routes and/or --leg ORIGIN:DEST");
    }

    let report = size_aircraft(aircraft, &legs)?;
    print_report(&aircraft.name, &legs, &report);

    if let Some(csv_path) = &cli.export_csv {
        let mut writer = route_export::writer_for_path(csv_path)?;
        route_export::write_header(writer.as_mut())?;
        for route in &report.routes {
            route_export::Record {
                route: &route.label,
                distance_km: route.distance_km,
                flight_time_h: route.flight_time_h,
                mission_energy_kwh: route.mission_energy_kwh,
                usable_battery_kwh: route.usable_battery_kwh,
                feasible: route.feasible,
                margin_pct: route.margin_pct,
            }
            .write_to(writer.as_mut())?;
        }
    }

    if let Some(summary_path) = &cli.export_summary {
        let sizing = &report.sizing;
        write_sidecar(
            summary_path,
            &SizingSummary {
                aircraft: &aircraft.name,
                governing_distance_km: sizing.governing_distance_km,
                total_mass_kg: sizing.total_mass_kg,
                wing_area_m2: sizing.wing_area_m2,
                lift_to_drag: sizing.lift_to_drag,
                cruise_power_kw: sizing.cruise_power_kw(),
                peak_power_kw: sizing.peak_power_kw,
                battery_kwh: sizing.battery_kwh,
                battery_mass_kg: sizing.battery_mass_kg,
                fuel_capacity_kg: sizing.fuel_mass_kg,
                battery_feasible: report.feasibility.feasible,
                battery_to_power_ratio_wh_kw: report.feasibility.battery_to_power_ratio_wh_kw,
                charger_power_kw: sizing.charger_power_kw,
                energy_budget_kwh: EnergyBudgetKwh {
                    taxi: sizing.energy.taxi_kwh(),
                    climb: sizing.energy.climb_kwh(),
                    cruise: sizing.energy.cruise_kwh(),
                    descent: sizing.energy.descent_kwh(),
                    reserve: sizing.energy.reserve_kwh(),
                },
            },
        )?;
    }

    Ok(())
}

fn print_report(aircraft_name: &str, legs: &[MissionLeg], report: &SizingReport) {
    let sizing = &report.sizing;

    println!("=== Aircraft Sizing: {} ===", aircraft_name);
    if let Some(governing) = governing_leg(legs) {
        println!(
            "Governing leg  : {} ({:.0} km)",
            governing.label(),
            governing.distance_km
        );
    }
    println!("MTOW           : {:.0} kg", sizing.total_mass_kg);
    println!(
        "Wing area      : {:.1} m² (L/D = {:.2})",
        sizing.wing_area_m2, sizing.lift_to_drag
    );
    println!(
        "Battery        : {:.0} kWh ({:.0} kg) {}",
        sizing.battery_kwh,
        sizing.battery_mass_kg,
        if report.feasibility.feasible {
            "feasible"
        } else {
            "INFEASIBLE (pack too large)"
        }
    );
    println!(
        "Battery/power  : {:.0} Wh/kW (limit 800)",
        report.feasibility.battery_to_power_ratio_wh_kw
    );
    println!(
        "Cruise power   : {:.0} kW, peak {:.0} kW (4 × {:.0} kW)",
        sizing.cruise_power_kw(),
        sizing.peak_power_kw,
        sizing.motor_unit_power_kw
    );
    println!("Max speed      : {:.0} km/h", sizing.max_speed_kmh);
    println!(
        "Charger        : {:.0} kW to 80% in configured charge time",
        sizing.charger_power_kw
    );
    if sizing.fuel_mass_kg > 0.0 {
        println!(
            "Fuel           : {:.0} kg capacity, tank {:.0} kg",
            sizing.fuel_mass_kg, sizing.fuel_tank_mass_kg
        );
    }

    println!("--- Energy budget (kWh) ---");
    println!(
        "taxi {:.1} | climb {:.1} | cruise {:.1} | descent {:.1} | reserve {:.1}",
        sizing.energy.taxi_kwh(),
        sizing.energy.climb_kwh(),
        sizing.energy.cruise_kwh(),
        sizing.energy.descent_kwh(),
        sizing.energy.reserve_kwh()
    );

    if let Some(hybrid) = &report.hybrid {
        println!("--- Hybrid range ---");
        println!(
            "electric-only {:.0} km | turboprop {:.0} km | combined {:.0} km",
            hybrid.electric_only_range_km, hybrid.fuel_only_range_km, hybrid.combined_range_km
        );
    }

    println!("--- Route performance ---");
    for route in &report.routes {
        let hours = route.flight_time_h.floor();
        let minutes = ((route.flight_time_h - hours) * 60.0).floor();
        let status = if route.feasible {
            format!("margin {:.0}%", route.margin_pct)
        } else {
            "INFEASIBLE".to_string()
        };
        println!(
            "{:<32} {:>6.0} km  {:>2.0}h {:>2.0}m  {:>7.0} kWh  {}",
            route.label, route.distance_km, hours, minutes, route.mission_energy_kwh, status
        );
    }

    let pure = &report.comparison.pure_electric;
    println!("--- Pure electric ---");
    println!(
        "mass {:.0} kg | range {:.0} km | {:.2} kg/km | {:.2} km/kWh | payload {:.1}%",
        pure.mass_kg, pure.range_km, pure.mass_per_km, pure.range_per_kwh, pure.payload_fraction_pct
    );
    if let Some(advantage) = &report.comparison.hybrid {
        let hybrid = &advantage.hybrid;
        println!("--- Hybrid (2E + 2TP) ---");
        println!(
            "mass {:.0} kg | range {:.0} km | {:.2} kg/km | {:.2} km/kWh-eq | payload {:.1}%",
            hybrid.mass_kg,
            hybrid.range_km,
            hybrid.mass_per_km,
            hybrid.range_per_kwh,
            hybrid.payload_fraction_pct
        );
        println!(
            "advantage      : {:+.0}% range, {:+.0} kg mass, {:+.0}% weight efficiency",
            advantage.range_improvement_pct,
            advantage.mass_delta_kg,
            advantage.weight_efficiency_gain_pct
        );
    }
}

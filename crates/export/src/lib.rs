//! Export helpers for CSV and JSON artifacts.

pub mod routes {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "route,distance_km,flight_time_h,mission_energy_kwh,usable_battery_kwh,feasible,margin_pct";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard route-performance CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the route-performance exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub route: &'a str,
        pub distance_km: f64,
        pub flight_time_h: f64,
        pub mission_energy_kwh: f64,
        pub usable_battery_kwh: f64,
        pub feasible: bool,
        pub margin_pct: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.1},{:.3},{:.2},{:.2},{},{:.1}",
                self.route,
                self.distance_km,
                self.flight_time_h,
                self.mission_energy_kwh,
                self.usable_battery_kwh,
                if self.feasible { "true" } else { "false" },
                self.margin_pct,
            )
        }
    }
}

pub mod summary {
    use chrono::Utc;
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Five-way energy budget in kWh as written to the sidecar.
    #[derive(Debug, Clone, Copy, Serialize)]
    pub struct EnergyBudgetKwh {
        pub taxi: f64,
        pub climb: f64,
        pub cruise: f64,
        pub descent: f64,
        pub reserve: f64,
    }

    /// Sizing summary envelope exported next to the CSV table.
    #[derive(Debug, Serialize)]
    pub struct SizingSummary<'a> {
        pub aircraft: &'a str,
        pub governing_distance_km: f64,
        pub total_mass_kg: f64,
        pub wing_area_m2: f64,
        pub lift_to_drag: f64,
        pub cruise_power_kw: f64,
        pub peak_power_kw: f64,
        pub battery_kwh: f64,
        pub battery_mass_kg: f64,
        pub fuel_capacity_kg: f64,
        pub battery_feasible: bool,
        pub battery_to_power_ratio_wh_kw: f64,
        pub charger_power_kw: f64,
        pub energy_budget_kwh: EnergyBudgetKwh,
    }

    #[derive(Serialize)]
    struct Sidecar<'a> {
        generated_utc: String,
        #[serde(flatten)]
        summary: &'a SizingSummary<'a>,
    }

    /// Write the JSON sizing-summary sidecar, stamping the generation time.
    pub fn write_sidecar(output: &Path, summary: &SizingSummary<'_>) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let sidecar = Sidecar {
            generated_utc: Utc::now().to_rfc3339(),
            summary,
        };
        to_writer_pretty(File::create(output)?, &sidecar)?;
        Ok(())
    }
}

//! Battery packaging feasibility gate.

use sizer_core::safe_div;

use crate::closure::SizingResult;

/// Packaging/density ceiling on the battery-to-peak-power ratio (Wh/kW).
/// A pack above this ratio is physically too large to integrate.
pub const MAX_BATTERY_TO_POWER_RATIO_WH_KW: f64 = 800.0;

/// Pass/fail verdict annotating a sizing result; it never alters the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityVerdict {
    pub feasible: bool,
    pub battery_to_power_ratio_wh_kw: f64,
}

/// Evaluate the battery/power packaging gate for a converged sizing.
pub fn evaluate(sizing: &SizingResult) -> FeasibilityVerdict {
    let ratio = safe_div(sizing.battery_kwh * 1_000.0, sizing.peak_power_kw);
    FeasibilityVerdict {
        feasible: ratio <= MAX_BATTERY_TO_POWER_RATIO_WH_KW,
        battery_to_power_ratio_wh_kw: ratio,
    }
}

//! Re-exported APIs for consumers of the sizing crate.

pub use crate::closure::{CLOSURE_PASSES, SizingResult, solve_closure};
pub use crate::comparison::{ComparisonMetrics, ElectricMetrics, HybridAdvantage, compare};
pub use crate::feasibility::{FeasibilityVerdict, MAX_BATTERY_TO_POWER_RATIO_WH_KW, evaluate};
pub use crate::performance::{RoutePerformance, evaluate_routes};
pub use crate::report::{SizingError, SizingReport, size_aircraft};
pub use sizer_hybrid::{CruisePowerSplit, HybridRangeBreakdown};

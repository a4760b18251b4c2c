//! Core units, constants, and shared primitives for the Electric Airplane Sizer workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Gravitational acceleration used throughout the sizing chain (m/s²).
    pub const GRAVITY_M_S2: f64 = 9.81;
    /// Joules per kilowatt-hour.
    pub const JOULES_PER_KWH: f64 = 3.6e6;
    /// Joules per megajoule.
    pub const JOULES_PER_MJ: f64 = 1.0e6;
    /// Metres per foot.
    pub const METERS_PER_FOOT: f64 = 0.3048;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    /// Mean Earth radius used for great-circle distances (km).
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;
}

/// Basic unit conversion helpers. Non-SI units are accepted only at the
/// configuration boundary; everything downstream of these helpers is SI.
pub mod units {
    use super::constants::{JOULES_PER_KWH, METERS_PER_FOOT, SECONDS_PER_HOUR};

    /// Convert kilometres per hour to metres per second.
    #[inline]
    pub fn kmh_to_ms(v: f64) -> f64 {
        v / 3.6
    }

    /// Convert metres per second to kilometres per hour.
    #[inline]
    pub fn ms_to_kmh(v: f64) -> f64 {
        v * 3.6
    }

    /// Convert feet to metres.
    #[inline]
    pub fn feet_to_m(v: f64) -> f64 {
        v * METERS_PER_FOOT
    }

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert joules to kilowatt-hours.
    #[inline]
    pub fn j_to_kwh(v: f64) -> f64 {
        v / JOULES_PER_KWH
    }

    /// Convert kilowatt-hours to joules.
    #[inline]
    pub fn kwh_to_j(v: f64) -> f64 {
        v * JOULES_PER_KWH
    }

    /// Convert watts to kilowatts.
    #[inline]
    pub fn w_to_kw(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(v: f64) -> f64 {
        v / SECONDS_PER_HOUR
    }
}

/// Division that resolves degenerate denominators to zero instead of faulting.
///
/// Conceptual-design tools must stay total on exploratory inputs: a zero
/// cruise speed or zero peak power yields zero-valued dependent ratios, never
/// a NaN or infinity that would poison downstream arithmetic.
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

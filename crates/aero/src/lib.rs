//! Cruise aerodynamic model: lift coefficient, drag build-up, and L/D.
//!
//! Aspect ratio and Oswald efficiency are fixed design constants rather than
//! solved variables, which keeps the mass–power closure a well-posed fixed
//! point over mass and wing area only.

/// Fixed wing aspect ratio of the concept.
pub const ASPECT_RATIO: f64 = 12.0;
/// Oswald span efficiency of the finite wing.
pub const OSWALD_EFFICIENCY: f64 = 0.82;
/// Trim and interference drag margin added on top of parasite drag.
pub const TRIM_DRAG_MARGIN: f64 = 0.003;
/// Operationally sane lift-coefficient band; the clamp is the closure's only
/// stabilisation device against divergent iteration states.
pub const CL_MIN: f64 = 0.25;
pub const CL_MAX: f64 = 1.3;

/// Dynamic pressure `q = ½·ρ·v²` (Pa).
#[inline]
pub fn dynamic_pressure_pa(density_kg_m3: f64, speed_ms: f64) -> f64 {
    0.5 * density_kg_m3 * speed_ms * speed_ms
}

/// Lift coefficient required to support `weight_n` at the given flight
/// condition, clamped to [`CL_MIN`, `CL_MAX`].
pub fn lift_coefficient(weight_n: f64, density_kg_m3: f64, speed_ms: f64, wing_area_m2: f64) -> f64 {
    let q_s = dynamic_pressure_pa(density_kg_m3, speed_ms) * wing_area_m2;
    if q_s <= 0.0 {
        return CL_MAX;
    }
    (weight_n / q_s).clamp(CL_MIN, CL_MAX)
}

/// Total drag coefficient: induced drag for the fixed wing geometry plus the
/// configured parasite coefficient and the trim margin.
pub fn drag_coefficient(cl: f64, parasite_cd0: f64) -> f64 {
    let induced = cl * cl / (std::f64::consts::PI * ASPECT_RATIO * OSWALD_EFFICIENCY);
    induced + parasite_cd0 + TRIM_DRAG_MARGIN
}

/// Drag force from the standard dynamic-pressure drag equation (N).
pub fn drag_force_n(cd: f64, density_kg_m3: f64, speed_ms: f64, wing_area_m2: f64) -> f64 {
    cd * dynamic_pressure_pa(density_kg_m3, speed_ms) * wing_area_m2
}

/// Aerodynamic state at one cruise point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CruisePoint {
    pub cl: f64,
    pub cd: f64,
    pub drag_n: f64,
    pub lift_to_drag: f64,
}

/// Evaluate the full CL → CD → drag chain for one mass / wing-area state.
pub fn cruise_point(
    weight_n: f64,
    density_kg_m3: f64,
    speed_ms: f64,
    wing_area_m2: f64,
    parasite_cd0: f64,
) -> CruisePoint {
    let cl = lift_coefficient(weight_n, density_kg_m3, speed_ms, wing_area_m2);
    let cd = drag_coefficient(cl, parasite_cd0);
    let drag_n = drag_force_n(cd, density_kg_m3, speed_ms, wing_area_m2);
    CruisePoint {
        cl,
        cd,
        drag_n,
        lift_to_drag: cl / cd,
    }
}

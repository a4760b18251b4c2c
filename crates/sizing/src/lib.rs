//! Sizing façade crate consolidating the closure solver and its evaluators.

pub mod closure;
pub mod comparison;
pub mod feasibility;
pub mod performance;
pub mod report;

pub use facade::*;

mod facade;

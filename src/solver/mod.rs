//! The constraint-solving core: domains, constraints, and the backtracking
//! search that enumerates seating plans.

pub mod assignment;
pub mod constraint;
pub mod constraints;
pub mod domain;
pub mod engine;
pub mod problem;
pub mod solution;
pub mod stats;

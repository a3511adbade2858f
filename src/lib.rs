//! Convive plans seatings. It assigns guests to a fixed number of tables,
//! honoring per-table capacity and pairwise "must sit together" / "must not
//! sit together" rules, and lazily enumerates every valid plan.
//!
//! The solver is a depth-first backtracking search over table assignments.
//! After each tentative seating it re-checks the affected rules, then runs
//! the same rules in forward-checking mode to prune tables that have become
//! impossible for guests not yet seated. All pruning is recorded on an undo
//! trail, so backtracking restores domains exactly.
//!
//! # Example
//!
//! ```
//! use convive::solver::problem::Problem;
//!
//! let mut problem = Problem::new(2);
//! problem.add_guests(["Ada", "Brook", "Cam", "Dev"]);
//! problem.max_per_table(3);
//! problem.sit_together("Ada", "Brook").unwrap();
//! problem.sit_apart("Cam", "Dev").unwrap();
//!
//! let plans: Vec<_> = problem.solutions().take(10).collect();
//! assert_eq!(plans.len(), 4);
//! for plan in &plans {
//!     assert_eq!(plan.table_of("Ada"), plan.table_of("Brook"));
//!     assert_ne!(plan.table_of("Cam"), plan.table_of("Dev"));
//! }
//! ```

pub mod error;
pub mod input;
pub mod render;
pub mod solver;

//! The backtracking search with forward checking.

use std::collections::HashMap;
use std::time::Instant;

use indexmap::IndexMap;
use tracing::debug;

use crate::solver::{
    assignment::Assignment,
    constraint::ConstraintScope,
    domain::{Checkpoint, DomainStore},
    problem::Problem,
    solution::Solution,
};

/// Index of a guest in registration order. Guests double as search
/// variables, and the id doubles as the depth at which the guest is
/// branched on.
pub type GuestId = u32;
/// A table number in `1..=table_count`.
pub type TableId = u32;
pub type ConstraintId = usize;

/// Counters for the whole search so far.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub backtracks: u64,
    pub solutions_found: u64,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PerConstraintStats {
    pub evaluations: u64,
    pub values_pruned: u64,
    pub time_spent_micros: u64,
}

/// One suspended depth of the search: the guest branched on at this depth,
/// the candidate tables not yet tried, and, while an attempt is active, the
/// trail checkpoint that undoes the attempt's pruning.
#[derive(Debug)]
struct Frame {
    guest: GuestId,
    candidates: std::vec::IntoIter<TableId>,
    checkpoint: Option<Checkpoint>,
}

/// A lazy, depth-first stream of [`Solution`]s.
///
/// Produced by [`Problem::solutions`]. Each call to [`Iterator::next`]
/// resumes the search exactly where the previous yield suspended it.
/// Dropping the iterator early abandons the rest of the search with nothing
/// to clean up, because all pruning is undone by the stack-disciplined
/// backtracking itself. Calling `solutions()` again restarts from scratch
/// and yields the identical sequence.
#[derive(Debug)]
pub struct SolutionIter<'a> {
    problem: &'a Problem,
    watchers: Vec<Vec<ConstraintId>>,
    assignment: Assignment,
    domains: DomainStore,
    frames: Vec<Frame>,
    stats: SearchStats,
    started: bool,
    exhausted: bool,
}

impl<'a> SolutionIter<'a> {
    pub(crate) fn new(problem: &'a Problem) -> Self {
        let guest_count = problem.guest_count();

        // Per-guest lists of the constraints that must be re-checked when
        // that guest is seated.
        let mut watchers = vec![Vec::new(); guest_count];
        for (id, constraint) in problem.constraints().iter().enumerate() {
            match constraint.scope() {
                ConstraintScope::AllGuests => {
                    for watched in &mut watchers {
                        watched.push(id);
                    }
                }
                ConstraintScope::Pair(a, b) => {
                    watchers[a as usize].push(id);
                    if b != a {
                        watchers[b as usize].push(id);
                    }
                }
            }
        }

        Self {
            problem,
            watchers,
            assignment: Assignment::new(guest_count),
            domains: DomainStore::new(guest_count, problem.table_count()),
            frames: Vec::new(),
            stats: SearchStats::default(),
            started: false,
            exhausted: false,
        }
    }

    /// Counters accumulated so far; they keep growing as the iterator is
    /// consumed.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn snapshot_solution(&self) -> Solution {
        let seats: IndexMap<String, TableId> = self
            .problem
            .guests()
            .enumerate()
            .map(|(guest, name)| {
                let table = self.assignment.get(guest as GuestId).unwrap();
                (name.to_string(), table)
            })
            .collect();
        Solution::new(seats)
    }

    /// Undoes the active attempt at `depth`, if any.
    fn retract(&mut self, depth: usize) {
        if let Some(checkpoint) = self.frames[depth].checkpoint.take() {
            self.domains.rollback_to(checkpoint);
            self.assignment.unassign(self.frames[depth].guest);
        }
    }

    /// Advances the frame at `depth` to its next candidate that survives
    /// both constraint passes. Returns `false` once the frame is exhausted.
    fn advance(&mut self, depth: usize) -> bool {
        let guest = self.frames[depth].guest;
        while let Some(table) = self.frames[depth].candidates.next() {
            let checkpoint = self.domains.checkpoint();
            self.assignment.assign(guest, table);
            self.stats.nodes_visited += 1;
            if self.revise(guest) {
                self.frames[depth].checkpoint = Some(checkpoint);
                return true;
            }
            self.domains.rollback_to(checkpoint);
            self.assignment.unassign(guest);
        }
        false
    }

    /// One cheap pass, then one forward-checking pass, over every constraint
    /// watching `guest`. Returns `false` when the attempt is infeasible.
    fn revise(&mut self, guest: GuestId) -> bool {
        let constraints = self.problem.constraints();

        for &id in &self.watchers[guest as usize] {
            let started = Instant::now();
            let verdict = constraints[id].evaluate(&self.assignment, &mut self.domains, false);
            let entry = self.stats.constraint_stats.entry(id).or_default();
            entry.evaluations += 1;
            entry.time_spent_micros += started.elapsed().as_micros() as u64;
            if verdict.is_violated() {
                return false;
            }
        }

        for &id in &self.watchers[guest as usize] {
            let started = Instant::now();
            let before = self.domains.trail_len();
            let verdict = constraints[id].evaluate(&self.assignment, &mut self.domains, true);
            let entry = self.stats.constraint_stats.entry(id).or_default();
            entry.evaluations += 1;
            entry.values_pruned += (self.domains.trail_len() - before) as u64;
            entry.time_spent_micros += started.elapsed().as_micros() as u64;
            if verdict.is_violated() {
                return false;
            }
        }

        true
    }
}

impl Iterator for SolutionIter<'_> {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        if self.exhausted {
            return None;
        }

        // After a yield the deepest assignment is still in place; resume by
        // retreating into that frame and trying its remaining candidates.
        let mut retreating = self.started;
        self.started = true;

        loop {
            if !retreating {
                if self.assignment.is_complete() {
                    self.stats.solutions_found += 1;
                    return Some(self.snapshot_solution());
                }
                let guest = self.frames.len() as GuestId;
                let candidates = self.domains.remaining(guest);
                self.frames.push(Frame {
                    guest,
                    candidates: candidates.into_iter(),
                    checkpoint: None,
                });
            }

            let Some(depth) = self.frames.len().checked_sub(1) else {
                debug!(
                    nodes = self.stats.nodes_visited,
                    solutions = self.stats.solutions_found,
                    "search space exhausted"
                );
                self.exhausted = true;
                return None;
            };

            self.retract(depth);
            if self.advance(depth) {
                retreating = false;
            } else {
                let _ = self.frames.pop();
                self.stats.backtracks += 1;
                retreating = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::solver::problem::Problem;

    #[test]
    fn permutations_come_out_in_ascending_table_order() {
        let mut problem = Problem::new(3);
        problem.add_guests(["a", "b", "c"]);
        problem.max_per_table(1);

        let seatings: Vec<Vec<u32>> = problem
            .solutions()
            .map(|plan| plan.guests().map(|(_, table)| table).collect())
            .collect();

        assert_eq!(
            seatings,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn capacity_too_small_yields_nothing() {
        let mut problem = Problem::new(1);
        problem.add_guests(["a", "b"]);
        problem.max_per_table(1);
        assert_eq!(problem.solutions().count(), 0);
    }

    #[test]
    fn zero_capacity_yields_nothing() {
        let mut problem = Problem::new(2);
        problem.add_guests(["a"]);
        problem.max_per_table(0);
        assert_eq!(problem.solutions().count(), 0);
    }

    #[test]
    fn no_guests_yields_one_empty_plan() {
        let problem = Problem::new(3);
        let plans: Vec<_> = problem.solutions().collect();
        assert_eq!(plans.len(), 1);
        assert!(plans[0].is_empty());
    }

    #[test]
    fn search_resumes_after_each_yield() {
        let mut problem = Problem::new(2);
        problem.add_guests(["a", "b"]);

        let mut solutions = problem.solutions();
        let first = solutions.next().unwrap();
        let second = solutions.next().unwrap();
        assert_ne!(first, second);
        // Two guests over two tables, unconstrained: four plans in total.
        assert_eq!(solutions.count(), 2);
    }

    #[test]
    fn early_termination_leaves_a_fresh_run_identical() {
        let mut problem = Problem::new(2);
        problem.add_guests(["a", "b", "c"]);
        problem.max_per_table(2);

        let full: Vec<_> = problem.solutions().collect();
        let mut partial = problem.solutions();
        let _ = partial.next();
        drop(partial);
        let rerun: Vec<_> = problem.solutions().collect();

        assert_eq!(full, rerun);
    }

    #[test]
    fn stats_track_the_consumed_search() {
        let mut problem = Problem::new(2);
        problem.add_guests(["a", "b"]);
        problem.max_per_table(1);

        let mut solutions = problem.solutions();
        while solutions.next().is_some() {}

        let stats = solutions.stats();
        assert_eq!(stats.solutions_found, 2);
        assert!(stats.nodes_visited >= 2);
        assert!(stats.backtracks >= 1);
        assert!(!stats.constraint_stats.is_empty());
    }
}

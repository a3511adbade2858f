use crate::solver::{
    assignment::Assignment,
    constraint::{ConstraintDescriptor, Evaluation},
    domain::DomainStore,
};

/// Caps the number of guests seated at any one table.
///
/// The cheap check recounts per-table occupancy from the current assignment.
/// The forward check hides every full table from the domains of unseated
/// guests, so the search never descends into an overfull branch.
#[derive(Debug, Clone)]
pub struct CapacityConstraint {
    max_per_table: usize,
}

impl CapacityConstraint {
    pub fn new(max_per_table: usize) -> Self {
        Self { max_per_table }
    }

    pub fn max_per_table(&self) -> usize {
        self.max_per_table
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "CapacityConstraint".to_string(),
            description: format!("at most {} guests per table", self.max_per_table),
        }
    }

    pub fn evaluate(
        &self,
        assignment: &Assignment,
        domains: &mut DomainStore,
        forward_check: bool,
    ) -> Evaluation {
        let mut occupancy = vec![0usize; domains.table_count() as usize + 1];
        for (_, table) in assignment.iter() {
            let count = &mut occupancy[table as usize];
            *count += 1;
            if *count > self.max_per_table {
                return Evaluation::Violated;
            }
        }

        if forward_check {
            for guest in 0..assignment.len() as u32 {
                if assignment.get(guest).is_some() {
                    continue;
                }
                for table in domains.remaining(guest) {
                    if occupancy[table as usize] >= self.max_per_table {
                        let _ = domains.hide(guest, table);
                    }
                }
                if domains.domain(guest).is_empty() {
                    return Evaluation::Violated;
                }
            }
        }

        Evaluation::Satisfiable
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn state(guest_count: usize, table_count: u32) -> (Assignment, DomainStore) {
        (
            Assignment::new(guest_count),
            DomainStore::new(guest_count, table_count),
        )
    }

    #[test]
    fn within_capacity_is_satisfiable() {
        let (mut assignment, mut domains) = state(3, 2);
        let constraint = CapacityConstraint::new(2);
        assignment.assign(0, 1);
        assignment.assign(1, 1);
        assert_eq!(
            constraint.evaluate(&assignment, &mut domains, false),
            Evaluation::Satisfiable
        );
    }

    #[test]
    fn overfull_table_is_violated() {
        let (mut assignment, mut domains) = state(3, 2);
        let constraint = CapacityConstraint::new(1);
        assignment.assign(0, 1);
        assignment.assign(1, 1);
        assert_eq!(
            constraint.evaluate(&assignment, &mut domains, false),
            Evaluation::Violated
        );
    }

    #[test]
    fn forward_check_hides_full_tables_from_unseated_guests() {
        let (mut assignment, mut domains) = state(3, 2);
        let constraint = CapacityConstraint::new(1);
        assignment.assign(0, 1);
        assert_eq!(
            constraint.evaluate(&assignment, &mut domains, true),
            Evaluation::Satisfiable
        );
        assert_eq!(domains.remaining(1), vec![2]);
        assert_eq!(domains.remaining(2), vec![2]);
    }

    #[test]
    fn forward_check_reports_an_emptied_domain() {
        let (mut assignment, mut domains) = state(2, 1);
        let constraint = CapacityConstraint::new(1);
        assignment.assign(0, 1);
        assert_eq!(
            constraint.evaluate(&assignment, &mut domains, true),
            Evaluation::Violated
        );
    }

    #[test]
    fn prunes_are_recorded_on_the_trail() {
        let (mut assignment, mut domains) = state(2, 2);
        let constraint = CapacityConstraint::new(1);
        assignment.assign(0, 1);

        let mark = domains.checkpoint();
        assert_eq!(
            constraint.evaluate(&assignment, &mut domains, true),
            Evaluation::Satisfiable
        );
        assert_eq!(domains.remaining(1), vec![2]);

        domains.rollback_to(mark);
        assert_eq!(domains.remaining(1), vec![1, 2]);
    }
}

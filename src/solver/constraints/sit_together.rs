use crate::solver::{
    assignment::Assignment,
    constraint::{ConstraintDescriptor, Evaluation},
    domain::DomainStore,
    engine::{GuestId, TableId},
};

/// Forces two guests to share a table.
///
/// Once one of the pair is seated, forward checking collapses the other's
/// domain to that single table.
#[derive(Debug, Clone)]
pub struct SitTogetherConstraint {
    pair: [GuestId; 2],
}

impl SitTogetherConstraint {
    pub fn new(a: GuestId, b: GuestId) -> Self {
        Self { pair: [a, b] }
    }

    pub fn pair(&self) -> [GuestId; 2] {
        self.pair
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "SitTogetherConstraint".to_string(),
            description: format!("?{} == ?{}", self.pair[0], self.pair[1]),
        }
    }

    pub fn evaluate(
        &self,
        assignment: &Assignment,
        domains: &mut DomainStore,
        forward_check: bool,
    ) -> Evaluation {
        let seats = [assignment.get(self.pair[0]), assignment.get(self.pair[1])];

        if let [Some(a), Some(b)] = seats {
            if a != b {
                return Evaluation::Violated;
            }
        }

        if forward_check {
            let restricted = match seats {
                [Some(table), None] => Some((self.pair[1], table)),
                [None, Some(table)] => Some((self.pair[0], table)),
                _ => None,
            };
            if let Some((other, table)) = restricted {
                return restrict_to(domains, other, table);
            }
        }

        Evaluation::Satisfiable
    }
}

/// Hides every candidate except `table` from `guest`'s domain.
fn restrict_to(domains: &mut DomainStore, guest: GuestId, table: TableId) -> Evaluation {
    for candidate in domains.remaining(guest) {
        if candidate != table {
            let _ = domains.hide(guest, candidate);
        }
    }
    if domains.domain(guest).is_empty() {
        Evaluation::Violated
    } else {
        Evaluation::Satisfiable
    }
}

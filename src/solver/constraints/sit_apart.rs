use crate::solver::{
    assignment::Assignment,
    constraint::{ConstraintDescriptor, Evaluation},
    domain::DomainStore,
    engine::GuestId,
};

/// Keeps two guests at different tables.
///
/// The mirror image of
/// [`SitTogetherConstraint`](crate::solver::constraints::sit_together::SitTogetherConstraint):
/// once one of the pair is seated, forward checking hides that table from
/// the other's domain.
#[derive(Debug, Clone)]
pub struct SitApartConstraint {
    pair: [GuestId; 2],
}

impl SitApartConstraint {
    pub fn new(a: GuestId, b: GuestId) -> Self {
        Self { pair: [a, b] }
    }

    pub fn pair(&self) -> [GuestId; 2] {
        self.pair
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "SitApartConstraint".to_string(),
            description: format!("?{} != ?{}", self.pair[0], self.pair[1]),
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
            if a == b {
                return Evaluation::Violated;
            }
        }

        if forward_check {
            let taken = match seats {
                [Some(table), None] => Some((self.pair[1], table)),
                [None, Some(table)] => Some((self.pair[0], table)),
                _ => None,
            };
            if let Some((other, table)) = taken {
                let _ = domains.hide(other, table);
                if domains.domain(other).is_empty() {
                    return Evaluation::Violated;
                }
            }
        }

        Evaluation::Satisfiable
    }
}

use crate::solver::{
    assignment::Assignment,
    constraints::{
        capacity::CapacityConstraint, sit_apart::SitApartConstraint,
        sit_together::SitTogetherConstraint,
    },
    domain::DomainStore,
    engine::GuestId,
};

/// Verdict of a single constraint evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Nothing currently seated contradicts the constraint.
    Satisfiable,
    /// The constraint cannot hold on this branch.
    Violated,
}

impl Evaluation {
    pub fn is_violated(self) -> bool {
        matches!(self, Evaluation::Violated)
    }
}

#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// The guests whose assignments a constraint reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintScope {
    /// Watches every guest (the capacity rule).
    AllGuests,
    Pair(GuestId, GuestId),
}

/// The closed set of seating rules.
///
/// Dispatching through an enum rather than trait objects keeps the search
/// engine ignorant of constraint internals while letting the compiler check
/// that every variant handles the full evaluation protocol.
#[derive(Debug, Clone)]
pub enum SeatingConstraint {
    Capacity(CapacityConstraint),
    SitTogether(SitTogetherConstraint),
    SitApart(SitApartConstraint),
}

impl SeatingConstraint {
    pub fn scope(&self) -> ConstraintScope {
        match self {
            SeatingConstraint::Capacity(_) => ConstraintScope::AllGuests,
            SeatingConstraint::SitTogether(constraint) => {
                let [a, b] = constraint.pair();
                ConstraintScope::Pair(a, b)
            }
            SeatingConstraint::SitApart(constraint) => {
                let [a, b] = constraint.pair();
                ConstraintScope::Pair(a, b)
            }
        }
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        match self {
            SeatingConstraint::Capacity(constraint) => constraint.descriptor(),
            SeatingConstraint::SitTogether(constraint) => constraint.descriptor(),
            SeatingConstraint::SitApart(constraint) => constraint.descriptor(),
        }
    }

    /// Evaluates the constraint against the current search state.
    ///
    /// Without `forward_check` this is a cheap consistency check over guests
    /// that are already seated; a detected violation is reported immediately.
    /// With `forward_check`, domains of unseated guests the constraint
    /// references are additionally pruned. Every prune lands on the store's
    /// trail, and an evaluation that empties a domain reports `Violated` so
    /// the search can retreat.
    ///
    /// Constraints hold no state of their own; each call recomputes from the
    /// assignment it is given.
    pub fn evaluate(
        &self,
        assignment: &Assignment,
        domains: &mut DomainStore,
        forward_check: bool,
    ) -> Evaluation {
        match self {
            SeatingConstraint::Capacity(constraint) => {
                constraint.evaluate(assignment, domains, forward_check)
            }
            SeatingConstraint::SitTogether(constraint) => {
                constraint.evaluate(assignment, domains, forward_check)
            }
            SeatingConstraint::SitApart(constraint) => {
                constraint.evaluate(assignment, domains, forward_check)
            }
        }
    }
}

impl From<CapacityConstraint> for SeatingConstraint {
    fn from(constraint: CapacityConstraint) -> Self {
        SeatingConstraint::Capacity(constraint)
    }
}

impl From<SitTogetherConstraint> for SeatingConstraint {
    fn from(constraint: SitTogetherConstraint) -> Self {
        SeatingConstraint::SitTogether(constraint)
    }
}

impl From<SitApartConstraint> for SeatingConstraint {
    fn from(constraint: SitApartConstraint) -> Self {
        SeatingConstraint::SitApart(constraint)
    }
}

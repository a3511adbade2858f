use indexmap::IndexSet;

use crate::{
    error::{PlanError, Result},
    solver::{
        constraint::SeatingConstraint,
        constraints::{
            capacity::CapacityConstraint, sit_apart::SitApartConstraint,
            sit_together::SitTogetherConstraint,
        },
        engine::{GuestId, SolutionIter},
    },
};

/// A seating problem: the guest list, the number of tables, and the rules.
///
/// Guests double as search variables. The order in which they are registered
/// fixes both the branching order of the search and the order of guests in
/// emitted [`Solution`](crate::solver::solution::Solution)s, so an unchanged
/// problem always enumerates its plans in the same sequence.
///
/// A problem is built once and is read-only while a
/// [`SolutionIter`] borrows it.
#[derive(Debug, Clone)]
pub struct Problem {
    guests: IndexSet<String>,
    table_count: u32,
    constraints: Vec<SeatingConstraint>,
}

impl Problem {
    /// Creates a problem over tables numbered `1..=table_count`.
    pub fn new(table_count: u32) -> Self {
        Self {
            guests: IndexSet::new(),
            table_count,
            constraints: Vec::new(),
        }
    }

    /// Registers a guest and returns its id. Registering the same name again
    /// returns the original id.
    pub fn add_guest(&mut self, name: impl Into<String>) -> GuestId {
        let (index, _) = self.guests.insert_full(name.into());
        index as GuestId
    }

    pub fn add_guests<I, T>(&mut self, names: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for name in names {
            let _ = self.add_guest(name);
        }
    }

    pub fn guest_count(&self) -> usize {
        self.guests.len()
    }

    pub fn table_count(&self) -> u32 {
        self.table_count
    }

    pub fn guest_id(&self, name: &str) -> Option<GuestId> {
        self.guests.get_index_of(name).map(|index| index as GuestId)
    }

    pub fn guest_name(&self, guest: GuestId) -> Option<&str> {
        self.guests.get_index(guest as usize).map(String::as_str)
    }

    /// Guest names in registration order.
    pub fn guests(&self) -> impl Iterator<Item = &str> + '_ {
        self.guests.iter().map(String::as_str)
    }

    /// Caps every table at `max_per_table` guests.
    pub fn max_per_table(&mut self, max_per_table: usize) {
        self.constraints
            .push(CapacityConstraint::new(max_per_table).into());
    }

    /// Requires `a` and `b` to share a table.
    ///
    /// Fails with [`PlanError::UnknownGuest`] when either name was never
    /// registered, so the search itself only ever sees resolved guests.
    pub fn sit_together(&mut self, a: &str, b: &str) -> Result<()> {
        let (a, b) = self.resolve_pair(a, b)?;
        self.constraints.push(SitTogetherConstraint::new(a, b).into());
        Ok(())
    }

    /// Requires `a` and `b` to sit at different tables.
    pub fn sit_apart(&mut self, a: &str, b: &str) -> Result<()> {
        let (a, b) = self.resolve_pair(a, b)?;
        self.constraints.push(SitApartConstraint::new(a, b).into());
        Ok(())
    }

    pub fn constraints(&self) -> &[SeatingConstraint] {
        &self.constraints
    }

    /// Starts a fresh lazy enumeration of every valid seating plan.
    pub fn solutions(&self) -> SolutionIter<'_> {
        SolutionIter::new(self)
    }

    fn resolve_pair(&self, a: &str, b: &str) -> Result<(GuestId, GuestId)> {
        let a = self
            .guest_id(a)
            .ok_or_else(|| PlanError::UnknownGuest(a.to_string()))?;
        let b = self
            .guest_id(b)
            .ok_or_else(|| PlanError::UnknownGuest(b.to_string()))?;
        Ok((a, b))
    }
}

//! Candidate-table bookkeeping with an explicit undo trail.

use crate::solver::engine::{GuestId, TableId};

/// The set of tables still considered possible for one guest.
///
/// Candidates are kept against a fixed ascending list of table ids with a
/// liveness mask, so iteration order stays ascending no matter in which
/// order values were hidden and restored.
#[derive(Debug, Clone)]
pub struct Domain {
    tables: Vec<TableId>,
    alive: Vec<bool>,
    live: usize,
}

impl Domain {
    fn new(table_count: u32) -> Self {
        Self {
            tables: (1..=table_count).collect(),
            alive: vec![true; table_count as usize],
            live: table_count as usize,
        }
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn contains(&self, table: TableId) -> bool {
        self.slot(table).map(|slot| self.alive[slot]).unwrap_or(false)
    }

    /// Remaining candidates in ascending table-id order.
    pub fn iter(&self) -> impl Iterator<Item = TableId> + '_ {
        self.tables
            .iter()
            .zip(&self.alive)
            .filter(|(_, alive)| **alive)
            .map(|(table, _)| *table)
    }

    fn slot(&self, table: TableId) -> Option<usize> {
        (table >= 1 && table <= self.tables.len() as u32).then(|| (table - 1) as usize)
    }

    fn hide(&mut self, table: TableId) -> bool {
        match self.slot(table) {
            Some(slot) if self.alive[slot] => {
                self.alive[slot] = false;
                self.live -= 1;
                true
            }
            _ => false,
        }
    }

    fn unhide(&mut self, table: TableId) {
        if let Some(slot) = self.slot(table) {
            if !self.alive[slot] {
                self.alive[slot] = true;
                self.live += 1;
            }
        }
    }
}

/// A mark on the [`DomainStore`] trail. Rolling back to a checkpoint undoes
/// every hide recorded after the mark was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(pub(crate) usize);

/// Every guest's domain, indexed by [`GuestId`], together with the
/// chronological trail of hides that lets the search undo forward-checking
/// when it backtracks.
///
/// Emptying a domain is not an error here; callers observe emptiness and
/// treat it as an infeasible branch.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: Vec<Domain>,
    trail: Vec<(GuestId, TableId)>,
    table_count: u32,
}

impl DomainStore {
    pub fn new(guest_count: usize, table_count: u32) -> Self {
        Self {
            domains: (0..guest_count).map(|_| Domain::new(table_count)).collect(),
            trail: Vec::new(),
            table_count,
        }
    }

    pub fn guest_count(&self) -> usize {
        self.domains.len()
    }

    pub fn table_count(&self) -> u32 {
        self.table_count
    }

    pub fn domain(&self, guest: GuestId) -> &Domain {
        &self.domains[guest as usize]
    }

    /// Snapshot of a guest's remaining candidates, ascending.
    pub fn remaining(&self, guest: GuestId) -> Vec<TableId> {
        self.domain(guest).iter().collect()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.trail.len())
    }

    pub(crate) fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Hides `table` from `guest`'s domain, recording the removal so it can
    /// be undone later. Returns `false` when the value was already absent.
    pub fn hide(&mut self, guest: GuestId, table: TableId) -> bool {
        if self.domains[guest as usize].hide(table) {
            self.trail.push((guest, table));
            true
        } else {
            false
        }
    }

    /// Undoes, most recent first, every hide recorded after `checkpoint`.
    pub fn rollback_to(&mut self, checkpoint: Checkpoint) {
        while self.trail.len() > checkpoint.0 {
            let (guest, table) = self.trail.pop().unwrap();
            self.domains[guest as usize].unhide(table);
        }
    }
}

//! Turning solutions into per-table listings.

use std::collections::{BTreeMap, HashSet};
use std::io::{self, Write};

use crate::solver::{engine::TableId, solution::Solution};

/// Groups a plan by table: ascending table ids, guests sorted by name.
pub fn group_by_table(solution: &Solution) -> BTreeMap<TableId, Vec<&str>> {
    let mut tables: BTreeMap<TableId, Vec<&str>> = BTreeMap::new();
    for (name, table) in solution.guests() {
        tables.entry(table).or_default().push(name);
    }
    for guests in tables.values_mut() {
        guests.sort_unstable();
    }
    tables
}

/// Table groupings rendered earlier in the run, keyed by exact guest set.
///
/// The caller owns this and threads it through [`write_solution`], so repeat
/// detection spans exactly one program run.
#[derive(Debug, Default)]
pub struct SeenTables {
    seen: HashSet<Vec<String>>,
}

impl SeenTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a table's guest set; returns `true` when the identical set
    /// was already rendered earlier in the run.
    pub fn observe(&mut self, guests: &[&str]) -> bool {
        let key: Vec<String> = guests.iter().map(|name| name.to_string()).collect();
        !self.seen.insert(key)
    }
}

/// Writes one solution as per-table listings.
pub fn write_solution<W: Write>(
    out: &mut W,
    solution: &Solution,
    seen: &mut SeenTables,
) -> io::Result<()> {
    for (table, guests) in group_by_table(solution) {
        let title = format!("Table {} ({} people)", table, guests.len());
        writeln!(out, "{title}")?;
        if seen.observe(&guests) {
            writeln!(out, "(previously seen table!)")?;
        }
        writeln!(out, "{}", "=".repeat(title.len()))?;
        for guest in guests {
            writeln!(out, "{guest}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

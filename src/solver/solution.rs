use indexmap::IndexMap;
use serde::Serialize;

use crate::solver::engine::TableId;

/// A complete, constraint-satisfying seating plan emitted by the search.
///
/// Guests appear in the order they were registered on the
/// [`Problem`](crate::solver::problem::Problem). Ownership passes to the
/// caller; the engine never revisits an emitted plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Solution {
    seats: IndexMap<String, TableId>,
}

impl Solution {
    pub(crate) fn new(seats: IndexMap<String, TableId>) -> Self {
        Self { seats }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn table_of(&self, guest: &str) -> Option<TableId> {
        self.seats.get(guest).copied()
    }

    /// `(guest, table)` pairs in registration order.
    pub fn guests(&self) -> impl Iterator<Item = (&str, TableId)> + '_ {
        self.seats.iter().map(|(name, table)| (name.as_str(), *table))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plan(entries: &[(&str, TableId)]) -> Solution {
        Solution::new(
            entries
                .iter()
                .map(|(name, table)| (name.to_string(), *table))
                .collect(),
        )
    }

    #[test]
    fn lookup_and_iteration() {
        let solution = plan(&[("ada", 1), ("brook", 2)]);
        assert_eq!(solution.table_of("ada"), Some(1));
        assert_eq!(solution.table_of("ghost"), None);
        assert_eq!(
            solution.guests().collect::<Vec<_>>(),
            vec![("ada", 1), ("brook", 2)]
        );
    }

    #[test]
    fn serializes_as_a_flat_object() {
        let solution = plan(&[("ada", 1), ("brook", 2)]);
        let json = serde_json::to_string(&solution).unwrap();
        assert_eq!(json, r#"{"ada":1,"brook":2}"#);
    }
}

use prettytable::{Cell, Row, Table};

use crate::solver::{
    constraint::SeatingConstraint,
    engine::{ConstraintId, PerConstraintStats, SearchStats},
};

/// One-line roll-up of the search counters.
pub fn render_search_summary(stats: &SearchStats) -> String {
    format!(
        "{} nodes visited, {} backtracks, {} solutions",
        stats.nodes_visited, stats.backtracks, stats.solutions_found
    )
}

/// Formats the per-constraint counters gathered during a search, cheapest
/// constraint first.
pub fn render_stats_table(stats: &SearchStats, constraints: &[SeatingConstraint]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Evaluations"),
        Cell::new("Values Pruned"),
        Cell::new("Time / Call (us)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();
    sorted_stats.sort_by_key(|entry| entry.1.time_spent_micros);

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = constraints[*constraint_id].descriptor();
        let avg_time = if constraint_stats.evaluations > 0 {
            constraint_stats.time_spent_micros as f64 / constraint_stats.evaluations as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.evaluations.to_string()),
            Cell::new(&constraint_stats.values_pruned.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                constraint_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}

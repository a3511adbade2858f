use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use convive::{
    error::{PlanError, Result},
    input,
    render::{write_solution, SeenTables},
    solver::{
        problem::Problem,
        stats::{render_search_summary, render_stats_table},
    },
};

/// Seat guests at tables under capacity and companionship rules.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of seating plans to print.
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// Number of tables to seat guests at.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    tables: u32,

    /// Path to a file with one guest name per line.
    #[arg(long, default_value = "guests")]
    guests: PathBuf,

    /// Path to a CSV of guest pairs that must share a table.
    #[arg(long, default_value = "prefer.csv")]
    prefer: PathBuf,

    /// Path to a CSV of guest pairs that must not share a table.
    #[arg(long, default_value = "avoid.csv")]
    avoid: PathBuf,

    /// Seats per table. Defaults to spreading the guests evenly across the
    /// tables.
    #[arg(long)]
    per_table: Option<usize>,

    /// Print each plan as one JSON object per line instead of table
    /// listings.
    #[arg(long)]
    json: bool,

    /// Print search statistics after the run.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let guests = input::read_guest_list(&args.guests)?;
    let prefer = input::read_pairs(&args.prefer)?;
    let avoid = input::read_pairs(&args.avoid)?;

    let mut problem = Problem::new(args.tables);
    problem.add_guests(guests);

    let per_table = args
        .per_table
        .unwrap_or_else(|| problem.guest_count().div_ceil(args.tables as usize));
    problem.max_per_table(per_table);

    for (a, b) in &prefer {
        problem.sit_together(a, b)?;
    }
    for (a, b) in &avoid {
        problem.sit_apart(a, b)?;
    }

    println!("Number of tables: {}", problem.table_count());
    println!(
        "Total guests: {} per table: {per_table}",
        problem.guest_count()
    );
    println!();
    println!("Solutions:");
    println!();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut seen = SeenTables::new();
    let mut printed = 0usize;
    let mut solutions = problem.solutions();
    while printed < args.limit {
        let Some(solution) = solutions.next() else {
            break;
        };
        printed += 1;
        if args.json {
            let line = serde_json::to_string(&solution).expect("plans serialize to JSON");
            writeln!(out, "{line}").map_err(PlanError::Output)?;
        } else {
            writeln!(out, "Solution #{printed}:").map_err(PlanError::Output)?;
            write_solution(&mut out, &solution, &mut seen).map_err(PlanError::Output)?;
        }
    }

    if printed == 0 {
        println!("No feasible seating found.");
    }

    if args.stats {
        println!("{}", render_search_summary(solutions.stats()));
        println!(
            "{}",
            render_stats_table(solutions.stats(), problem.constraints())
        );
    }

    Ok(())
}

//! Terminal output for grids and search reports.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::Stylize;

use crate::puzzle::{Grid, Position, SIDE};
use crate::search::SearchReport;

/// Writes `grid` as three rows. With `color`, the blank is dimmed and tiles
/// already on their goal cell are green.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid, color: bool) -> io::Result<()> {
    for row in 0..SIDE {
        for col in 0..SIDE {
            let pos = Position::new(row, col);
            let value = grid.get(pos);
            let cell = format!("{:2} ", value);

            if !color {
                write!(out, "{}", cell)?;
            } else if value == 0 {
                write!(out, "{}", cell.dark_grey())?;
            } else if Grid::GOAL.get(pos) == value {
                write!(out, "{}", cell.green().bold())?;
            } else {
                write!(out, "{}", cell.bold())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn seconds(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64()
}

/// Writes the path (unless `quiet`) followed by cost, expansions, depth and
/// time.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &SearchReport,
    quiet: bool,
    color: bool,
) -> io::Result<()> {
    let Some(path) = &report.path else {
        writeln!(out, "No solution found")?;
        writeln!(out, "Number of Expanded Nodes: {}", report.expanded())?;
        writeln!(out, "Execution Time: {}", seconds(report.elapsed))?;
        return Ok(());
    };

    if !quiet {
        writeln!(out, "Path to goal")?;
        let moves = path.moves().unwrap_or_default();
        for (i, grid) in path.into_iter().enumerate() {
            writeln!(out)?;
            if let Some(movement) = i.checked_sub(1).and_then(|m| moves.get(m)) {
                writeln!(out, "{}", movement)?;
            }
            write_grid(out, grid, color)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Cost of Path: {}", path.cost())?;
    writeln!(out, "Number of Expanded Nodes: {}", report.expanded())?;
    writeln!(out, "Search Depth: {}", report.stats.max_depth)?;
    writeln!(out, "Max Frontier Size: {}", report.stats.max_frontier)?;
    writeln!(out, "Execution Time: {}", seconds(report.elapsed))?;
    Ok(())
}

/// One line per run: method, cost, expansions, depth, frontier and time.
pub fn write_comparison<W: Write>(
    out: &mut W,
    rows: &[(String, SearchReport)],
) -> io::Result<()> {
    writeln!(
        out,
        "{:<28} {:>6} {:>10} {:>8} {:>10} {:>12}",
        "Method", "Cost", "Expanded", "Depth", "Frontier", "Time (s)"
    )?;
    for (label, report) in rows {
        let cost = report
            .cost()
            .map_or_else(|| "-".to_string(), |c| c.to_string());
        writeln!(
            out,
            "{:<28} {:>6} {:>10} {:>8} {:>10} {:>12.6}",
            label,
            cost,
            report.expanded(),
            report.stats.max_depth,
            report.stats.max_frontier,
            seconds(report.elapsed)
        )?;
    }
    Ok(())
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Report builder for finished simulation runs.
//!
//! Aggregates a final [`FarmView`] into totals plus a rendered fixed-width
//! table. Rendering is a pure data-to-text transform kept apart from the
//! simulation so the numbers stay testable without parsing strings.

use farm_defence_core::FarmView;
use serde::Serialize;

const HEADERS: [&str; 4] = ["FARM", "LEVEL", "COST", "INCOME"];

/// Aggregated outcome of a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Sum of cost over the counted farms.
    pub total_cost: u64,
    /// Sum of income over the counted farms.
    pub total_income: u64,
    /// Income minus cost; negative when the horizon ends before break-even.
    pub net: i64,
    /// Rendered fixed-width table, one row per farm.
    pub table: String,
}

/// Builds the aggregate report over the first `max_farms` farms by id.
#[must_use]
pub fn build_report(view: &FarmView, max_farms: u32) -> Report {
    let counted = view.iter().take(max_farms as usize);
    let (total_cost, total_income) = counted.fold((0u64, 0u64), |(cost, income), farm| {
        (cost + farm.total_cost, income + farm.total_income)
    });

    Report {
        total_cost,
        total_income,
        net: total_income as i64 - total_cost as i64,
        table: render_table(view),
    }
}

/// Renders the per-farm grid with a header row and right-aligned columns.
///
/// The capped flag is deliberately not a column; the reference report drops
/// it from the rendered frame as well.
#[must_use]
pub fn render_table(view: &FarmView) -> String {
    let rows: Vec<[String; 4]> = view
        .iter()
        .map(|farm| {
            [
                farm.id.get().to_string(),
                farm.level.to_string(),
                farm.total_cost.to_string(),
                farm.total_income.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let rule = horizontal_rule(&widths);
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule.clone());
    lines.push(render_row(
        &HEADERS.map(String::from),
        &widths,
    ));
    lines.push(rule.clone());
    for row in &rows {
        lines.push(render_row(row, &widths));
    }
    lines.push(rule);
    lines.join("\n")
}

fn horizontal_rule(widths: &[usize; 4]) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn render_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!(" {cell:>width$} "))
        .collect();
    format!("|{}|", rendered.join("|"))
}

#[cfg(test)]
mod tests {
    use super::{build_report, render_table};
    use farm_defence_core::{FarmId, FarmSnapshot, FarmView};

    fn snapshot(id: u32, level: u8, cost: u64, income: u64) -> FarmSnapshot {
        FarmSnapshot {
            id: FarmId::new(id),
            level,
            total_cost: cost,
            total_income: income,
            capped: false,
        }
    }

    #[test]
    fn totals_cover_the_first_max_farms_by_id() {
        let view = FarmView::from_snapshots(vec![
            snapshot(2, 1, 200, 100),
            snapshot(1, 2, 450, 150),
            snapshot(3, 0, 250, 50),
        ]);

        let report = build_report(&view, 2);
        assert_eq!(report.total_cost, 650);
        assert_eq!(report.total_income, 250);
        assert_eq!(report.net, -400);
    }

    #[test]
    fn net_income_can_go_positive() {
        let view = FarmView::from_snapshots(vec![snapshot(1, 5, 9500, 55650)]);
        let report = build_report(&view, 8);
        assert_eq!(report.net, 46150);
    }

    #[test]
    fn table_renders_right_aligned_numeric_rows() {
        let view = FarmView::from_snapshots(vec![
            snapshot(1, 5, 9500, 55650),
            snapshot(2, 0, 250, 50),
        ]);

        let expected = "\
+------+-------+------+--------+
| FARM | LEVEL | COST | INCOME |
+------+-------+------+--------+
|    1 |     5 | 9500 |  55650 |
|    2 |     0 |  250 |     50 |
+------+-------+------+--------+";
        assert_eq!(render_table(&view), expected);
    }

    #[test]
    fn empty_view_renders_just_the_frame() {
        let table = render_table(&FarmView::default());
        assert_eq!(
            table,
            "+------+-------+------+--------+\n\
             | FARM | LEVEL | COST | INCOME |\n\
             +------+-------+------+--------+\n\
             +------+-------+------+--------+"
        );
    }
}

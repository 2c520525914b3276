//! Boxed text rendering of a decoded table.
//!
//! ```text
//! +----------------+
//! | users          |
//! +----------------+
//! | name  | age    |
//! +----------------+
//! | bob   | 42     |
//! +----------------+
//! ```

use argon_core::Colors;
use argon_core::text::{display_width, fit};

use super::store::Table;

/// Render `table` without colors.
///
/// `column_width` fixes every column's width; `None` sizes columns to the
/// widest name or value plus one.
pub fn render(table: &Table, column_width: Option<usize>) -> String {
    render_colored(table, column_width, Colors::OFF)
}

pub fn render_colored(table: &Table, column_width: Option<usize>, colors: Colors) -> String {
    let layout = Layout::new(table, column_width);
    let c = colors;
    let divider = format!("{}{}{}", c.dim, layout.divider(), c.reset);

    let mut out = Vec::new();
    out.push(divider.clone());

    let title = fit(table.name(), layout.width - 4);
    out.push(format!("| {}{}{} |", c.blue, title, c.reset));
    out.push(divider.clone());

    let header: Vec<String> = table.field_names().map(str::to_string).collect();
    out.push(layout.row_line(&header, Colors::OFF));
    out.push(divider.clone());

    for row in table.rows() {
        let cells: Vec<String> = table
            .field_types()
            .iter()
            .zip(row)
            .map(|(ty, value)| ty.render(value))
            .collect();
        out.push(layout.row_line(&cells, c));
    }
    out.push(divider);

    let mut text = out.join("\n");
    text.push('\n');
    text
}

struct Layout {
    fields: usize,
    column: usize,
    width: usize,
}

impl Layout {
    fn new(table: &Table, column_width: Option<usize>) -> Self {
        let fields = table.field_count();
        let column = column_width.unwrap_or_else(|| auto_width(table) + 1);
        let name_len = table.name().chars().count();
        let width = (fields * (column + 2) + 2).max(name_len + 4);
        Self {
            fields,
            column,
            width,
        }
    }

    fn divider(&self) -> String {
        format!("+{}+", "-".repeat(self.width - 2))
    }

    /// `| a | b` padded to the frame, then ` |`. Missing cells are blank.
    fn row_line(&self, cells: &[String], colors: Colors) -> String {
        let mut line = String::new();
        if self.fields == 0 {
            line.push('|');
        }
        for i in 0..self.fields {
            let cell = cells.get(i).map_or("", String::as_str);
            line.push_str(&format!(
                "| {}{}{}",
                colors.green,
                fit(cell, self.column),
                colors.reset
            ));
        }
        let padding = self.width.saturating_sub(display_width(&line) + 2);
        format!("{line}{:padding$} |", "")
    }
}

fn auto_width(table: &Table) -> usize {
    let names = table.field_names().map(|n| n.chars().count());
    let values = table.rows().iter().flat_map(|row| {
        table
            .field_types()
            .iter()
            .zip(row)
            .map(|(ty, value)| ty.render(value).chars().count())
    });
    names.chain(values).max().unwrap_or(0)
}

//! # Table Rendering (`common::ui::table`)
//!
//! File: cli/src/common/ui/table.rs
//!
//! Renders rows as a boxed ASCII table. Column widths follow the widest cell,
//! measured in terminal columns so wide glyphs stay aligned.
//!
use console::measure_text_width;

/// Renders `headers` and `rows`, one line per row plus borders, ending in a newline.
/// Missing cells render empty; extra cells are ignored.
pub fn render_table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell.as_ref()));
        }
    }

    let border = widths
        .iter()
        .fold(String::from("+"), |mut line, width| {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
            line
        });

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&render_row(&widths, headers));
    out.push_str(&border);
    out.push('\n');
    for row in rows {
        let cells: Vec<&str> = row.iter().map(|c| c.as_ref()).collect();
        out.push_str(&render_row(&widths, &cells));
    }
    if !rows.is_empty() {
        out.push_str(&border);
        out.push('\n');
    }
    out
}

fn render_row(widths: &[usize], cells: &[&str]) -> String {
    let mut line = String::from("|");
    for (index, width) in widths.iter().enumerate() {
        let cell = cells.get(index).copied().unwrap_or("");
        let padding = width.saturating_sub(measure_text_width(cell));
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line.push('\n');
    line
}

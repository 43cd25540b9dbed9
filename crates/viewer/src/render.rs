//! Plain-text rendering of a catalog view for the terminal.

use unicode_width::UnicodeWidthStr;

use crate::presenter::{CatalogView, ProductRow, COLUMNS, NO_MATCHING_MESSAGE};

/// Render the view as an aligned text table, or the empty indicator.
///
/// Columns are aligned by terminal display width, so wide glyphs such as
/// category emoji take two cells.
pub fn render_text(view: &CatalogView) -> String {
    let rows = match view {
        CatalogView::NoMatches => return format!("{NO_MATCHING_MESSAGE}\n"),
        CatalogView::Table(rows) => rows,
    };

    let cells: Vec<[String; 4]> = rows.iter().map(row_cells).collect();
    let mut widths = COLUMNS.map(UnicodeWidthStr::width);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &COLUMNS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn row_cells(row: &ProductRow) -> [String; 4] {
    [
        row.id.to_string(),
        row.name.clone(),
        row.category_label.clone(),
        row.owner_name.clone(),
    ]
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let fill = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(fill))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

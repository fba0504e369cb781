//! Box-drawn text tables

use itertools::Itertools;

/// Renders a grid with a double rule under the header and single rules between rows.
///
/// Rows shorter than the header are padded with empty cells; extra cells are dropped.
pub fn render_table<S: AsRef<str>>(headers: &[S], rows: &[Vec<String>]) -> String {
    let columns = headers.len();

    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .map(|row| cell(row, i).chars().count())
                .chain(std::iter::once(headers[i].as_ref().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, fill: &str, join: &str, right: &str| {
        format!(
            "{left}{}{right}",
            widths.iter().map(|&w| fill.repeat(w + 2)).join(join)
        )
    };
    let line = |cells: Vec<&str>| {
        format!(
            "│{}│",
            cells
                .iter()
                .zip(&widths)
                .map(|(c, &w)| format!(" {c:<w$} "))
                .join("│")
        )
    };

    let mut out = vec![
        rule("╒", "═", "╤", "╕"),
        line(headers.iter().map(|h| h.as_ref()).collect()),
    ];
    if rows.is_empty() {
        out.push(rule("╘", "═", "╧", "╛"));
        return out.join("\n");
    }
    out.push(rule("╞", "═", "╪", "╡"));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push(rule("├", "─", "┼", "┤"));
        }
        out.push(line((0..columns).map(|c| cell(row, c)).collect()));
    }
    out.push(rule("╘", "═", "╧", "╛"));
    out.join("\n")
}

fn cell(row: &[String], i: usize) -> &str {
    row.get(i).map(String::as_str).unwrap_or("")
}

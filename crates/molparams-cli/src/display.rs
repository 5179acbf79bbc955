use crate::utils::text::{truncate, width};
use std::io::{self, Write};

const INDENT: &str = "  ";
const MAX_CELL_WIDTH: usize = 36;

pub fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(String, String)]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|(key, value)| vec![key.clone(), value.clone()])
        .collect();
    print_table(out, title, &["Parameter", "Value"], &rows)
}

/// Writes a box-drawn table. Column widths follow the widest cell, capped so that
/// long choice lists and descriptions are truncated rather than wrapped.
pub fn print_table(
    out: &mut impl Write,
    title: &str,
    headers: &[&str],
    rows: &[Vec<String>],
) -> io::Result<()> {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| width(cell))
                .chain(std::iter::once(width(header)))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}{}", INDENT, left, segments.join(mid), right)
    };

    writeln!(out, "{}┌─ {} ─┐", INDENT, title)?;
    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    writeln!(out, "{}", render_row(&widths, headers))?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        writeln!(out, "{}", render_row(&widths, &cells))?;
    }
    writeln!(out, "{}", rule("└", "┴", "┘"))?;
    Ok(())
}

fn render_row(widths: &[usize], cells: &[&str]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, &w)| {
            let cell = truncate(cells.get(col).copied().unwrap_or(""), w);
            let pad = w.saturating_sub(width(&cell));
            format!(" {}{} ", cell, " ".repeat(pad))
        })
        .collect();
    format!("{}│{}│", INDENT, padded.join("│"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
        let mut buf = Vec::new();
        print_table(&mut buf, "Title", headers, rows).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn table_columns_are_aligned() {
        let lines = render(
            &["Name", "Default"],
            &[
                vec!["cutoff".into(), "1.0 nm".into()],
                vec!["ewald_error".into(), "0.0005".into()],
            ],
        );
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "  ┌─ Title ─┐");
        assert_eq!(lines[2], "  │ Name        │ Default │");
        assert_eq!(lines[4], "  │ cutoff      │ 1.0 nm  │");
        let row_widths: Vec<usize> = lines[1..].iter().map(|l| width(l)).collect();
        assert!(row_widths.iter().all(|&w| w == row_widths[0]));
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(MAX_CELL_WIDTH + 10);
        let lines = render(&["Choices"], &[vec![long]]);
        assert!(lines[4].contains('…'));
        assert_eq!(width(&lines[4]), INDENT.len() + MAX_CELL_WIDTH + 4);
    }

    #[test]
    fn short_rows_are_padded_with_blank_cells() {
        let lines = render(&["A", "B"], &[vec!["only".into()]]);
        assert_eq!(lines[4], "  │ only │   │");
    }

    #[test]
    fn kv_table_uses_parameter_and_value_headers() {
        let mut buf = Vec::new();
        print_kv_table(
            &mut buf,
            "langevin",
            &[("collision_rate".to_string(), "1.0 1/ps".to_string())],
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("│ Parameter      │ Value    │"));
        assert!(text.contains("│ collision_rate │ 1.0 1/ps │"));
    }
}

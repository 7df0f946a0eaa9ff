//! Plain-text table rendering for query results.

use crate::db::models::{Department, EmployeeView, RoleView};

/// A row type that can be laid out as one line of a table.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl Tabular for Department {
    const HEADERS: &'static [&'static str] = &["id", "name"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl Tabular for RoleView {
    const HEADERS: &'static [&'static str] = &["id", "title", "department", "salary"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.department.clone(),
            self.salary.to_string(),
        ]
    }
}

impl Tabular for EmployeeView {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "first_name",
        "last_name",
        "title",
        "department",
        "salary",
        "manager",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.title.clone(),
            self.department.clone(),
            self.salary.to_string(),
            self.manager_label().to_string(),
        ]
    }
}

/// Render rows as a boxed table. Columns whose every cell is numeric are
/// right-aligned. An empty slice renders the header alone.
pub fn render<T: Tabular>(rows: &[T]) -> String {
    let body: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();

    let widths: Vec<usize> = T::HEADERS
        .iter()
        .enumerate()
        .map(|(col, header)| {
            body.iter()
                .map(|cells| display_width(&cells[col]))
                .chain(std::iter::once(display_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let numeric: Vec<bool> = (0..T::HEADERS.len())
        .map(|col| !body.is_empty() && body.iter().all(|cells| is_numeric(&cells[col])))
        .collect();

    let mut out = String::new();
    out.push_str(&border(&widths, '┌', '┬', '┐'));
    out.push_str(&line(T::HEADERS, &widths, &vec![false; widths.len()]));
    out.push_str(&border(&widths, '├', '┼', '┤'));
    for cells in &body {
        out.push_str(&line(cells, &widths, &numeric));
    }
    out.push_str(&border(&widths, '└', '┴', '┘'));
    out
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn is_numeric(s: &str) -> bool {
    s.parse::<f64>().is_ok_and(f64::is_finite)
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}\n", segments.join(&mid.to_string()))
}

fn line<S: AsRef<str>>(cells: &[S], widths: &[usize], right_align: &[bool]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(right_align)
        .map(|((cell, width), right)| {
            let cell = cell.as_ref();
            let pad = " ".repeat(width - display_width(cell));
            if *right {
                format!(" {pad}{cell} ")
            } else {
                format!(" {cell}{pad} ")
            }
        })
        .collect();
    format!("│{}│\n", padded.join("│"))
}


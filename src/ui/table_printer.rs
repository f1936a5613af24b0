use crate::ui::width_util::WidthUtil;
use std::io::Write;

const COLUMN_GAP: &str = " | ";

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    max_line_width: Option<usize>,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a clone that cuts every line to `width` characters.
    pub fn with_max_line_width(&self, width: Option<usize>) -> Self {
        let mut c = self.clone();
        c.max_line_width = width;
        c
    }

    fn write_line<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> std::io::Result<()> {
        match self.max_line_width {
            Some(max) => writeln!(out, "{}", self.util.truncate_visible(s, max)),
            None => writeln!(out, "{s}"),
        }
    }

    fn write_separator<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> std::io::Result<()> {
        self.write_line(out, &"-".repeat(width.max(1)))
    }

    /// Header, separator, one padded line per row, closing separator. With no
    /// rows and an `empty_message`, prints that message instead of the body.
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        out: &mut W,
    ) -> std::io::Result<()> {
        let col_widths = self.compute_col_widths(headers, rows);
        let total_width = self.table_natural_width(&col_widths);

        if rows.is_empty() {
            if let Some(msg) = empty_message {
                return self.write_line(out, msg);
            }
        }

        self.write_line(out, &self.build_line(headers, &col_widths))?;
        self.write_separator(out, total_width)?;
        for row in rows {
            self.write_line(out, &self.build_line(row, &col_widths))?;
        }
        self.write_separator(out, total_width)
    }

    /// Two-column label/count table, rows kept in the given order.
    pub fn render_counts<W: Write + ?Sized>(
        &self,
        label: &str,
        counts: &[(String, usize)],
        empty_message: &str,
        out: &mut W,
    ) -> std::io::Result<()> {
        let rows: Vec<Vec<String>> = counts
            .iter()
            .map(|(value, count)| vec![value.clone(), count.to_string()])
            .collect();
        self.render_table(&[label, "COUNT"], &rows, Some(empty_message), out)
    }

    fn compute_col_widths<T: AsRef<str>>(
        &self,
        headers: &[&str],
        rows: &[Vec<T>],
    ) -> Vec<usize> {
        let col_count = headers.len();
        let mut col_widths: Vec<usize> =
            headers.iter().map(|h| self.util.visible_width(h)).collect();
        for r in rows {
            for (i, cell) in r.iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(self.util.visible_width(cell.as_ref()));
            }
        }
        col_widths
    }

    fn table_natural_width(&self, col_widths: &[usize]) -> usize {
        if col_widths.is_empty() {
            0
        } else {
            col_widths.iter().copied().sum::<usize>() + (col_widths.len() - 1) * COLUMN_GAP.len()
        }
    }

    fn build_line<T: AsRef<str>>(&self, cells: &[T], col_widths: &[usize]) -> String {
        let line = cells
            .iter()
            .enumerate()
            .take(col_widths.len())
            .map(|(i, cell)| self.util.pad_visible(cell.as_ref(), col_widths[i]))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        line.trim_end().to_string()
    }
}

use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One table column. A `width` of zero leaves the cell unpadded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
    pub align: Align,
}

impl Column {
    #[must_use]
    pub const fn left(title: &'static str, width: usize) -> Self {
        Self {
            title,
            width,
            align: Align::Left,
        }
    }

    #[must_use]
    pub const fn right(title: &'static str, width: usize) -> Self {
        Self {
            title,
            width,
            align: Align::Right,
        }
    }

    /// Append `cell` padded to the column width. Width is counted in bytes so
    /// names that are not valid UTF-8 are written unchanged.
    fn pad_into(&self, line: &mut Vec<u8>, cell: &[u8]) {
        let fill = self.width.saturating_sub(cell.len());
        if self.align == Align::Right {
            line.resize(line.len() + fill, b' ');
        }
        line.extend_from_slice(cell);
        if self.align == Align::Left {
            line.resize(line.len() + fill, b' ');
        }
    }
}

/// Fixed-width text table: a header row, a dashed rule, then one line per row.
///
/// Cells are raw bytes, padded to their column width (never truncated) and
/// joined with a single space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    columns: Vec<Column>,
    rule_width: usize,
}

impl TableLayout {
    #[must_use]
    pub const fn new(columns: Vec<Column>, rule_width: usize) -> Self {
        Self {
            columns,
            rule_width,
        }
    }

    /// Layout of the directory snapshot table.
    #[must_use]
    pub fn snapshot() -> Self {
        Self::new(
            vec![
                Column::left("NAME", 18),
                Column::right("SIZE", 8),
                Column::left("TYPE", 6),
                Column::right("MODE", 4),
                Column::left("OWNER", 14),
                Column::left("CONTENTS", 0),
            ],
            88,
        )
    }

    /// Write the header row followed by the rule.
    ///
    /// # Errors
    /// Propagates write errors from `out`.
    pub fn write_header(&self, out: &mut impl Write) -> io::Result<()> {
        let titles: Vec<&str> = self.columns.iter().map(|c| c.title).collect();
        out.write_all(&self.format_line(&titles))?;
        writeln!(out, "{}", "-".repeat(self.rule_width))
    }

    /// Write one data row. Missing trailing cells render as empty.
    ///
    /// # Errors
    /// Propagates write errors from `out`.
    pub fn write_row<S: AsRef<[u8]>>(&self, out: &mut impl Write, cells: &[S]) -> io::Result<()> {
        out.write_all(&self.format_line(cells))
    }

    /// One line including its trailing newline.
    fn format_line<S: AsRef<[u8]>>(&self, cells: &[S]) -> Vec<u8> {
        let mut line = Vec::new();
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                line.push(b' ');
            }
            col.pad_into(&mut line, cells.get(i).map_or(&[][..], AsRef::as_ref));
        }
        line.push(b'\n');
        line
    }
}

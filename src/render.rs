//! Text rendering of truth tables.
//!
//! Tables are laid out with [`comfy_table`]: one column per input, one for the
//! output, and optionally a leading row-number column. Headers are bold and every
//! cell is centred.
//!
//! # Examples
//!
//! ```
//! use truth_rs::render::RenderConfig;
//! use truth_rs::table::TruthTable;
//!
//! let table = TruthTable::of(|a: bool, b: bool| a ^ b).unwrap();
//! let config = RenderConfig::default()
//!     .with_columns(["#", "a", "b", "a ^ b"])
//!     .with_title("F1")
//!     .with_symbols("1", "0");
//!
//! let text = table.render(&config).unwrap();
//! assert!(text.starts_with(' ') || text.starts_with("F1"));
//! assert!(text.contains("a ^ b"));
//! ```

use std::io::{self, IsTerminal, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use log::debug;

use crate::error::{Error, Result};
use crate::table::TruthTable;

/// Label of the row-number column.
pub const ROW_NUMBER_LABEL: &str = "#";
/// Label of the output column.
pub const OUTPUT_LABEL: &str = "f";

/// Presentation options for [`TruthTable::render`].
///
/// Use `RenderConfig::default()` for standard settings.
///
/// ```
/// use truth_rs::render::RenderConfig;
///
/// let config = RenderConfig {
///     show_row_number: false,
///     ..RenderConfig::default()
/// };
/// assert_eq!(config.symbol(true), "True");
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderConfig {
    /// Column labels, including the row-number column when shown (default: `x0..`, `f`)
    pub columns: Option<Vec<String>>,
    /// Whether to prepend the 0-based row index (default: true)
    pub show_row_number: bool,
    /// Heading above the table (default: none)
    pub title: Option<String>,
    /// Text for true values (default: "True")
    pub true_symbol: String,
    /// Text for false values (default: "False")
    pub false_symbol: String,
    /// Force ANSI styling even when not writing to a terminal (default: false)
    pub styled: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            columns: None,
            show_row_number: true,
            title: None,
            true_symbol: "True".to_string(),
            false_symbol: "False".to_string(),
            styled: false,
        }
    }
}

impl RenderConfig {
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_row_number(mut self, show_row_number: bool) -> Self {
        self.show_row_number = show_row_number;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_symbols(mut self, true_symbol: impl Into<String>, false_symbol: impl Into<String>) -> Self {
        self.true_symbol = true_symbol.into();
        self.false_symbol = false_symbol.into();
        self
    }

    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Returns the text used for `value`.
    pub fn symbol(&self, value: bool) -> &str {
        if value {
            &self.true_symbol
        } else {
            &self.false_symbol
        }
    }
}

/// Prints `table` to standard output.
///
/// Shorthand for [`TruthTable::print`].
pub fn render(table: &TruthTable, config: &RenderConfig) -> Result<()> {
    table.print(config)
}

impl TruthTable {
    /// Returns the default column labels: `#` (if requested), `x0..x(N-1)`, then `f`.
    pub fn default_columns(&self, show_row_number: bool) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.arity() + 2);
        if show_row_number {
            columns.push(ROW_NUMBER_LABEL.to_string());
        }
        columns.extend((0..self.arity()).map(|i| format!("x{}", i)));
        columns.push(OUTPUT_LABEL.to_string());
        columns
    }

    /// Resolves the column labels for `config`, checking they match the row width.
    fn column_labels(&self, config: &RenderConfig) -> Result<Vec<String>> {
        let Some(columns) = &config.columns else {
            return Ok(self.default_columns(config.show_row_number));
        };

        let expected = self.arity() + 1 + config.show_row_number as usize;
        if columns.len() != expected {
            return Err(Error::ColumnCountMismatch {
                expected,
                actual: columns.len(),
            });
        }
        Ok(columns.clone())
    }

    fn build_table(&self, config: &RenderConfig, styled: bool) -> Result<Table> {
        let labels = self.column_labels(config)?;
        debug!("render(columns = {:?}, title = {:?})", labels, config.title);

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        if styled {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }

        table.set_header(
            labels
                .iter()
                .map(|label| Cell::new(label).add_attribute(Attribute::Bold).set_alignment(CellAlignment::Center)),
        );

        for (i, row) in self.iter().enumerate() {
            let mut cells = Vec::with_capacity(labels.len());
            if config.show_row_number {
                cells.push(Cell::new(i));
            }
            cells.extend(row.values().map(|value| Cell::new(config.symbol(value))));
            table.add_row(cells);
        }

        for column in table.column_iter_mut() {
            column.set_cell_alignment(CellAlignment::Center);
        }

        Ok(table)
    }

    fn render_with_styling(&self, config: &RenderConfig, styled: bool) -> Result<String> {
        let body = self.build_table(config, styled)?.to_string();

        match &config.title {
            Some(title) => {
                let width = body.lines().next().map_or(0, |line| line.chars().count());
                Ok(format!("{:^width$}\n{}", title, body, width = width))
            }
            None => Ok(body),
        }
    }

    /// Renders the table as text, with the title (if any) centred on the first line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnCountMismatch`] if `config.columns` does not have one
    /// label per rendered column.
    ///
    /// ```
    /// use truth_rs::error::Error;
    /// use truth_rs::render::RenderConfig;
    /// use truth_rs::table::TruthTable;
    ///
    /// let table = TruthTable::of(|a: bool, b: bool| a & b).unwrap();
    /// let config = RenderConfig::default().with_columns(["a", "b"]);
    /// assert!(matches!(
    ///     table.render(&config),
    ///     Err(Error::ColumnCountMismatch { expected: 4, actual: 2 })
    /// ));
    /// ```
    pub fn render(&self, config: &RenderConfig) -> Result<String> {
        self.render_with_styling(config, config.styled)
    }

    /// Writes the rendered table, followed by a newline, to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W, config: &RenderConfig) -> Result<()> {
        let text = self.render(config)?;
        writeln!(writer, "{}", text)?;
        Ok(())
    }

    /// Prints the rendered table to standard output.
    ///
    /// Styling is applied when `config.styled` is set or stdout is a terminal.
    pub fn print(&self, config: &RenderConfig) -> Result<()> {
        let stdout = io::stdout();
        let styled = config.styled || stdout.is_terminal();
        let text = self.render_with_styling(config, styled)?;
        writeln!(stdout.lock(), "{}", text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    /// Splits the rendered text into trimmed cells, one vector per header/data line.
    fn cells(text: &str) -> Vec<Vec<String>> {
        text.lines()
            .filter(|line| line.starts_with('│'))
            .map(|line| {
                line.trim_matches('│')
                    .split(['│', '┆'])
                    .map(|cell| cell.trim().to_string())
                    .collect()
            })
            .collect()
    }

    fn xor2() -> TruthTable {
        TruthTable::of(|a: bool, b: bool| a ^ b).unwrap()
    }

    #[test]
    fn test_default_columns() {
        let table = TruthTable::of(|a: bool, b: bool, c: bool| a & b & c).unwrap();
        assert_eq!(table.default_columns(true), vec!["#", "x0", "x1", "x2", "f"]);
        assert_eq!(table.default_columns(false), vec!["x0", "x1", "x2", "f"]);
    }

    #[test]
    fn test_render_default() {
        let text = xor2().render(&RenderConfig::default()).unwrap();
        let cells = cells(&text);
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0], vec!["#", "x0", "x1", "f"]);
        assert_eq!(cells[1], vec!["0", "False", "False", "False"]);
        assert_eq!(cells[2], vec!["1", "False", "True", "True"]);
        assert_eq!(cells[3], vec!["2", "True", "False", "True"]);
        assert_eq!(cells[4], vec!["3", "True", "True", "False"]);
    }

    #[test]
    fn test_render_symbols() {
        let config = RenderConfig::default().with_symbols("1", "0");
        let text = xor2().render(&config).unwrap();
        assert!(!text.contains("True"));
        assert!(!text.contains("False"));

        let cells = cells(&text);
        assert_eq!(cells.len(), 5);
        let rows: Vec<_> = cells[1..].iter().map(|row| row.join(" ")).collect();
        assert_eq!(rows, vec!["0 0 0 0", "1 0 1 1", "2 1 0 1", "3 1 1 0"]);
    }

    #[test]
    fn test_render_without_row_number() {
        let config = RenderConfig::default().with_row_number(false).with_symbols("T", "F");
        let cells = cells(&xor2().render(&config).unwrap());
        assert_eq!(cells[0], vec!["x0", "x1", "f"]);
        assert_eq!(cells[2], vec!["F", "T", "T"]);
    }

    #[test]
    fn test_render_custom_columns_and_title() {
        let config = RenderConfig::default()
            .with_columns(["#", "a", "b", "a ^ b"])
            .with_title("F1")
            .with_symbols("1", "0");
        let text = xor2().render(&config).unwrap();

        let first = text.lines().next().unwrap();
        assert_eq!(first.trim(), "F1");
        assert!(first.starts_with(' '));
        assert_eq!(cells(&text)[0], vec!["#", "a", "b", "a ^ b"]);
    }

    #[test]
    fn test_plain_text_has_no_escapes() {
        let text = xor2().render(&RenderConfig::default()).unwrap();
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_column_count_mismatch() {
        let table = TruthTable::of(|a: bool, b: bool, c: bool| a | b | c).unwrap();
        let config = RenderConfig::default().with_columns(["a", "b"]);
        let res = table.render(&config);
        assert!(matches!(res, Err(Error::ColumnCountMismatch { expected: 5, actual: 2 })));

        // Row number column counts towards the width.
        let config = RenderConfig::default().with_columns(["a", "b", "c", "f"]);
        assert!(table.render(&config).is_err());
        let config = config.with_row_number(false);
        assert!(table.render(&config).is_ok());
    }

    #[test]
    fn test_nullary() {
        let table = TruthTable::of(|| true).unwrap();
        let cells = cells(&table.render(&RenderConfig::default()).unwrap());
        assert_eq!(cells, vec![vec!["#", "f"], vec!["0", "True"]]);
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        xor2().write_to(&mut out, &RenderConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.trim_end(), xor2().render(&RenderConfig::default()).unwrap());
    }
}

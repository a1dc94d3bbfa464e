// File: crates/csv-chart-core/src/table.rs
// Summary: TabularInput; a named CSV table with verbatim string cells and typed column access.

use std::io::Read;
use std::path::Path;

use crate::error::{ChartError, Result};
use crate::options::ChartType;

/// Header of the row-label column.
pub const ID_COLUMN: &str = "concelhos";

/// Value columns plotted by every chart type except Pie, in trace order.
pub const VALUE_COLUMNS: [&str; 3] = ["Sim", "Não", "Ns/Nr"];

/// A named table parsed from delimited text.
/// Contract: every row has `headers.len()` cells.
#[derive(Clone, Debug, PartialEq)]
pub struct TabularInput {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TabularInput {
    /// Rows are fitted to the header width: short rows padded with blanks, extra cells dropped with a warning.
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let name = name.into();
        let width = headers.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, mut r)| {
                if r.len() > width {
                    tracing::warn!(name = %name, row = i, cells = r.len(), width, "dropping cells past the header");
                }
                r.resize(width, String::new());
                r
            })
            .collect();
        Self { name, headers, rows }
    }

    /// Parse comma-separated text with a header row.
    pub fn from_csv_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self> {
        let name = name.into();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let csv_err = |source| ChartError::Csv { name: name.clone(), source };
        let headers = rdr
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        // Short rows are padded by `new`; cells past the header have no column.
        let mut rows = Vec::new();
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec.map_err(csv_err)?;
            if rec.len() > headers.len() {
                let (cells, expected) = (rec.len(), headers.len());
                return Err(ChartError::RaggedRow { name: name.clone(), row, cells, expected });
            }
            rows.push(rec.iter().map(str::to_string).collect());
        }
        tracing::debug!(name = %name, columns = headers.len(), rows = rows.len(), "parsed table");
        Ok(Self::new(name, headers, rows))
    }

    pub fn from_csv_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        Self::from_csv_reader(name, bytes)
    }

    /// Read a CSV file; the table is named after the file name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| ChartError::io(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_csv_reader(name, std::io::BufReader::new(file))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Raw cells of `column`, failing with `MissingColumn` for `chart_type`.
    pub fn text_column(&self, column: &str, chart_type: ChartType) -> Result<Vec<String>> {
        let ix = self.require(column, chart_type)?;
        Ok(self.rows.iter().map(|r| r[ix].clone()).collect())
    }

    /// Numeric cells of `column`. Blank cells read as NaN.
    pub fn numeric_column(&self, column: &str, chart_type: ChartType) -> Result<Vec<f64>> {
        let ix = self.require(column, chart_type)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, r)| parse_number(column, row, &r[ix]))
            .collect()
    }

    /// Numeric cells of row `row` for the columns at `indices`.
    pub fn numeric_row(&self, row: usize, indices: impl IntoIterator<Item = usize>) -> Result<Vec<f64>> {
        let cells = self.rows.get(row).ok_or_else(|| ChartError::EmptyInput { name: self.name.clone() })?;
        indices
            .into_iter()
            .map(|ix| parse_number(&self.headers[ix], row, &cells[ix]))
            .collect()
    }

    /// First `n` rows, for data previews.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    fn require(&self, column: &str, chart_type: ChartType) -> Result<usize> {
        self.column_index(column).ok_or_else(|| ChartError::MissingColumn {
            column: column.to_string(),
            chart_type,
        })
    }
}

fn parse_number(column: &str, row: usize, cell: &str) -> Result<f64> {
    let s = cell.trim();
    if s.is_empty() {
        return Ok(f64::NAN);
    }
    s.parse::<f64>().map_err(|_| ChartError::InvalidNumber {
        column: column.to_string(),
        row,
        value: cell.to_string(),
    })
}

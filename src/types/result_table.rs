//! Contains `ResultTable`, the in-memory form of one API response.

use crate::error::NinjaError;
use polars::prelude::*;

/// Rows of raw string fields parsed from a CSV response.
///
/// Every column is `String` typed and named `column_1..column_n`. The first row of the
/// response is data like any other; nothing is inferred as a header and no value is
/// coerced. Rows shorter than the widest row are padded with nulls, which are persisted
/// as empty fields.
#[derive(Debug, Clone)]
pub struct ResultTable {
    /// The underlying Polars DataFrame.
    pub frame: DataFrame,
}

impl ResultTable {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Builds a table from parsed CSV records.
    pub(crate) fn from_rows(rows: &[Vec<String>]) -> Result<Self, NinjaError> {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let columns = (0..width)
            .map(|i| {
                let values: Vec<Option<&str>> = rows
                    .iter()
                    .map(|row| row.get(i).map(String::as_str))
                    .collect();
                Column::new(format!("column_{}", i + 1).into(), values)
            })
            .collect::<Vec<_>>();

        Ok(Self::new(DataFrame::new(columns)?))
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    /// Returns the table row by row, nulls rendered as empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`NinjaError::DataFrame`] if a column is not string typed, which only
    /// happens for frames built outside this crate.
    pub fn rows(&self) -> Result<Vec<Vec<String>>, NinjaError> {
        let columns = self
            .frame
            .get_columns()
            .iter()
            .map(|c| c.as_materialized_series().str())
            .collect::<PolarsResult<Vec<_>>>()?;

        Ok((0..self.frame.height())
            .map(|i| {
                columns
                    .iter()
                    .map(|ca| ca.get(i).unwrap_or_default().to_string())
                    .collect()
            })
            .collect())
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }
}

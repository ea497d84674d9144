//! Spreadsheet Loader Module
//! Parses uploaded xlsx/xls bytes into a `Table` using calamine and Polars.

use crate::data::schema::{header_names, infer_kind, CellValue, ColumnInfo, ColumnKind};
use crate::data::Table;
use calamine::{open_workbook_auto_from_rs, Reader};
use polars::prelude::*;
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

const MISSING: &CellValue = &CellValue::Missing;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Unable to read the uploaded file: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("The workbook contains no worksheets")]
    NoWorksheet,
    #[error("Failed to build table: {0}")]
    Frame(#[from] PolarsError),
}

/// Turns spreadsheet bytes into a typed table.
pub struct SpreadsheetLoader;

impl SpreadsheetLoader {
    /// Parse the first worksheet of an xlsx/xls workbook. The first row is the
    /// header; every following row is a record.
    pub fn load_bytes(name: &str, bytes: &[u8]) -> Result<Table, LoaderError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(LoaderError::NoWorksheet)??;

        let rows: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(CellValue::from_cell).collect())
            .collect();

        let Some((header_row, records)) = rows.split_first() else {
            debug!(file = name, "worksheet is empty");
            return Ok(Table::new(name, DataFrame::empty(), Vec::new()));
        };

        let names = header_names(header_row);
        let mut columns = Vec::with_capacity(names.len());
        let mut schema = Vec::with_capacity(names.len());

        for (col_idx, column_name) in names.iter().enumerate() {
            let cells: Vec<&CellValue> = records
                .iter()
                .map(|row| row.get(col_idx).unwrap_or(MISSING))
                .collect();
            let kind = infer_kind(cells.iter().copied());
            columns.push(Self::build_column(column_name, &cells, kind));
            schema.push(ColumnInfo {
                name: column_name.clone(),
                kind,
            });
        }

        let df = DataFrame::new(columns)?;
        debug!(
            file = name,
            rows = df.height(),
            columns = df.width(),
            "parsed worksheet"
        );
        Ok(Table::new(name, df, schema))
    }

    fn build_column(name: &str, cells: &[&CellValue], kind: ColumnKind) -> Column {
        match kind {
            ColumnKind::Numeric => {
                let values: Vec<Option<f64>> = cells.iter().map(|c| c.as_number()).collect();
                Series::new(name.into(), values).into()
            }
            ColumnKind::Categorical => {
                let values: Vec<Option<String>> = cells.iter().map(|c| c.as_text()).collect();
                Series::new(name.into(), values).into()
            }
        }
    }
}

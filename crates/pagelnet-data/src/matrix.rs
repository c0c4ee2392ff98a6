//! Delimited-table loading for the heatmap panels.
//!
//! Tables are CSV with a header row of column identifiers and an explicit
//! first index column of row identifiers, exactly as the Pagel pipeline writes
//! them. Missing values (`NA`, `NaN`, empty) become `None` and serialize as
//! JSON null, which the plotting layer renders as gaps.

use pagelnet_common::error::{PagelnetError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, instrument};

/// A rectangular matrix keyed by row and column identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    pub index: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl Matrix {
    pub fn shape(&self) -> (usize, usize) {
        (self.index.len(), self.columns.len())
    }
}

/// Load a matrix from a CSV file with an explicit index column.
#[instrument]
pub fn read_matrix(path: &Path) -> Result<Matrix> {
    let file = File::open(path)?;
    let matrix = parse_matrix(file)?;
    let (rows, cols) = matrix.shape();
    info!(path = %path.display(), rows, cols, "matrix loaded");
    Ok(matrix)
}

/// Parse CSV from any reader into a `Matrix`.
pub fn parse_matrix<R: Read>(reader: R) -> Result<Matrix> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        return Err(PagelnetError::Matrix(
            "expected an index column plus at least one data column".to_string(),
        ));
    }
    // First header cell names the index column; the rest are the columns.
    let columns: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

    let mut index = Vec::new();
    let mut values = Vec::new();
    for (row_no, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() != columns.len() + 1 {
            return Err(PagelnetError::Matrix(format!(
                "row {} has {} fields, expected {}",
                row_no + 1,
                record.len(),
                columns.len() + 1
            )));
        }
        let label = record
            .get(0)
            .unwrap_or_default()
            .to_string();
        let row: Vec<Option<f64>> = record
            .iter()
            .skip(1)
            .map(|cell| parse_cell(cell, &label))
            .collect::<Result<_>>()?;
        index.push(label);
        values.push(row);
    }

    Ok(Matrix {
        index,
        columns,
        values,
    })
}

fn parse_cell(cell: &str, row: &str) -> Result<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("na") || cell.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some).map_err(|_| {
        PagelnetError::Matrix(format!("non-numeric cell `{cell}` in row `{row}`"))
    })
}

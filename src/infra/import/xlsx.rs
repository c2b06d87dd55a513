use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::movie::{MovieRecord, MovieTable};
use crate::usecase::ports::provider::{MovieProvider, ProviderError};

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::Error(error) => format!("{error:?}"),
        other => other.to_string(),
    }
}

pub fn read_xlsx_table(xlsx_path: &Path) -> Result<MovieTable> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("workbook has no sheets: {}", xlsx_path.display()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let mut rows = range.rows();
    let columns: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();

    if columns.is_empty() {
        anyhow::bail!("sheet header row is required")
    }

    let records = rows
        .map(|row| MovieRecord::new(row.iter().map(cell_text).collect()))
        .collect();

    Ok(MovieTable { columns, records })
}

pub struct XlsxMovieProvider {
    pub path: PathBuf,
}

impl MovieProvider for XlsxMovieProvider {
    fn fetch_all(&self) -> Result<MovieTable, ProviderError> {
        read_xlsx_table(&self.path).map_err(|err| ProviderError::Message(err.to_string()))
    }
}

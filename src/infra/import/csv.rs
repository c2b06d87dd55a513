use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::entities::movie::{MovieRecord, MovieTable};
use crate::usecase::ports::provider::{MovieProvider, ProviderError};

pub fn read_csv_table(csv_path: &Path) -> Result<MovieTable> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let columns: Vec<String> = headers.iter().map(|name| name.to_string()).collect();

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        let values = (0..columns.len())
            .map(|col_idx| record.get(col_idx).unwrap_or("").to_string())
            .collect();
        records.push(MovieRecord::new(values));
    }

    Ok(MovieTable { columns, records })
}

pub struct CsvMovieProvider {
    pub path: PathBuf,
}

impl MovieProvider for CsvMovieProvider {
    fn fetch_all(&self) -> Result<MovieTable, ProviderError> {
        read_csv_table(&self.path).map_err(|err| ProviderError::Message(err.to_string()))
    }
}

use std::path::Path;
use std::sync::Arc;

use crate::usecase::ports::provider::MovieProvider;

pub mod csv;
pub mod xlsx;

pub fn provider_for_path(path: &Path) -> Arc<dyn MovieProvider> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if ext == "xlsx" {
        Arc::new(xlsx::XlsxMovieProvider {
            path: path.to_path_buf(),
        })
    } else {
        Arc::new(csv::CsvMovieProvider {
            path: path.to_path_buf(),
        })
    }
}

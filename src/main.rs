use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::usecase::services::table_controller::parse_numeric_value;

mod app;
mod domain;
mod infra;
mod ui;
mod usecase;

fn main() {
    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Movies"))
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "movietable", "movietable")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

fn default_dataset_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join("movies.csv"))
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; overflow: hidden; padding: 0 12px;"
}

fn table_container_style() -> &'static str {
    "overflow: auto; flex: 1; border: 1px solid #bbb;"
}

fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 10; border: 1px solid #bbb; padding: 6px; \
     background: #f2f2f2; cursor: pointer; white-space: nowrap;"
}

fn table_cell_style(alignment: &str) -> String {
    format!("border: 1px solid #bbb; padding: 6px; text-align: {alignment};")
}

fn error_banner_style() -> &'static str {
    "border: 1px solid #c33; background: #fdecea; color: #8a1f1b; padding: 8px 10px; \
     border-radius: 6px; margin: 4px 0;"
}

fn column_alignment(header: &str, rows: &[Vec<String>], column_idx: usize) -> &'static str {
    let header_lower = header.to_ascii_lowercase();
    if header_lower.contains("title") || header_lower.contains("name") {
        return "left";
    }

    let mut saw_numeric = false;
    for row in rows {
        match row.get(column_idx) {
            Some(value) if !value.trim().is_empty() => {
                if parse_numeric_value(value).is_some() {
                    saw_numeric = true;
                } else {
                    return "left";
                }
            }
            _ => {}
        }
    }

    if saw_numeric {
        "right"
    } else {
        "left"
    }
}

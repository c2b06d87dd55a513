use std::path::Path;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::entities::sort::SortDirection;
use crate::infra::import::provider_for_path;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::table_controller::{DisplayRow, TableController, DEFAULT_PAGE_SIZE};
use crate::{
    column_alignment, default_dataset_path, error_banner_style, root_container_style,
    table_cell_style, table_container_style, table_header_cell_style,
};

const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

fn load_dataset(path: &Path) -> Result<(TableController, usize), String> {
    let provider = provider_for_path(path);
    let mut loaded = TableController::new(provider);
    let count = loaded.reload().map_err(|err| err.to_string())?;
    Ok((loaded, count))
}

#[component]
pub fn App() -> Element {
    let AppState {
        mut controller,
        mut dataset_path,
        mut busy,
        mut status,
        mut load_error,
    } = AppState::new();

    use_effect(move || {
        *busy.write() = true;
        match default_dataset_path() {
            Ok(path) if path.is_file() => {
                match load_dataset(&path) {
                    Ok((loaded, count)) => {
                        *controller.write() = Some(loaded);
                        *dataset_path.write() = Some(path.clone());
                        *load_error.write() = None;
                        *status.write() = format!("Loaded {count} movies from {}", path.display());
                    }
                    Err(err) => {
                        *load_error.write() = Some(err);
                        *status.write() = "Initial load failed".to_string();
                    }
                }
            }
            Ok(path) => {
                *status.write() = format!(
                    "No dataset at {}. Use Open dataset to pick a CSV or XLSX file",
                    path.display()
                );
            }
            Err(err) => {
                *load_error.write() = Some(format!("failed to resolve dataset path: {err}"));
            }
        }
        *busy.write() = false;
    });

    let guard = controller.read();
    let current_columns: Vec<String> = guard
        .as_ref()
        .map(|table| table.columns().to_vec())
        .unwrap_or_default();
    let sort_states: Vec<SortDirection> = guard
        .as_ref()
        .map(|table| {
            (0..table.columns().len())
                .map(|idx| table.sort_direction(idx))
                .collect()
        })
        .unwrap_or_default();
    let page_rows: Vec<DisplayRow> = guard
        .as_ref()
        .map(|table| table.page_view())
        .unwrap_or_default();
    let current_total = guard.as_ref().map(|table| table.total_rows()).unwrap_or(0);
    let current_page = guard.as_ref().map(|table| table.page()).unwrap_or(1);
    let current_page_count = guard.as_ref().map(|table| table.page_count()).unwrap_or(0);
    let current_page_size = guard
        .as_ref()
        .map(|table| table.page_size())
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let current_filter = guard
        .as_ref()
        .map(|table| table.filter_text().to_string())
        .unwrap_or_default();
    drop(guard);

    let has_dataset = !current_columns.is_empty();
    let has_rows = !page_rows.is_empty();
    let column_span = current_columns.len() + 1;
    let display_page_count = current_page_count.max(1);
    let row_cells: Vec<Vec<String>> = page_rows.iter().map(|row| row.values.clone()).collect();
    let body_rows: Vec<(usize, Vec<String>)> = page_rows
        .into_iter()
        .map(|row| (row.id, row.values))
        .collect();
    let column_alignments: Vec<&'static str> = current_columns
        .iter()
        .enumerate()
        .map(|(idx, header)| column_alignment(header, &row_cells, idx))
        .collect();
    let header_cells: Vec<(usize, String)> = current_columns
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let direction = sort_states.get(idx).copied().unwrap_or_default();
            let label = if direction.is_active() {
                format!("{header} {}", direction.indicator())
            } else {
                header.clone()
            };
            (idx, label)
        })
        .collect();

    rsx! {
        div {
            style: root_container_style(),
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(file_path) = FileDialog::new()
                            .add_filter("Movie datasets", &["csv", "xlsx"])
                            .pick_file() else {
                            *status.write() = "Open cancelled".to_string();
                            return;
                        };

                        *busy.write() = true;
                        *status.write() = format!("Loading {}", file_path.display());

                        match load_dataset(&file_path) {
                            Ok((loaded, count)) => {
                                *controller.write() = Some(loaded);
                                *dataset_path.write() = Some(file_path.clone());
                                *load_error.write() = None;
                                *status.write() =
                                    format!("Loaded {count} movies from {}", file_path.display());
                            }
                            Err(err) => {
                                *load_error.write() = Some(err);
                                *status.write() = "Load failed".to_string();
                            }
                        }

                        *busy.write() = false;
                    },
                    "Open dataset"
                }

                button {
                    disabled: busy() || dataset_path().is_none(),
                    onclick: move |_| {
                        *busy.write() = true;
                        let result = controller.write().as_mut().map(|table| table.reload());
                        match result {
                            Some(Ok(count)) => {
                                *load_error.write() = None;
                                *status.write() = format!("Reloaded {count} movies");
                            }
                            Some(Err(err)) => {
                                *load_error.write() = Some(err.to_string());
                                *status.write() = "Reload failed".to_string();
                            }
                            None => {}
                        }
                        *busy.write() = false;
                    },
                    "Reload"
                }

                span { " {status}" }
            }

            if let Some(error) = load_error() {
                div {
                    style: error_banner_style(),
                    "{error}"
                }
            }

            div {
                label { "Filter titles " }
                input {
                    disabled: busy() || !has_dataset,
                    value: current_filter,
                    placeholder: "Type part of a title",
                    oninput: move |event| {
                        let next = event.value();
                        let mut matched = None;
                        if let Some(table) = controller.write().as_mut() {
                            table.set_filter(&next);
                            matched = Some(table.total_rows());
                        }
                        if let Some(matched) = matched {
                            *status.write() = if next.is_empty() {
                                format!("Cleared title filter ({matched} movies)")
                            } else {
                                format!("{matched} titles match \"{next}\"")
                            };
                        }
                    },
                }
            }

            div {
                span { "{current_total} movies" }
            }

            div {
                style: table_container_style(),
                table { style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            th { style: table_header_cell_style(), "#" }
                            for (idx, label) in header_cells {
                                th {
                                    style: table_header_cell_style(),
                                    onclick: move |_| {
                                        let event = controller
                                            .write()
                                            .as_mut()
                                            .and_then(|table| table.activate_sort(idx));
                                        if let Some(event) = event {
                                            *status.write() = if event.direction.is_active() {
                                                format!(
                                                    "Sorted by {} ({})",
                                                    event.column,
                                                    event.direction.label()
                                                )
                                            } else {
                                                format!(
                                                    "Cleared sort on {}, original order restored",
                                                    event.column
                                                )
                                            };
                                        }
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                    tbody {
                        if !has_rows {
                            tr {
                                td {
                                    style: table_cell_style("left"),
                                    colspan: column_span,
                                    "No data"
                                }
                            }
                        } else {
                            for (row_id, cells) in body_rows {
                                tr {
                                    td { style: table_cell_style("right"), "{row_id}" }
                                    for (col_idx, cell) in cells.into_iter().enumerate() {
                                        td {
                                            style: table_cell_style(
                                                column_alignments.get(col_idx).copied().unwrap_or("left"),
                                            ),
                                            "{cell}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 12px; align-items: center; padding: 8px 0;",
                button {
                    disabled: busy() || current_page <= 1,
                    onclick: move |_| {
                        if let Some(table) = controller.write().as_mut() {
                            let page = table.page();
                            table.set_page(page.saturating_sub(1));
                        }
                    },
                    "Previous"
                }
                span { "Page {current_page} / {display_page_count}" }
                button {
                    disabled: busy() || current_page >= current_page_count,
                    onclick: move |_| {
                        if let Some(table) = controller.write().as_mut() {
                            let page = table.page();
                            table.set_page(page + 1);
                        }
                    },
                    "Next"
                }
                label { "Per page " }
                select {
                    disabled: busy() || !has_dataset,
                    value: "{current_page_size}",
                    onchange: move |event| {
                        let Ok(size) = event.value().parse::<usize>() else {
                            return;
                        };
                        if let Some(table) = controller.write().as_mut() {
                            table.set_page_size(size);
                        }
                    },
                    for size in PAGE_SIZE_OPTIONS {
                        option { value: "{size}", "{size}" }
                    }
                }
            }
        }
    }
}

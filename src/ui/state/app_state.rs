use std::path::PathBuf;

use dioxus::prelude::{use_signal, Signal};

use crate::usecase::services::table_controller::TableController;

pub struct AppState {
    pub controller: Signal<Option<TableController>>,
    pub dataset_path: Signal<Option<PathBuf>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub load_error: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            controller: use_signal(|| None::<TableController>),
            dataset_path: use_signal(|| None::<PathBuf>),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
            load_error: use_signal(|| None::<String>),
        }
    }
}
